//! Server-rendered pages. Templates live in `templates/`.

use askama::Template;
use axum::response::Html;

use crate::errors::AppError;
use crate::models::{MenuItem, Order, Restaurant};
use crate::services::dashboard::DashboardStats;

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardPage {
    pub stats: DashboardStats,
    pub recent_orders: Vec<Order>,
}

#[derive(Template)]
#[template(path = "restaurants.html")]
pub struct RestaurantsPage {
    pub restaurants: Vec<Restaurant>,
}

#[derive(Template)]
#[template(path = "orders.html")]
pub struct OrdersPage {
    /// Already sorted newest first.
    pub orders: Vec<Order>,
}

#[derive(Template)]
#[template(path = "menu_items.html")]
pub struct MenuItemsPage {
    pub menu_items: Vec<MenuItem>,
}

/// Generic failure page shown instead of a half-rendered view.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorPage {
    pub status: u16,
    pub message: String,
}

/// Render a page into an HTML response body.
pub fn render<T: Template>(page: &T) -> Result<Html<String>, AppError> {
    Ok(Html(page.render()?))
}
