use axum::{extract::State, response::Html};

use crate::errors::AppError;
use crate::services::{catalog, dashboard};
use crate::views::{self, OrdersPage};
use crate::AppState;

/// GET /orders: every order, newest first.
pub async fn page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let mut orders = catalog::list_orders(state.content.as_ref()).await?;
    dashboard::sort_by_recency(&mut orders);

    views::render(&OrdersPage { orders })
}
