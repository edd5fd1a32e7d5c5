use axum::{extract::State, response::Html};

use crate::errors::AppError;
use crate::services::catalog;
use crate::views::{self, MenuItemsPage};
use crate::AppState;

/// GET /menu-items: menu item cards across all restaurants.
pub async fn page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let menu_items = catalog::list_menu_items(state.content.as_ref()).await?;
    views::render(&MenuItemsPage { menu_items })
}
