use axum::{extract::State, response::Html};

use crate::errors::AppError;
use crate::services::catalog;
use crate::views::{self, RestaurantsPage};
use crate::AppState;

/// GET /restaurants: restaurant cards in CMS order.
pub async fn page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let restaurants = catalog::list_restaurants(state.content.as_ref()).await?;
    views::render(&RestaurantsPage { restaurants })
}
