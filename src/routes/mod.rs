//! Route definitions for the dashboard.

pub mod dashboard;
pub mod health;
pub mod menu_items;
pub mod orders;
pub mod restaurants;

use axum::{http::Uri, routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::errors::AppError;
use crate::AppState;

/// Build the full application router.
pub fn router(state: AppState) -> Router {
    let pages = Router::new()
        .route("/", get(dashboard::page))
        .route("/restaurants", get(restaurants::page))
        .route("/orders", get(orders::page))
        .route("/menu-items", get(menu_items::page));

    let api = Router::new().route("/api/v1/dashboard/stats", get(dashboard::stats));

    let health = Router::new()
        .route("/health/live", get(health::live))
        .route("/health/ready", get(health::ready));

    Router::new()
        .merge(pages)
        .merge(api)
        .merge(health)
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new()),
        )
        .with_state(state)
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No page at {}", uri.path()))
}
