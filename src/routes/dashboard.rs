//! Dashboard routes: the overview page and its statistics as JSON.

use axum::{extract::State, response::Html, Json};
use chrono::Utc;

use crate::errors::{ApiResponse, AppError, JsonError};
use crate::services::dashboard::{DashboardContext, DashboardStats};
use crate::views::{self, DashboardPage};
use crate::AppState;

/// GET /: stats cards and the five most recent orders.
pub async fn page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let ctx = DashboardContext::load(state.content.as_ref(), Utc::now().date_naive()).await?;

    views::render(&DashboardPage {
        stats: ctx.stats(),
        recent_orders: ctx.recent_orders(),
    })
}

/// GET /api/v1/dashboard/stats: aggregated dashboard statistics.
pub async fn stats(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<DashboardStats>>, JsonError> {
    let ctx = DashboardContext::load(state.content.as_ref(), Utc::now().date_naive()).await?;
    Ok(ApiResponse::success(ctx.stats()))
}
