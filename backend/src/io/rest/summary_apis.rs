//! # REST API for Daily Summaries

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use tracing::{error, info};

use super::error::ApiError;
use super::mappers::SummaryMapper;
use crate::AppState;
use shared::DailySummaryRequest;

pub fn router() -> Router<AppState> {
    Router::new().route("/daily", get(get_daily_summary))
}

/// Per-day feeding and diaper totals, oldest day first
pub async fn get_daily_summary(
    State(state): State<AppState>,
    Query(query): Query<DailySummaryRequest>,
) -> impl IntoResponse {
    info!("GET /api/summary/daily - query: {:?}", query);

    match state.summary_service.daily_summary(SummaryMapper::to_query(query)).await {
        Ok(result) => (StatusCode::OK, Json(SummaryMapper::to_response(result))).into_response(),
        Err(e) => {
            error!("Failed to build daily summary: {}", e);
            ApiError::from(e).into_response()
        }
    }
}
