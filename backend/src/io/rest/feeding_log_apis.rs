//! # REST API for Feeding Logs
//!
//! Endpoints for recording, editing, and removing feeds, plus the
//! next-feed status used by the reminder banner.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use tracing::{error, info};

use super::error::ApiError;
use super::mappers::FeedingLogMapper;
use crate::domain::commands::feeding::FeedingListQuery;
use crate::AppState;
use shared::{CreateFeedingLogRequest, LogListRequest, UpdateFeedingLogRequest};

/// Create a router for feeding log APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_feedings).post(create_feeding))
        .route("/next", get(get_next_feed))
        .route(
            "/:id",
            get(get_feeding).put(update_feeding).delete(delete_feeding),
        )
}

/// List feeds, newest first
pub async fn list_feedings(
    State(state): State<AppState>,
    Query(query): Query<LogListRequest>,
) -> impl IntoResponse {
    info!("GET /api/feedings - query: {:?}", query);

    let query = FeedingListQuery { limit: query.limit };
    match state.feeding_service.list_feedings(query).await {
        Ok(result) => (StatusCode::OK, Json(FeedingLogMapper::to_list_response(result))).into_response(),
        Err(e) => {
            error!("Failed to list feeding logs: {}", e);
            ApiError::from(e).into_response()
        }
    }
}

/// Record a feed
pub async fn create_feeding(
    State(state): State<AppState>,
    Json(request): Json<CreateFeedingLogRequest>,
) -> impl IntoResponse {
    info!("POST /api/feedings - request: {:?}", request);

    let command = FeedingLogMapper::to_create_command(request);
    match state.feeding_service.create_feeding(command).await {
        Ok(result) => (
            StatusCode::CREATED,
            Json(FeedingLogMapper::to_feeding_response(result)),
        )
            .into_response(),
        Err(e) => {
            error!("Failed to create feeding log: {}", e);
            ApiError::from(e).into_response()
        }
    }
}

pub async fn get_next_feed(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/feedings/next");

    match state.feeding_service.next_feed().await {
        Ok(result) => (
            StatusCode::OK,
            Json(FeedingLogMapper::to_next_feed_response(result)),
        )
            .into_response(),
        Err(e) => {
            error!("Failed to compute next feed: {}", e);
            ApiError::from(e).into_response()
        }
    }
}

pub async fn get_feeding(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    info!("GET /api/feedings/{}", id);

    match state.feeding_service.get_feeding(&id).await {
        Ok(Some(log)) => (StatusCode::OK, Json(FeedingLogMapper::to_dto(log))).into_response(),
        Ok(None) => ApiError::NotFound(format!("Feeding log not found: {}", id)).into_response(),
        Err(e) => {
            error!("Failed to get feeding log {}: {}", id, e);
            ApiError::from(e).into_response()
        }
    }
}

/// Partially update a feed
pub async fn update_feeding(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateFeedingLogRequest>,
) -> impl IntoResponse {
    info!("PUT /api/feedings/{} - request: {:?}", id, request);

    let command = FeedingLogMapper::to_update_command(id, request);
    match state.feeding_service.update_feeding(command).await {
        Ok(result) => (
            StatusCode::OK,
            Json(FeedingLogMapper::to_feeding_response(result)),
        )
            .into_response(),
        Err(e) => {
            error!("Failed to update feeding log: {}", e);
            ApiError::from(e).into_response()
        }
    }
}

/// Delete a feed. Deleting an unknown id still answers 204.
pub async fn delete_feeding(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    info!("DELETE /api/feedings/{}", id);

    match state.feeding_service.delete_feeding(&id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => {
            error!("Failed to delete feeding log {}: {}", id, e);
            ApiError::from(e).into_response()
        }
    }
}
