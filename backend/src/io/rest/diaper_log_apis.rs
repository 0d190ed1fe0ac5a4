//! # REST API for Diaper Logs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, put},
    Router,
};
use tracing::{error, info};

use super::error::ApiError;
use super::mappers::DiaperLogMapper;
use crate::domain::commands::diaper::DiaperListQuery;
use crate::AppState;
use shared::{CreateDiaperLogRequest, LogListRequest};

/// Create a router for diaper log APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_diapers).post(create_diaper))
        .route("/:id", put(replace_diaper).delete(delete_diaper))
}

pub async fn list_diapers(
    State(state): State<AppState>,
    Query(query): Query<LogListRequest>,
) -> impl IntoResponse {
    info!("GET /api/diapers - query: {:?}", query);

    let query = DiaperListQuery { limit: query.limit };
    match state.diaper_service.list_diapers(query).await {
        Ok(result) => (StatusCode::OK, Json(DiaperLogMapper::to_list_response(result))).into_response(),
        Err(e) => {
            error!("Failed to list diaper logs: {}", e);
            ApiError::from(e).into_response()
        }
    }
}

pub async fn create_diaper(
    State(state): State<AppState>,
    Json(request): Json<CreateDiaperLogRequest>,
) -> impl IntoResponse {
    info!("POST /api/diapers - request: {:?}", request);

    let command = DiaperLogMapper::to_create_command(request);
    match state.diaper_service.create_diaper(command).await {
        Ok(result) => (
            StatusCode::CREATED,
            Json(DiaperLogMapper::to_diaper_response(result)),
        )
            .into_response(),
        Err(e) => {
            error!("Failed to create diaper log: {}", e);
            ApiError::from(e).into_response()
        }
    }
}

/// Replace a diaper change, keeping its id
pub async fn replace_diaper(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<CreateDiaperLogRequest>,
) -> impl IntoResponse {
    info!("PUT /api/diapers/{} - request: {:?}", id, request);

    let command = DiaperLogMapper::to_replace_command(id, request);
    match state.diaper_service.replace_diaper(command).await {
        Ok(result) => (StatusCode::OK, Json(DiaperLogMapper::to_diaper_response(result))).into_response(),
        Err(e) => {
            error!("Failed to replace diaper log: {}", e);
            ApiError::from(e).into_response()
        }
    }
}

pub async fn delete_diaper(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    info!("DELETE /api/diapers/{}", id);

    match state.diaper_service.delete_diaper(&id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => {
            error!("Failed to delete diaper log {}: {}", id, e);
            ApiError::from(e).into_response()
        }
    }
}
