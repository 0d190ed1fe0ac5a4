//! # REST API for User Settings

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use tracing::{error, info};

use super::error::ApiError;
use super::mappers::SettingsMapper;
use crate::AppState;
use shared::UpdateSettingsRequest;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(get_settings).put(update_settings))
}

pub async fn get_settings(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/settings");

    match state.settings_service.get_settings().await {
        Ok(result) => (StatusCode::OK, Json(SettingsMapper::to_settings_response(result))).into_response(),
        Err(e) => {
            error!("Failed to read settings: {}", e);
            ApiError::from(e).into_response()
        }
    }
}

pub async fn update_settings(
    State(state): State<AppState>,
    Json(request): Json<UpdateSettingsRequest>,
) -> impl IntoResponse {
    info!("PUT /api/settings - request: {:?}", request);

    let command = SettingsMapper::to_update_command(request);
    match state.settings_service.update_settings(command).await {
        Ok(result) => (StatusCode::OK, Json(SettingsMapper::to_settings_response(result))).into_response(),
        Err(e) => {
            error!("Failed to update settings: {}", e);
            ApiError::from(e).into_response()
        }
    }
}
