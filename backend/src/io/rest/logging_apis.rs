//! Forwards front-end log lines into the backend's tracing output

use axum::{extract::State, http::StatusCode, response::Json, routing::post, Router};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct LogRequest {
    pub level: String,
    pub message: String,
    pub component: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LogResponse {
    pub success: bool,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", post(log_message))
}

pub async fn log_message(
    State(_state): State<AppState>,
    Json(request): Json<LogRequest>,
) -> Result<Json<LogResponse>, StatusCode> {
    let component = request.component.as_deref().unwrap_or("pwa");

    match request.level.to_lowercase().as_str() {
        "debug" => debug!(component = %component, "{}", request.message),
        "warn" | "warning" => warn!(component = %component, "{}", request.message),
        "error" => error!(component = %component, "{}", request.message),
        _ => info!(component = %component, "{}", request.message),
    }

    Ok(Json(LogResponse { success: true }))
}
