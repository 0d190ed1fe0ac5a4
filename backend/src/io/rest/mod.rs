//! # REST API Interface Layer
//!
//! axum handlers for the PWA. Handlers log the request, map the DTO to a
//! domain command, call one service method, and map the result back.
//! Failures become JSON error bodies through [`error::ApiError`].

pub mod diaper_log_apis;
pub mod error;
pub mod feeding_log_apis;
pub mod logging_apis;
pub mod mappers;
pub mod settings_apis;
pub mod summary_apis;

use axum::Router;

use crate::AppState;

/// All API routes, to be nested under `/api`
pub fn api_router() -> Router<AppState> {
    Router::new()
        .nest("/feedings", feeding_log_apis::router())
        .nest("/diapers", diaper_log_apis::router())
        .nest("/settings", settings_apis::router())
        .nest("/summary", summary_apis::router())
        .nest("/logs", logging_apis::router())
}
