//! # BabyLog Backend
//!
//! Storage, business logic, and REST API for the BabyLog feeding and diaper
//! tracker.
//!
//! ```text
//! PWA front end
//!     ↓
//! IO layer (axum REST handlers, DTO mappers)
//!     ↓
//! Domain layer (services, normalization, next-feed policy, summaries)
//!     ↓
//! Storage layer (one JSON or YAML document per store)
//! ```

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use anyhow::{Context, Result};
use axum::{
    http::{HeaderValue, Method},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::domain::{
    Clock, DiaperService, FeedingService, SettingsService, SummaryService, SystemClock,
};
use crate::storage::{DiaperLogRepository, FeedingLogRepository, JsonConnection, SettingsRepository};

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub feeding_service: FeedingService,
    pub diaper_service: DiaperService,
    pub settings_service: SettingsService,
    pub summary_service: SummaryService,
}

impl AppState {
    /// Wire the JSON stores in `connection`'s directory to the services
    pub fn new(connection: JsonConnection, clock: Arc<dyn Clock>) -> Self {
        let settings = Arc::new(SettingsRepository::new(connection.clone()));
        let feedings = Arc::new(FeedingLogRepository::new(
            connection.clone(),
            settings.clone(),
            clock.clone(),
        ));
        let diapers = Arc::new(DiaperLogRepository::new(connection, clock.clone()));

        Self {
            feeding_service: FeedingService::new(feedings.clone(), settings.clone(), clock.clone()),
            diaper_service: DiaperService::new(diapers.clone()),
            settings_service: SettingsService::new(settings),
            summary_service: SummaryService::new(feedings, diapers, clock),
        }
    }
}

/// Initialize the backend with all required services
pub fn initialize_backend(config: &AppConfig) -> Result<AppState> {
    info!("Using data directory {}", config.data_dir.display());
    let connection = JsonConnection::new(&config.data_dir).with_context(|| {
        format!(
            "Failed to open data directory {}",
            config.data_dir.display()
        )
    })?;

    Ok(AppState::new(connection, Arc::new(SystemClock)))
}

/// Create the axum router with CORS and, when configured, the PWA assets
pub fn create_router(app_state: AppState, config: &AppConfig) -> Router {
    let mut cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);
    match config.allowed_origin.parse::<HeaderValue>() {
        Ok(origin) => cors = cors.allow_origin(origin),
        Err(e) => warn!(
            "Ignoring invalid allowed origin {:?}: {}",
            config.allowed_origin, e
        ),
    }

    let router = Router::new().nest("/api", io::api_router());
    let router = match &config.static_dir {
        Some(dir) => {
            info!("Serving static files from {}", dir.display());
            router.fallback_service(ServeDir::new(dir))
        }
        None => router,
    };

    router.layer(cors).with_state(app_state)
}
