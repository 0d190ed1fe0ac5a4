//! # JSON Storage Module
//!
//! File-based storage: one JSON document per log type, one YAML document for
//! settings, all inside a single data directory.
//!
//! ```text
//! data/
//! ├── feeding_logs.json
//! ├── diaper_logs.json
//! └── settings.yaml
//! ```

pub mod connection;
pub mod diaper_log_repository;
pub mod feeding_log_repository;
pub mod settings_repository;

#[cfg(test)]
pub mod test_utils;

pub use connection::JsonConnection;
pub use diaper_log_repository::DiaperLogRepository;
pub use feeding_log_repository::FeedingLogRepository;
pub use settings_repository::SettingsRepository;
