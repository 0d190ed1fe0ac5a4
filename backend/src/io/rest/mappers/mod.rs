//! Conversions between the wire DTOs in `shared` and the domain types

pub mod diaper_log_mapper;
pub mod feeding_log_mapper;
pub mod settings_mapper;
pub mod summary_mapper;

pub use diaper_log_mapper::DiaperLogMapper;
pub use feeding_log_mapper::FeedingLogMapper;
pub use settings_mapper::SettingsMapper;
pub use summary_mapper::SummaryMapper;
