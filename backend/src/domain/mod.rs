//! # Domain Module
//!
//! Business logic for the feeding and diaper log: typed models and their
//! normalization rules, the next-feed-time policy, daily summaries, and the
//! services that sit between the REST layer and the stores.
//!
//! ## Module Organization
//!
//! - **models**: `FeedingLog`, `DiaperLog`, `AppSettings` and the lenient
//!   readers that turn raw persisted records into them
//! - **next_feed**: when the next feed is due and whether it is overdue
//! - **summary**: per-day and time-window bucketing for charts
//! - **clock**: the source of "now"
//! - **\*_service**: the callers of the stores. Each service serializes its
//!   own mutations, since the stores do not lock.

pub mod clock;
pub mod commands;
pub mod diaper_service;
pub mod feeding_service;
pub mod models;
pub mod next_feed;
pub mod settings_service;
pub mod summary;
pub mod summary_service;
pub mod validation;

pub use clock::{Clock, FixedClock, SystemClock};
pub use diaper_service::DiaperService;
pub use feeding_service::FeedingService;
pub use settings_service::SettingsService;
pub use summary_service::SummaryService;
pub use validation::ValidationError;
