//! Next-feed-time policy shared by the feeding store and its callers.
//!
//! The next feed is due `interval` minutes after a feed completes. A value
//! already recorded on the feed wins as long as it lies after the completion
//! time, so a reminder the caregiver moved by hand survives reloads and
//! edits.

use super::models::FeedingLog;

pub const MILLIS_PER_MINUTE: i64 = 60_000;

/// `base + interval` in epoch millis
pub fn derive_next_feed_time(base: i64, interval_minutes: u32) -> i64 {
    base + i64::from(interval_minutes) * MILLIS_PER_MINUTE
}

/// Keep `existing` when it is strictly after `base`, otherwise derive a new value
pub fn resolve_next_feed_time(existing: Option<i64>, base: i64, interval_minutes: u32) -> i64 {
    match existing {
        Some(next) if next > base => next,
        _ => derive_next_feed_time(base, interval_minutes),
    }
}

/// Where the household stands relative to the next feed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NextFeedStatus {
    pub last_feed_time: i64,
    pub next_feed_time: i64,
    /// Negative once the feed is overdue
    pub minutes_until_next_feed: i64,
    pub is_overdue: bool,
}

impl NextFeedStatus {
    /// Status relative to the most recent feed, `None` when nothing was logged yet
    pub fn from_latest(latest: Option<&FeedingLog>, now: i64) -> Option<Self> {
        let latest = latest?;
        let remaining = latest.next_feed_time - now;

        Some(Self {
            last_feed_time: latest.effective_completion_time(),
            next_feed_time: latest.next_feed_time,
            minutes_until_next_feed: remaining.div_euclid(MILLIS_PER_MINUTE),
            is_overdue: remaining <= 0,
        })
    }
}
