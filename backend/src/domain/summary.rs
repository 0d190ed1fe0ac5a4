//! Chart and summary helpers.
//!
//! Pure functions that bucket logs into local calendar days or time windows
//! for display. They never touch storage.

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, Offset, Utc};

use super::models::{DiaperLog, FeedingLog};

/// Longest range a daily summary covers
pub const MAX_SUMMARY_DAYS: u32 = 90;

#[derive(Debug, Clone, PartialEq)]
pub struct DailyFeedingTotals {
    pub date: NaiveDate,
    pub feed_count: u32,
    pub total_ml: f64,
    pub total_oz: f64,
    pub total_duration_minutes: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DailyDiaperTotals {
    pub date: NaiveDate,
    pub wet_count: u32,
    pub dirty_count: u32,
    pub total: u32,
}

/// Offset for a caller's local time. Out-of-range offsets fall back to UTC.
pub fn local_offset(utc_offset_minutes: i32) -> FixedOffset {
    utc_offset_minutes
        .checked_mul(60)
        .and_then(FixedOffset::east_opt)
        .unwrap_or_else(|| Utc.fix())
}

/// Local calendar date of an epoch-millisecond instant
pub fn local_date(millis: i64, offset: &FixedOffset) -> Option<NaiveDate> {
    DateTime::from_timestamp_millis(millis).map(|utc| utc.with_timezone(offset).date_naive())
}

/// The `days` local dates ending with the day containing `now`, oldest first
fn day_range(days: u32, now: i64, offset: &FixedOffset) -> Vec<NaiveDate> {
    let days = days.clamp(1, MAX_SUMMARY_DAYS);
    let Some(today) = local_date(now, offset) else {
        return Vec::new();
    };

    (0..days)
        .rev()
        .map(|back| today - Duration::days(i64::from(back)))
        .collect()
}

/// Per-day feed totals over the last `days` local days, oldest first.
/// Feeds are bucketed by effective completion time; empty days are included.
pub fn daily_feeding_summaries(
    logs: &[FeedingLog],
    days: u32,
    now: i64,
    utc_offset_minutes: i32,
) -> Vec<DailyFeedingTotals> {
    let offset = local_offset(utc_offset_minutes);

    let mut buckets: Vec<DailyFeedingTotals> = day_range(days, now, &offset)
        .into_iter()
        .map(|date| DailyFeedingTotals {
            date,
            feed_count: 0,
            total_ml: 0.0,
            total_oz: 0.0,
            total_duration_minutes: 0,
        })
        .collect();

    for log in logs {
        let Some(date) = local_date(log.effective_completion_time(), &offset) else {
            continue;
        };
        if let Some(bucket) = buckets.iter_mut().find(|bucket| bucket.date == date) {
            bucket.feed_count += 1;
            bucket.total_ml += log.amount_ml;
            bucket.total_oz += log.amount_oz;
            bucket.total_duration_minutes = bucket
                .total_duration_minutes
                .saturating_add(log.duration_minutes);
        }
    }

    buckets
}

/// Per-day diaper totals over the last `days` local days, oldest first
pub fn daily_diaper_summaries(
    logs: &[DiaperLog],
    days: u32,
    now: i64,
    utc_offset_minutes: i32,
) -> Vec<DailyDiaperTotals> {
    let offset = local_offset(utc_offset_minutes);

    let mut buckets: Vec<DailyDiaperTotals> = day_range(days, now, &offset)
        .into_iter()
        .map(|date| DailyDiaperTotals {
            date,
            wet_count: 0,
            dirty_count: 0,
            total: 0,
        })
        .collect();

    for log in logs {
        let Some(date) = local_date(log.timestamp, &offset) else {
            continue;
        };
        if let Some(bucket) = buckets.iter_mut().find(|bucket| bucket.date == date) {
            bucket.total += 1;
            if log.wet {
                bucket.wet_count += 1;
            }
            if log.dirty {
                bucket.dirty_count += 1;
            }
        }
    }

    buckets
}

/// Feeds completed within `[start, end)`
pub fn feedings_in_window(logs: &[FeedingLog], start: i64, end: i64) -> Vec<&FeedingLog> {
    logs.iter()
        .filter(|log| (start..end).contains(&log.effective_completion_time()))
        .collect()
}

/// Diaper changes within `[start, end)`
pub fn diapers_in_window(logs: &[DiaperLog], start: i64, end: i64) -> Vec<&DiaperLog> {
    logs.iter()
        .filter(|log| (start..end).contains(&log.timestamp))
        .collect()
}
