use anyhow::Result;
use std::sync::Arc;
use tracing::info;

use crate::domain::clock::Clock;
use crate::domain::commands::summary::{DailySummaryQuery, DailySummaryResult, DEFAULT_SUMMARY_DAYS};
use crate::domain::summary::{daily_diaper_summaries, daily_feeding_summaries};
use crate::storage::{DiaperLogStorage, FeedingLogStorage};

/// Per-day totals for the charts
#[derive(Clone)]
pub struct SummaryService {
    feedings: Arc<dyn FeedingLogStorage>,
    diapers: Arc<dyn DiaperLogStorage>,
    clock: Arc<dyn Clock>,
}

impl SummaryService {
    pub fn new(
        feedings: Arc<dyn FeedingLogStorage>,
        diapers: Arc<dyn DiaperLogStorage>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            feedings,
            diapers,
            clock,
        }
    }

    pub async fn daily_summary(&self, query: DailySummaryQuery) -> Result<DailySummaryResult> {
        let days = query.days.unwrap_or(DEFAULT_SUMMARY_DAYS);
        let offset = query.utc_offset_minutes.unwrap_or(0);
        info!("Building daily summary: days={}, utc_offset_minutes={}", days, offset);

        let now = self.clock.now_millis();
        let feeding_logs = self.feedings.load_logs().await;
        let diaper_logs = self.diapers.load_logs().await;

        Ok(DailySummaryResult {
            feedings: daily_feeding_summaries(&feeding_logs, days, now, offset),
            diapers: daily_diaper_summaries(&diaper_logs, days, now, offset),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{DiaperLogDraft, FeedingLogDraft};
    use crate::storage::json::test_utils::{TestEnvironment, TEST_NOW};

    #[tokio::test]
    async fn test_summary_covers_both_logs() {
        let env = TestEnvironment::new().await.unwrap();
        env.feeding_repo
            .add_log(FeedingLogDraft {
                end_time: Some(TEST_NOW),
                amount_ml: Some(120.0),
                ..Default::default()
            })
            .await
            .unwrap();
        env.diaper_repo
            .add_log(DiaperLogDraft {
                dirty: Some(true),
                ..Default::default()
            })
            .await
            .unwrap();

        let service = SummaryService::new(
            Arc::new(env.feeding_repo.clone()),
            Arc::new(env.diaper_repo.clone()),
            env.clock.clone(),
        );
        let result = service.daily_summary(DailySummaryQuery::default()).await.unwrap();

        assert_eq!(result.feedings.len(), DEFAULT_SUMMARY_DAYS as usize);
        assert_eq!(result.diapers.len(), DEFAULT_SUMMARY_DAYS as usize);

        let today = result.feedings.last().unwrap();
        assert_eq!(today.feed_count, 1);
        assert_eq!(today.total_ml, 120.0);
        assert_eq!(result.diapers.last().unwrap().dirty_count, 1);
    }
}
