use anyhow::{Context, Result};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::domain::commands::diaper::{
    CreateDiaperCommand, DiaperListQuery, DiaperListResult, DiaperResult, ReplaceDiaperCommand,
};
use crate::domain::validation::ValidationError;
use crate::storage::DiaperLogStorage;

/// Service for diaper changes. An edit replaces the stored change under
/// the same id.
#[derive(Clone)]
pub struct DiaperService {
    storage: Arc<dyn DiaperLogStorage>,
    write_gate: Arc<Mutex<()>>,
}

impl DiaperService {
    pub fn new(storage: Arc<dyn DiaperLogStorage>) -> Self {
        Self {
            storage,
            write_gate: Arc::new(Mutex::new(())),
        }
    }

    pub async fn list_diapers(&self, query: DiaperListQuery) -> Result<DiaperListResult> {
        info!("Listing diaper logs: limit={:?}", query.limit);

        let mut diaper_logs = self.storage.load_logs().await;
        if let Some(limit) = query.limit {
            diaper_logs.truncate(limit as usize);
        }

        Ok(DiaperListResult { diaper_logs })
    }

    pub async fn create_diaper(&self, command: CreateDiaperCommand) -> Result<DiaperResult> {
        info!("Creating diaper log");

        let _guard = self.write_gate.lock().await;
        let diaper_log = self
            .storage
            .add_log(command.log)
            .await
            .context("Failed to save new diaper log")?;

        info!(
            "Created diaper log {} (wet={}, dirty={})",
            diaper_log.id, diaper_log.wet, diaper_log.dirty
        );

        Ok(DiaperResult {
            diaper_log,
            success_message: "Diaper change logged".to_string(),
        })
    }

    pub async fn delete_diaper(&self, id: &str) -> Result<()> {
        info!("Deleting diaper log: {}", id);

        let _guard = self.write_gate.lock().await;
        self.storage
            .delete_log(id)
            .await
            .with_context(|| format!("Failed to delete diaper log {}", id))
    }

    /// Replace the change stored under `command.id` in a single write. If
    /// nothing is stored under that id the new record is simply added with it.
    pub async fn replace_diaper(&self, command: ReplaceDiaperCommand) -> Result<DiaperResult> {
        info!("Replacing diaper log: {}", command.id);

        if command.id.trim().is_empty() {
            return Err(ValidationError::EmptyId.into());
        }

        let _guard = self.write_gate.lock().await;

        let mut log = command.log;
        log.id = Some(command.id);
        let diaper_log = self
            .storage
            .add_log(log)
            .await
            .context("Failed to save edited diaper log")?;
        debug!("Replaced diaper log {}", diaper_log.id);

        Ok(DiaperResult {
            diaper_log,
            success_message: "Diaper log updated".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{DiaperLog, DiaperLogDraft};
    use crate::storage::json::test_utils::{TestEnvironment, TEST_NOW};
    use crate::storage::{DiaperLogRepository, StorageError};
    use async_trait::async_trait;
    use shared::StoolColor;

    /// Store whose appends always fail, as on a full disk
    struct FullDisk {
        inner: DiaperLogRepository,
    }

    #[async_trait]
    impl DiaperLogStorage for FullDisk {
        async fn load_logs(&self) -> Vec<DiaperLog> {
            self.inner.load_logs().await
        }

        async fn save_logs(&self, logs: &[DiaperLog]) -> Result<(), StorageError> {
            self.inner.save_logs(logs).await
        }

        async fn add_log(&self, _log: DiaperLogDraft) -> Result<DiaperLog, StorageError> {
            Err(StorageError::Write {
                path: "diaper_logs.json".into(),
                source: std::io::Error::new(std::io::ErrorKind::Other, "no space left on device"),
            })
        }

        async fn delete_log(&self, id: &str) -> Result<(), StorageError> {
            self.inner.delete_log(id).await
        }
    }

    fn service(env: &TestEnvironment) -> DiaperService {
        DiaperService::new(Arc::new(env.diaper_repo.clone()))
    }

    fn change(timestamp: i64, dirty: bool) -> CreateDiaperCommand {
        CreateDiaperCommand {
            log: DiaperLogDraft {
                timestamp: Some(timestamp),
                dirty: Some(dirty),
                ..Default::default()
            },
        }
    }

    #[tokio::test]
    async fn test_create_list_and_limit() {
        let env = TestEnvironment::new().await.unwrap();
        let service = service(&env);

        service.create_diaper(change(TEST_NOW - 2_000, false)).await.unwrap();
        service.create_diaper(change(TEST_NOW, true)).await.unwrap();
        service.create_diaper(change(TEST_NOW - 1_000, false)).await.unwrap();

        let all = service.list_diapers(DiaperListQuery::default()).await.unwrap();
        let timestamps: Vec<i64> = all.diaper_logs.iter().map(|log| log.timestamp).collect();
        assert_eq!(timestamps, vec![TEST_NOW, TEST_NOW - 1_000, TEST_NOW - 2_000]);

        let one = service
            .list_diapers(DiaperListQuery { limit: Some(1) })
            .await
            .unwrap();
        assert_eq!(one.diaper_logs.len(), 1);
        assert!(one.diaper_logs[0].dirty);
    }

    #[tokio::test]
    async fn test_replace_keeps_id_and_applies_gating() {
        let env = TestEnvironment::new().await.unwrap();
        let service = service(&env);

        let mut original = change(TEST_NOW, true);
        original.log.stool_color = Some(StoolColor::Yellow);
        let created = service.create_diaper(original).await.unwrap().diaper_log;

        let replaced = service
            .replace_diaper(ReplaceDiaperCommand {
                id: created.id.clone(),
                log: DiaperLogDraft {
                    timestamp: Some(TEST_NOW),
                    dirty: Some(false),
                    stool_color: Some(StoolColor::Yellow),
                    notes: Some("just wet".to_string()),
                    ..Default::default()
                },
            })
            .await
            .unwrap()
            .diaper_log;

        assert_eq!(replaced.id, created.id);
        assert_eq!(replaced.stool_color, None);
        assert_eq!(replaced.notes, "just wet");

        let logs = service.list_diapers(DiaperListQuery::default()).await.unwrap();
        assert_eq!(logs.diaper_logs, vec![replaced]);
    }

    #[tokio::test]
    async fn test_replace_unknown_id_adds_record() {
        let env = TestEnvironment::new().await.unwrap();
        let service = service(&env);

        let result = service
            .replace_diaper(ReplaceDiaperCommand {
                id: "imported-7".to_string(),
                log: DiaperLogDraft::default(),
            })
            .await
            .unwrap();

        assert_eq!(result.diaper_log.id, "imported-7");
        assert_eq!(result.diaper_log.timestamp, TEST_NOW);
    }

    #[tokio::test]
    async fn test_replace_with_blank_id_is_rejected() {
        let env = TestEnvironment::new().await.unwrap();

        let err = service(&env)
            .replace_diaper(ReplaceDiaperCommand::default())
            .await
            .unwrap_err();

        assert!(err.downcast_ref::<ValidationError>().is_some());
    }

    #[tokio::test]
    async fn test_delete_missing_is_ok() {
        let env = TestEnvironment::new().await.unwrap();
        let service = service(&env);
        let created = service.create_diaper(change(TEST_NOW, false)).await.unwrap();

        service.delete_diaper("nope").await.unwrap();
        service.delete_diaper(&created.diaper_log.id).await.unwrap();

        assert!(service
            .list_diapers(DiaperListQuery::default())
            .await
            .unwrap()
            .diaper_logs
            .is_empty());
    }

    #[tokio::test]
    async fn test_failed_replace_keeps_original() {
        let env = TestEnvironment::new().await.unwrap();
        let created = service(&env)
            .create_diaper(change(TEST_NOW, true))
            .await
            .unwrap()
            .diaper_log;

        let failing = DiaperService::new(Arc::new(FullDisk {
            inner: env.diaper_repo.clone(),
        }));
        let err = failing
            .replace_diaper(ReplaceDiaperCommand {
                id: created.id.clone(),
                log: DiaperLogDraft::default(),
            })
            .await
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<StorageError>(),
            Some(StorageError::Write { .. })
        ));
        assert_eq!(env.diaper_repo.load_logs().await, vec![created]);
    }

    #[tokio::test]
    async fn test_create_surfaces_write_failure() {
        let env = TestEnvironment::new().await.unwrap();
        env.block_document("diaper_logs.json");

        let err = service(&env)
            .create_diaper(change(TEST_NOW, false))
            .await
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<StorageError>(),
            Some(StorageError::Write { .. })
        ));
    }
}
