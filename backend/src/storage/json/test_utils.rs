/// Test utilities for the JSON stores
///
/// Every environment lives in its own temporary directory, removed when the
/// environment is dropped, with a fixed clock and in-memory settings.

use anyhow::Result;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

use super::connection::JsonConnection;
use super::diaper_log_repository::DiaperLogRepository;
use super::feeding_log_repository::FeedingLogRepository;
use crate::domain::clock::FixedClock;
use crate::storage::memory::InMemorySettings;

/// 2023-11-14T22:13:20Z
pub const TEST_NOW: i64 = 1_700_000_000_000;

pub struct TestEnvironment {
    /// Kept alive so the directory survives until drop
    _temp_dir: TempDir,
    pub connection: JsonConnection,
    pub base_path: PathBuf,
    pub clock: Arc<FixedClock>,
    pub settings: Arc<InMemorySettings>,
    pub feeding_repo: FeedingLogRepository,
    pub diaper_repo: DiaperLogRepository,
}

impl TestEnvironment {
    pub async fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let base_path = temp_dir.path().to_path_buf();
        let connection = JsonConnection::new(&base_path)?;

        let clock = Arc::new(FixedClock::new(TEST_NOW));
        let settings = Arc::new(InMemorySettings::default());

        let feeding_repo =
            FeedingLogRepository::new(connection.clone(), settings.clone(), clock.clone());
        let diaper_repo = DiaperLogRepository::new(connection.clone(), clock.clone());

        Ok(TestEnvironment {
            _temp_dir: temp_dir,
            connection,
            base_path,
            clock,
            settings,
            feeding_repo,
            diaper_repo,
        })
    }

    /// Put arbitrary bytes in a document, bypassing the stores
    pub fn write_raw(&self, name: &str, contents: &str) {
        std::fs::write(self.base_path.join(name), contents).expect("Failed to write test document");
    }

    pub fn read_raw(&self, name: &str) -> String {
        std::fs::read_to_string(self.base_path.join(name)).expect("Failed to read test document")
    }

    /// Put a non-empty directory where a document belongs so that every
    /// write to it fails
    pub fn block_document(&self, name: &str) {
        let blocked = self.base_path.join(name);
        std::fs::create_dir_all(&blocked).expect("Failed to create blocking directory");
        std::fs::write(blocked.join("keep"), "x").expect("Failed to fill blocking directory");
    }
}
