use serde::Serialize;
use serde_json::Value;
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, error, warn};

use crate::storage::error::StorageError;

/// JsonConnection owns the data directory and the whole-document read and
/// overwrite primitives every store is built on
#[derive(Debug, Clone)]
pub struct JsonConnection {
    base_directory: PathBuf,
}

impl JsonConnection {
    /// Create a new connection, creating the data directory if needed
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self, StorageError> {
        let base_path = base_directory.as_ref().to_path_buf();

        if !base_path.exists() {
            std::fs::create_dir_all(&base_path)?;
        }

        Ok(Self {
            base_directory: base_path,
        })
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    /// Full path of a named document inside the data directory
    pub fn document_path(&self, name: &str) -> PathBuf {
        self.base_directory.join(name)
    }

    /// Read a whole document. A missing document is `Ok(None)`.
    pub async fn read_document(&self, name: &str) -> io::Result<Option<String>> {
        match fs::read_to_string(self.document_path(name)).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Overwrite a whole document.
    ///
    /// The contents go to `<name>.tmp` first and are renamed over the target
    /// once flushed and closed, so readers see either the old or the new
    /// document. A failed write removes the temp file.
    pub async fn write_document(&self, name: &str, contents: &str) -> Result<(), StorageError> {
        let path = self.document_path(name);
        let temp_path = self.document_path(&format!("{}.tmp", name));

        let result = async {
            if !self.base_directory.exists() {
                fs::create_dir_all(&self.base_directory).await?;
            }

            let mut file = fs::File::create(&temp_path).await?;
            file.write_all(contents.as_bytes()).await?;
            file.sync_all().await?;
            drop(file);

            fs::rename(&temp_path, &path).await
        }
        .await;

        if let Err(source) = result {
            error!("Failed to write {}: {}", path.display(), source);
            if let Err(e) = fs::remove_file(&temp_path).await {
                if e.kind() != io::ErrorKind::NotFound {
                    warn!("Failed to remove {}: {}", temp_path.display(), e);
                }
            }
            return Err(StorageError::Write { path, source });
        }

        Ok(())
    }

    /// Read a document holding a JSON array of records.
    ///
    /// Fail-open: a missing, blank, unreadable, or unparsable document yields
    /// an empty list so the caller can keep logging new entries.
    pub async fn read_records(&self, name: &str) -> Vec<Value> {
        let contents = match self.read_document(name).await {
            Ok(Some(contents)) => contents,
            Ok(None) => {
                debug!("{} does not exist yet", name);
                return Vec::new();
            }
            Err(e) => {
                error!("Failed to read {}: {}. Treating as empty.", name, e);
                return Vec::new();
            }
        };

        if contents.trim().is_empty() {
            return Vec::new();
        }

        match serde_json::from_str::<Vec<Value>>(&contents) {
            Ok(records) => records,
            Err(e) => {
                warn!("{} is not a valid JSON array: {}. Treating as empty.", name, e);
                Vec::new()
            }
        }
    }

    /// Overwrite a document with `records` as a pretty-printed JSON array.
    /// Fail-closed: any failure is logged and returned.
    pub async fn write_records<T: Serialize + Sync>(
        &self,
        name: &str,
        records: &[T],
    ) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(records).map_err(|e| {
            error!("Failed to serialize {}: {}", name, e);
            StorageError::Serialize(e)
        })?;

        self.write_document(name, &json).await?;
        debug!("Wrote {} records to {}", records.len(), name);
        Ok(())
    }
}
