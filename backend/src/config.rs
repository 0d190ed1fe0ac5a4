//! Process configuration, read once at startup from environment variables.
//!
//! User preferences such as the feed interval are not configured here; they
//! live in `settings.yaml` inside the data directory.

use std::env;
use std::path::PathBuf;
use tracing::warn;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:8080";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub host: String,
    pub port: u16,
    /// Built PWA assets served for every non-API path
    pub static_dir: Option<PathBuf>,
    pub allowed_origin: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let port = match var("BABYLOG_PORT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                warn!("Invalid BABYLOG_PORT {:?}, using {}", raw, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        Self {
            data_dir: var("BABYLOG_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(default_data_dir),
            host: var("BABYLOG_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            static_dir: var("BABYLOG_STATIC_DIR").map(PathBuf::from),
            allowed_origin: var("BABYLOG_ALLOWED_ORIGIN")
                .unwrap_or_else(|| DEFAULT_ALLOWED_ORIGIN.to_string()),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// `BabyLog` in the user's documents folder, falling back to
/// `~/Documents/BabyLog` and then to a temp directory
pub fn default_data_dir() -> PathBuf {
    if let Some(documents) = dirs::document_dir() {
        return documents.join("BabyLog");
    }
    match dirs::home_dir() {
        Some(home) => home.join("Documents").join("BabyLog"),
        None => {
            warn!("No home directory found, keeping data in the temp directory");
            env::temp_dir().join("babylog-data")
        }
    }
}
