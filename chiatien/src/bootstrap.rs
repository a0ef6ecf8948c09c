use std::{env, path::PathBuf};

use chiatien_infrastructure::JsonLedgerStore;
use tracing_subscriber::EnvFilter;

const DATA_FILE_VAR: &str = "CHIATIEN_DATA_FILE";
const DEFAULT_DATA_FILE: &str = "chiatien.json";
const DEFAULT_LOG_FILTER: &str = "warn";

/// Application configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub data_file: PathBuf,
}

impl AppConfig {
    /// Reads `.env` if present, then the process environment.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let data_file = lookup(DATA_FILE_VAR)
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATA_FILE.to_string());
        Self {
            data_file: PathBuf::from(data_file),
        }
    }

    pub fn with_data_file(mut self, data_file: Option<PathBuf>) -> Self {
        if let Some(data_file) = data_file {
            self.data_file = data_file;
        }
        self
    }
}

/// Builds the ledger store the commands run against
pub struct AppBuilder;

impl AppBuilder {
    pub fn build(config: &AppConfig) -> JsonLedgerStore {
        tracing::debug!(path = %config.data_file.display(), "Opening ledger");
        JsonLedgerStore::new(&config.data_file)
    }
}

/// Initialize logging and tracing
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
