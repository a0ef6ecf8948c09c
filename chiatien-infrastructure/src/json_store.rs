use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use chiatien_application::{LedgerState, LedgerStore, StoreError};

const TMP_SUFFIX: &str = "tmp";

/// Keeps the whole ledger in a single JSON file.
///
/// A missing file reads as an empty ledger. Writes go to a sibling temp file
/// that is renamed over the target.
#[derive(Clone, Debug)]
pub struct JsonLedgerStore {
    path: PathBuf,
}

impl JsonLedgerStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl LedgerStore for JsonLedgerStore {
    fn load(&self) -> Result<LedgerState, StoreError> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "Ledger file missing, starting empty");
            return Ok(LedgerState::default());
        }
        let data = fs::read_to_string(&self.path)?;
        if data.trim().is_empty() {
            return Ok(LedgerState::default());
        }
        Ok(serde_json::from_str(&data)?)
    }

    fn save(&self, state: &LedgerState) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let tmp = tmp_path(&self.path);
        let payload = serde_json::to_vec_pretty(state)?;
        write_atomic(&tmp, &payload)?;
        fs::rename(&tmp, &self.path)?;
        tracing::debug!(
            path = %self.path.display(),
            expense_count = state.expenses.len(),
            "Ledger saved"
        );
        Ok(())
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_default();
    name.push(".");
    name.push(TMP_SUFFIX);
    path.with_file_name(name)
}

fn write_atomic(path: &Path, payload: &[u8]) -> Result<(), StoreError> {
    let mut file = File::create(path)?;
    file.write_all(payload)?;
    file.sync_all()?;
    Ok(())
}
