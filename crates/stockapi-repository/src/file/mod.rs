//! JSON file backed data source.

use crate::StockDataSource;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use stockapi_core::StockRecord;
use tracing::{debug, error, warn};

/// Reads stock records from a JSON array file.
///
/// The file is read on every call, so edits are picked up without a restart.
#[derive(Debug, Clone)]
pub struct FileStockDataSource {
    path: PathBuf,
}

impl FileStockDataSource {
    /// Creates a data source reading from `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StockDataSource for FileStockDataSource {
    fn get_all(&self) -> Vec<StockRecord> {
        let json = match std::fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!("File not found: {}", self.path.display());
                return Vec::new();
            }
            Err(e) => {
                error!("Unexpected error while reading file {}: {}", self.path.display(), e);
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<StockRecord>>(&json) {
            Ok(records) => {
                debug!("Loaded {} stock records from {}", records.len(), self.path.display());
                records
            }
            Err(e) => {
                error!("JSON format error while reading file {}: {}", self.path.display(), e);
                Vec::new()
            }
        }
    }
}
