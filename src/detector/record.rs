use std::io;
use std::path::{Path, PathBuf};

use crate::error::{DetectorError, Result};

/// Default location of the persisted fingerprint, relative to the working directory
pub const DEFAULT_RECORD_PATH: &str = "projectfiles.md5.tmp";

/// The on-disk fingerprint from the previous run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    path: PathBuf,
}

impl Record {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored fingerprint, trimmed.
    ///
    /// Returns `None` when the record does not exist yet.
    pub fn load(&self) -> Result<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content.trim().to_string())),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(DetectorError::RecordRead {
                path: self.path.clone(),
                source,
            }),
        }
    }

    /// Overwrite the record with `fingerprint` and a trailing newline
    pub fn save(&self, fingerprint: &str) -> Result<()> {
        std::fs::write(&self.path, format!("{fingerprint}\n")).map_err(|source| {
            DetectorError::Persist {
                path: self.path.clone(),
                source,
            }
        })?;
        tracing::info!(path = %self.path.display(), fingerprint, "stored fingerprint");
        Ok(())
    }

    /// Delete the record. Returns false if there was nothing to delete.
    pub fn remove(&self) -> Result<bool> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(source) => Err(DetectorError::Persist {
                path: self.path.clone(),
                source,
            }),
        }
    }
}

impl Default for Record {
    fn default() -> Self {
        Self::new(DEFAULT_RECORD_PATH)
    }
}
