mod fingerprint;
mod record;
mod scan;

pub use fingerprint::*;
pub use record::*;
pub use scan::*;

use std::path::{Path, PathBuf};

use crate::error::Result;

/// Result of comparing the current fingerprint with the stored one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Unchanged,
    Changed,
}

impl Outcome {
    pub fn is_changed(self) -> bool {
        self == Outcome::Changed
    }

    /// Process exit status for this outcome: 0 unchanged, 1 changed
    pub fn exit_code(self) -> u8 {
        match self {
            Outcome::Unchanged => 0,
            Outcome::Changed => 1,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Unchanged => write!(f, "unchanged"),
            Outcome::Changed => write!(f, "changed"),
        }
    }
}

/// Details of a single `check` run
#[derive(Debug, Clone)]
pub struct Report {
    pub outcome: Outcome,
    pub fingerprint: String,
    /// Stored fingerprint before this run, if a record existed
    pub previous: Option<String>,
    pub files: usize,
}

/// Compares the build files under a root with the fingerprint stored by the
/// previous run.
#[derive(Debug, Clone, Default)]
pub struct ChangeDetector {
    rules: ScanRules,
    record: Record,
    newlines: NewlineMode,
}

impl ChangeDetector {
    pub fn new(rules: ScanRules, record: Record, newlines: NewlineMode) -> Self {
        Self {
            rules,
            record,
            newlines,
        }
    }

    pub fn rules(&self) -> &ScanRules {
        &self.rules
    }

    pub fn record(&self) -> &Record {
        &self.record
    }

    /// Matched files under `root`, in the order they are hashed
    pub fn files(&self, root: &Path) -> Result<Vec<PathBuf>> {
        discover(root, &self.rules)
    }

    /// Compute the current fingerprint without reading or writing the record
    pub fn fingerprint(&self, root: &Path) -> Result<String> {
        let files = self.files(root)?;
        fingerprint_files(&files, self.newlines)
    }

    /// Fingerprint `root` and compare with the record.
    ///
    /// The record is rewritten only when the fingerprint differs; a failure
    /// anywhere leaves it untouched.
    pub fn check(&self, root: &Path) -> Result<Report> {
        let files = self.files(root)?;
        let fingerprint = fingerprint_files(&files, self.newlines)?;
        let previous = self.record.load()?;

        let stored = previous.as_deref().unwrap_or("");
        let outcome = if fingerprint.trim() == stored.trim() {
            Outcome::Unchanged
        } else {
            self.record.save(&fingerprint)?;
            Outcome::Changed
        };

        tracing::info!(root = %root.display(), files = files.len(), "build files {outcome}");

        Ok(Report {
            outcome,
            fingerprint,
            previous,
            files: files.len(),
        })
    }
}
