use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::detector::{
    ChangeDetector, NewlineMode, Record, ScanRules, DEFAULT_EXCLUDE_DIRS, DEFAULT_PATTERNS,
    DEFAULT_RECORD_PATH,
};
use crate::error::Result;

/// Root configuration structure for projectfiles-check.toml
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// Which files are discovered
    #[serde(default)]
    pub scan: ScanConfig,

    /// Where the fingerprint is persisted
    #[serde(default)]
    pub record: RecordConfig,

    /// How file contents are hashed
    #[serde(default)]
    pub hash: HashConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScanConfig {
    /// File name globs, matched case-sensitively
    #[serde(default = "default_patterns")]
    pub patterns: Vec<String>,

    /// Directory names skipped at any depth
    #[serde(default = "default_exclude_dirs")]
    pub exclude_dirs: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            patterns: default_patterns(),
            exclude_dirs: default_exclude_dirs(),
        }
    }
}

fn default_patterns() -> Vec<String> {
    DEFAULT_PATTERNS.iter().map(|p| p.to_string()).collect()
}

fn default_exclude_dirs() -> Vec<String> {
    DEFAULT_EXCLUDE_DIRS.iter().map(|d| d.to_string()).collect()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecordConfig {
    /// Record file, relative to the working directory
    #[serde(default = "default_record_path")]
    pub path: PathBuf,
}

impl Default for RecordConfig {
    fn default() -> Self {
        Self {
            path: default_record_path(),
        }
    }
}

fn default_record_path() -> PathBuf {
    PathBuf::from(DEFAULT_RECORD_PATH)
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct HashConfig {
    #[serde(default)]
    pub newlines: NewlineMode,
}

impl Config {
    /// Build a detector from this configuration
    pub fn detector(&self) -> Result<ChangeDetector> {
        let rules = ScanRules::new(&self.scan.patterns, &self.scan.exclude_dirs)?;
        Ok(ChangeDetector::new(
            rules,
            Record::new(&self.record.path),
            self.hash.newlines,
        ))
    }

    /// Generate default TOML content
    pub fn default_toml() -> String {
        r#"[scan]
# File name globs that identify build descriptions (case-sensitive)
patterns = ["*.pro", "CMakeLists.txt", "Info.plist"]
# Directories skipped together with everything beneath them
exclude_dirs = [".git", "docs"]

[record]
# Stored fingerprint, relative to the working directory
path = "projectfiles.md5.tmp"

[hash]
# "raw" hashes bytes as stored, "universal" folds CRLF/CR into LF first
newlines = "raw"
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_toml_matches_defaults() {
        let parsed: Config = toml::from_str(&Config::default_toml()).unwrap();
        assert_eq!(parsed, Config::default());
    }

    #[test]
    fn test_partial_config() {
        let parsed: Config = toml::from_str(
            r#"
[scan]
exclude_dirs = ["build"]

[hash]
newlines = "universal"
"#,
        )
        .unwrap();

        assert_eq!(parsed.scan.patterns, default_patterns());
        assert_eq!(parsed.scan.exclude_dirs, vec!["build".to_string()]);
        assert_eq!(parsed.record.path, PathBuf::from(DEFAULT_RECORD_PATH));
        assert_eq!(parsed.hash.newlines, NewlineMode::Universal);
    }

    #[test]
    fn test_detector_rejects_bad_pattern() {
        let mut config = Config::default();
        config.scan.patterns.push("[oops".to_string());
        assert!(config.detector().is_err());
    }
}
