use globset::{Glob, GlobSet, GlobSetBuilder};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::error::{DetectorError, Result};

/// File name patterns recognized as build descriptions
pub const DEFAULT_PATTERNS: &[&str] = &["*.pro", "CMakeLists.txt", "Info.plist"];

/// Directory names skipped together with everything beneath them
pub const DEFAULT_EXCLUDE_DIRS: &[&str] = &[".git", "docs"];

/// Compiled discovery rules.
///
/// Patterns are matched against the bare file name, case-sensitively, so
/// `*.pro` never matches `notes.pro.txt` and `CMakeLists.txt` never matches
/// `cmakelists.txt`.
///
/// As with shell globs, a name starting with `.` only matches patterns that
/// start with a literal `.` themselves.
#[derive(Debug, Clone)]
pub struct ScanRules {
    patterns: GlobSet,
    dot_patterns: GlobSet,
    exclude_dirs: BTreeSet<String>,
}

impl ScanRules {
    pub fn new<P, E>(patterns: &[P], exclude_dirs: &[E]) -> Result<Self>
    where
        P: AsRef<str>,
        E: AsRef<str>,
    {
        let mut builder = GlobSetBuilder::new();
        let mut dot_builder = GlobSetBuilder::new();
        for pattern in patterns {
            let pattern = pattern.as_ref();
            let glob = Glob::new(pattern).map_err(|source| DetectorError::Pattern {
                pattern: pattern.to_string(),
                source,
            })?;
            if pattern.starts_with('.') {
                dot_builder.add(glob.clone());
            }
            builder.add(glob);
        }

        Ok(Self {
            patterns: build_set(builder)?,
            dot_patterns: build_set(dot_builder)?,
            exclude_dirs: exclude_dirs.iter().map(|d| d.as_ref().to_string()).collect(),
        })
    }

    /// Returns true if a file with this name takes part in the fingerprint
    pub fn matches_file_name(&self, name: &str) -> bool {
        if name.starts_with('.') {
            self.dot_patterns.is_match(name)
        } else {
            self.patterns.is_match(name)
        }
    }

    pub fn is_excluded_dir(&self, name: &str) -> bool {
        self.exclude_dirs.contains(name)
    }

    fn prunes(&self, entry: &DirEntry) -> bool {
        // The root is walked even if its own name is excluded
        entry.depth() > 0
            && entry.file_type().is_dir()
            && entry
                .file_name()
                .to_str()
                .is_some_and(|name| self.is_excluded_dir(name))
    }
}

fn build_set(builder: GlobSetBuilder) -> Result<GlobSet> {
    builder.build().map_err(|source| DetectorError::Pattern {
        pattern: "<set>".to_string(),
        source,
    })
}

impl Default for ScanRules {
    fn default() -> Self {
        Self::new(DEFAULT_PATTERNS, DEFAULT_EXCLUDE_DIRS)
            .expect("built-in patterns are valid globs")
    }
}

/// Find every matched file under `root`, in fingerprint order.
///
/// The order is the byte order of each path relative to `root`, rendered with
/// `/` separators. That makes `a.b/x.pro` come before `a/y.pro`, and keeps the
/// result independent of the order the filesystem lists directories in.
///
/// Symlinked directories are followed. A matched name that is a dangling
/// symlink is still returned, so reading it fails instead of silently leaving
/// it out of the fingerprint.
pub fn discover(root: &Path, rules: &ScanRules) -> Result<Vec<PathBuf>> {
    let mut found: Vec<(String, PathBuf)> = Vec::new();

    let walker = WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !rules.prunes(e));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                if let Some(path) = dangling_link(&err) {
                    let matched = path
                        .file_name()
                        .and_then(|n| n.to_str())
                        .is_some_and(|name| rules.matches_file_name(name));
                    if matched {
                        tracing::debug!(path = %path.display(), "matched dangling symlink");
                        found.push((sort_key(root, &path), path));
                    }
                    continue;
                }
                return Err(DetectorError::Discovery {
                    path: err
                        .path()
                        .map(Path::to_path_buf)
                        .unwrap_or_else(|| root.to_path_buf()),
                    source: err,
                });
            }
        };

        if entry.file_type().is_dir() {
            continue;
        }

        let Some(name) = entry.file_name().to_str() else {
            continue;
        };
        if !rules.matches_file_name(name) {
            continue;
        }

        tracing::debug!(path = %entry.path().display(), "matched build file");
        found.push((sort_key(root, entry.path()), entry.into_path()));
    }

    found.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(found.into_iter().map(|(_, path)| path).collect())
}

/// Path of a symlink below the root whose target does not exist
fn dangling_link(err: &walkdir::Error) -> Option<PathBuf> {
    if err.depth() == 0 || err.loop_ancestor().is_some() {
        return None;
    }
    let path = err.path()?;
    let is_link = std::fs::symlink_metadata(path)
        .map(|m| m.file_type().is_symlink())
        .unwrap_or(false);
    (is_link && !path.exists()).then(|| path.to_path_buf())
}

fn sort_key(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
