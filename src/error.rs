use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while detecting changes.
///
/// None of these are recoverable within a run: the detector either produces a
/// complete fingerprint or fails.
#[derive(Debug, Error)]
pub enum DetectorError {
    /// A directory under the root could not be listed
    #[error("failed to scan {}", path.display())]
    Discovery {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// A matched file could not be read or is not valid UTF-8
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The persisted record exists but could not be read
    #[error("failed to read record {}", path.display())]
    RecordRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The persisted record could not be written or removed
    #[error("failed to persist record {}", path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A configured file name pattern is not a valid glob
    #[error("invalid file pattern: {pattern}")]
    Pattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },
}

pub type Result<T> = std::result::Result<T, DetectorError>;
