use md5::{Digest, Md5};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{DetectorError, Result};

/// How line endings are treated before content reaches the hasher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NewlineMode {
    /// Hash the bytes exactly as stored
    #[default]
    Raw,
    /// Translate `\r\n` and lone `\r` to `\n` first
    Universal,
}

/// Hex-encoded MD5 of a byte slice
pub fn fingerprint_bytes(data: &[u8]) -> String {
    hex::encode(Md5::digest(data))
}

/// Hash the contents of `paths`, in the given order, into one digest.
///
/// Each file must be valid UTF-8. Nothing but content bytes is fed to the
/// hasher, so `["X", "Y"]` and `["XY"]` produce the same fingerprint.
pub fn fingerprint_files(paths: &[PathBuf], newlines: NewlineMode) -> Result<String> {
    let mut hasher = Md5::new();

    for path in paths {
        let content = read_text(path)?;
        match newlines {
            NewlineMode::Raw => hasher.update(content.as_bytes()),
            NewlineMode::Universal => hasher.update(translate_newlines(&content).as_bytes()),
        }
    }

    let digest = hex::encode(hasher.finalize());
    tracing::debug!(files = paths.len(), digest = %digest, "computed fingerprint");
    Ok(digest)
}

fn read_text(path: &Path) -> Result<String> {
    // read_to_string rejects invalid UTF-8 with ErrorKind::InvalidData
    std::fs::read_to_string(path).map_err(|source| DetectorError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn translate_newlines(text: &str) -> String {
    if !text.contains('\r') {
        return text.to_string();
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}
