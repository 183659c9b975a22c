//! JSON file persistence for entity lists.
//!
//! Generation, remote-post, and contact/opportunity phases communicate
//! through JSON files on disk: a phase writes its output list, the next
//! phase reads it back. Property names are stable (serde field names),
//! so a file written by one build is readable by the next.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from JSON file persistence.
#[derive(Error, Debug)]
pub enum FileError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization or parse error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Serialize `value` as pretty-printed JSON into `dir/file_name`.
///
/// Creates `dir` (and parents) if missing. Returns the full path of the
/// written file.
pub fn save_json<T: Serialize>(
    value: &T,
    dir: impl AsRef<Path>,
    file_name: &str,
) -> Result<PathBuf, FileError> {
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir)?;

    let path = dir.join(file_name);
    let json = serde_json::to_vec_pretty(value)?;
    std::fs::write(&path, json)?;

    Ok(path)
}

/// Deserialize a JSON file written by [`save_json`].
pub fn load_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, FileError> {
    let bytes = std::fs::read(path.as_ref())?;
    Ok(serde_json::from_slice(&bytes)?)
}
