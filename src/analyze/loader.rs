use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failure while loading the input script. Load is the only fallible stage
/// of the pipeline; everything downstream is a pure function of the text.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: io::Error,
    },
}

/// Read the whole script into memory. The file handle lives only for the
/// duration of the read.
pub fn load(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound(path.to_path_buf()),
        _ => LoadError::Read {
            path: path.to_path_buf(),
            source: e,
        },
    })
}

#[cfg(test)]
#[path = "loader_test.rs"]
mod tests;
