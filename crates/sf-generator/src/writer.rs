//! Writes rendered files, or compares them in check mode.

use crate::error::{GenError, GenResult};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    Unchanged,
    Written,
    /// Differs from the rendered content; only reported in check mode.
    Stale,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Writer {
    check: bool,
}

impl Writer {
    pub fn new(check: bool) -> Self {
        Self { check }
    }

    /// Write `content` to `path` unless it already holds exactly that.
    pub fn write(&self, path: &Path, content: &str) -> GenResult<FileStatus> {
        let current = match std::fs::read_to_string(path) {
            Ok(current) => Some(current),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(source) => {
                return Err(GenError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        if current.as_deref() == Some(content) {
            return Ok(FileStatus::Unchanged);
        }
        if self.check {
            return Ok(FileStatus::Stale);
        }
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| GenError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        std::fs::write(path, content).map_err(|source| GenError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Wrote {}", path.display());
        Ok(FileStatus::Written)
    }
}

/// Collect stale paths into an error, if any.
pub fn ensure_fresh(stale: Vec<PathBuf>) -> GenResult<()> {
    if stale.is_empty() {
        Ok(())
    } else {
        Err(GenError::Stale { paths: stale })
    }
}

#[cfg(test)]
#[path = "writer_test.rs"]
mod tests;
