//! Error types for sf-generator

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenError {
    /// A definition references something it does not declare (G001)
    #[error("[G001] Invalid definition {interface}: {message}")]
    InvalidDefinition { interface: String, message: String },

    /// Template failed to load or render (G002)
    #[error("[G002] Template {template} failed for {interface}: {source}")]
    Template {
        template: String,
        interface: String,
        #[source]
        source: minijinja::Error,
    },

    /// Output could not be read or written (G003)
    #[error("[G003] IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Check mode found files that differ from the definitions (G004)
    #[error("[G004] {} generated file(s) are stale: {}", .paths.len(), display_paths(.paths))]
    Stale { paths: Vec<PathBuf> },

    /// Requested interface is not defined (G005)
    #[error("[G005] Unknown interface: {0}")]
    UnknownInterface(String),
}

/// Result type alias for GenError
pub type GenResult<T> = Result<T, GenError>;

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
