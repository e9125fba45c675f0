// src/browser/error.rs
// Error types for directory browsing

use thiserror::Error;

/// Browse operation error type
#[derive(Error, Debug)]
pub enum BrowseError {
    #[error("Path does not exist")]
    NotFound,
    #[error("Path is not a directory")]
    NotADirectory,
    #[error("Path must be absolute")]
    RelativePath,
    #[error("Permission denied")]
    Denied,
    #[error("{0}")]
    Io(#[from] std::io::Error),
}

/// Browse operation result type
pub type BrowseResult<T> = Result<T, BrowseError>;

impl BrowseError {
    /// Classify a top-level filesystem error. Missing paths and
    /// permission problems keep their own variants so the HTTP layer can
    /// map them to 404 and 403; everything else surfaces as an I/O error.
    pub fn from_io(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound,
            std::io::ErrorKind::PermissionDenied => Self::Denied,
            _ => Self::Io(err),
        }
    }
}
