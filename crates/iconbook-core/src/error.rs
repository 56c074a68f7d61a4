use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, IconbookError>;

#[derive(Debug, Error)]
pub enum IconbookError {
    #[error("not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("invalid font {}: {reason}", .path.display())]
    InvalidFont { path: PathBuf, reason: String },

    #[error("malformed {what} at {}: {source}", .path.display())]
    MalformedDocument {
        what: &'static str,
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl IconbookError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_FAILED",
            Self::InvalidFont { .. } => "INVALID_FONT",
            Self::MalformedDocument { .. } => "MALFORMED_DOCUMENT",
            Self::Io(_) => "IO_ERROR",
            Self::Json(_) => "JSON_ERROR",
        }
    }
}
