use std::fmt::Display;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IoError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{backend} backend error: {message}")]
    Backend { backend: String, message: String },

    #[error("sheet not found: {0}")]
    SheetNotFound(String),

    #[error("unsupported workbook format: {0}")]
    UnsupportedFormat(String),
}

impl IoError {
    pub fn from_backend(backend: &str, err: impl Display) -> Self {
        IoError::Backend {
            backend: backend.to_string(),
            message: err.to_string(),
        }
    }
}
