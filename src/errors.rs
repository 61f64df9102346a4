use std::path::Path;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("failed to read {path}: {source}")]
    FileRead {
        path: String,
        source: std::io::Error,
    },

    #[error("upload failed: http {status}: {body}")]
    UploadFailed { status: u16, body: String },
}

/// Custom result type
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn file_read(path: &Path, source: std::io::Error) -> Self {
        Self::FileRead {
            path: path.display().to_string(),
            source,
        }
    }

    pub fn upload_failed(status: u16, body: impl Into<String>) -> Self {
        Self::UploadFailed {
            status,
            body: body.into(),
        }
    }
}
