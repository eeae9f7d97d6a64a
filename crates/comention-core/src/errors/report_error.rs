//! Report writing errors.

use super::error_code::{self, ComentionErrorCode};

/// Errors that can occur while serializing report rows.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("IO error writing report: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization failed: {message}")]
    Serialization { message: String },
}

impl ComentionErrorCode for ReportError {
    fn error_code(&self) -> &'static str {
        error_code::REPORT_ERROR
    }
}
