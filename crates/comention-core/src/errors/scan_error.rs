//! Corpus scan errors.

use super::error_code::{self, ComentionErrorCode};

/// Errors that can occur while streaming the corpus through the workers.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("Cannot open corpus {path}: {source}")]
    OpenFailed {
        path: std::path::PathBuf,
        source: std::io::Error,
    },

    #[error("IO error reading corpus at line {line}: {source}")]
    IoError {
        line: u64,
        source: std::io::Error,
    },

    #[error("Scan worker {worker} failed: {message}")]
    WorkerFailed { worker: usize, message: String },

    #[error("Worker pool could not be started: {message}")]
    PoolStartFailed { message: String },
}

impl ComentionErrorCode for ScanError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::WorkerFailed { .. } | Self::PoolStartFailed { .. } => {
                error_code::WORKER_FAILED
            }
            Self::OpenFailed { .. } | Self::IoError { .. } => error_code::SCAN_ERROR,
        }
    }
}
