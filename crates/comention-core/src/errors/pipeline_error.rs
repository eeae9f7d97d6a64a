//! Top-level pipeline error.

use super::error_code::ComentionErrorCode;
use super::{ConfigError, DictionaryError, ReportError, ScanError};

/// Errors that can end a corpus run.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Dictionary error: {0}")]
    Dictionary(#[from] DictionaryError),

    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),

    #[error("Report error: {0}")]
    Report(#[from] ReportError),
}

impl PipelineError {
    /// Process exit code for this error: 2 for configuration problems
    /// (including "nothing to match"), 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) | Self::Dictionary(DictionaryError::NoTerms { .. }) => 2,
            _ => 1,
        }
    }
}

impl ComentionErrorCode for PipelineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Dictionary(e) => e.error_code(),
            Self::Scan(e) => e.error_code(),
            Self::Report(e) => e.error_code(),
        }
    }
}
