//! ComentionErrorCode trait for structured error reporting.

/// Every error enum implements this to provide a stable code string
/// for the CLI's stderr line and exit-code mapping.
pub trait ComentionErrorCode {
    /// Returns the error code string (e.g., "CONFIG_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn tagged_message(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const DICTIONARY_ERROR: &str = "DICTIONARY_ERROR";
pub const NO_TERMS: &str = "NO_TERMS";
pub const SCAN_ERROR: &str = "SCAN_ERROR";
pub const WORKER_FAILED: &str = "WORKER_FAILED";
pub const REPORT_ERROR: &str = "REPORT_ERROR";
