//! Error handling for comention.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod dictionary_error;
pub mod error_code;
pub mod pipeline_error;
pub mod report_error;
pub mod scan_error;

pub use config_error::ConfigError;
pub use dictionary_error::DictionaryError;
pub use error_code::ComentionErrorCode;
pub use pipeline_error::PipelineError;
pub use report_error::ReportError;
pub use scan_error::ScanError;
