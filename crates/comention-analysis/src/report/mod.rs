//! Reporters: output formats for statistics reports.
//!
//! TSV (one header row per table, four-decimal floats) and JSON Lines
//! (one object per row, tagged with its table).

pub mod jsonl;
pub mod tsv;

use std::io::Write;

use comention_core::config::ReportFormat;
use comention_core::errors::ReportError;

use crate::statistics::Report;

/// Trait for report serialization.
pub trait Reporter: Send + Sync {
    fn name(&self) -> &'static str;
    fn write(&self, report: &Report, out: &mut dyn Write) -> Result<(), ReportError>;

    /// Render to a string; used by tests and small reports.
    fn render(&self, report: &Report) -> Result<String, ReportError> {
        let mut buf = Vec::new();
        self.write(report, &mut buf)?;
        String::from_utf8(buf).map_err(|e| ReportError::Serialization {
            message: e.to_string(),
        })
    }
}

/// Create the reporter for `format`.
pub fn create_reporter(format: ReportFormat) -> Box<dyn Reporter> {
    match format {
        ReportFormat::Tsv => Box::new(tsv::TsvReporter),
        ReportFormat::Jsonl => Box::new(jsonl::JsonlReporter),
    }
}
