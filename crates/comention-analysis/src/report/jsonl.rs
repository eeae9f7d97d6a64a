//! JSON Lines reporter: one object per row.

use std::io::Write;

use serde::Serialize;

use comention_core::errors::ReportError;

use super::Reporter;
use crate::statistics::Report;

/// Every object carries a `table` key (`mention`, `comention`, `pair`,
/// `implicit`) ahead of the row's own fields. Non-finite scores are written
/// as strings (`"-inf"`) because JSON has no such numbers.
pub struct JsonlReporter;

#[derive(Serialize)]
struct Tagged<'a, T> {
    table: &'static str,
    #[serde(flatten)]
    row: &'a T,
}

fn write_rows<T: Serialize>(
    out: &mut dyn Write,
    table: &'static str,
    rows: &[T],
) -> Result<(), ReportError> {
    for row in rows {
        serde_json::to_writer(&mut *out, &Tagged { table, row }).map_err(|e| {
            ReportError::Serialization {
                message: e.to_string(),
            }
        })?;
        out.write_all(b"\n")?;
    }
    Ok(())
}

impl Reporter for JsonlReporter {
    fn name(&self) -> &'static str {
        "jsonl"
    }

    fn write(&self, report: &Report, out: &mut dyn Write) -> Result<(), ReportError> {
        write_rows(out, "mention", &report.mentions)?;
        write_rows(out, "comention", &report.comentions)?;
        write_rows(out, "pair", &report.pairs)?;
        write_rows(out, "implicit", &report.implicit)?;
        out.flush()?;
        Ok(())
    }
}
