//! Report output configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Serialization format of report rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Tab-separated values with a header row per table.
    #[default]
    Tsv,
    /// One JSON object per row.
    Jsonl,
}

impl FromStr for ReportFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "tsv" => Ok(Self::Tsv),
            "jsonl" | "json" => Ok(Self::Jsonl),
            other => Err(ConfigError::InvalidValue {
                field: "output.format".to_string(),
                message: format!("unknown format '{other}' (expected tsv or jsonl)"),
            }),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Tsv => "tsv",
            Self::Jsonl => "jsonl",
        })
    }
}

/// Configuration for the report writer.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OutputConfig {
    /// Row format. Default: tsv.
    pub format: Option<ReportFormat>,
}

impl OutputConfig {
    /// Returns the effective report format, defaulting to TSV.
    pub fn effective_format(&self) -> ReportFormat {
        self.format.unwrap_or_default()
    }
}
