//! Statistics engine configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_EDGE_LIKELIHOOD, DEFAULT_LIKELIHOOD_CUTOFF, DEFAULT_MI_CUTOFF};
use crate::errors::ConfigError;

/// Which table(s) the statistics engine produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Per entity: first-seen line and mention count.
    Mention,
    /// Per co-mentioned pair: first-seen line and co-mention count.
    Comention,
    /// Pair table filtered by likelihood / MI cutoffs.
    Pairs,
    /// Full pair table plus second-order relatedness over the relation graph.
    #[default]
    Implicit,
}

impl FromStr for OutputMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mention" => Ok(Self::Mention),
            "comention" => Ok(Self::Comention),
            "pairs" => Ok(Self::Pairs),
            "implicit" => Ok(Self::Implicit),
            other => Err(ConfigError::InvalidValue {
                field: "statistics.mode".to_string(),
                message: format!(
                    "unknown mode '{other}' (expected mention, comention, pairs or implicit)"
                ),
            }),
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Mention => "mention",
            Self::Comention => "comention",
            Self::Pairs => "pairs",
            Self::Implicit => "implicit",
        })
    }
}

/// Configuration for scoring and report selection.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StatisticsConfig {
    /// Report mode. Default: implicit.
    pub mode: Option<OutputMode>,
    /// Ignore cutoffs and emit every pair (including never co-mentioned
    /// pairs in implicit mode). Default: false.
    pub output_all: Option<bool>,
    /// Pairs mode: minimum likelihood. Default: 10.
    pub likelihood_cutoff: Option<f64>,
    /// Pairs mode: minimum mutual information. Default: 0.
    pub mi_cutoff: Option<f64>,
    /// Implicit mode: likelihood above which a relation-graph edge exists. Default: 8.
    pub edge_likelihood: Option<f64>,
}

impl StatisticsConfig {
    pub fn effective_mode(&self) -> OutputMode {
        self.mode.unwrap_or_default()
    }

    pub fn effective_output_all(&self) -> bool {
        self.output_all.unwrap_or(false)
    }

    pub fn effective_likelihood_cutoff(&self) -> f64 {
        self.likelihood_cutoff.unwrap_or(DEFAULT_LIKELIHOOD_CUTOFF)
    }

    pub fn effective_mi_cutoff(&self) -> f64 {
        self.mi_cutoff.unwrap_or(DEFAULT_MI_CUTOFF)
    }

    pub fn effective_edge_likelihood(&self) -> f64 {
        self.edge_likelihood.unwrap_or(DEFAULT_EDGE_LIKELIHOOD)
    }
}
