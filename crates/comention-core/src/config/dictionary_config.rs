//! Dictionary configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Which synonym files to load and how to match them.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Tab-delimited synonym files matched case-insensitively.
    pub case_insensitive: Vec<PathBuf>,
    /// Tab-delimited synonym files matched case-sensitively.
    pub case_sensitive: Vec<PathBuf>,
    /// Only report matches aligned to word boundaries. Default: true.
    pub word_boundaries: Option<bool>,
    /// Rewrite parenthetical acronyms to their long forms before matching. Default: true.
    pub expand_acronyms: Option<bool>,
}

impl DictionaryConfig {
    /// Returns the effective word-boundary setting, defaulting to true.
    pub fn effective_word_boundaries(&self) -> bool {
        self.word_boundaries.unwrap_or(true)
    }

    /// Returns the effective acronym-expansion setting, defaulting to true.
    pub fn effective_expand_acronyms(&self) -> bool {
        self.expand_acronyms.unwrap_or(true)
    }

    /// Total number of configured dictionary paths.
    pub fn source_count(&self) -> usize {
        self.case_insensitive.len() + self.case_sensitive.len()
    }
}
