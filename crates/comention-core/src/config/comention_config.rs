//! Top-level comention configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{DictionaryConfig, OutputConfig, OutputMode, ReportFormat, ScanConfig, StatisticsConfig};
use crate::constants::PROJECT_CONFIG_FILE;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`COMENTION_*`)
/// 3. Project config (`comention.toml` in the working directory, or `--config`)
/// 4. User config (`~/.comention/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ComentionConfig {
    pub dictionaries: DictionaryConfig,
    pub scan: ScanConfig,
    pub statistics: StatisticsConfig,
    pub output: OutputConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub case_insensitive: Vec<PathBuf>,
    pub case_sensitive: Vec<PathBuf>,
    pub no_word_boundaries: bool,
    pub no_acronyms: bool,
    pub workers: Option<usize>,
    pub chunk_lines: Option<usize>,
    pub mode: Option<OutputMode>,
    pub output_all: bool,
    pub likelihood_cutoff: Option<f64>,
    pub mi_cutoff: Option<f64>,
    pub edge_likelihood: Option<f64>,
    pub format: Option<ReportFormat>,
}

impl ComentionConfig {
    /// Load configuration with layered resolution.
    ///
    /// `project_file` overrides the default `comention.toml` lookup in `root`;
    /// an explicitly named file must exist.
    pub fn load(
        root: &Path,
        project_file: Option<&Path>,
        cli_overrides: Option<&CliOverrides>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(err @ ConfigError::ParseError { .. }) => return Err(err),
                    Err(err) => {
                        tracing::warn!(path = %user_config_path.display(), %err, "ignoring user config");
                    }
                }
            }
        }

        // Layer 3: project config
        match project_file {
            Some(path) => Self::merge_toml_file(&mut config, path)?,
            None => {
                let project_config_path = root.join(PROJECT_CONFIG_FILE);
                if project_config_path.exists() {
                    Self::merge_toml_file(&mut config, &project_config_path)?;
                }
            }
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &ComentionConfig) -> Result<(), ConfigError> {
        if config.dictionaries.source_count() == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "dictionaries".to_string(),
                message: "at least one case_insensitive or case_sensitive dictionary is required"
                    .to_string(),
            });
        }
        if config.scan.chunk_lines == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "scan.chunk_lines".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config.scan.queue_depth == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "scan.queue_depth".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        for (field, value) in [
            ("statistics.likelihood_cutoff", config.statistics.likelihood_cutoff),
            ("statistics.mi_cutoff", config.statistics.mi_cutoff),
            ("statistics.edge_likelihood", config.statistics.edge_likelihood),
        ] {
            if let Some(v) = value {
                if !v.is_finite() {
                    return Err(ConfigError::ValidationFailed {
                        field: field.to_string(),
                        message: "must be a finite number".to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Returns the user config path: `~/.comention/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        dirs_path().map(|d| d.join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut ComentionConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: ComentionConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a `Some` (or non-empty) value.
    fn merge(base: &mut ComentionConfig, other: &ComentionConfig) {
        // Dictionaries
        if !other.dictionaries.case_insensitive.is_empty() {
            base.dictionaries.case_insensitive = other.dictionaries.case_insensitive.clone();
        }
        if !other.dictionaries.case_sensitive.is_empty() {
            base.dictionaries.case_sensitive = other.dictionaries.case_sensitive.clone();
        }
        if other.dictionaries.word_boundaries.is_some() {
            base.dictionaries.word_boundaries = other.dictionaries.word_boundaries;
        }
        if other.dictionaries.expand_acronyms.is_some() {
            base.dictionaries.expand_acronyms = other.dictionaries.expand_acronyms;
        }

        // Scan
        if other.scan.workers.is_some() {
            base.scan.workers = other.scan.workers;
        }
        if other.scan.chunk_lines.is_some() {
            base.scan.chunk_lines = other.scan.chunk_lines;
        }
        if other.scan.queue_depth.is_some() {
            base.scan.queue_depth = other.scan.queue_depth;
        }

        // Statistics
        if other.statistics.mode.is_some() {
            base.statistics.mode = other.statistics.mode;
        }
        if other.statistics.output_all.is_some() {
            base.statistics.output_all = other.statistics.output_all;
        }
        if other.statistics.likelihood_cutoff.is_some() {
            base.statistics.likelihood_cutoff = other.statistics.likelihood_cutoff;
        }
        if other.statistics.mi_cutoff.is_some() {
            base.statistics.mi_cutoff = other.statistics.mi_cutoff;
        }
        if other.statistics.edge_likelihood.is_some() {
            base.statistics.edge_likelihood = other.statistics.edge_likelihood;
        }

        // Output
        if other.output.format.is_some() {
            base.output.format = other.output.format;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `COMENTION_SCAN_WORKERS`, `COMENTION_STATISTICS_MODE`, etc.
    /// Dictionary lists use the platform path separator (`:` on Unix).
    /// Unparseable values are ignored.
    fn apply_env_overrides(config: &mut ComentionConfig) {
        if let Some(paths) = env_path_list("COMENTION_DICTIONARIES_CASE_INSENSITIVE") {
            config.dictionaries.case_insensitive = paths;
        }
        if let Some(paths) = env_path_list("COMENTION_DICTIONARIES_CASE_SENSITIVE") {
            config.dictionaries.case_sensitive = paths;
        }
        if let Ok(val) = std::env::var("COMENTION_DICTIONARIES_WORD_BOUNDARIES") {
            if let Ok(v) = val.parse::<bool>() {
                config.dictionaries.word_boundaries = Some(v);
            }
        }
        if let Ok(val) = std::env::var("COMENTION_DICTIONARIES_EXPAND_ACRONYMS") {
            if let Ok(v) = val.parse::<bool>() {
                config.dictionaries.expand_acronyms = Some(v);
            }
        }
        if let Ok(val) = std::env::var("COMENTION_SCAN_WORKERS") {
            if let Ok(v) = val.parse::<usize>() {
                config.scan.workers = Some(v);
            }
        }
        if let Ok(val) = std::env::var("COMENTION_SCAN_CHUNK_LINES") {
            if let Ok(v) = val.parse::<usize>() {
                config.scan.chunk_lines = Some(v);
            }
        }
        if let Ok(val) = std::env::var("COMENTION_SCAN_QUEUE_DEPTH") {
            if let Ok(v) = val.parse::<usize>() {
                config.scan.queue_depth = Some(v);
            }
        }
        if let Ok(val) = std::env::var("COMENTION_STATISTICS_MODE") {
            if let Ok(v) = val.parse::<OutputMode>() {
                config.statistics.mode = Some(v);
            }
        }
        if let Ok(val) = std::env::var("COMENTION_STATISTICS_OUTPUT_ALL") {
            if let Ok(v) = val.parse::<bool>() {
                config.statistics.output_all = Some(v);
            }
        }
        if let Ok(val) = std::env::var("COMENTION_STATISTICS_LIKELIHOOD_CUTOFF") {
            if let Ok(v) = val.parse::<f64>() {
                config.statistics.likelihood_cutoff = Some(v);
            }
        }
        if let Ok(val) = std::env::var("COMENTION_STATISTICS_MI_CUTOFF") {
            if let Ok(v) = val.parse::<f64>() {
                config.statistics.mi_cutoff = Some(v);
            }
        }
        if let Ok(val) = std::env::var("COMENTION_STATISTICS_EDGE_LIKELIHOOD") {
            if let Ok(v) = val.parse::<f64>() {
                config.statistics.edge_likelihood = Some(v);
            }
        }
        if let Ok(val) = std::env::var("COMENTION_OUTPUT_FORMAT") {
            if let Ok(v) = val.parse::<ReportFormat>() {
                config.output.format = Some(v);
            }
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut ComentionConfig, cli: &CliOverrides) {
        if !cli.case_insensitive.is_empty() {
            config.dictionaries.case_insensitive = cli.case_insensitive.clone();
        }
        if !cli.case_sensitive.is_empty() {
            config.dictionaries.case_sensitive = cli.case_sensitive.clone();
        }
        if cli.no_word_boundaries {
            config.dictionaries.word_boundaries = Some(false);
        }
        if cli.no_acronyms {
            config.dictionaries.expand_acronyms = Some(false);
        }
        if let Some(v) = cli.workers {
            config.scan.workers = Some(v);
        }
        if let Some(v) = cli.chunk_lines {
            config.scan.chunk_lines = Some(v);
        }
        if let Some(v) = cli.mode {
            config.statistics.mode = Some(v);
        }
        if cli.output_all {
            config.statistics.output_all = Some(true);
        }
        if let Some(v) = cli.likelihood_cutoff {
            config.statistics.likelihood_cutoff = Some(v);
        }
        if let Some(v) = cli.mi_cutoff {
            config.statistics.mi_cutoff = Some(v);
        }
        if let Some(v) = cli.edge_likelihood {
            config.statistics.edge_likelihood = Some(v);
        }
        if let Some(v) = cli.format {
            config.output.format = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Non-empty entries of a path-list variable; `None` when unset or empty.
fn env_path_list(key: &str) -> Option<Vec<PathBuf>> {
    let raw = std::env::var_os(key)?;
    let paths: Vec<PathBuf> = std::env::split_paths(&raw)
        .filter(|p| !p.as_os_str().is_empty())
        .collect();
    (!paths.is_empty()).then_some(paths)
}

/// Returns the user-level config directory: `~/.comention/`.
fn dirs_path() -> Option<PathBuf> {
    home_dir().map(|h| h.join(".comention"))
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
