//! Shared constants for the comention engine.

/// Crate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Lines per chunk handed to a scan worker.
pub const DEFAULT_CHUNK_LINES: usize = 20_000;

/// Default worker count (0 means one worker per available CPU).
pub const DEFAULT_WORKERS: usize = 1;

/// Chunks allowed in flight per worker before the reader blocks.
pub const DEFAULT_QUEUE_DEPTH_PER_WORKER: usize = 2;

/// Likelihood cutoff used by the threshold-only pair table.
pub const DEFAULT_LIKELIHOOD_CUTOFF: f64 = 10.0;

/// Mutual information cutoff used by the threshold-only pair table.
pub const DEFAULT_MI_CUTOFF: f64 = 0.0;

/// Likelihood above which two entities are linked in the relation graph.
pub const DEFAULT_EDGE_LIKELIHOOD: f64 = 8.0;

/// Long forms longer than this (bytes) are rejected by the acronym resolver.
pub const MAX_LONG_FORM_LEN: usize = 50;

/// Project config file name looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = "comention.toml";

/// Environment variable holding the tracing filter.
pub const LOG_ENV_VAR: &str = "COMENTION_LOG";
