//! comention-core: shared foundation for the comention engine.
//!
//! - Errors: one `thiserror` enum per subsystem plus `PipelineError`
//! - Config: TOML-based, layered resolution (CLI > env > project > user > defaults)
//! - Tracing: `tracing` + `EnvFilter` driven by `COMENTION_LOG`
//! - Events: progress/lifecycle hooks for long corpus runs
//! - Types: entity identifiers and fast collections

pub mod config;
pub mod constants;
pub mod errors;
pub mod events;
pub mod tracing;
pub mod types;

pub use config::ComentionConfig;
pub use errors::{ComentionErrorCode, PipelineError};
pub use types::{EntityId, EntityPair};
