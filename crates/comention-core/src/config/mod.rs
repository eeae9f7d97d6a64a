//! Configuration system for comention.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod comention_config;
pub mod dictionary_config;
pub mod output_config;
pub mod scan_config;
pub mod statistics_config;

pub use comention_config::{CliOverrides, ComentionConfig};
pub use dictionary_config::DictionaryConfig;
pub use output_config::{OutputConfig, ReportFormat};
pub use scan_config::ScanConfig;
pub use statistics_config::{OutputMode, StatisticsConfig};
