//! Statistics engine: turns corpus counts into scored relation tables.
//!
//! - `metrics`: PMI, Poisson likelihood, Jaccard
//! - `graph`: relation graph and second-order relatedness
//! - `engine`: mode selection and report assembly

pub mod engine;
pub mod graph;
pub mod metrics;
pub mod types;

pub use engine::StatisticsEngine;
pub use graph::RelationGraph;
pub use types::{ComentionRow, MentionRow, PairRow, PairScore, Relatedness, RelatednessRow, Report};
