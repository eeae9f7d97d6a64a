//! comention-analysis: dictionary tagging and co-occurrence statistics.
//!
//! Data flow: dictionaries → `EntityRegistry` + `Automaton` (built once,
//! read-only afterwards) → `StreamAggregator` (per line: acronym expansion,
//! matching, overlap resolution, id dedup, counting) → `StatisticsEngine`
//! → `Report` → reporter.

pub mod acronym;
pub mod dictionary;
pub mod matcher;
pub mod report;
pub mod scanner;
pub mod statistics;
pub mod tagger;

pub use dictionary::{EntityRegistry, Lexicon, LexiconBuilder};
pub use matcher::{Automaton, AutomatonBuilder, Match, MatcherSettings};
pub use report::{create_reporter, Reporter};
pub use scanner::{AggregationState, ScanSummary, StreamAggregator};
pub use statistics::{Report, StatisticsEngine};
pub use tagger::EntityTagger;
