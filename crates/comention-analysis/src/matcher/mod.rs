//! Multi-pattern dictionary matching.
//!
//! An arena-backed trie with failure links (Aho-Corasick) searched in one
//! pass over a line, an optional word-boundary filter, and the overlap
//! resolver applied to the merged matches of several automata.

pub mod automaton;
pub mod boundaries;
pub mod overlap;
pub mod types;

pub use automaton::{Automaton, AutomatonBuilder};
pub use boundaries::WordBoundaries;
pub use overlap::remove_overlaps;
pub use types::{Match, MatcherSettings};
