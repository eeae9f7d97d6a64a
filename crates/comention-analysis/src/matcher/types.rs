//! Matcher value types.

use comention_core::types::EntityId;
use serde::{Deserialize, Serialize};

/// Immutable per-automaton configuration, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatcherSettings {
    /// Compare bytes exactly instead of ASCII-case-folded.
    pub case_sensitive: bool,
    /// Drop matches that do not start and end on a word boundary.
    pub word_boundaries: bool,
}

impl MatcherSettings {
    /// Case-insensitive matching on word boundaries.
    pub fn case_insensitive() -> Self {
        Self {
            case_sensitive: false,
            word_boundaries: true,
        }
    }

    /// Case-sensitive matching on word boundaries.
    pub fn case_sensitive() -> Self {
        Self {
            case_sensitive: true,
            word_boundaries: true,
        }
    }

    /// Same settings with the word-boundary filter switched on or off.
    pub fn with_word_boundaries(mut self, enabled: bool) -> Self {
        self.word_boundaries = enabled;
        self
    }
}

impl Default for MatcherSettings {
    fn default() -> Self {
        Self::case_insensitive()
    }
}

/// One dictionary hit: byte offsets `start..=end` within the scanned line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Match {
    pub entity: EntityId,
    pub start: usize,
    pub end: usize,
}

impl Match {
    pub fn new(entity: EntityId, start: usize, end: usize) -> Self {
        Self { entity, start, end }
    }

    /// `end - start`: one less than the number of matched bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Always false; a match covers at least one byte.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The acceptance test of the overlap resolver: `self` (already
    /// accepted) ends at or before `candidate` starts, and starts before
    /// `candidate` ends.
    ///
    /// This is deliberately asymmetric. A candidate lying entirely to the
    /// left of an accepted match fails it just like a true overlap does.
    pub fn precedes(&self, candidate: &Match) -> bool {
        self.end <= candidate.start && self.start < candidate.end
    }
}
