//! Per-line entity tagging.

use comention_core::types::collections::SmallVec8;
use comention_core::types::EntityId;

use crate::acronym::replace_acronyms_with_long_forms;
use crate::matcher::{remove_overlaps, Automaton, Match, WordBoundaries};

/// Turns one corpus line into the set of entities it mentions.
///
/// Per line: acronym expansion (optional), search with every present
/// matcher, overlap resolution over the merged matches, then id dedup.
#[derive(Debug, Clone)]
pub struct EntityTagger {
    case_insensitive: Option<Automaton>,
    case_sensitive: Option<Automaton>,
    expand_acronyms: bool,
}

impl EntityTagger {
    pub fn new(case_insensitive: Option<Automaton>, case_sensitive: Option<Automaton>) -> Self {
        Self {
            case_insensitive,
            case_sensitive,
            expand_acronyms: true,
        }
    }

    pub fn with_acronym_expansion(mut self, enabled: bool) -> Self {
        self.expand_acronyms = enabled;
        self
    }

    pub fn expands_acronyms(&self) -> bool {
        self.expand_acronyms
    }

    fn automata(&self) -> impl Iterator<Item = &Automaton> {
        self.case_insensitive.iter().chain(self.case_sensitive.iter())
    }

    /// Non-conflicting matches in `text`, without acronym expansion.
    pub fn resolve_matches(&self, text: &str) -> Vec<Match> {
        let boundaries = self
            .automata()
            .any(|a| a.settings().word_boundaries)
            .then(|| WordBoundaries::new(text));

        let mut matches = Vec::new();
        for automaton in self.automata() {
            automaton.search_with_boundaries(text, boundaries.as_ref(), &mut matches);
        }
        remove_overlaps(matches)
    }

    /// Sorted, deduplicated entities mentioned in `line`.
    pub fn tag_line(&self, line: &str) -> SmallVec8<EntityId> {
        let matches = if self.expand_acronyms {
            self.resolve_matches(&replace_acronyms_with_long_forms(line))
        } else {
            self.resolve_matches(line)
        };

        let mut entities: SmallVec8<EntityId> = matches.iter().map(|m| m.entity).collect();
        entities.sort_unstable();
        entities.dedup();
        entities
    }
}
