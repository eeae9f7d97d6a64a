//! Lexicon: the registry plus the built matchers for one run.

use std::io::BufRead;
use std::path::Path;

use comention_core::config::DictionaryConfig;
use comention_core::errors::DictionaryError;
use comention_core::events::types::DictionaryLoadedEvent;
use comention_core::events::ComentionEventHandler;
use comention_core::types::EntityId;

use super::loader::{self, DictionaryStats};
use super::registry::EntityRegistry;
use crate::matcher::{AutomatonBuilder, MatcherSettings};
use crate::tagger::EntityTagger;

/// Accumulates dictionaries for both matchers before they are built.
#[derive(Debug)]
pub struct LexiconBuilder {
    registry: EntityRegistry,
    case_insensitive: Option<AutomatonBuilder>,
    case_sensitive: Option<AutomatonBuilder>,
    word_boundaries: bool,
    expand_acronyms: bool,
    stats: Vec<DictionaryStats>,
}

impl Default for LexiconBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconBuilder {
    /// Word boundaries and acronym expansion on.
    pub fn new() -> Self {
        Self {
            registry: EntityRegistry::new(),
            case_insensitive: None,
            case_sensitive: None,
            word_boundaries: true,
            expand_acronyms: true,
            stats: Vec::new(),
        }
    }

    /// Matcher switches taken from `config`; no file is read.
    pub fn from_config(config: &DictionaryConfig) -> Self {
        Self::new()
            .word_boundaries(config.effective_word_boundaries())
            .expand_acronyms(config.effective_expand_acronyms())
    }

    /// Must be set before the first term is added.
    pub fn word_boundaries(mut self, enabled: bool) -> Self {
        self.word_boundaries = enabled;
        self
    }

    pub fn expand_acronyms(mut self, enabled: bool) -> Self {
        self.expand_acronyms = enabled;
        self
    }

    /// The registry and the matcher builder for one case mode, creating
    /// the builder on first use.
    fn parts(&mut self, case_sensitive: bool) -> (&mut EntityRegistry, &mut AutomatonBuilder) {
        let settings = if case_sensitive {
            MatcherSettings::case_sensitive()
        } else {
            MatcherSettings::case_insensitive()
        }
        .with_word_boundaries(self.word_boundaries);

        let slot = if case_sensitive {
            &mut self.case_sensitive
        } else {
            &mut self.case_insensitive
        };
        (
            &mut self.registry,
            slot.get_or_insert_with(|| AutomatonBuilder::new(settings)),
        )
    }

    /// Add one synonym programmatically.
    pub fn add_term(&mut self, external_id: &str, term: &str, case_sensitive: bool) -> EntityId {
        let (registry, builder) = self.parts(case_sensitive);
        let entity = registry.register(external_id);
        builder.add(entity, term);
        entity
    }

    /// Load a dictionary file. A missing file contributes nothing.
    pub fn load_file(
        &mut self,
        path: &Path,
        case_sensitive: bool,
    ) -> Result<&DictionaryStats, DictionaryError> {
        let (registry, builder) = self.parts(case_sensitive);
        let stats = loader::load_path(path, registry, builder)?;
        Ok(self.push_stats(stats))
    }

    /// Load dictionary records from a reader; `label` names the source.
    pub fn load_reader<R: BufRead>(
        &mut self,
        reader: R,
        label: &Path,
        case_sensitive: bool,
    ) -> Result<&DictionaryStats, DictionaryError> {
        let (registry, builder) = self.parts(case_sensitive);
        let stats = loader::load_reader(reader, label, registry, builder)?;
        Ok(self.push_stats(stats))
    }

    fn push_stats(&mut self, stats: DictionaryStats) -> &DictionaryStats {
        self.stats.push(stats);
        &self.stats[self.stats.len() - 1]
    }

    /// Terms accepted so far across both matchers.
    pub fn term_count(&self) -> usize {
        self.case_insensitive.as_ref().map_or(0, |b| b.term_count())
            + self.case_sensitive.as_ref().map_or(0, |b| b.term_count())
    }

    /// Build both matchers.
    ///
    /// Fails with [`DictionaryError::NoTerms`] when no source yielded a
    /// term. A matcher with no terms is dropped.
    pub fn build(self) -> Result<Lexicon, DictionaryError> {
        if self.term_count() == 0 {
            return Err(DictionaryError::NoTerms {
                sources: self.stats.len(),
            });
        }

        let case_insensitive = self
            .case_insensitive
            .filter(|b| b.term_count() > 0)
            .map(AutomatonBuilder::build);
        let case_sensitive = self
            .case_sensitive
            .filter(|b| b.term_count() > 0)
            .map(AutomatonBuilder::build);

        let tagger = EntityTagger::new(case_insensitive, case_sensitive)
            .with_acronym_expansion(self.expand_acronyms);

        tracing::info!(
            entities = self.registry.len(),
            sources = self.stats.len(),
            "lexicon ready"
        );

        Ok(Lexicon {
            registry: self.registry,
            tagger,
            stats: self.stats,
        })
    }
}

/// Registry and tagger for one corpus run. Read-only once built.
#[derive(Debug)]
pub struct Lexicon {
    registry: EntityRegistry,
    tagger: EntityTagger,
    stats: Vec<DictionaryStats>,
}

impl Lexicon {
    /// Load every dictionary named in `config`, case-insensitive sources
    /// first, reporting each through `events`.
    pub fn load(
        config: &DictionaryConfig,
        events: &dyn ComentionEventHandler,
    ) -> Result<Self, DictionaryError> {
        let mut builder = LexiconBuilder::from_config(config);
        let sources = config
            .case_insensitive
            .iter()
            .map(|p| (p, false))
            .chain(config.case_sensitive.iter().map(|p| (p, true)));

        for (path, case_sensitive) in sources {
            let stats = builder.load_file(path, case_sensitive)?;
            tracing::info!(
                path = %stats.path.display(),
                case_sensitive,
                records = stats.records,
                terms = stats.terms,
                missing = stats.missing,
                "dictionary"
            );
            events.on_dictionary_loaded(&DictionaryLoadedEvent {
                path: stats.path.clone(),
                case_sensitive,
                records: stats.records,
                terms: stats.terms,
                missing: stats.missing,
            });
        }

        builder.build()
    }

    pub fn registry(&self) -> &EntityRegistry {
        &self.registry
    }

    pub fn tagger(&self) -> &EntityTagger {
        &self.tagger
    }

    pub fn stats(&self) -> &[DictionaryStats] {
        &self.stats
    }

    pub fn into_parts(self) -> (EntityRegistry, EntityTagger) {
        (self.registry, self.tagger)
    }
}
