//! Registry, dictionary loading and per-line tagging.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use comention_analysis::dictionary::{EntityRegistry, Lexicon, LexiconBuilder};
use comention_core::config::DictionaryConfig;
use comention_core::errors::{ComentionErrorCode, DictionaryError};
use comention_core::events::types::DictionaryLoadedEvent;
use comention_core::events::ComentionEventHandler;
use comention_core::types::EntityId;

fn write_dictionary(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[derive(Default)]
struct LoadCounter {
    loaded: AtomicUsize,
    missing: AtomicUsize,
}

impl ComentionEventHandler for LoadCounter {
    fn on_dictionary_loaded(&self, event: &DictionaryLoadedEvent) {
        self.loaded.fetch_add(1, Ordering::Relaxed);
        if event.missing {
            self.missing.fetch_add(1, Ordering::Relaxed);
        }
    }
}

#[test]
fn registry_assigns_dense_ids_in_first_seen_order() {
    let mut registry = EntityRegistry::new();
    assert_eq!(registry.register("GENE:7157"), EntityId(0));
    assert_eq!(registry.register("DOID:162"), EntityId(1));
    assert_eq!(registry.register("GENE:7157"), EntityId(0));

    assert_eq!(registry.len(), 2);
    assert_eq!(registry.get("DOID:162"), Some(EntityId(1)));
    assert_eq!(registry.get("unknown"), None);
    assert_eq!(registry.resolve(EntityId(0)), Some("GENE:7157"));
    assert_eq!(registry.resolve(EntityId(9)), None);
    assert_eq!(
        registry.iter().map(|(id, name)| (id.0, name)).collect::<Vec<_>>(),
        vec![(0, "GENE:7157"), (1, "DOID:162")]
    );
}

#[test]
fn both_dictionaries_share_one_registry() {
    let dir = tempfile::tempdir().unwrap();
    let ci = write_dictionary(dir.path(), "ci.tsv", "GENE1\tp53\ttumor protein 53\nDIS1\tcancer\n");
    let cs = write_dictionary(dir.path(), "cs.tsv", "GENE2\tBRCA1\nGENE1\tTP53\n");

    let config = DictionaryConfig {
        case_insensitive: vec![ci],
        case_sensitive: vec![cs],
        ..Default::default()
    };
    let counter = LoadCounter::default();
    let lexicon = Lexicon::load(&config, &counter).unwrap();

    assert_eq!(counter.loaded.load(Ordering::Relaxed), 2);
    assert_eq!(lexicon.registry().len(), 3);
    assert_eq!(lexicon.registry().get("GENE1"), Some(EntityId(0)));
    assert_eq!(lexicon.registry().get("GENE2"), Some(EntityId(2)));

    let stats = lexicon.stats();
    assert_eq!(stats.len(), 2);
    assert_eq!((stats[0].records, stats[0].terms), (2, 3));
    assert!(!stats[0].case_sensitive);
    assert_eq!((stats[1].records, stats[1].terms), (2, 2));
    assert!(stats[1].case_sensitive);

    let tagger = lexicon.tagger();
    assert_eq!(
        tagger.tag_line("p53 mutations cause cancer and BRCA1 too").as_slice(),
        &[EntityId(0), EntityId(1), EntityId(2)]
    );
    assert!(tagger.tag_line("brca1 only in lower case").is_empty());
}

#[test]
fn missing_file_contributes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let present = write_dictionary(dir.path(), "ci.tsv", "E1\tcat\n");

    let config = DictionaryConfig {
        case_insensitive: vec![dir.path().join("absent.tsv"), present],
        ..Default::default()
    };
    let counter = LoadCounter::default();
    let lexicon = Lexicon::load(&config, &counter).unwrap();

    assert_eq!(counter.missing.load(Ordering::Relaxed), 1);
    assert!(lexicon.stats()[0].missing);
    assert_eq!(lexicon.stats()[0].terms, 0);
    assert_eq!(lexicon.registry().len(), 1);
}

#[test]
fn no_terms_anywhere_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let ids_only = write_dictionary(dir.path(), "ids.tsv", "E1\nE2\t\t\n");

    let config = DictionaryConfig {
        case_insensitive: vec![dir.path().join("absent.tsv")],
        case_sensitive: vec![ids_only],
        ..Default::default()
    };
    let counter = LoadCounter::default();
    match Lexicon::load(&config, &counter) {
        Err(err @ DictionaryError::NoTerms { sources: 2 }) => {
            assert_eq!(err.error_code(), "NO_TERMS");
        }
        other => panic!("Expected NoTerms, got: {:?}", other.map(|_| ())),
    }
}

#[test]
fn entity_without_terms_never_matches() {
    let mut builder = LexiconBuilder::new();
    builder
        .load_reader("E1\nE2\tcat\n".as_bytes(), Path::new("inline"), false)
        .unwrap();
    let lexicon = builder.build().unwrap();

    assert_eq!(lexicon.registry().len(), 2);
    assert_eq!(lexicon.tagger().tag_line("E1 cat").as_slice(), &[EntityId(1)]);
}

#[test]
fn repeated_matches_collapse_to_one_entity() {
    let mut builder = LexiconBuilder::new();
    builder.add_term("DIS1", "cancer", false);
    builder.add_term("DIS1", "tumour", false);
    let lexicon = builder.build().unwrap();

    let tags = lexicon.tagger().tag_line("cancer and cancer and tumour again");
    assert_eq!(tags.as_slice(), &[EntityId(0)]);
}

#[test]
fn acronym_expansion_rewrites_before_matching() {
    let build = |expand: bool| {
        let mut builder = LexiconBuilder::new()
            .word_boundaries(false)
            .expand_acronyms(expand);
        builder.add_term("TNF", "tumor necrosis factor", false);
        builder.add_term("OTHER", "TNF", true);
        builder.build().unwrap()
    };
    let line = "tumor necrosis factor (TNF) is elevated";

    assert_eq!(build(true).tagger().tag_line(line).as_slice(), &[EntityId(0)]);
    assert_eq!(
        build(false).tagger().tag_line(line).as_slice(),
        &[EntityId(0), EntityId(1)]
    );
}

#[test]
fn expanded_long_form_matches_on_word_boundaries() {
    let mut builder = LexiconBuilder::new();
    builder.add_term("HIV", "human immunodeficiency virus", false);
    let lexicon = builder.build().unwrap();

    let tags = lexicon
        .tagger()
        .tag_line("Human Immunodeficiency Virus (HIV) load; (HIV) again");
    assert_eq!(tags.as_slice(), &[EntityId(0)]);
}

#[test]
fn longest_match_wins_across_both_matchers() {
    let mut builder = LexiconBuilder::new();
    builder.add_term("LUNG", "lung", false);
    builder.add_term("LUNG_CANCER", "lung cancer", false);
    builder.add_term("CANCER", "Cancer", true);
    let lexicon = builder.build().unwrap();

    let tags = lexicon.tagger().tag_line("lung Cancer risk");
    assert_eq!(tags.as_slice(), &[EntityId(1)]);
}
