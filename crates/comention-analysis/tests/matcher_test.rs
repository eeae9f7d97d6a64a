//! Automaton search, word boundaries and overlap resolution.

use comention_analysis::matcher::{remove_overlaps, AutomatonBuilder, Match, MatcherSettings};
use comention_core::types::EntityId;

fn automaton(settings: MatcherSettings, terms: &[(u32, &str)]) -> comention_analysis::Automaton {
    let mut builder = AutomatonBuilder::new(settings);
    for &(id, term) in terms {
        builder.add(EntityId(id), term);
    }
    builder.build()
}

fn spans(matches: &[Match]) -> Vec<(u32, usize, usize)> {
    let mut spans: Vec<_> = matches.iter().map(|m| (m.entity.0, m.start, m.end)).collect();
    spans.sort_unstable();
    spans
}

#[test]
fn exact_match_reports_inclusive_offsets() {
    let a = automaton(MatcherSettings::default(), &[(5, "cat")]);
    assert_eq!(a.search("cat"), vec![Match::new(EntityId(5), 0, 2)]);
}

#[test]
fn failure_links_find_terms_inside_other_terms() {
    let settings = MatcherSettings::case_sensitive().with_word_boundaries(false);
    let a = automaton(settings, &[(0, "he"), (1, "she"), (2, "his"), (3, "hers")]);

    assert_eq!(
        spans(&a.search("she likes his caffeine")),
        vec![(0, 1, 2), (1, 0, 2), (2, 10, 12)]
    );
    assert_eq!(spans(&a.search("ushers")), vec![(0, 2, 3), (1, 1, 3), (3, 2, 5)]);
}

#[test]
fn word_boundaries_reject_embedded_terms() {
    let a = automaton(MatcherSettings::default(), &[(1, "cat")]);
    assert!(a.search("concatenate").is_empty());
    assert_eq!(a.search("the cat sat"), vec![Match::new(EntityId(1), 4, 6)]);
}

#[test]
fn word_boundaries_can_be_disabled() {
    let a = automaton(
        MatcherSettings::default().with_word_boundaries(false),
        &[(1, "cat")],
    );
    assert_eq!(a.search("concatenate"), vec![Match::new(EntityId(1), 3, 5)]);
}

#[test]
fn trailing_punctuation_at_line_end_is_tolerated() {
    let a = automaton(MatcherSettings::default(), &[(1, "cat")]);
    assert_eq!(a.search("a cat."), vec![Match::new(EntityId(1), 2, 4)]);
}

#[test]
fn case_insensitive_folds_ascii_both_ways() {
    let a = automaton(MatcherSettings::case_insensitive(), &[(7, "BRCA1")]);
    assert_eq!(a.search("brca1 and BrCa1").len(), 2);

    let a = automaton(MatcherSettings::case_sensitive(), &[(7, "BRCA1")]);
    assert!(a.search("brca1 mutation").is_empty());
    assert_eq!(a.search("BRCA1 mutation").len(), 1);
}

#[test]
fn offsets_are_bytes() {
    let a = automaton(MatcherSettings::default(), &[(2, "cat")]);
    // 'é' is two bytes.
    assert_eq!(a.search("café cat"), vec![Match::new(EntityId(2), 6, 8)]);
}

#[test]
fn reinserted_term_takes_the_latest_entity() {
    let a = automaton(MatcherSettings::default(), &[(1, "cat"), (2, "Cat")]);
    assert_eq!(a.term_count(), 1);
    assert_eq!(a.search("cat"), vec![Match::new(EntityId(2), 0, 2)]);
}

#[test]
fn empty_automaton_matches_nothing() {
    let a = automaton(MatcherSettings::default(), &[(0, "")]);
    assert!(a.is_empty());
    assert!(a.search("").is_empty());
    assert!(a.search("some text").is_empty());
}

#[test]
fn overlap_resolver_keeps_the_longer_match_over_the_same_span() {
    let long = Match::new(EntityId(1), 0, 5);
    let short = Match::new(EntityId(2), 0, 2);
    assert_eq!(remove_overlaps(vec![short, long]), vec![long]);
}

#[test]
fn overlap_resolver_worked_example() {
    let a = Match::new(EntityId(1), 0, 9);
    let b = Match::new(EntityId(2), 3, 5);
    let c = Match::new(EntityId(3), 12, 14);
    // Order: a (len 9), b (len 2, start 3), c (len 2, start 12).
    // b: a.end 9 <= b.start 3 fails. c: 9 <= 12 and 0 < 14 holds.
    assert_eq!(remove_overlaps(vec![c, b, a]), vec![a, c]);
}

#[test]
fn overlap_resolver_rejects_candidates_left_of_an_accepted_match() {
    let right = Match::new(EntityId(1), 10, 19);
    let left = Match::new(EntityId(2), 0, 3);
    // Disjoint, but right.end 19 <= left.start 0 fails.
    assert_eq!(remove_overlaps(vec![left, right]), vec![right]);
}

#[test]
fn overlap_resolver_on_empty_input() {
    assert!(remove_overlaps(Vec::new()).is_empty());
}
