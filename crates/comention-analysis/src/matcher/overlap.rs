//! Overlap resolution across merged match sets.

use super::types::Match;

/// Reduce `matches` to a non-conflicting subset, longest first.
///
/// Matches are ordered by descending `len()`, ties broken left to right,
/// and accepted greedily: a candidate is kept only if every match accepted
/// so far [`precedes`](Match::precedes) it. The input may mix matches from
/// several automata.
pub fn remove_overlaps(mut matches: Vec<Match>) -> Vec<Match> {
    matches.sort_by(|a, b| {
        b.len()
            .cmp(&a.len())
            .then(a.start.cmp(&b.start))
            .then(a.end.cmp(&b.end))
            .then(a.entity.cmp(&b.entity))
    });

    let mut accepted: Vec<Match> = Vec::with_capacity(matches.len());
    for candidate in matches {
        if accepted.iter().all(|kept| kept.precedes(&candidate)) {
            accepted.push(candidate);
        }
    }
    accepted
}
