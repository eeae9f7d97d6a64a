//! Score and report row types.

use comention_core::config::OutputMode;
use comention_core::types::EntityPair;
use serde::{Serialize, Serializer};

/// Direct association of one co-mentioned pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairScore {
    pub pair: EntityPair,
    pub mentions_first: u64,
    pub mentions_second: u64,
    pub comentions: u64,
    pub mutual_information: f64,
    pub likelihood: f64,
}

/// Second-order association of two relation-graph nodes.
///
/// `mutual_information` and `likelihood` are the direct scores, or
/// negative infinity when the pair was never co-mentioned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Relatedness {
    pub pair: EntityPair,
    pub mutual_information: f64,
    pub likelihood: f64,
    pub jaccard: f64,
    pub shared_neighbors: usize,
    pub mean_shared_mi: f64,
}

/// Finite scores as numbers, the rest (`-inf`, `inf`, `NaN`) as strings.
fn serialize_score<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() {
        serializer.serialize_f64(*value)
    } else {
        serializer.collect_str(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MentionRow {
    pub entity: String,
    pub first_seen: u64,
    pub mentions: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComentionRow {
    pub entity1: String,
    pub entity2: String,
    pub first_seen: u64,
    pub comentions: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairRow {
    pub entity1: String,
    pub entity2: String,
    pub mentions1: u64,
    pub mentions2: u64,
    pub comentions: u64,
    #[serde(serialize_with = "serialize_score")]
    pub mutual_information: f64,
    #[serde(serialize_with = "serialize_score")]
    pub likelihood: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelatednessRow {
    pub entity1: String,
    pub entity2: String,
    #[serde(serialize_with = "serialize_score")]
    pub mutual_information: f64,
    #[serde(serialize_with = "serialize_score")]
    pub likelihood: f64,
    #[serde(serialize_with = "serialize_score")]
    pub jaccard: f64,
    pub shared_neighbors: usize,
    #[serde(serialize_with = "serialize_score")]
    pub mean_shared_mi: f64,
}

/// The tables produced for one mode. Tables a mode does not produce stay
/// empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub mode: OutputMode,
    pub mentions: Vec<MentionRow>,
    pub comentions: Vec<ComentionRow>,
    pub pairs: Vec<PairRow>,
    pub implicit: Vec<RelatednessRow>,
}

impl Report {
    pub fn empty(mode: OutputMode) -> Self {
        Self {
            mode,
            mentions: Vec::new(),
            comentions: Vec::new(),
            pairs: Vec::new(),
            implicit: Vec::new(),
        }
    }

    pub fn row_count(&self) -> usize {
        self.mentions.len() + self.comentions.len() + self.pairs.len() + self.implicit.len()
    }

    pub fn is_empty(&self) -> bool {
        self.row_count() == 0
    }
}
