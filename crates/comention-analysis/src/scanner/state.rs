//! Mention and co-mention counts.

use comention_core::types::{EntityId, EntityPair, FxHashMap};

/// Counts for a set of lines: a chunk while a worker fills it, the whole
/// corpus once every chunk has been merged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregationState {
    lines: u64,
    mentions: FxHashMap<EntityId, u64>,
    comentions: FxHashMap<EntityPair, u64>,
    first_seen: FxHashMap<EntityId, u64>,
    pair_first_seen: FxHashMap<EntityPair, u64>,
}

impl AggregationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one line with corpus ordinal `ordinal` mentioning `entities`.
    ///
    /// `entities` must be deduplicated: every entity gains one mention and
    /// every unordered pair of distinct entities one co-mention.
    pub fn record_line(&mut self, ordinal: u64, entities: &[EntityId]) {
        self.lines += 1;
        for (i, &entity) in entities.iter().enumerate() {
            *self.mentions.entry(entity).or_insert(0) += 1;
            self.first_seen.entry(entity).or_insert(ordinal);

            for &other in &entities[i + 1..] {
                if let Some(pair) = EntityPair::new(entity, other) {
                    *self.comentions.entry(pair).or_insert(0) += 1;
                    self.pair_first_seen.entry(pair).or_insert(ordinal);
                }
            }
        }
    }

    /// Fold `other` into `self`.
    ///
    /// Counts add; first-seen ordinals keep the earlier one, which makes the
    /// result independent of merge order.
    pub fn merge(&mut self, other: AggregationState) {
        self.lines += other.lines;
        for (entity, count) in other.mentions {
            *self.mentions.entry(entity).or_insert(0) += count;
        }
        for (pair, count) in other.comentions {
            *self.comentions.entry(pair).or_insert(0) += count;
        }
        for (entity, ordinal) in other.first_seen {
            self.first_seen
                .entry(entity)
                .and_modify(|seen| *seen = (*seen).min(ordinal))
                .or_insert(ordinal);
        }
        for (pair, ordinal) in other.pair_first_seen {
            self.pair_first_seen
                .entry(pair)
                .and_modify(|seen| *seen = (*seen).min(ordinal))
                .or_insert(ordinal);
        }
    }

    /// Lines counted, with or without mentions.
    pub fn lines(&self) -> u64 {
        self.lines
    }

    pub fn mentions(&self, entity: EntityId) -> u64 {
        self.mentions.get(&entity).copied().unwrap_or(0)
    }

    pub fn comentions(&self, a: EntityId, b: EntityId) -> u64 {
        EntityPair::new(a, b)
            .and_then(|pair| self.comentions.get(&pair).copied())
            .unwrap_or(0)
    }

    pub fn first_seen(&self, entity: EntityId) -> Option<u64> {
        self.first_seen.get(&entity).copied()
    }

    pub fn pair_first_seen(&self, a: EntityId, b: EntityId) -> Option<u64> {
        EntityPair::new(a, b).and_then(|pair| self.pair_first_seen.get(&pair).copied())
    }

    /// Entities mentioned at least once.
    pub fn entity_count(&self) -> usize {
        self.mentions.len()
    }

    /// Pairs co-mentioned at least once.
    pub fn pair_count(&self) -> usize {
        self.comentions.len()
    }

    pub fn mention_counts(&self) -> &FxHashMap<EntityId, u64> {
        &self.mentions
    }

    pub fn comention_counts(&self) -> &FxHashMap<EntityPair, u64> {
        &self.comentions
    }

    /// Mentioned entities in id order.
    pub fn sorted_entities(&self) -> Vec<EntityId> {
        let mut entities: Vec<EntityId> = self.mentions.keys().copied().collect();
        entities.sort_unstable();
        entities
    }

    /// Co-mentioned pairs in id order.
    pub fn sorted_pairs(&self) -> Vec<EntityPair> {
        let mut pairs: Vec<EntityPair> = self.comentions.keys().copied().collect();
        pairs.sort_unstable();
        pairs
    }
}
