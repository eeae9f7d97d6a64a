//! Dense entity identifiers.
//!
//! `EntityId` values are assigned contiguously from 0 in first-seen order by
//! the entity registry, so they double as indices into per-entity tables.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Compact internal id of a dictionary entity.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct EntityId(pub u32);

impl EntityId {
    /// Create an id from a dense index.
    pub fn new(index: u32) -> Self {
        Self(index)
    }

    /// The dense index of this id.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for EntityId {
    fn from(index: u32) -> Self {
        Self(index)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unordered pair of distinct entities, stored with `first < second`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct EntityPair {
    first: EntityId,
    second: EntityId,
}

impl EntityPair {
    /// Build the canonical pair for two entities.
    ///
    /// Returns `None` when both sides are the same entity.
    pub fn new(a: EntityId, b: EntityId) -> Option<Self> {
        match a.cmp(&b) {
            std::cmp::Ordering::Less => Some(Self { first: a, second: b }),
            std::cmp::Ordering::Greater => Some(Self { first: b, second: a }),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// The smaller id.
    pub fn first(self) -> EntityId {
        self.first
    }

    /// The larger id.
    pub fn second(self) -> EntityId {
        self.second
    }

    /// Whether `id` is one of the two endpoints.
    pub fn contains(self, id: EntityId) -> bool {
        self.first == id || self.second == id
    }
}
