//! Shared identifiers and collections.
//! FxHashMap, SmallVec, dense entity ids and unordered entity pairs.

pub mod collections;
pub mod identifiers;

pub use collections::{FxHashMap, FxHashSet};
pub use identifiers::{EntityId, EntityPair};
