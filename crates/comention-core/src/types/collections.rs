//! Re-exports of performance-oriented collection types.

pub use rustc_hash::{FxHashMap, FxHashSet};
pub use smallvec::SmallVec;

/// SmallVec sized for the entities found on one corpus line (usually <8).
pub type SmallVec8<T> = SmallVec<[T; 8]>;

/// SmallVec sized for trie node fan-out (usually <4).
pub type SmallVec4<T> = SmallVec<[T; 4]>;
