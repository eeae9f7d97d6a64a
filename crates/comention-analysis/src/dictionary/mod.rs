//! Dictionary loading: entity registry, tab-delimited synonym files, and
//! the lexicon that owns the built matchers.

pub mod lexicon;
pub mod loader;
pub mod registry;

pub use lexicon::{Lexicon, LexiconBuilder};
pub use loader::DictionaryStats;
pub use registry::EntityRegistry;
