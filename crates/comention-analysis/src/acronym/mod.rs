//! Parenthetical acronym resolution.
//!
//! `Human Immunodeficiency Virus (HIV)` defines `HIV`; every `(HIV)` on the
//! same line is then rewritten to `( Human Immunodeficiency Virus )` so the
//! dictionary sees the long form. Mappings never outlive the line.

pub mod expand;
pub mod extract;

pub use expand::replace_acronyms_with_long_forms;
pub use extract::{extract_acronyms, Acronym};
