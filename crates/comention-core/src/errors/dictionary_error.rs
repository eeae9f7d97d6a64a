//! Dictionary loading errors.

use std::path::PathBuf;

use super::error_code::{self, ComentionErrorCode};

/// Errors raised while turning dictionary files into matchers.
///
/// A missing or unreadable file is not an error (it contributes zero terms);
/// only a run that ends up with nothing to match is.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("IO error reading dictionary {path}: {source}")]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("No dictionary terms loaded from {sources} source(s)")]
    NoTerms { sources: usize },
}

impl ComentionErrorCode for DictionaryError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NoTerms { .. } => error_code::NO_TERMS,
            _ => error_code::DICTIONARY_ERROR,
        }
    }
}
