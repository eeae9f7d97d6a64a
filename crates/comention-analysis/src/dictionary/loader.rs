//! Tab-delimited synonym file reader.
//!
//! Each line is `external_id<TAB>term<TAB>term...`. Empty fields and blank
//! lines are skipped; a line with an id and no terms registers an entity
//! that never matches.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use comention_core::errors::DictionaryError;
use serde::Serialize;

use super::registry::EntityRegistry;
use crate::matcher::AutomatonBuilder;

/// What one dictionary source contributed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DictionaryStats {
    pub path: PathBuf,
    pub case_sensitive: bool,
    /// Lines carrying an external id.
    pub records: usize,
    /// Terms accepted by the automaton.
    pub terms: usize,
    /// Empty term fields ignored.
    pub skipped_fields: usize,
    /// The file could not be opened and contributed nothing.
    pub missing: bool,
}

/// Load the file at `path` into `registry` and `builder`.
///
/// A file that cannot be opened is logged and reported as `missing`; an
/// I/O error after the file was opened is returned.
pub fn load_path(
    path: &Path,
    registry: &mut EntityRegistry,
    builder: &mut AutomatonBuilder,
) -> Result<DictionaryStats, DictionaryError> {
    match File::open(path) {
        Ok(file) => load_reader(BufReader::new(file), path, registry, builder),
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "dictionary unreadable, contributing no terms");
            Ok(DictionaryStats {
                path: path.to_path_buf(),
                case_sensitive: builder.settings().case_sensitive,
                missing: true,
                ..Default::default()
            })
        }
    }
}

/// Load dictionary records from any buffered reader. `path` labels the
/// source in stats and errors.
pub fn load_reader<R: BufRead>(
    mut reader: R,
    path: &Path,
    registry: &mut EntityRegistry,
    builder: &mut AutomatonBuilder,
) -> Result<DictionaryStats, DictionaryError> {
    let mut stats = DictionaryStats {
        path: path.to_path_buf(),
        case_sensitive: builder.settings().case_sensitive,
        ..Default::default()
    };

    let mut buf = Vec::new();
    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(|source| DictionaryError::IoError {
                path: path.to_path_buf(),
                source,
            })?;
        if read == 0 {
            break;
        }

        let line = String::from_utf8_lossy(&buf);
        let line = line.trim_end_matches(&['\n', '\r'][..]);
        let mut fields = line.split('\t');
        let Some(external) = fields.next().filter(|id| !id.is_empty()) else {
            continue;
        };

        let entity = registry.register(external);
        stats.records += 1;
        for term in fields {
            if term.is_empty() {
                stats.skipped_fields += 1;
            } else if builder.add(entity, term) {
                stats.terms += 1;
            }
        }
    }

    tracing::debug!(
        path = %path.display(),
        records = stats.records,
        terms = stats.terms,
        skipped = stats.skipped_fields,
        "dictionary loaded"
    );
    Ok(stats)
}
