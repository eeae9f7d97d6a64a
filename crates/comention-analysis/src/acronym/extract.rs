//! Short-form / long-form pair extraction.

use serde::{Deserialize, Serialize};

use comention_core::constants::MAX_LONG_FORM_LEN;

/// One short form and the long form that defines it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acronym {
    pub short_form: String,
    pub long_form: String,
}

/// Extract every acronym definition in `text`.
///
/// Sentences are split on `". "`. In each sentence every `(...)` span is
/// compared with the text between the previous `)` (or the sentence start)
/// and its `(`; the shorter of the two is the candidate short form.
/// Candidates that fail validation or have no long form are dropped.
pub fn extract_acronyms(text: &str) -> Vec<Acronym> {
    if !text.contains('(') {
        return Vec::new();
    }

    let mut acronyms = Vec::new();
    for sentence in text.split(". ") {
        let mut start = 0;
        while let Some(oparen) = sentence[start..].find('(').map(|p| p + start) {
            let Some(cparen) = sentence[oparen..].find(')').map(|p| p + oparen) else {
                break;
            };

            let mut short_form = &sentence[oparen + 1..cparen];
            let mut long_form = &sentence[start..oparen];
            if long_form.len() < short_form.len() {
                std::mem::swap(&mut short_form, &mut long_form);
            }

            if is_valid_short_form(short_form) {
                if let Some(found) = find_best_long_form(short_form, long_form) {
                    let found = found.trim();
                    if found != short_form {
                        acronyms.push(Acronym {
                            short_form: short_form.to_string(),
                            long_form: found.to_string(),
                        });
                    }
                }
            }

            start = cparen + 1;
        }
    }
    acronyms
}

/// No space, longer than one byte, contains a letter, starts alphanumeric.
fn is_valid_short_form(candidate: &str) -> bool {
    let bytes = candidate.as_bytes();
    !candidate.contains(' ')
        && bytes.len() > 1
        && bytes.iter().any(u8::is_ascii_alphabetic)
        && bytes[0].is_ascii_alphanumeric()
}

/// Locate `short_form` in `long_form` right to left.
///
/// Each alphanumeric short-form byte must match (ASCII case-insensitively)
/// a long-form byte strictly left of the previous match; the first one must
/// also start a word. The result runs from the start of the word holding
/// the first match to the end of `long_form`, and is rejected when longer
/// than [`MAX_LONG_FORM_LEN`].
fn find_best_long_form<'a>(short_form: &str, long_form: &'a str) -> Option<&'a str> {
    let short = short_form.as_bytes();
    let long = long_form.as_bytes();

    // One past the next position that may be examined.
    let mut limit = long.len();
    let mut matched = None;

    for (s_ix, &raw) in short.iter().enumerate().rev() {
        if !raw.is_ascii_alphanumeric() {
            continue;
        }
        let wanted = raw.to_ascii_lowercase();
        let position = (0..limit).rev().find(|&l_ix| {
            long[l_ix].to_ascii_lowercase() == wanted
                && (s_ix != 0 || l_ix == 0 || !long[l_ix - 1].is_ascii_alphanumeric())
        })?;
        matched = Some(position);
        limit = position;
    }

    let first = matched?;
    let start = long_form[..first].rfind(' ').map_or(0, |space| space + 1);
    if long.len() - start > MAX_LONG_FORM_LEN {
        return None;
    }
    Some(&long_form[start..])
}
