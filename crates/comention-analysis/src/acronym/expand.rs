//! Short-form to long-form rewriting.

use std::borrow::Cow;

use super::extract::extract_acronyms;

/// Replace every `(SF)` with `( LF )` for each pair defined in `text`.
///
/// Borrows `text` unchanged when it defines no acronym.
pub fn replace_acronyms_with_long_forms(text: &str) -> Cow<'_, str> {
    let acronyms = extract_acronyms(text);
    if acronyms.is_empty() {
        return Cow::Borrowed(text);
    }

    let mut rewritten = text.to_string();
    for acronym in &acronyms {
        let needle = format!("({})", acronym.short_form);
        if rewritten.contains(&needle) {
            rewritten = rewritten.replace(&needle, &format!("( {} )", acronym.long_form));
        }
    }
    Cow::Owned(rewritten)
}
