//! Glyph name to Pascal constant identifier conversion.

use indexmap::IndexMap;

use crate::config::{CHAR_PREFIX, NUM_PREFIX, RESERVED_WORDS};

/// Check whether `word` (already uppercase) is a reserved word.
pub fn is_reserved(word: &str) -> bool {
    RESERVED_WORDS.binary_search(&word).is_ok()
}

/// Convert a raw glyph name into a constant identifier.
///
/// Non-alphanumeric characters become `_`, a `_` is inserted where an uppercase
/// letter follows a lowercase letter or digit, and the result is uppercased.
/// Names starting with a digit get [`NUM_PREFIX`], reserved words get a trailing
/// `_`, and single-character names get [`CHAR_PREFIX`].
///
/// Total over all inputs; the empty name yields `_`.
pub fn glyph_name_to_identifier(name: &str) -> String {
    let mut ident = String::with_capacity(name.len() + 4);
    let mut prev: Option<char> = None;

    for c in name.chars() {
        let c = if c.is_ascii_alphanumeric() { c } else { '_' };
        if c.is_ascii_uppercase()
            && prev.is_some_and(|p| p.is_ascii_lowercase() || p.is_ascii_digit())
        {
            ident.push('_');
        }
        ident.push(c);
        prev = Some(c);
    }
    ident.make_ascii_uppercase();

    if ident.starts_with(|c: char| c.is_ascii_digit()) {
        ident.insert_str(0, NUM_PREFIX);
    }
    if is_reserved(&ident) {
        ident.push('_');
    }
    if ident.len() == 1 {
        ident.insert_str(0, CHAR_PREFIX);
    }
    if !ident.starts_with(|c: char| c.is_ascii_alphabetic() || c == '_') {
        ident.insert(0, '_');
    }

    ident
}

/// Derive identifiers for `(codepoint, glyph_name)` entries in iteration order.
///
/// The first codepoint seen for an identifier is kept; later codepoints that
/// derive the same identifier are dropped.
pub fn identifier_map<'a>(
    entries: impl IntoIterator<Item = (u32, &'a str)>,
) -> IndexMap<String, u32> {
    let mut map = IndexMap::new();
    for (codepoint, glyph_name) in entries {
        map.entry(glyph_name_to_identifier(glyph_name)).or_insert(codepoint);
    }
    map
}
