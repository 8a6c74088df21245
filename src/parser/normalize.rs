//! Folding of invisible characters that break line-based matching

/// Characters replaced before any parsing, paired with their replacement
const INVISIBLE_CHARS: &[(char, &str)] = &[
    ('\u{00A0}', " "), // non-breaking space
    ('\u{200B}', ""),  // zero-width space
    ('\u{200C}', ""),  // zero-width non-joiner
    ('\u{200D}', ""),  // zero-width joiner
    ('\u{2060}', ""),  // word joiner
];

/// Normalize raw document text.
///
/// Non-breaking spaces become ordinary spaces and zero-width characters are
/// removed. Case, trailing whitespace and line endings are left untouched, so
/// the function is idempotent.
pub fn normalize_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match INVISIBLE_CHARS.iter().find(|(from, _)| *from == c) {
            Some((_, to)) => out.push_str(to),
            None => out.push(c),
        }
    }
    out
}
