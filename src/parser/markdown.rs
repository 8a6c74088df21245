//! ATX heading detection
//!
//! Only flat `#`-prefixed headings are recognised. Setext headings, headings
//! inside code fences and nested structure are not special-cased.

/// Deepest heading level accepted (`######`)
const MAX_HEADING_LEVEL: usize = 6;

/// Number of lines shown in a document preview
pub const PREVIEW_LINE_COUNT: usize = 15;

/// Extract the case-folded heading text of a single line.
///
/// The trimmed line must start with 1-6 `#` characters followed by one
/// space. Returns `None` for lines that are not headings, including a bare
/// marker with only trailing whitespace.
pub fn heading_text(line: &str) -> Option<String> {
    let raw = line.trim();
    let level = raw.chars().take_while(|&c| c == '#').count();
    if level == 0 || level > MAX_HEADING_LEVEL {
        return None;
    }

    // '#' is one byte, so `level` is also the byte offset of the separator
    let rest = raw[level..].strip_prefix(' ')?;
    Some(rest.trim().to_lowercase())
}

/// Check whether `text` contains a heading whose text equals `heading`,
/// ignoring case and surrounding whitespace.
pub fn has_heading(text: &str, heading: &str) -> bool {
    let target = heading.trim().to_lowercase();
    text.lines()
        .filter_map(heading_text)
        .any(|found| found == target)
}

/// Render the first `count` lines of `text` with two-digit line numbers
pub fn preview_lines(text: &str, count: usize) -> String {
    text.lines()
        .take(count)
        .enumerate()
        .map(|(idx, line)| format!("{:02}: {}", idx + 1, line))
        .collect::<Vec<_>>()
        .join("\n")
}
