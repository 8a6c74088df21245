//! User story extraction from bullet lists

/// Bullet markers that introduce a story line
const BULLET_MARKERS: &[&str] = &["- ", "* "];

/// Extract user stories from bullet list lines.
///
/// Expected shape:
/// - As a ...
/// - As an ...
///
/// Order is preserved and duplicates are kept. Bullets that are empty after
/// the marker is removed are skipped.
pub fn extract_user_stories(markdown: &str) -> Vec<String> {
    markdown
        .lines()
        .filter_map(|line| {
            let line = line.trim();
            BULLET_MARKERS
                .iter()
                .find_map(|marker| line.strip_prefix(marker))
        })
        .map(str::trim)
        .filter(|story| !story.is_empty())
        .map(str::to_string)
        .collect()
}
