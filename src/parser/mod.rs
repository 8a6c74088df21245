//! Line-oriented parsing of loosely structured markdown release documents

pub mod markdown;
pub mod normalize;
pub mod stories;
pub mod uat;

pub use markdown::{has_heading, heading_text, preview_lines};
pub use normalize::normalize_text;
pub use stories::extract_user_stories;
pub use uat::{extract_ua_test_cases, extract_uat_story_refs};
