//! Small text helpers used around posts: truncation, markdown/HTML stripping,
//! slugs, tags and reading-time estimates.

pub mod reading_time;
pub mod slug;
mod string;
pub mod tags;

pub use reading_time::{calculate_reading_time, format_reading_time};
pub use slug::{generate_slug, generate_unique_slug};
pub use string::{
    capitalize_first, extract_text_from_markdown, is_valid_url, pluralize, strip_html, truncate,
};
pub use tags::{tags_to_array, tags_to_string};
