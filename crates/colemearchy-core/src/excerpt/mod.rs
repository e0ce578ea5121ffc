//! Excerpt recovery.
//!
//! Stored excerpts are usually plain text, but some were saved as the raw JSON
//! envelope of a content generator (optionally inside a ```` ```json ```` fence,
//! sometimes cut off mid-stream). [`parse_excerpt`] recovers readable text by
//! trying increasingly lossy strategies in order; it never fails.

mod strategies;

pub use strategies::{
    from_content_field, from_excerpt_field, from_fenced_json, looks_like_json_envelope,
    strip_scaffolding,
};

/// Maximum characters kept by the lossy strategies before the ellipsis.
pub const EXCERPT_MAX_CHARS: usize = 200;
/// Marker appended to truncated excerpts.
pub const ELLIPSIS: &str = "...";

/// Structured and pattern-based strategies, tried in order before the
/// scaffolding-strip fallback.
const STRATEGIES: &[fn(&str) -> Option<String>] =
    &[from_fenced_json, from_excerpt_field, from_content_field];

/// Returns the best human-readable excerpt for `text`.
///
/// `None` and `""` map to `None`. Text that does not look like a JSON envelope
/// is returned unchanged.
pub fn parse_excerpt(text: Option<&str>) -> Option<String> {
    let text = text.filter(|t| !t.is_empty())?;

    if !looks_like_json_envelope(text) {
        return Some(text.to_string());
    }

    STRATEGIES
        .iter()
        .find_map(|strategy| strategy(text))
        .or_else(|| Some(strip_scaffolding(text)))
}
