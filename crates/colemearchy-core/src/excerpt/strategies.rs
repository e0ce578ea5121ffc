use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;

use super::{ELLIPSIS, EXCERPT_MAX_CHARS};

const JSON_FENCE: &str = "```json";
const FENCE: &str = "```";

fn fenced_json_regex() -> &'static Regex {
    static FENCED_JSON_REGEX: OnceLock<Regex> = OnceLock::new();
    FENCED_JSON_REGEX.get_or_init(|| {
        Regex::new(r"(?s)```json\s*(.*?)(?:```|$)").expect("Failed to compile fenced JSON regex")
    })
}

fn excerpt_field_regex() -> &'static Regex {
    static EXCERPT_FIELD_REGEX: OnceLock<Regex> = OnceLock::new();
    EXCERPT_FIELD_REGEX.get_or_init(|| {
        Regex::new(r#""excerpt"\s*:\s*"([^"]+)""#).expect("Failed to compile excerpt field regex")
    })
}

// No closing quote required: the value may have been cut off.
fn content_field_regex() -> &'static Regex {
    static CONTENT_FIELD_REGEX: OnceLock<Regex> = OnceLock::new();
    CONTENT_FIELD_REGEX.get_or_init(|| {
        Regex::new(r#""content"\s*:\s*"([^"]+)"#).expect("Failed to compile content field regex")
    })
}

fn truncate_with_ellipsis(s: &str) -> String {
    let mut out: String = s.chars().take(EXCERPT_MAX_CHARS).collect();
    out.push_str(ELLIPSIS);
    out
}

/// Substring sniff for generator output: a ```` ```json ```` fence or an
/// `"excerpt":` key anywhere in the text.
pub fn looks_like_json_envelope(text: &str) -> bool {
    text.contains(JSON_FENCE) || text.contains("\"excerpt\":")
}

/// Parses the first fenced JSON block (unterminated fences run to the end)
/// and returns its non-empty `excerpt`, else its non-empty `description`.
pub fn from_fenced_json(text: &str) -> Option<String> {
    let block = fenced_json_regex().captures(text)?.get(1)?.as_str();
    let parsed: Value = serde_json::from_str(block).ok()?;
    ["excerpt", "description"].iter().find_map(|key| {
        parsed
            .get(key)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    })
}

/// Pattern match on a complete `"excerpt": "..."` pair, tolerant of whatever
/// malformed JSON surrounds it.
pub fn from_excerpt_field(text: &str) -> Option<String> {
    excerpt_field_regex()
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Pattern match on a possibly unterminated `"content": "...` value; returns
/// its first 200 characters plus an ellipsis.
pub fn from_content_field(text: &str) -> Option<String> {
    content_field_regex()
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| truncate_with_ellipsis(m.as_str()))
}

/// Last resort: drop fences, braces, brackets and quotes, trim, and keep the
/// first 200 characters plus an ellipsis. Never fails.
pub fn strip_scaffolding(text: &str) -> String {
    let without_fences = text.replace(JSON_FENCE, "").replace(FENCE, "");
    let cleaned: String = without_fences
        .chars()
        .filter(|c| !matches!(c, '{' | '}' | '[' | ']' | '"'))
        .collect();
    truncate_with_ellipsis(cleaned.trim())
}
