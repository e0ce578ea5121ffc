//! Parsing the JSON envelope a content generator returns for a new post.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::OnceLock;

const MAX_TITLE_CHARS: usize = 100;

fn outer_object_regex() -> &'static Regex {
    static OUTER_OBJECT_REGEX: OnceLock<Regex> = OnceLock::new();
    OUTER_OBJECT_REGEX
        .get_or_init(|| Regex::new(r"(?s)\{.*\}").expect("Failed to compile JSON object regex"))
}

/// Fields a generator is asked to return. Every field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedPost {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub seo_title: Option<String>,
    #[serde(default)]
    pub seo_description: Option<String>,
}

/// Deserializes the outermost `{...}` span of `text` (prose or fences around
/// it are ignored). `None` if there is no span or it is not a valid post.
pub fn parse_generated_post(text: &str) -> Option<GeneratedPost> {
    let span = outer_object_regex().find(text)?;
    serde_json::from_str(span.as_str()).ok()
}

/// Titles over 100 characters are cut to 97 plus `...`.
pub fn clamp_title(title: &str) -> String {
    if title.chars().count() <= MAX_TITLE_CHARS {
        return title.to_string();
    }
    let mut out: String = title.chars().take(MAX_TITLE_CHARS - 3).collect();
    out.push_str("...");
    out
}

/// Concatenates tag groups, keeps the first occurrence of each tag, and stops
/// at `limit` tags.
pub fn merge_tags<I, S>(tags: I, limit: usize) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    tags.into_iter()
        .map(|t| t.as_ref().to_string())
        .filter(|t| seen.insert(t.clone()))
        .take(limit)
        .collect()
}
