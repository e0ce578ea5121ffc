//! URL slugs for post titles (ASCII plus Hangul).

use anyhow::Result;
use regex::Regex;
use std::future::Future;
use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

pub const DEFAULT_SLUG_MAX_LENGTH: usize = 60;

fn json_fence_regex() -> &'static Regex {
    static JSON_FENCE_REGEX: OnceLock<Regex> = OnceLock::new();
    JSON_FENCE_REGEX
        .get_or_init(|| Regex::new(r"(?i)```json").expect("Failed to compile JSON fence regex"))
}

fn disallowed_regex() -> &'static Regex {
    static DISALLOWED_REGEX: OnceLock<Regex> = OnceLock::new();
    DISALLOWED_REGEX.get_or_init(|| {
        Regex::new(r"[^a-z0-9가-힣ㄱ-ㅎㅏ-ㅣ\s]+").expect("Failed to compile slug filter regex")
    })
}

fn whitespace_regex() -> &'static Regex {
    static WHITESPACE_REGEX: OnceLock<Regex> = OnceLock::new();
    WHITESPACE_REGEX.get_or_init(|| Regex::new(r"\s+").expect("Failed to compile whitespace regex"))
}

fn hyphen_run_regex() -> &'static Regex {
    static HYPHEN_RUN_REGEX: OnceLock<Regex> = OnceLock::new();
    HYPHEN_RUN_REGEX.get_or_init(|| Regex::new(r"-+").expect("Failed to compile hyphen regex"))
}

fn fallback_slug() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    format!("post-{}", millis)
}

/// URL-friendly slug for `title`, at most `max_length` characters.
///
/// Generator artifacts (```` ```json ```` fences, braces, quotes) are removed
/// first. Titles too short to slug fall back to `post-{unix_millis}`.
pub fn generate_slug(title: &str, max_length: usize) -> String {
    let without_fence = json_fence_regex().replace_all(title, "");
    let cleaned: String = without_fence
        .replace("```", "")
        .chars()
        .map(|c| if matches!(c, '{' | '}' | '"' | '[' | ']') { ' ' } else { c })
        .collect();
    let cleaned = cleaned.trim();
    if cleaned.chars().count() < 3 {
        return fallback_slug();
    }

    let lower = cleaned.to_lowercase();
    let kept = disallowed_regex().replace_all(&lower, "");
    let hyphenated = whitespace_regex().replace_all(&kept, "-");
    let collapsed = hyphen_run_regex().replace_all(&hyphenated, "-");
    let truncated: String = collapsed.trim_matches('-').chars().take(max_length).collect();
    let slug = truncated.trim_matches('-');

    if slug.chars().count() < 2 {
        return fallback_slug();
    }
    slug.to_string()
}

/// Returns `base`, or the first `base-N` (N = 1, 2, ...) for which `exists`
/// reports false.
pub async fn generate_unique_slug<F, Fut>(base: &str, mut exists: F) -> Result<String>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<bool>>,
{
    let mut slug = base.to_string();
    let mut counter = 1u32;
    while exists(slug.clone()).await? {
        slug = format!("{}-{}", base, counter);
        counter += 1;
    }
    Ok(slug)
}
