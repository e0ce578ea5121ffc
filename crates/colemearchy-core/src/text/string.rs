use regex::Regex;
use std::sync::OnceLock;

fn html_tag_regex() -> &'static Regex {
    static HTML_TAG_REGEX: OnceLock<Regex> = OnceLock::new();
    HTML_TAG_REGEX.get_or_init(|| Regex::new(r"<[^>]*>").expect("Failed to compile HTML tag regex"))
}

fn code_block_regex() -> &'static Regex {
    static CODE_BLOCK_REGEX: OnceLock<Regex> = OnceLock::new();
    CODE_BLOCK_REGEX
        .get_or_init(|| Regex::new(r"(?s)```.*?```").expect("Failed to compile code block regex"))
}

fn inline_code_regex() -> &'static Regex {
    static INLINE_CODE_REGEX: OnceLock<Regex> = OnceLock::new();
    INLINE_CODE_REGEX
        .get_or_init(|| Regex::new(r"`[^`]*`").expect("Failed to compile inline code regex"))
}

fn link_regex() -> &'static Regex {
    static LINK_REGEX: OnceLock<Regex> = OnceLock::new();
    LINK_REGEX.get_or_init(|| {
        Regex::new(r"\[([^\]]*)\]\([^)]*\)").expect("Failed to compile markdown link regex")
    })
}

fn newline_run_regex() -> &'static Regex {
    static NEWLINE_RUN_REGEX: OnceLock<Regex> = OnceLock::new();
    NEWLINE_RUN_REGEX.get_or_init(|| Regex::new(r"\n+").expect("Failed to compile newline regex"))
}

/// Returns `s` if it has at most `len` characters, else its first `len`
/// characters followed by `...`.
pub fn truncate(s: &str, len: usize) -> String {
    match s.char_indices().nth(len) {
        None => s.to_string(),
        Some((cut, _)) => format!("{}...", &s[..cut]),
    }
}

pub fn strip_html(html: &str) -> String {
    html_tag_regex().replace_all(html, "").into_owned()
}

pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// `singular` for exactly one, otherwise `plural` or `singular` + "s".
pub fn pluralize(count: i64, singular: &str, plural: Option<&str>) -> String {
    if count == 1 {
        return singular.to_string();
    }
    plural
        .map(str::to_string)
        .unwrap_or_else(|| format!("{}s", singular))
}

/// Plain text of a markdown document: code removed, links reduced to their
/// text, emphasis/heading markers dropped, newlines folded into spaces.
pub fn extract_text_from_markdown(markdown: &str) -> String {
    let text = code_block_regex().replace_all(markdown, "");
    let text = inline_code_regex().replace_all(&text, "");
    let text = link_regex().replace_all(&text, "$1");
    let text: String = text
        .chars()
        .filter(|c| !matches!(c, '#' | '*' | '_' | '~'))
        .collect();
    newline_run_regex()
        .replace_all(&text, " ")
        .trim()
        .to_string()
}

pub fn is_valid_url(s: &str) -> bool {
    url::Url::parse(s).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_short_and_long() {
        assert_eq!(truncate("hello", 5), "hello");
        assert_eq!(truncate("hello world", 5), "hello...");
        assert_eq!(truncate("안녕하세요", 2), "안녕...");
    }

    #[test]
    fn strip_html_tags() {
        assert_eq!(strip_html("<p>Hi <b>there</b></p>"), "Hi there");
    }

    #[test]
    fn capitalize() {
        assert_eq!(capitalize_first("hello"), "Hello");
        assert_eq!(capitalize_first(""), "");
        assert_eq!(capitalize_first("ßtraße"), "SStraße");
    }

    #[test]
    fn pluralize_forms() {
        assert_eq!(pluralize(1, "post", None), "post");
        assert_eq!(pluralize(0, "post", None), "posts");
        assert_eq!(pluralize(2, "child", Some("children")), "children");
    }

    #[test]
    fn markdown_to_text() {
        let md = "# Title\n\nSome *bold* and `code` with a [link](https://x.y).\n\n```rust\nfn main() {}\n```\nEnd";
        assert_eq!(
            extract_text_from_markdown(md),
            "Title Some bold and  with a link. End"
        );
    }

    #[test]
    fn url_validation() {
        assert!(is_valid_url("https://colemearchy.com/posts/a"));
        assert!(!is_valid_url("not a url"));
        assert!(!is_valid_url("/relative/path"));
    }
}
