//! Reading-time estimate for markdown posts.

use regex::Regex;
use std::sync::OnceLock;

pub const DEFAULT_WORDS_PER_MINUTE: u32 = 200;

struct Patterns {
    code_block: Regex,
    inline_code: Regex,
    link: Regex,
    symbols: Regex,
    html_tag: Regex,
    newlines: Regex,
}

fn patterns() -> &'static Patterns {
    static PATTERNS: OnceLock<Patterns> = OnceLock::new();
    PATTERNS.get_or_init(|| Patterns {
        code_block: Regex::new(r"(?s)```.*?```").expect("Failed to compile code block regex"),
        inline_code: Regex::new(r"`.*?`").expect("Failed to compile inline code regex"),
        link: Regex::new(r"\[([^\]]+)\]\([^)]+\)").expect("Failed to compile link regex"),
        symbols: Regex::new(r"[#*_~>\-]").expect("Failed to compile symbol regex"),
        html_tag: Regex::new(r"<[^>]*>").expect("Failed to compile HTML tag regex"),
        newlines: Regex::new(r"\n+").expect("Failed to compile newline regex"),
    })
}

/// Minutes to read `content` at `words_per_minute`, never less than 1.
pub fn calculate_reading_time(content: &str, words_per_minute: u32) -> u32 {
    let p = patterns();
    let text = p.code_block.replace_all(content, "");
    let text = p.inline_code.replace_all(&text, "");
    let text = p.link.replace_all(&text, "$1");
    let text = p.symbols.replace_all(&text, "");
    let text = p.html_tag.replace_all(&text, "");
    let text = p.newlines.replace_all(&text, " ");

    let words = text.split_whitespace().count() as u32;
    let wpm = words_per_minute.max(1);
    words.div_ceil(wpm).max(1)
}

pub fn format_reading_time(minutes: u32) -> String {
    format!("{} min read", minutes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimum_one_minute() {
        assert_eq!(calculate_reading_time("", DEFAULT_WORDS_PER_MINUTE), 1);
        assert_eq!(calculate_reading_time("a few words", DEFAULT_WORDS_PER_MINUTE), 1);
    }

    #[test]
    fn rounds_up() {
        let text = "word ".repeat(201);
        assert_eq!(calculate_reading_time(&text, 200), 2);
        let exact = "word ".repeat(400);
        assert_eq!(calculate_reading_time(&exact, 200), 2);
    }

    #[test]
    fn code_is_not_counted() {
        let code = format!("intro\n```\n{}\n```\n", "token ".repeat(1000));
        assert_eq!(calculate_reading_time(&code, 200), 1);
    }

    #[test]
    fn link_text_counts_once() {
        let md = "[two words](https://example.com/very/long/url) <b>tag</b>";
        // Link reduced to "two words"; the tag remnant is one more word.
        assert_eq!(calculate_reading_time(md, 3), 1);
        assert_eq!(calculate_reading_time(md, 2), 2);
    }

    #[test]
    fn format() {
        assert_eq!(format_reading_time(5), "5 min read");
    }
}
