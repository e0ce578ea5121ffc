//! YouTube URL helpers: video IDs, thumbnail URLs and description parsing.

use regex::Regex;
use std::sync::OnceLock;

const THUMBNAIL_BASE: &str = "https://img.youtube.com/vi";
const MAX_DESCRIPTION_TAGS: usize = 5;
const DESCRIPTION_EXCERPT_CHARS: usize = 200;

fn bare_id_regex() -> &'static Regex {
    static BARE_ID_REGEX: OnceLock<Regex> = OnceLock::new();
    BARE_ID_REGEX
        .get_or_init(|| Regex::new(r"^[a-zA-Z0-9_-]{11}$").expect("Failed to compile video ID regex"))
}

fn url_id_regexes() -> &'static [Regex; 2] {
    static URL_ID_REGEXES: OnceLock<[Regex; 2]> = OnceLock::new();
    URL_ID_REGEXES.get_or_init(|| {
        [
            Regex::new(
                r"(?:youtube\.com/watch\?v=|youtu\.be/|youtube\.com/embed/)([a-zA-Z0-9_-]{11})",
            )
            .expect("Failed to compile watch URL regex"),
            Regex::new(r"youtube\.com/watch\?.*&v=([a-zA-Z0-9_-]{11})")
                .expect("Failed to compile watch query regex"),
        ]
    })
}

fn thumbnail_path_regex() -> &'static Regex {
    static THUMBNAIL_PATH_REGEX: OnceLock<Regex> = OnceLock::new();
    THUMBNAIL_PATH_REGEX.get_or_init(|| {
        Regex::new(r"/vi/([a-zA-Z0-9_-]{11})/").expect("Failed to compile thumbnail path regex")
    })
}

fn hashtag_regex() -> &'static Regex {
    static HASHTAG_REGEX: OnceLock<Regex> = OnceLock::new();
    HASHTAG_REGEX.get_or_init(|| Regex::new(r"#[0-9A-Za-z_]+").expect("Failed to compile hashtag regex"))
}

fn bare_url_regex() -> &'static Regex {
    static BARE_URL_REGEX: OnceLock<Regex> = OnceLock::new();
    BARE_URL_REGEX.get_or_init(|| Regex::new(r"(https?://[^\s]+)").expect("Failed to compile URL regex"))
}

/// Extracts the 11-character video ID from a bare ID or a watch/short/embed URL.
pub fn extract_video_id(input: &str) -> Option<String> {
    if input.is_empty() {
        return None;
    }
    if bare_id_regex().is_match(input) {
        return Some(input.to_string());
    }
    url_id_regexes()
        .iter()
        .find_map(|re| re.captures(input))
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Thumbnail sizes served by the image CDN, largest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThumbnailQuality {
    /// 1280x720, not always available.
    MaxRes,
    /// 640x480, not always available.
    Sd,
    /// 480x360.
    Hq,
    /// 320x180.
    Mq,
    /// 120x90.
    Default,
}

impl ThumbnailQuality {
    pub fn as_str(self) -> &'static str {
        match self {
            ThumbnailQuality::MaxRes => "maxresdefault",
            ThumbnailQuality::Sd => "sddefault",
            ThumbnailQuality::Hq => "hqdefault",
            ThumbnailQuality::Mq => "mqdefault",
            ThumbnailQuality::Default => "default",
        }
    }
}

pub fn thumbnail_url(video_id: &str, quality: ThumbnailQuality) -> String {
    format!("{}/{}/{}.jpg", THUMBNAIL_BASE, video_id, quality.as_str())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThumbnailUrls {
    pub primary: String,
    pub fallbacks: Vec<String>,
}

/// Max-res thumbnail with progressively smaller fallbacks.
pub fn thumbnail_urls(video_id: &str) -> ThumbnailUrls {
    ThumbnailUrls {
        primary: thumbnail_url(video_id, ThumbnailQuality::MaxRes),
        fallbacks: [ThumbnailQuality::Hq, ThumbnailQuality::Mq, ThumbnailQuality::Default]
            .into_iter()
            .map(|q| thumbnail_url(video_id, q))
            .collect(),
    }
}

/// Rewrites any `/vi/{id}/` thumbnail URL to its hq variant; other URLs pass through.
pub fn normalize_thumbnail_url(url: Option<&str>) -> Option<String> {
    let url = url.filter(|u| !u.is_empty())?;
    match thumbnail_path_regex().captures(url).and_then(|c| c.get(1)) {
        Some(id) => Some(thumbnail_url(id.as_str(), ThumbnailQuality::Hq)),
        None => Some(url.to_string()),
    }
}

/// Blog-ready pieces of a video description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptionContent {
    pub excerpt: String,
    pub content: String,
    pub hashtags: Vec<String>,
}

pub fn extract_content_from_description(description: &str) -> DescriptionContent {
    let hashtags = hashtag_regex()
        .find_iter(description)
        .map(|m| m.as_str()[1..].to_string())
        .take(MAX_DESCRIPTION_TAGS)
        .collect();

    let excerpt = description
        .lines()
        .filter(|l| !l.trim().is_empty())
        .take(3)
        .collect::<Vec<_>>()
        .join(" ")
        .chars()
        .take(DESCRIPTION_EXCERPT_CHARS)
        .collect();

    let content = bare_url_regex()
        .replace_all(description, "[${1}](${1})")
        .into_owned();

    DescriptionContent {
        excerpt,
        content,
        hashtags,
    }
}
