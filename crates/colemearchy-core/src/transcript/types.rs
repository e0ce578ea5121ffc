use serde::{Deserialize, Serialize};

/// A unit of timed caption text, as produced by a transcript source.
///
/// Caption feeds disagree on field names, so `offset`/`dur` are accepted as
/// aliases and missing numbers default to 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptFragment {
    pub text: String,
    /// Seconds from media start.
    #[serde(default, alias = "offset")]
    pub start: f64,
    /// Seconds the fragment is displayed.
    #[serde(default, alias = "dur")]
    pub duration: f64,
}

impl TranscriptFragment {
    pub fn new(text: impl Into<String>, start: f64, duration: f64) -> Self {
        Self {
            text: text.into(),
            start,
            duration,
        }
    }

    /// Where this fragment stops being displayed.
    pub fn end(&self) -> f64 {
        self.start + self.duration
    }
}

/// Derived, read-only result of [`process_transcript`](super::process_transcript).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedTranscript {
    /// All fragment texts, single-spaced and trimmed.
    pub full_text: String,
    /// Sentence-aligned chunks of `full_text`.
    pub chunks: Vec<String>,
    /// Furthest `start + duration` over all fragments.
    pub duration: f64,
    /// True if any fragment starts after 0.
    pub has_timestamps: bool,
}
