//! Transcript segmentation.
//!
//! Turns timed caption fragments into a normalized full text, a furthest-extent
//! duration, and sentence-respecting chunks bounded by a maximum size, plus
//! evenly spaced "key moments" for summaries.

mod chunk;
mod moments;
mod process;
mod types;

pub use chunk::{chunk_text, split_sentences};
pub use moments::{extract_key_moments, format_timestamp, KeyMoment};
pub use process::{
    full_text, has_timestamps, process_transcript, process_transcript_with, total_duration,
};
pub use types::{ProcessedTranscript, TranscriptFragment};

/// Default maximum chunk size in characters.
pub const DEFAULT_MAX_CHUNK_SIZE: usize = 4000;
