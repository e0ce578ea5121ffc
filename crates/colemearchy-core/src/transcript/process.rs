use super::chunk::chunk_text;
use super::types::{ProcessedTranscript, TranscriptFragment};
use super::DEFAULT_MAX_CHUNK_SIZE;

/// Joins fragment texts with single spaces, collapsing every whitespace run
/// and trimming both ends.
pub fn full_text(fragments: &[TranscriptFragment]) -> String {
    let mut out = String::new();
    for word in fragments.iter().flat_map(|f| f.text.split_whitespace()) {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

/// Furthest extent (`start + duration`) over all fragments; 0 when empty.
/// Overlapping or out-of-order fragments are not double-counted.
pub fn total_duration(fragments: &[TranscriptFragment]) -> f64 {
    fragments
        .iter()
        .map(TranscriptFragment::end)
        .reduce(f64::max)
        .unwrap_or(0.0)
}

/// True iff at least one fragment has `start > 0`.
pub fn has_timestamps(fragments: &[TranscriptFragment]) -> bool {
    fragments.iter().any(|f| f.start > 0.0)
}

/// Processes fragments with the default chunk bound of 4000 characters.
pub fn process_transcript(fragments: &[TranscriptFragment]) -> ProcessedTranscript {
    process_transcript_with(fragments, DEFAULT_MAX_CHUNK_SIZE)
}

/// Processes fragments, chunking the full text at `max_chunk_size` characters.
pub fn process_transcript_with(
    fragments: &[TranscriptFragment],
    max_chunk_size: usize,
) -> ProcessedTranscript {
    let full_text = full_text(fragments);
    let chunks = chunk_text(&full_text, max_chunk_size);
    ProcessedTranscript {
        full_text,
        chunks,
        duration: total_duration(fragments),
        has_timestamps: has_timestamps(fragments),
    }
}
