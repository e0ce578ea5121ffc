//! `colemearchy transcript` – normalize and chunk a transcript file.

use anyhow::{Context, Result};
use colemearchy_core::transcript::{
    extract_key_moments, process_transcript_with, KeyMoment, ProcessedTranscript,
    TranscriptFragment,
};
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TranscriptOutput {
    #[serde(flatten)]
    processed: ProcessedTranscript,
    #[serde(skip_serializing_if = "Option::is_none")]
    key_moments: Option<Vec<KeyMoment>>,
}

pub async fn run_transcript(
    path: &Path,
    max_chunk_size: usize,
    moments: Option<usize>,
) -> Result<()> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("read transcript {}", path.display()))?;
    let fragments: Vec<TranscriptFragment> = serde_json::from_str(&raw)
        .with_context(|| format!("parse transcript {}", path.display()))?;

    let processed = process_transcript_with(&fragments, max_chunk_size);
    tracing::info!(
        "processed {} fragments into {} chunks",
        fragments.len(),
        processed.chunks.len()
    );
    let key_moments = moments.map(|n| extract_key_moments(&fragments, n));

    let out = TranscriptOutput {
        processed,
        key_moments,
    };
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}
