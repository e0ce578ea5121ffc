//! `colemearchy reading-time` – estimate reading time of a markdown file.

use anyhow::{Context, Result};
use colemearchy_core::text::{calculate_reading_time, format_reading_time};
use std::path::Path;

pub async fn run_reading_time(path: &Path, words_per_minute: u32) -> Result<()> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("read {}", path.display()))?;
    let minutes = calculate_reading_time(&content, words_per_minute);
    println!("{}", format_reading_time(minutes));
    Ok(())
}
