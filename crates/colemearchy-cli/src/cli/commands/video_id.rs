//! `colemearchy video-id` – extract a video ID and list thumbnail URLs.

use anyhow::{bail, Result};
use colemearchy_core::video::{extract_video_id, thumbnail_urls};

pub fn run_video_id(url: &str) -> Result<()> {
    let Some(id) = extract_video_id(url) else {
        bail!("no video ID found in {:?}", url);
    };
    let thumbs = thumbnail_urls(&id);
    println!("{}", id);
    println!("thumbnail: {}", thumbs.primary);
    for fallback in &thumbs.fallbacks {
        println!("fallback:  {}", fallback);
    }
    Ok(())
}
