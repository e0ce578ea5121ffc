//! `colemearchy excerpt` – recover an excerpt from model output.

use anyhow::{Context, Result};
use colemearchy_core::excerpt::parse_excerpt;
use std::path::Path;
use tokio::io::AsyncReadExt;

pub async fn run_excerpt(text: Option<String>, file: Option<&Path>) -> Result<()> {
    let raw = match (text, file) {
        (Some(t), _) => t,
        (None, Some(p)) => tokio::fs::read_to_string(p)
            .await
            .with_context(|| format!("read {}", p.display()))?,
        (None, None) => {
            let mut buf = String::new();
            tokio::io::stdin()
                .read_to_string(&mut buf)
                .await
                .context("read stdin")?;
            buf
        }
    };

    match parse_excerpt(Some(&raw)) {
        Some(excerpt) => println!("{}", excerpt),
        None => tracing::debug!("no excerpt recovered from {} bytes of input", raw.len()),
    }
    Ok(())
}
