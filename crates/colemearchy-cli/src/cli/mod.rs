//! CLI for the colemearchy blog pipeline helpers.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colemearchy_core::config;
use colemearchy_core::text::slug::DEFAULT_SLUG_MAX_LENGTH;
use std::path::PathBuf;

use commands::{
    run_excerpt, run_reading_time, run_slug, run_transcript, run_upload, run_video_id,
};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "colemearchy")]
#[command(about = "Transcript chunking, excerpt recovery and cover-image upload for the blog pipeline", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Normalize a transcript (JSON array of fragments) and split it into chunks.
    Transcript {
        /// Path to the transcript JSON file.
        path: PathBuf,
        /// Maximum chunk size in characters (default from config).
        #[arg(long, value_name = "N")]
        max_chunk_size: Option<usize>,
        /// Also print up to N evenly spaced key moments.
        #[arg(long, value_name = "N")]
        moments: Option<usize>,
    },

    /// Recover a clean excerpt from model output.
    Excerpt {
        /// Raw text; read from --file or stdin when omitted.
        text: Option<String>,
        /// Read the raw text from a file.
        #[arg(long, conflicts_with = "text")]
        file: Option<PathBuf>,
    },

    /// Generate a URL slug from a title.
    Slug {
        /// Post title.
        title: String,
        /// Maximum slug length in characters.
        #[arg(long, default_value_t = DEFAULT_SLUG_MAX_LENGTH, value_name = "N")]
        max_length: usize,
    },

    /// Estimate reading time of a markdown file.
    ReadingTime {
        /// Path to the markdown file.
        path: PathBuf,
    },

    /// Extract a YouTube video ID and print its thumbnail URLs.
    VideoId {
        /// Video URL or bare 11-character ID.
        url: String,
    },

    /// Upload a cover image, retrying transient failures.
    Upload {
        /// Path to the image (jpg, png, webp or gif).
        path: PathBuf,
        /// Upload endpoint (default: upload_url from config).
        #[arg(long)]
        url: Option<String>,
        /// Post the image belongs to.
        #[arg(long, value_name = "ID")]
        post_id: Option<String>,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Transcript {
                path,
                max_chunk_size,
                moments,
            } => {
                let max = max_chunk_size.unwrap_or(cfg.max_chunk_size);
                run_transcript(&path, max, moments).await?;
            }
            CliCommand::Excerpt { text, file } => run_excerpt(text, file.as_deref()).await?,
            CliCommand::Slug { title, max_length } => run_slug(&title, max_length),
            CliCommand::ReadingTime { path } => {
                run_reading_time(&path, cfg.words_per_minute).await?
            }
            CliCommand::VideoId { url } => run_video_id(&url)?,
            CliCommand::Upload { path, url, post_id } => {
                run_upload(&cfg, &path, url.as_deref(), post_id).await?
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
