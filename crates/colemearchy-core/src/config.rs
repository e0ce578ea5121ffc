use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::retry::RetryPolicy;
use crate::transcript::DEFAULT_MAX_CHUNK_SIZE;

/// Retry policy parameters (optional section in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Maximum number of attempts per operation (including the first).
    pub max_attempts: u32,
    /// Base delay in milliseconds for exponential backoff.
    pub base_delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay_ms: 1000,
        }
    }
}

fn default_max_chunk_size() -> usize {
    DEFAULT_MAX_CHUNK_SIZE
}

fn default_words_per_minute() -> u32 {
    crate::text::reading_time::DEFAULT_WORDS_PER_MINUTE
}

fn default_upload_timeout_secs() -> u64 {
    60
}

/// Global configuration loaded from `~/.config/colemearchy/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColemearchyConfig {
    /// Maximum transcript chunk size in characters.
    #[serde(default = "default_max_chunk_size")]
    pub max_chunk_size: usize,
    /// Reading speed used for reading-time estimates.
    #[serde(default = "default_words_per_minute")]
    pub words_per_minute: u32,
    /// Image upload endpoint used when `--url` is not given.
    #[serde(default)]
    pub upload_url: Option<String>,
    /// Whole-transfer timeout for a single upload attempt.
    #[serde(default = "default_upload_timeout_secs")]
    pub upload_timeout_secs: u64,
    /// Optional retry policy; if missing, built-in defaults are used.
    #[serde(default)]
    pub retry: Option<RetryConfig>,
}

impl Default for ColemearchyConfig {
    fn default() -> Self {
        Self {
            max_chunk_size: default_max_chunk_size(),
            words_per_minute: default_words_per_minute(),
            upload_url: None,
            upload_timeout_secs: default_upload_timeout_secs(),
            retry: None,
        }
    }
}

impl ColemearchyConfig {
    /// Runtime retry policy: the `[retry]` section if present, else defaults.
    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry
            .as_ref()
            .map(RetryPolicy::from)
            .unwrap_or_default()
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("colemearchy")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ColemearchyConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ColemearchyConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)
        .with_context(|| format!("read {}", path.display()))?;
    let cfg: ColemearchyConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
