//! `colemearchy upload` – upload a cover image with retry.

use anyhow::{anyhow, Context, Result};
use colemearchy_core::config::ColemearchyConfig;
use colemearchy_core::upload::{upload_image, UploadRequest};
use std::path::Path;
use std::time::Duration;

pub async fn run_upload(
    cfg: &ColemearchyConfig,
    path: &Path,
    url: Option<&str>,
    post_id: Option<String>,
) -> Result<()> {
    let endpoint = url
        .or(cfg.upload_url.as_deref())
        .ok_or_else(|| anyhow!("no upload endpoint: pass --url or set upload_url in config"))?;
    let timeout = Duration::from_secs(cfg.upload_timeout_secs);
    let request = UploadRequest::from_path(endpoint, path, post_id, timeout).await?;
    let policy = cfg.retry_policy();

    tracing::info!(
        "uploading {} as {} ({} bytes) to {}",
        path.display(),
        request.file_name,
        request.data.len(),
        endpoint
    );
    let response = upload_image(&request, &policy)
        .await
        .with_context(|| format!("upload {}", path.display()))?;

    match response.image_url {
        Some(image_url) => println!("{}", image_url),
        None => println!("uploaded {} (HTTP {})", request.file_name, response.status),
    }
    Ok(())
}
