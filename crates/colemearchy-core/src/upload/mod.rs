//! Cover-image upload.
//!
//! Validates images locally, names them uniquely, and posts them as
//! `multipart/form-data` through libcurl. Each attempt runs on a blocking
//! task; attempts are driven by [`run_with_retry`], so 4xx responses stop
//! immediately while 5xx and transport failures back off and retry.

mod client;
mod validate;

pub use client::{post_multipart, UploadError};
pub use validate::{
    content_type_for, generate_unique_file_name, validate_image, ImageValidationError,
    ALLOWED_IMAGE_TYPES, MAX_IMAGE_BYTES,
};

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use crate::retry::{run_with_retry, RetryError, RetryPolicy};

/// One image upload, ready to send.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub endpoint: String,
    pub file_name: String,
    pub content_type: &'static str,
    pub data: Vec<u8>,
    /// Sent as the `postId` form field when present.
    pub post_id: Option<String>,
    pub timeout: Duration,
}

impl UploadRequest {
    /// Reads and validates `path`, naming the upload uniquely from its content.
    pub async fn from_path(
        endpoint: &str,
        path: &Path,
        post_id: Option<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let content_type = content_type_for(path)
            .ok_or_else(|| ImageValidationError::UnsupportedType(path.display().to_string()))?;
        let data = tokio::fs::read(path)
            .await
            .with_context(|| format!("read {}", path.display()))?;
        validate_image(content_type, data.len() as u64)?;

        let original = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("image.jpg");
        let file_name = generate_unique_file_name(original, &data);

        Ok(Self {
            endpoint: endpoint.to_string(),
            file_name,
            content_type,
            data,
            post_id,
            timeout,
        })
    }
}

/// Successful upload response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadResponse {
    pub status: u16,
    pub body: String,
    /// `imageUrl` from a JSON body, if the server sent one.
    pub image_url: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UploadBody {
    image_url: Option<String>,
}

impl UploadResponse {
    pub(crate) fn new(status: u16, body: String) -> Self {
        let image_url = serde_json::from_str::<UploadBody>(&body)
            .ok()
            .and_then(|b| b.image_url);
        Self {
            status,
            body,
            image_url,
        }
    }
}

/// Uploads `request`, retrying transient failures according to `policy`.
pub async fn upload_image(
    request: &UploadRequest,
    policy: &RetryPolicy,
) -> Result<UploadResponse, RetryError<UploadError>> {
    let request = Arc::new(request.clone());
    run_with_retry(policy, || {
        let request = Arc::clone(&request);
        async move {
            let outcome = tokio::task::spawn_blocking(move || post_multipart(&request))
                .await
                .map_err(|e| UploadError::Task(e.to_string()))?;
            if let Err(e) = &outcome {
                tracing::warn!("image upload attempt failed: {}", e);
            }
            outcome
        }
    })
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn response_extracts_image_url() {
        let r = UploadResponse::new(200, r#"{"imageUrl": "https://cdn/x.png"}"#.into());
        assert_eq!(r.image_url.as_deref(), Some("https://cdn/x.png"));
        let plain = UploadResponse::new(200, "ok".into());
        assert!(plain.image_url.is_none());
    }

    #[tokio::test]
    async fn request_from_path_validates_and_names() {
        let mut f = tempfile::Builder::new().suffix(".PNG").tempfile().unwrap();
        f.write_all(b"\x89PNG fake").unwrap();
        let req = UploadRequest::from_path(
            "http://127.0.0.1:1/upload",
            f.path(),
            Some("post-1".into()),
            Duration::from_secs(5),
        )
        .await
        .unwrap();
        assert_eq!(req.content_type, "image/png");
        assert!(req.file_name.ends_with(".PNG"));
        assert_eq!(req.data, b"\x89PNG fake");
    }

    #[tokio::test]
    async fn request_from_path_rejects_unknown_type() {
        let f = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        let err = UploadRequest::from_path("http://x", f.path(), None, Duration::from_secs(1))
            .await
            .unwrap_err();
        assert!(err.downcast_ref::<ImageValidationError>().is_some());
    }
}
