//! Blocking multipart POST over libcurl.

use curl::easy::{Easy, Form};
use std::time::Duration;

use super::{UploadRequest, UploadResponse};
use crate::retry::HttpStatus;

/// Error from a single upload attempt.
#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    /// Curl reported an error (timeout, connection, etc.).
    #[error("{0}")]
    Curl(#[from] curl::Error),
    /// The multipart body could not be built.
    #[error("multipart form: {0}")]
    Form(#[from] curl::FormError),
    /// Server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },
    /// The blocking task running the transfer panicked or was cancelled.
    #[error("upload task: {0}")]
    Task(String),
}

impl HttpStatus for UploadError {
    fn http_status(&self) -> Option<u16> {
        match self {
            UploadError::Http { status, .. } => Some(*status),
            UploadError::Curl(_) | UploadError::Form(_) | UploadError::Task(_) => None,
        }
    }
}

/// Posts one `multipart/form-data` request with an `image` part (and a
/// `postId` part when set). Runs in the current thread; call from
/// `spawn_blocking` if used from async code.
pub fn post_multipart(req: &UploadRequest) -> Result<UploadResponse, UploadError> {
    let mut easy = Easy::new();
    easy.url(&req.endpoint)?;
    easy.follow_location(true)?;
    easy.connect_timeout(Duration::from_secs(15))?;
    easy.timeout(req.timeout)?;

    let mut form = Form::new();
    form.part("image")
        .buffer(&req.file_name, req.data.clone())
        .content_type(req.content_type)
        .add()?;
    if let Some(post_id) = &req.post_id {
        form.part("postId").contents(post_id.as_bytes()).add()?;
    }
    easy.httppost(form)?;

    let mut body = Vec::new();
    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let status = easy.response_code()? as u16;
    let body = String::from_utf8_lossy(&body).into_owned();
    if !(200..300).contains(&status) {
        return Err(UploadError::Http { status, body });
    }
    tracing::debug!(
        "uploaded {} ({} bytes) -> HTTP {}",
        req.file_name,
        req.data.len(),
        status
    );
    Ok(UploadResponse::new(status, body))
}
