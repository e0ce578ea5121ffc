//! Classify failures into retry policy error kinds.

use super::policy::ErrorKind;

/// Capability check for errors that may carry an HTTP-like status code.
///
/// Implement this for any error passed through [`run_with_retry`](super::run_with_retry);
/// returning `None` marks the error as transient.
pub trait HttpStatus {
    fn http_status(&self) -> Option<u16>;
}

impl HttpStatus for std::io::Error {
    fn http_status(&self) -> Option<u16> {
        None
    }
}

impl HttpStatus for curl::Error {
    fn http_status(&self) -> Option<u16> {
        None
    }
}

impl HttpStatus for anyhow::Error {
    fn http_status(&self) -> Option<u16> {
        self.chain().find_map(|cause| {
            cause
                .downcast_ref::<crate::upload::UploadError>()
                .and_then(HttpStatus::http_status)
        })
    }
}

/// Classify an HTTP status code for retry decisions.
pub fn classify_http_status(code: u16) -> ErrorKind {
    match code {
        400..=499 => ErrorKind::Client(code),
        _ => ErrorKind::Transient,
    }
}

/// Classify any status-aware error into an ErrorKind.
pub fn classify<E: HttpStatus + ?Sized>(e: &E) -> ErrorKind {
    match e.http_status() {
        Some(code) => classify_http_status(code),
        None => ErrorKind::Transient,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Status(Option<u16>);

    impl HttpStatus for Status {
        fn http_status(&self) -> Option<u16> {
            self.0
        }
    }

    #[test]
    fn http_4xx_is_client() {
        assert_eq!(classify_http_status(400), ErrorKind::Client(400));
        assert_eq!(classify_http_status(404), ErrorKind::Client(404));
        assert_eq!(classify_http_status(499), ErrorKind::Client(499));
    }

    #[test]
    fn http_5xx_and_others_transient() {
        assert_eq!(classify_http_status(500), ErrorKind::Transient);
        assert_eq!(classify_http_status(503), ErrorKind::Transient);
        assert_eq!(classify_http_status(399), ErrorKind::Transient);
    }

    #[test]
    fn missing_status_is_transient() {
        assert_eq!(classify(&Status(None)), ErrorKind::Transient);
        assert_eq!(classify(&Status(Some(429))), ErrorKind::Client(429));
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "reset");
        assert_eq!(classify(&io), ErrorKind::Transient);
    }

    #[test]
    fn anyhow_finds_upload_status_in_chain() {
        let err = anyhow::Error::new(crate::upload::UploadError::Http {
            status: 403,
            body: String::new(),
        })
        .context("upload image");
        assert_eq!(classify(&err), ErrorKind::Client(403));
        assert_eq!(classify(&anyhow::anyhow!("boom")), ErrorKind::Transient);
    }
}
