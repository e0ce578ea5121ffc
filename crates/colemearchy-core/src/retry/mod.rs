//! Retry and backoff policy.
//!
//! This module encapsulates error classification (client errors versus
//! transient failures) and exponential backoff decisions so that callers
//! (image upload, CLI commands) can share a consistent policy. The executor
//! itself is domain-agnostic and does not log.

mod classify;
mod error;
mod policy;
mod run;

pub use classify::{classify, classify_http_status, HttpStatus};
pub use error::RetryError;
pub use policy::{ErrorKind, RetryDecision, RetryPolicy};
pub use run::{run_with_retry, upload_with_retry};
