//! Error returned by the retry executor.

use std::fmt;

/// Failure of a retried operation.
///
/// `Operation` carries the last error the operation produced (a client error
/// or the final transient one). `Exhausted` is only produced when no attempt
/// ran at all, e.g. a policy with `max_attempts == 0`.
#[derive(Debug)]
pub enum RetryError<E> {
    Operation(E),
    Exhausted,
}

impl<E> RetryError<E> {
    /// The last operation error, if any attempt ran.
    pub fn into_inner(self) -> Option<E> {
        match self {
            RetryError::Operation(e) => Some(e),
            RetryError::Exhausted => None,
        }
    }
}

impl<E: fmt::Display> fmt::Display for RetryError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RetryError::Operation(e) => write!(f, "{}", e),
            RetryError::Exhausted => write!(f, "upload failed after all retries"),
        }
    }
}

impl<E: std::error::Error + 'static> std::error::Error for RetryError<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RetryError::Operation(e) => Some(e),
            RetryError::Exhausted => None,
        }
    }
}
