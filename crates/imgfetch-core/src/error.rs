//! Per-URL error type.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure while fetching or saving a single URL.
///
/// Kept as a concrete enum (rather than `anyhow`) so the batch loop can tell
/// connection failures apart from everything else.
#[derive(Debug, Error)]
pub enum FetchError {
    /// URL could not be parsed or does not use http/https.
    #[error("invalid URL {0}")]
    InvalidUrl(String),
    /// Curl reported an error (timeout, DNS, connect, read).
    #[error("{0}")]
    Transport(#[from] curl::Error),
    /// Final response had a non-2xx status.
    #[error("HTTP {0}")]
    Http(u32),
    /// Writing the image to disk failed.
    #[error("failed to write {}: {source}", path.display())]
    Storage {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FetchError {
    /// True for failures reported as connection errors: anything that
    /// stopped us getting a successful response.
    pub fn is_connection(&self) -> bool {
        matches!(
            self,
            FetchError::InvalidUrl(_) | FetchError::Transport(_) | FetchError::Http(_)
        )
    }
}
