//! HTTP GET of a single image URL.
//!
//! Uses the curl crate (libcurl) in blocking mode. Status and `Content-Type`
//! are parsed as headers arrive; the body is only buffered when the final
//! response is a 2xx image, otherwise the transfer is cut at the first chunk.

mod parse;

pub use parse::is_image_content_type;

use crate::config::FetcherConfig;
use crate::error::FetchError;
use parse::ResponseHead;
use std::cell::RefCell;
use std::time::Duration;

/// Per-request settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchOptions {
    /// Limit on connecting, and on any stretch with no bytes arriving.
    /// A slow but steady transfer is not cut off.
    pub timeout: Duration,
    /// Maximum redirects followed before giving up.
    pub max_redirects: u32,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            max_redirects: 10,
        }
    }
}

impl From<&FetcherConfig> for FetchOptions {
    fn from(cfg: &FetcherConfig) -> Self {
        Self {
            // 0 would mean "no limit" to curl.
            timeout: Duration::from_secs(cfg.timeout_secs.max(1)),
            max_redirects: cfg.max_redirects,
        }
    }
}

/// A 2xx response. `body` is empty unless [`FetchedResponse::is_image`].
#[derive(Debug, Clone)]
pub struct FetchedResponse {
    pub status: u32,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl FetchedResponse {
    pub fn is_image(&self) -> bool {
        is_image_content_type(self.content_type.as_deref())
    }
}

/// Performs a GET on `url`, following redirects.
///
/// Returns `FetchError::Http` for a non-2xx final status and
/// `FetchError::Transport` for timeouts (connect, or a stalled response)
/// and connection failures.
/// A 2xx non-image response is `Ok` with an empty body.
pub fn fetch(url: &str, opts: &FetchOptions) -> Result<FetchedResponse, FetchError> {
    check_url(url)?;

    let head = RefCell::new(ResponseHead::default());
    let mut body = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.get(true)?;
    easy.follow_location(true)?;
    easy.max_redirections(opts.max_redirects)?;
    easy.connect_timeout(opts.timeout)?;
    easy.low_speed_limit(1)?;
    easy.low_speed_time(opts.timeout)?;

    let performed = {
        let mut transfer = easy.transfer();
        transfer.header_function(|data| {
            head.borrow_mut().feed(data);
            true
        })?;
        transfer.write_function(|data| {
            if !head.borrow().accepts_body() {
                return Ok(0); // abort transfer
            }
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()
    };

    let head = head.into_inner();
    if let Err(e) = performed {
        // A write error after we refused the body is our own abort.
        if !(e.is_write_error() && !head.accepts_body()) {
            return Err(FetchError::Transport(e));
        }
    }

    let status = easy.response_code()?;
    tracing::debug!(
        url,
        status,
        content_type = head.content_type.as_deref().unwrap_or("-"),
        bytes = body.len(),
        "GET finished"
    );

    if !(200..300).contains(&status) {
        return Err(FetchError::Http(status));
    }

    if !head.accepts_body() {
        body.clear();
    }

    Ok(FetchedResponse {
        status,
        content_type: head.content_type,
        body,
    })
}

fn check_url(url: &str) -> Result<(), FetchError> {
    let parsed = url::Url::parse(url).map_err(|e| FetchError::InvalidUrl(format!("{url}: {e}")))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(FetchError::InvalidUrl(format!(
            "{url}: unsupported scheme {other}"
        ))),
    }
}
