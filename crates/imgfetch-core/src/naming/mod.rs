//! Local filename derivation for fetched images.
//!
//! The name comes from the final segment of the URL path. When that segment
//! is empty (bare domain, query-only URL, trailing slash) the name falls back
//! to a short content digest, or to a fixed default when there is no content.

mod digest;
mod path;
mod sanitize;

pub use digest::content_hash_prefix;
pub use path::filename_from_url_path;
pub use sanitize::sanitize_filename_for_linux;

/// Name used when neither the URL nor the content yields anything.
pub const DEFAULT_FILENAME: &str = "downloaded_image.jpg";

/// Derives the local filename for `url`, using `content` as the hash seed
/// when the URL path has no final segment.
///
/// The URL segment is used as-is (no percent-decoding, no sanitization).
///
/// # Examples
///
/// - `derive_filename("http://x/a/photo.png", None)` → `"photo.png"`
/// - `derive_filename("http://x", None)` → `"downloaded_image.jpg"`
/// - `derive_filename("http://x?q=1", Some(b"..."))` → `"image_<hash8>.jpg"`
pub fn derive_filename(url: &str, content: Option<&[u8]>) -> String {
    filename_from_url_path(url).unwrap_or_else(|| fallback_filename(content))
}

/// Like [`derive_filename`] but passes the URL segment through
/// [`sanitize_filename_for_linux`] first. A segment that sanitizes to
/// nothing takes the fallback path.
pub fn derive_safe_filename(url: &str, content: Option<&[u8]>) -> String {
    filename_from_url_path(url)
        .map(|segment| sanitize_filename_for_linux(&segment))
        .filter(|name| !name.is_empty() && name != "." && name != "..")
        .unwrap_or_else(|| fallback_filename(content))
}

/// Picks between [`derive_safe_filename`] and [`derive_filename`].
pub fn filename_for(url: &str, content: Option<&[u8]>, sanitize: bool) -> String {
    if sanitize {
        derive_safe_filename(url, content)
    } else {
        derive_filename(url, content)
    }
}

fn fallback_filename(content: Option<&[u8]>) -> String {
    match content {
        Some(bytes) if !bytes.is_empty() => format!("image_{}.jpg", content_hash_prefix(bytes)),
        _ => DEFAULT_FILENAME.to_string(),
    }
}
