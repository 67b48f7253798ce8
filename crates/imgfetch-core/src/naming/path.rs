//! Filename extraction from URL path.

/// Returns the text after the last `/` of the URL path.
///
/// Returns `None` if the URL cannot be parsed or that final segment is
/// empty (root path, query-only URL, trailing slash). The segment is not
/// percent-decoded.
pub fn filename_from_url_path(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url).ok()?;
    let segment = parsed.path().rsplit('/').next()?;
    if segment.is_empty() {
        return None;
    }
    Some(segment.to_string())
}
