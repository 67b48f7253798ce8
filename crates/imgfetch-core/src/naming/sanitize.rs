//! Linux-safe filename sanitization.

/// Linux NAME_MAX, in bytes.
const NAME_MAX: usize = 255;

/// Sanitizes a URL path segment for use as a filename on Linux.
///
/// - Replaces NUL, `/`, `\`, whitespace and control characters with `_`
/// - Collapses runs of `_`
/// - Trims leading/trailing dots, spaces and underscores (so `..` and
///   hidden-file names cannot come out of a URL)
/// - Truncates to 255 bytes on a char boundary
pub fn sanitize_filename_for_linux(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());

    for c in segment.chars() {
        let c = if is_unsafe(c) { '_' } else { c };
        if c == '_' && out.ends_with('_') {
            continue;
        }
        out.push(c);
    }

    let trimmed = out.trim_matches(|c: char| c == '.' || c == '_' || c == ' ');
    let mut end = trimmed.len().min(NAME_MAX);
    while !trimmed.is_char_boundary(end) {
        end -= 1;
    }
    trimmed[..end].to_string()
}

fn is_unsafe(c: char) -> bool {
    matches!(c, '\0' | '/' | '\\') || c.is_whitespace() || c.is_control()
}
