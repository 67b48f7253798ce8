//! Parse HTTP response header lines into ResponseHead.

/// Status and content type of the response currently being received.
///
/// Headers of every hop in a redirect chain pass through [`ResponseHead::feed`];
/// a new status line resets the state so only the final response counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct ResponseHead {
    pub status: Option<u32>,
    pub content_type: Option<String>,
}

impl ResponseHead {
    /// Feed one raw header line as delivered by curl (including CRLF).
    pub fn feed(&mut self, raw: &[u8]) {
        let line = String::from_utf8_lossy(raw);
        let line = line.trim();
        if line.is_empty() {
            return;
        }
        if line.starts_with("HTTP/") {
            *self = ResponseHead {
                status: parse_status_line(line),
                content_type: None,
            };
            return;
        }
        if let Some((name, value)) = line.split_once(':') {
            if name.trim().eq_ignore_ascii_case("content-type") {
                self.content_type = Some(value.trim().to_string());
            }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.status, Some(200..=299))
    }

    /// True once the final response is known to be a 2xx image, i.e. the
    /// body is worth reading.
    pub fn accepts_body(&self) -> bool {
        self.is_success() && is_image_content_type(self.content_type.as_deref())
    }
}

/// `HTTP/1.1 200 OK` → `Some(200)`.
fn parse_status_line(line: &str) -> Option<u32> {
    line.split_whitespace().nth(1)?.parse().ok()
}

/// True when the content type begins with `image/` (ASCII case-insensitive).
pub fn is_image_content_type(content_type: Option<&str>) -> bool {
    content_type
        .map(str::trim_start)
        .and_then(|ct| ct.get(..6))
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("image/"))
}

/// Parse collected header lines into ResponseHead.
#[cfg(test)]
pub(crate) fn parse_headers(lines: &[&str]) -> ResponseHead {
    let mut head = ResponseHead::default();
    for line in lines {
        head.feed(line.as_bytes());
    }
    head
}
