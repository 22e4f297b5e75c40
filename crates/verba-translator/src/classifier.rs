//! Maps transport outcomes onto the closed [`ApiError`] taxonomy
//!
//! Pure and stateless: no I/O, the same inputs always give the same variant.

use verba_core::{ApiError, HttpResponse, TransportError};

pub struct ResponseClassifier;

impl ResponseClassifier {
    /// Route a complete transport outcome: 2xx bodies go to `decode`, everything else is a failure
    pub fn classify<T, F>(outcome: Result<HttpResponse, TransportError>, decode: F) -> Result<T, ApiError>
    where
        F: FnOnce(&[u8]) -> Result<T, ApiError>,
    {
        match outcome {
            Ok(response) if response.is_success() => Self::classify_success(&response.body, decode),
            Ok(response) => Err(Self::classify_failure(response.status, &response.body, None)),
            Err(e) => Err(Self::classify_failure(None, &[], Some(e))),
        }
    }

    /// Happy path, entirely up to the caller's decoder
    pub fn classify_success<T, F>(body: &[u8], decode: F) -> Result<T, ApiError>
    where
        F: FnOnce(&[u8]) -> Result<T, ApiError>,
    {
        decode(body)
    }

    /// Classify an outcome that did not succeed.
    ///
    /// A transport error takes precedence, then a missing status code. Status codes are
    /// expected to lie outside 200..=299; any code that is not an auth or rate-limit code
    /// becomes [`ApiError::Http`].
    pub fn classify_failure(
        status: Option<u16>,
        body: &[u8],
        transport_error: Option<TransportError>,
    ) -> ApiError {
        if let Some(e) = transport_error {
            return ApiError::Networking(e);
        }

        match status {
            None => ApiError::Unexpected,
            Some(401 | 403) => ApiError::InvalidKey,
            Some(429) => ApiError::RateLimitExceeded,
            Some(status) => ApiError::Http {
                status,
                message: error_message(body),
            },
        }
    }
}

/// Readable message from an error body: the `<body>` text for HTML, else the trimmed body
pub fn error_message(body: &[u8]) -> Option<String> {
    let text = String::from_utf8_lossy(body);

    let message = match html_body(&text) {
        Some(inner) => strip_tags(inner),
        None => text.trim().to_string(),
    };

    (!message.is_empty()).then_some(message)
}

/// Inner markup of the first `<body ...>` element, if it is closed
fn html_body(text: &str) -> Option<&str> {
    // ASCII lowercasing keeps byte offsets intact
    let lower = text.to_ascii_lowercase();

    let mut search_from = 0;
    let open = loop {
        let found = search_from + lower[search_from..].find("<body")?;
        let after = found + "<body".len();
        match lower.as_bytes().get(after) {
            Some(b'>' | b' ' | b'\t' | b'\r' | b'\n' | b'/') => break found,
            _ => search_from = after,
        }
    };

    let content_start = open + lower[open..].find('>')? + 1;
    let content_end = content_start + lower[content_start..].find("</body>")?;

    Some(&text[content_start..content_end])
}

fn strip_tags(markup: &str) -> String {
    let mut out = String::with_capacity(markup.len());
    let mut in_tag = false;

    for c in markup.chars() {
        match c {
            '<' => {
                in_tag = true;
                out.push(' ');
            }
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }

    out.split_whitespace().collect::<Vec<_>>().join(" ")
}
