//! Download response header construction
//!
//! Original filenames are untrusted input headed for an HTTP header, so they
//! never reach `Content-Disposition` raw. The encoder scrubs control
//! characters (the header-injection vector), backslash-escapes the
//! quoted-string specials, and carries non-ASCII names in an RFC 5987
//! `filename*` parameter with an ASCII-degraded fallback.

use axum::http::HeaderValue;

/// Build a `Content-Disposition: attachment` header value for a filename
///
/// The plain `filename` parameter is always present and always ASCII: control
/// characters and non-ASCII characters are replaced with `_`, and `"` / `\`
/// are backslash-escaped per the quoted-string rules. When the name contains
/// non-ASCII characters, an additional `filename*=UTF-8''…` parameter carries
/// the exact name percent-encoded.
pub fn content_disposition(original_filename: &str) -> HeaderValue {
    // Control characters (including DEL) are the injection vector; they are
    // replaced before any other processing.
    let scrubbed: String = original_filename
        .chars()
        .map(|c| if c.is_control() { '_' } else { c })
        .collect();

    let mut fallback = String::with_capacity(scrubbed.len());
    let mut has_non_ascii = false;
    for c in scrubbed.chars() {
        match c {
            '"' | '\\' => {
                fallback.push('\\');
                fallback.push(c);
            }
            c if c.is_ascii() => fallback.push(c),
            _ => {
                has_non_ascii = true;
                fallback.push('_');
            }
        }
    }

    let value = if has_non_ascii {
        format!(
            "attachment; filename=\"{}\"; filename*=UTF-8''{}",
            fallback,
            urlencoding::encode(&scrubbed)
        )
    } else {
        format!("attachment; filename=\"{fallback}\"")
    };

    // The assembled value is visible ASCII by construction; the fallback
    // covers a scrub logic regression rather than a reachable path.
    HeaderValue::from_str(&value).unwrap_or_else(|_| HeaderValue::from_static("attachment"))
}

/// Build a `Content-Type` header value from a stored MIME string
///
/// Falls back to `application/octet-stream` if the stored value is not a
/// valid header value.
pub fn content_type(mime_browser: &str) -> HeaderValue {
    HeaderValue::from_str(mime_browser)
        .unwrap_or_else(|_| HeaderValue::from_static("application/octet-stream"))
}
