use crate::fetcher::types::{Charset, PageResponse};
use bytes::Bytes;
use chrono::Utc;
use regex::Regex;
use reqwest::StatusCode;
use std::sync::LazyLock;
use tracing::debug;
use url::Url;

static CHARSET_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)charset\s*=\s*["']?([^"'\s;]+)"#).unwrap());

static META_CHARSET_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)<meta\s+[^>]*?charset\s*=\s*["']?([^"'\s/>]+)"#).unwrap());

static META_HTTP_EQUIV_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta\s+[^>]*?http-equiv\s*=\s*["']?content-type["']?[^>]*?content\s*=\s*["']?[^"'>]*?charset\s*=\s*([^"'\s;/>]+)"#).unwrap()
});

pub fn process_response(
    url_final: Url,
    status: StatusCode,
    body_bytes: Bytes,
    content_type: &str,
) -> PageResponse {
    let charset = detect_charset(content_type, &body_bytes);
    let body_utf8 = decode_to_utf8(&body_bytes, &charset);

    PageResponse {
        url_final,
        status,
        body_utf8,
        charset,
        fetched_at: Utc::now(),
    }
}

fn detect_charset(content_type: &str, body_bytes: &[u8]) -> Charset {
    // 1. Check Content-Type header for charset
    if let Some(captures) = CHARSET_REGEX.captures(content_type)
        && let Some(charset_str) = captures.get(1)
    {
        let charset_name = charset_str.as_str().to_lowercase();
        if let Some(encoding) = encoding_rs::Encoding::for_label(charset_name.as_bytes()) {
            return Charset::from_encoding(encoding);
        }
    }

    // 2. Check for <meta charset> in first 4KB
    let search_bytes = &body_bytes[..body_bytes.len().min(4096)];
    let search_str = String::from_utf8_lossy(search_bytes);

    if let Some(captures) = META_CHARSET_REGEX.captures(&search_str)
        && let Some(charset_str) = captures.get(1)
    {
        let charset_name = charset_str.as_str().to_lowercase();
        if let Some(encoding) = encoding_rs::Encoding::for_label(charset_name.as_bytes()) {
            return Charset::from_encoding(encoding);
        }
    }

    if let Some(captures) = META_HTTP_EQUIV_REGEX.captures(&search_str)
        && let Some(charset_str) = captures.get(1)
    {
        let charset_name = charset_str.as_str().to_lowercase();
        if let Some(encoding) = encoding_rs::Encoding::for_label(charset_name.as_bytes()) {
            return Charset::from_encoding(encoding);
        }
    }

    // 3. Use chardet for heuristic detection
    let mut detector = chardetng::EncodingDetector::new();
    detector.feed(search_bytes, false);
    let detected = detector.guess(None, true);

    Charset::from_encoding(detected)
}

/// Lossy decode: a body that does not decode cleanly still produces a
/// string. Garbage input must reach the extractor and fall back there,
/// never abort the URL.
fn decode_to_utf8(body_bytes: &[u8], charset: &Charset) -> String {
    let encoding = charset.to_encoding();
    let (decoded, _encoding, had_errors) = encoding.decode(body_bytes);

    if had_errors {
        debug!(
            "body did not decode cleanly as {}; using replacement characters",
            encoding.name()
        );
    }

    decoded.into_owned()
}
