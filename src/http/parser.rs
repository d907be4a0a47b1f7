use std::collections::HashMap;

use crate::http::request::{Method, Request};

/// Why a byte buffer could not be turned into a request.
///
/// `Incomplete` is not a failure: the connection reads more bytes and tries
/// again. Everything else is a malformed request and closes the connection.
#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    InvalidRequest,
    InvalidMethod,
    InvalidHeader,
    InvalidContentLength,
    Incomplete,
}

/// Parses one HTTP/1.1 request out of `buf`.
///
/// On success returns the request and the number of bytes consumed. Header
/// names are lowercased as they are collected (lookups on [`Request`] are
/// case-insensitive); a duplicated header keeps the last value. The body is
/// exactly Content-Length bytes; until those bytes have arrived the result
/// is `Err(Incomplete)`.
pub fn parse_http_request(buf: &[u8]) -> Result<(Request, usize), ParseError> {
    let headers_end = find_headers_end(buf).ok_or(ParseError::Incomplete)?;

    let head = std::str::from_utf8(&buf[..headers_end]).map_err(|_| ParseError::InvalidRequest)?;
    let mut lines = head.split("\r\n");

    let (method, path, version) =
        parse_request_line(lines.next().ok_or(ParseError::InvalidRequest)?)?;
    let headers = parse_header_lines(lines)?;

    let content_length = match headers.get("content-length") {
        Some(v) => v.parse().map_err(|_| ParseError::InvalidContentLength)?,
        None => 0,
    };

    // Body starts right after the blank line and is exactly Content-Length
    // bytes; anything buffered past that stays unconsumed.
    let body_bytes = &buf[headers_end + 4..];
    if body_bytes.len() < content_length {
        return Err(ParseError::Incomplete);
    }

    let request = Request {
        method,
        path: path.to_string(),
        version: version.to_string(),
        headers,
        body: body_bytes[..content_length].to_vec(),
    };

    Ok((request, headers_end + 4 + content_length))
}

fn find_headers_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n")
}

fn parse_request_line(line: &str) -> Result<(Method, &str, &str), ParseError> {
    let mut parts = line.split_whitespace();

    let method_str = parts.next().ok_or(ParseError::InvalidRequest)?;
    let path = parts.next().ok_or(ParseError::InvalidRequest)?;
    let version = parts.next().ok_or(ParseError::InvalidRequest)?;

    let method = Method::from_str(method_str).ok_or(ParseError::InvalidMethod)?;
    Ok((method, path, version))
}

/// Collects `Name: value` lines into a map, lowercasing the names.
fn parse_header_lines<'a>(
    lines: impl Iterator<Item = &'a str>,
) -> Result<HashMap<String, String>, ParseError> {
    let mut headers = HashMap::new();

    for line in lines {
        if line.is_empty() {
            continue;
        }

        let (key, value) = line.split_once(':').ok_or(ParseError::InvalidHeader)?;
        headers.insert(key.trim().to_ascii_lowercase(), value.trim().to_string());
    }

    Ok(headers)
}
