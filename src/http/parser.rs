use std::collections::HashMap;

use crate::http::request::{Method, Request};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// Bytes that are not UTF-8, or percent-escapes decoding to invalid UTF-8
    InvalidEncoding,
    /// Request line does not match `<METHOD> <URI> HTTP/1.<0|1>`
    InvalidRequestLine,
    /// HTTP version other than 1.0 or 1.1
    UnsupportedVersion,
    /// Header line without a `:` separator
    InvalidHeader,
    /// Header block grew past the buffering cap without terminating
    HeadersTooLarge,
}

/// Scans for the end of the request header block.
///
/// Returns the offset where the terminator starts and the terminator
/// length. Both `\n\n` and `\n\r\n` are accepted; the `\r\n\r\n` that real
/// clients send ends in `\n\r\n` and matches the second form.
pub fn find_request_end(buf: &[u8]) -> Option<(usize, usize)> {
    for i in 0..buf.len() {
        if buf[i] != b'\n' {
            continue;
        }
        if buf.get(i + 1) == Some(&b'\n') {
            return Some((i, 2));
        }
        if buf.get(i + 1) == Some(&b'\r') && buf.get(i + 2) == Some(&b'\n') {
            return Some((i, 3));
        }
    }
    None
}

/// Parses a complete header block (terminator already stripped) into a
/// [`Request`].
///
/// The URI is percent-decoded before being split on the first `?` into
/// path and query, so an encoded `%3F` acts as a separator once decoded.
/// Header names are lower-cased and trimmed, values trimmed; value
/// encoding is not validated.
pub fn parse_request(block: &[u8]) -> Result<Request, ParseError> {
    let text = std::str::from_utf8(block).map_err(|_| ParseError::InvalidEncoding)?;

    let mut lines = text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line));

    let request_line = lines.next().ok_or(ParseError::InvalidRequestLine)?;
    let (method, uri, version) = parse_request_line(request_line)?;

    let decoded = urlencoding::decode(uri).map_err(|_| ParseError::InvalidEncoding)?;
    let (path, query) = match decoded.split_once('?') {
        Some((path, query)) => (path.to_string(), Some(query.to_string())),
        None => (decoded.to_string(), None),
    };

    let mut headers = HashMap::new();
    for line in lines {
        if line.is_empty() {
            continue;
        }

        let (name, value) = line.split_once(':').ok_or(ParseError::InvalidHeader)?;
        headers.insert(name.trim().to_ascii_lowercase(), value.trim().to_string());
    }

    Ok(Request {
        method,
        uri: uri.to_string(),
        path,
        query,
        version: version.to_string(),
        headers,
    })
}

/// Tokenizes the request line into method, URI and version.
fn parse_request_line(line: &str) -> Result<(Method, &str, &str), ParseError> {
    let mut parts = line.split_ascii_whitespace();

    let method = parts.next().ok_or(ParseError::InvalidRequestLine)?;
    let uri = parts.next().ok_or(ParseError::InvalidRequestLine)?;
    let version = parts.next().ok_or(ParseError::InvalidRequestLine)?;
    if parts.next().is_some() {
        return Err(ParseError::InvalidRequestLine);
    }

    if version != "HTTP/1.0" && version != "HTTP/1.1" {
        return Err(ParseError::UnsupportedVersion);
    }

    Ok((Method::from_str(method), uri, version))
}
