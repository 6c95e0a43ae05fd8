use crate::error::{RequestError, RequestResult};
use crate::http::request::Request;

/// Parses the request line out of the text read from the wire.
///
/// Only the first line matters: it is trimmed and split on single spaces,
/// and the first three fields become method, path and version. Any further
/// fields are ignored and everything after the first line (headers, body)
/// is never looked at.
///
/// The method is not checked here; see [`Request::is_supported_method`].
pub fn parse_request_line(input: &str) -> RequestResult<Request> {
    let first_line = input.split('\n').next().ok_or(RequestError::BadRequest)?;

    let mut parts = first_line.trim().split(' ');

    let method = parts.next().ok_or(RequestError::BadRequest)?;
    let path = parts.next().ok_or(RequestError::BadRequest)?;
    let version = parts.next().ok_or(RequestError::BadRequest)?;

    Ok(Request::new(method, path, version))
}

/// The first line of the request, for logging.
pub fn first_line(input: &str) -> &str {
    input.split('\n').next().unwrap_or("").trim_end()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_get() {
        let req = "GET / HTTP/1.1\r\nHost: example.com\r\n\r\n";

        let parsed = parse_request_line(req).unwrap();

        assert_eq!(parsed.method, "GET");
        assert_eq!(parsed.path, "/");
        assert_eq!(parsed.version, "HTTP/1.1");
    }

    #[test]
    fn empty_input_is_bad_request() {
        assert!(matches!(parse_request_line(""), Err(RequestError::BadRequest)));
    }
}
