/// HTTP status codes the server emits.
///
/// - `Ok` (200): file served
/// - `BadRequest` (400): malformed request line
/// - `Forbidden` (403): traversal attempt, rooted path or disallowed extension
/// - `NotFound` (404): no such file
/// - `MethodNotAllowed` (405): anything but GET
/// - `InternalServerError` (500): unexpected failure while serving
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 400 Bad Request
    BadRequest,
    /// 403 Forbidden
    Forbidden,
    /// 404 Not Found
    NotFound,
    /// 405 Method Not Allowed
    MethodNotAllowed,
    /// 500 Internal Server Error
    InternalServerError,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use webroot_server::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::Forbidden.as_u16(), 403);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::BadRequest => 400,
            StatusCode::Forbidden => 403,
            StatusCode::NotFound => 404,
            StatusCode::MethodNotAllowed => 405,
            StatusCode::InternalServerError => 500,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::Forbidden => "Forbidden",
            StatusCode::NotFound => "Not Found",
            StatusCode::MethodNotAllowed => "Method Not Allowed",
            StatusCode::InternalServerError => "Internal Server Error",
        }
    }
}

/// Page used for any error status without a template of its own.
pub const GENERIC_ERROR_PAGE: &str = "<html><body><h1>Error</h1></body></html>";

const BAD_REQUEST_PAGE: &str = "<html>
<head><title>400 Bad Request</title></head>
<body><h1>Error 400: Bad Request</h1></body>
</html>";

const FORBIDDEN_PAGE: &str = "<html>
<head><title>403 Forbidden</title></head>
<body><h1>Error 403: Forbidden</h1></body>
</html>";

const NOT_FOUND_PAGE: &str = "<html>
<head><title>404 Not Found</title></head>
<body><h1>Error 404: Page Not Found</h1></body>
</html>";

const METHOD_NOT_ALLOWED_PAGE: &str = "<html>
<head><title>405 Method Not Allowed</title></head>
<body><h1>Error 405: Method Not Allowed</h1></body>
</html>";

const INTERNAL_ERROR_PAGE: &str = "<html>
<head><title>500 Internal Server Error</title></head>
<body><h1>Error 500: Internal Server Error</h1></body>
</html>";

/// The HTML body sent with an error status.
pub fn error_page(status: StatusCode) -> &'static str {
    match status {
        StatusCode::BadRequest => BAD_REQUEST_PAGE,
        StatusCode::Forbidden => FORBIDDEN_PAGE,
        StatusCode::NotFound => NOT_FOUND_PAGE,
        StatusCode::MethodNotAllowed => METHOD_NOT_ALLOWED_PAGE,
        StatusCode::InternalServerError => INTERNAL_ERROR_PAGE,
        StatusCode::Ok => GENERIC_ERROR_PAGE,
    }
}

/// A complete HTTP response, assembled in memory before it is written.
///
/// Headers keep the order they were added in; the writer emits them as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: StatusCode,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

/// Builder for constructing HTTP responses in a fluent style.
///
/// # Example
///
/// ```ignore
/// let response = ResponseBuilder::new(StatusCode::Ok)
///     .header("Content-Type", "text/css")
///     .body("body {}")
///     .build();
/// ```
pub struct ResponseBuilder {
    status: StatusCode,
    headers: Vec<(String, String)>,
    body: Vec<u8>,
}

impl ResponseBuilder {
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Appends a header. A header of the same name (case-insensitive) is replaced
    /// in place.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let value = value.into();
        match self.headers.iter_mut().find(|(k, _)| k.eq_ignore_ascii_case(&key)) {
            Some(entry) => entry.1 = value,
            None => self.headers.push((key, value)),
        }
        self
    }

    /// Sets the body from UTF-8 text.
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into().into_bytes();
        self
    }

    /// Builds the final Response.
    ///
    /// `Content-Length` is always computed from the body's byte length and
    /// `Connection: close` is always sent, after any headers set by the caller.
    pub fn build(self) -> Response {
        let length = self.body.len();
        let builder = self
            .header("Content-Length", length.to_string())
            .header("Connection", "close");

        Response {
            status: builder.status,
            headers: builder.headers,
            body: builder.body,
        }
    }
}

impl Response {
    /// 200 OK carrying a text body of the given content type.
    pub fn ok(content_type: &str, body: impl Into<String>) -> Self {
        ResponseBuilder::new(StatusCode::Ok)
            .header("Content-Type", content_type)
            .body(body)
            .build()
    }

    /// An error response with the status's fixed HTML page.
    pub fn error(status: StatusCode) -> Self {
        ResponseBuilder::new(status)
            .header("Content-Type", "text/html")
            .body(error_page(status))
            .build()
    }

    pub fn internal_error() -> Self {
        Self::error(StatusCode::InternalServerError)
    }

    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }
}
