/// The only method the server answers with content.
pub const SUPPORTED_METHOD: &str = "GET";

/// The request line of one client request.
///
/// Built per connection from the raw bytes and dropped once the response
/// is written. Headers and bodies are never read, so only the three request
/// line fields are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// The method token exactly as sent (case-sensitive)
    pub method: String,
    /// The request target, query string included (e.g. "/index.html?v=2")
    pub path: String,
    /// Protocol version token; present but never validated
    pub version: String,
}

impl Request {
    pub fn new(
        method: impl Into<String>,
        path: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            version: version.into(),
        }
    }

    /// Whether the method is the supported retrieval verb.
    ///
    /// # Example
    ///
    /// ```
    /// # use webroot_server::http::request::Request;
    /// assert!(Request::new("GET", "/", "HTTP/1.1").is_supported_method());
    /// assert!(!Request::new("get", "/", "HTTP/1.1").is_supported_method());
    /// ```
    pub fn is_supported_method(&self) -> bool {
        self.method == SUPPORTED_METHOD
    }
}
