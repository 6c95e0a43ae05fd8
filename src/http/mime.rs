//! Content-type lookup by file extension.

/// Served when an allowed extension has no entry in [`CONTENT_TYPES`].
pub const DEFAULT_CONTENT_TYPE: &str = "text/plain";

/// Extension (lower-case, leading dot) to content type.
pub const CONTENT_TYPES: &[(&str, &str)] = &[
    (".html", "text/html"),
    (".css", "text/css"),
    (".js", "application/javascript"),
];

/// Returns the content type for a lower-cased extension such as `".css"`.
///
/// # Example
///
/// ```
/// # use webroot_server::http::mime::content_type_for;
/// assert_eq!(content_type_for(".js"), "application/javascript");
/// assert_eq!(content_type_for(".txt"), "text/plain");
/// ```
pub fn content_type_for(extension: &str) -> &'static str {
    CONTENT_TYPES
        .iter()
        .find(|(ext, _)| *ext == extension)
        .map(|(_, content_type)| *content_type)
        .unwrap_or(DEFAULT_CONTENT_TYPE)
}
