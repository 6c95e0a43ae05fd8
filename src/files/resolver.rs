use std::borrow::Cow;
use std::path::PathBuf;

use crate::config::ServerConfig;
use crate::error::{RequestError, RequestResult};
use crate::http::mime::content_type_for;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// A request path that passed every check and names a regular file under
/// the web root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTarget {
    /// Canonical path of the file on disk
    pub path: PathBuf,
    /// Lower-cased extension with its leading dot
    pub extension: String,
    pub content_type: &'static str,
}

/// A path relative to the web root, checked lexically but not yet looked up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SafePath {
    pub relative: String,
    pub extension: String,
}

/// Maps request paths onto files beneath the configured web root.
pub struct PathResolver<'a> {
    config: &'a ServerConfig,
}

impl<'a> PathResolver<'a> {
    pub fn new(config: &'a ServerConfig) -> Self {
        Self { config }
    }

    /// Turns a raw request target into a safe relative path.
    ///
    /// The query string is dropped, the rest is URL-decoded, `/` becomes the
    /// index document and one leading slash is removed. The result is
    /// rejected if it contains `..` anywhere, is rooted, or carries an
    /// extension outside the allow-list.
    pub fn sanitize(&self, raw_path: &str) -> RequestResult<SafePath> {
        let without_query = raw_path.split('?').next().unwrap_or("");
        let decoded = decode_path(without_query);

        let path = if decoded == "/" {
            format!("/{}", self.config.index_file)
        } else {
            decoded.into_owned()
        };

        let relative = path.strip_prefix('/').unwrap_or(path.as_str());

        if relative.contains("..") {
            return Err(RequestError::Forbidden("parent directory reference"));
        }
        if is_rooted(relative) {
            return Err(RequestError::Forbidden("rooted path"));
        }

        let extension = extension_of(relative);
        if !self.config.is_allowed_extension(&extension) {
            return Err(RequestError::Forbidden("extension not allowed"));
        }

        Ok(SafePath {
            relative: relative.to_string(),
            extension,
        })
    }

    /// Locates the file for a sanitized path.
    ///
    /// Missing paths and anything that is not a regular file are 404. The
    /// file and the web root are canonicalized and the file must still lie
    /// under the root, which catches symlinks pointing elsewhere.
    pub async fn locate(&self, safe: SafePath) -> RequestResult<ResolvedTarget> {
        let joined = self.config.web_root.join(&safe.relative);

        match tokio::fs::metadata(&joined).await {
            Ok(meta) if meta.is_file() => {}
            _ => return Err(RequestError::NotFound(joined)),
        }

        let root = tokio::fs::canonicalize(&self.config.web_root).await?;
        let path = tokio::fs::canonicalize(&joined).await?;
        if !path.starts_with(&root) {
            return Err(RequestError::Forbidden("resolved outside web root"));
        }

        let content_type = content_type_for(&safe.extension);
        Ok(ResolvedTarget {
            path,
            extension: safe.extension,
            content_type,
        })
    }

    /// Runs [`sanitize`](Self::sanitize) then [`locate`](Self::locate).
    pub async fn resolve(&self, raw_path: &str) -> RequestResult<ResolvedTarget> {
        let safe = self.sanitize(raw_path)?;
        self.locate(safe).await
    }
}

/// Reads a resolved file as text.
///
/// Invalid UTF-8 is replaced rather than rejected, and a leading byte-order
/// mark is dropped.
pub async fn read_text(target: &ResolvedTarget) -> RequestResult<String> {
    let raw = tokio::fs::read(&target.path).await?;
    let text = String::from_utf8_lossy(&raw);
    Ok(text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(&*text).to_string())
}

/// Form-style URL decoding: `+` is a space, `%XX` is a byte, malformed
/// escapes stay as they are.
///
/// # Example
///
/// ```
/// # use webroot_server::files::resolver::decode_path;
/// assert_eq!(decode_path("/my+page%20two.html"), "/my page two.html");
/// assert_eq!(decode_path("/%2e%2e/x"), "/../x");
/// assert_eq!(decode_path("/100%"), "/100%");
/// ```
pub fn decode_path(path: &str) -> Cow<'_, str> {
    if !path.contains(['+', '%']) {
        return Cow::Borrowed(path);
    }
    let spaced = path.replace('+', " ");
    let bytes = urlencoding::decode_binary(spaced.as_bytes());
    Cow::Owned(String::from_utf8_lossy(&bytes).into_owned())
}

/// Lower-cased extension of the last path segment, dot included.
///
/// Empty when the segment has no dot or ends with one.
pub fn extension_of(path: &str) -> String {
    let name = path.rsplit(['/', '\\']).next().unwrap_or(path);
    match name.rfind('.') {
        Some(dot) if dot + 1 < name.len() => name[dot..].to_ascii_lowercase(),
        _ => String::new(),
    }
}

/// Whether a path is rooted: it starts with a separator, or with a drive
/// letter such as `C:`.
pub fn is_rooted(path: &str) -> bool {
    let bytes = path.as_bytes();
    match bytes {
        [b'/' | b'\\', ..] => true,
        [letter, b':', ..] => letter.is_ascii_alphabetic(),
        _ => false,
    }
}
