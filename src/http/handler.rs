use tracing::{debug, error, warn};

use crate::config::ServerConfig;
use crate::error::{RequestError, RequestResult};
use crate::files::resolver::{PathResolver, read_text};
use crate::http::parser::parse_request_line;
use crate::http::response::Response;

/// Turns the text of one request into the response to send back.
///
/// Never fails: every problem becomes an error response with the matching
/// status.
pub async fn process_request(config: &ServerConfig, input: &str) -> Response {
    match serve(config, input).await {
        Ok(response) => response,
        Err(e) => {
            match &e {
                RequestError::Io(io) => error!(error = %io, "Error reading requested file"),
                RequestError::NotFound(path) => debug!(path = %path.display(), "File not found"),
                other => warn!(reason = %other, "Request rejected"),
            }
            Response::error(e.status())
        }
    }
}

async fn serve(config: &ServerConfig, input: &str) -> RequestResult<Response> {
    let request = parse_request_line(input)?;

    if !request.is_supported_method() {
        return Err(RequestError::MethodNotAllowed(request.method));
    }

    let resolver = PathResolver::new(config);
    let target = resolver.resolve(&request.path).await?;
    let content = read_text(&target).await?;

    Ok(Response::ok(target.content_type, content))
}
