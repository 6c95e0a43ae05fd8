//! Request failures and the status code each one is answered with.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::http::response::StatusCode;

/// Why a request could not be served.
///
/// Every variant is recovered into an error response by the request
/// pipeline; none of them tears down the connection.
#[derive(Error, Debug)]
pub enum RequestError {
    #[error("malformed request line")]
    BadRequest,

    #[error("method not allowed: {0}")]
    MethodNotAllowed(String),

    #[error("forbidden: {0}")]
    Forbidden(&'static str),

    #[error("not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl RequestError {
    pub fn status(&self) -> StatusCode {
        match self {
            RequestError::BadRequest => StatusCode::BadRequest,
            RequestError::MethodNotAllowed(_) => StatusCode::MethodNotAllowed,
            RequestError::Forbidden(_) => StatusCode::Forbidden,
            RequestError::NotFound(_) => StatusCode::NotFound,
            RequestError::Io(_) => StatusCode::InternalServerError,
        }
    }
}

pub type RequestResult<T> = Result<T, RequestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_variant_maps_to_its_status() {
        assert_eq!(RequestError::BadRequest.status().as_u16(), 400);
        assert_eq!(RequestError::Forbidden("x").status().as_u16(), 403);
        assert_eq!(RequestError::NotFound(PathBuf::from("a")).status().as_u16(), 404);
        assert_eq!(
            RequestError::MethodNotAllowed("POST".into()).status().as_u16(),
            405
        );
        let io = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        assert_eq!(RequestError::from(io).status().as_u16(), 500);
    }
}
