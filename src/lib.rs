//! Webroot Server - minimal static file server
//!
//! Core library: request parsing, path resolution, response framing and
//! the accept loop, all on raw TCP streams.

pub mod config;
pub mod error;
pub mod files;
pub mod http;
pub mod server;
