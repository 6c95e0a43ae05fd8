//! HTTP protocol implementation.
//!
//! A deliberately small HTTP/1.1 subset: one request per connection, GET
//! only, request headers and bodies ignored, every response closes the
//! connection.
//!
//! # Architecture
//!
//! - **`connection`**: Per-connection state machine (read, process, write, close)
//! - **`parser`**: Splits the request line into method, path and version
//! - **`handler`**: Runs the pipeline from request text to response
//! - **`request`**: The parsed request line
//! - **`response`**: Status codes, error pages and the response builder
//! - **`writer`**: Serializes and writes responses to the client
//! - **`mime`**: Content type by file extension
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Single read of up to 4096 bytes
//!        └──────┬──────┘
//!               │ Bytes received (zero bytes → Closed)
//!               ▼
//!        ┌──────────────────┐
//!        │   Processing     │ ← Parse, resolve, build response
//!        └──────┬───────────┘
//!               │ Response ready (errors become 4xx/5xx responses)
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send the whole response
//!        └──────┬───────────┘
//!               ▼
//!            Closed
//! ```
//!
//! An I/O error before anything is written triggers a best-effort
//! 500 response; the stream is shut down either way.

pub mod connection;
pub mod handler;
pub mod mime;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
