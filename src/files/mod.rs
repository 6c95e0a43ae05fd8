//! Mapping request paths onto files under the web root.
//!
//! Paths are checked lexically first (`..`, rooted paths, extension
//! allow-list), then looked up on disk and canonicalized so the file found
//! can never sit outside the web root.

pub mod resolver;

pub use resolver::{PathResolver, ResolvedTarget, SafePath};
