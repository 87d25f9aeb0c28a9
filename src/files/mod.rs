//! Static file serving.
//!
//! This module resolves request paths to files confined under the
//! document root and turns them into HTTP responses.

pub mod handler;
pub mod resolver;

pub use handler::StaticHandler;
pub use resolver::PathResolver;
