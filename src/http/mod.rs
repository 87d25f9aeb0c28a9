//! HTTP protocol implementation.
//!
//! This module implements the HTTP/1.x layer: one request in, one response
//! out, connection closed.
//!
//! # Architecture
//!
//! The HTTP layer is organized into several submodules:
//!
//! - **`connection`**: The main connection handler implementing the request-response state machine
//! - **`parser`**: Request boundary detection and header block parsing
//! - **`request`**: HTTP request representation and construction utilities
//! - **`response`**: HTTP response representation with fixed-message helpers
//! - **`writer`**: Serializes and writes HTTP responses to the client
//! - **`mime`**: Content type lookup based on file extensions
//!
//! # Connection State Machine
//!
//! Each client connection goes through a state machine:
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Wait for the full request header block
//!        └──────┬──────┘
//!               │ Request received (malformed input skips
//!               ▼  straight to Writing with a 400)
//!        ┌──────────────────┐
//!        │   Processing     │ ← Resolve the path, generate a response
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Drain the response to the client
//!        └──────┬───────────┘
//!               │ Response sent
//!               ▼
//!             Closed
//! ```
//!
//! There is no edge from Writing back to Reading: the server answers
//! exactly one request per accepted socket and closes it.

pub mod request;
pub mod response;
pub mod parser;
pub mod connection;
pub mod writer;
pub mod mime;
