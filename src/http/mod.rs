//! HTTP protocol implementation.
//!
//! This module implements the HTTP/1.1 subset this server speaks: one
//! request per connection, Content-Length bodies only, no keep-alive, no
//! chunked transfer.
//!
//! # Architecture
//!
//! The HTTP layer is organized into several submodules:
//!
//! - **`connection`**: the per-connection handler implementing the request-response state machine
//! - **`parser`**: parses incoming HTTP requests from byte buffers
//! - **`request`**: HTTP request representation and header accessors
//! - **`response`**: status catalog plus the content and response types routes produce
//! - **`encoder`**: conditional gzip compression of response content
//! - **`writer`**: serializes and writes HTTP responses to the client
//!
//! # Connection State Machine
//!
//! Each client connection makes a single pass through a state machine:
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Wait for incoming request data
//!        └──────┬──────┘
//!               │ Request received
//!               ▼
//!        ┌──────────────────┐
//!        │   Processing     │ ← Route the request, build the content
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Encode, serialize, send to client
//!        └──────┬───────────┘
//!               │ Response sent
//!               └─ Closed (one request per connection)
//! ```

pub mod connection;
pub mod encoder;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
