//! Courier - Minimal HTTP/1.1 File Server
//!
//! Core library: request parsing, route dispatch, content encoding, and the
//! connection plumbing around them.

pub mod config;
pub mod http;
pub mod router;
pub mod server;
pub mod store;
