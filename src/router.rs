//! Route dispatch: maps a parsed request to a response.

use tracing::{debug, error};

use crate::http::request::{Method, Request};
use crate::http::response::{Content, OCTET_STREAM, Response, StatusCode, TEXT_PLAIN};
use crate::store::FileStore;

/// Selects a handler for a request and builds the response content.
///
/// Dispatch is first match wins: `/` exact, `/user-agent` exact, `/echo`
/// prefix, `/files` prefix with GET, `/files` prefix with POST, otherwise
/// 404. The first three rules ignore the request method; the file rules
/// require theirs, so e.g. `PUT /files/x` falls through to 404.
///
/// The router owns the file store and is cloned into every connection task;
/// it holds no mutable state.
#[derive(Debug, Clone)]
pub struct Router {
    store: FileStore,
}

impl Router {
    pub fn new(store: FileStore) -> Self {
        Self { store }
    }

    pub async fn route(&self, request: &Request) -> Response {
        debug!(method = ?request.method, path = %request.path, "dispatching request");

        let path = request.path.as_str();

        if path == "/" {
            Response::empty(StatusCode::Ok)
        } else if path == "/user-agent" {
            Response::ok(Content::new(request.user_agent(), TEXT_PLAIN))
        } else if path.starts_with("/echo") {
            let arg = trim_route_prefix(path, "/echo/");
            Response::ok(Content::new(arg, TEXT_PLAIN).with_encoding(request.accept_encoding()))
        } else if path.starts_with("/files") && request.method == Method::GET {
            self.serve_file(trim_route_prefix(path, "/files/")).await
        } else if path.starts_with("/files") && request.method == Method::POST {
            self.store_file(trim_route_prefix(path, "/files/"), &request.body)
                .await
        } else {
            Response::not_found()
        }
    }

    /// `GET /files/<name>`: whole file as application/octet-stream, or an
    /// empty 404 when the read fails. Exactly one response either way.
    async fn serve_file(&self, name: &str) -> Response {
        match self.store.read(name).await {
            Ok(bytes) => Response::ok(Content::new(bytes, OCTET_STREAM)),
            Err(e) => {
                debug!(file = %name, error = %e, "file read failed");
                Response::not_found()
            }
        }
    }

    /// `POST /files/<name>`: writes the request body verbatim. Answers 201
    /// even when the write fails; the failure is only logged.
    async fn store_file(&self, name: &str, body: &[u8]) -> Response {
        if let Err(e) = self.store.write(name, body).await {
            error!(file = %name, error = %e, "file write failed");
        }

        Response::created()
    }
}

/// Trims `prefix` from `path`; a path without the prefix passes through
/// unchanged, so `/echo` stays `/echo` and `/echoxyz` stays `/echoxyz`.
fn trim_route_prefix<'a>(path: &'a str, prefix: &str) -> &'a str {
    path.strip_prefix(prefix).unwrap_or(path)
}
