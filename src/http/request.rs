use std::collections::HashMap;

/// HTTP request methods.
///
/// The parser accepts the common verbs; routing only distinguishes GET and
/// POST (for the file routes), every other combination falls through to 404.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    GET,
    POST,
    PUT,
    DELETE,
    HEAD,
    OPTIONS,
    PATCH,
}

impl Method {
    /// Parses an HTTP method from its wire token (case-sensitive, uppercase).
    ///
    /// # Example
    ///
    /// ```
    /// # use courier::http::request::Method;
    /// assert_eq!(Method::from_str("GET"), Some(Method::GET));
    /// assert_eq!(Method::from_str("get"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "GET" => Some(Method::GET),
            "POST" => Some(Method::POST),
            "PUT" => Some(Method::PUT),
            "DELETE" => Some(Method::DELETE),
            "HEAD" => Some(Method::HEAD),
            "OPTIONS" => Some(Method::OPTIONS),
            "PATCH" => Some(Method::PATCH),
            _ => None,
        }
    }
}

/// A parsed HTTP request.
///
/// Header names are normalized to lowercase by the parser, so lookups
/// through [`Request::header`] are case-insensitive; duplicate headers keep
/// the last value. The body holds exactly Content-Length bytes.
#[derive(Debug, Clone)]
pub struct Request {
    /// Method parsed from the request line
    pub method: Method,
    /// The request path (e.g. "/echo/abc"), always starting with `/`
    pub path: String,
    /// HTTP version token (typically "HTTP/1.1")
    pub version: String,
    /// Request headers, names lowercased
    pub headers: HashMap<String, String>,
    /// Request body for POST requests
    pub body: Vec<u8>,
}

/// Builder for constructing `Request` values, mainly in tests.
pub struct RequestBuilder {
    method: Option<Method>,
    path: Option<String>,
    version: Option<String>,
    headers: HashMap<String, String>,
    body: Vec<u8>,
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self {
            method: None,
            path: None,
            version: None,
            headers: HashMap::new(),
            body: Vec::new(),
        }
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Adds a header. Names are lowercased, matching what the parser stores.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .insert(key.into().to_ascii_lowercase(), value.into());
        self
    }

    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self
    }

    pub fn build(self) -> Result<Request, &'static str> {
        Ok(Request {
            method: self.method.ok_or("method missing")?,
            path: self.path.ok_or("path missing")?,
            version: self.version.unwrap_or_else(|| "HTTP/1.1".to_string()),
            headers: self.headers,
            body: self.body,
        })
    }
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Request {
    /// Retrieves a header value by name, case-insensitively.
    ///
    /// # Example
    ///
    /// ```
    /// # use courier::http::request::{Method, RequestBuilder};
    /// let req = RequestBuilder::new()
    ///     .method(Method::GET)
    ///     .path("/")
    ///     .header("User-Agent", "stub/1.0")
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(req.header("user-agent"), Some("stub/1.0"));
    /// assert_eq!(req.header("USER-AGENT"), Some("stub/1.0"));
    /// ```
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .get(key.to_ascii_lowercase().as_str())
            .map(|v| v.as_str())
    }

    /// The Content-Length header parsed as a usize.
    ///
    /// Returns 0 if the header is missing or not a valid number.
    pub fn content_length(&self) -> usize {
        self.header("Content-Length")
            .and_then(|v| v.parse().ok())
            .unwrap_or(0)
    }

    /// The User-Agent header value, or the empty string if absent.
    pub fn user_agent(&self) -> &str {
        self.header("User-Agent").unwrap_or("")
    }

    /// The raw Accept-Encoding header value, or the empty string if absent.
    pub fn accept_encoding(&self) -> &str {
        self.header("Accept-Encoding").unwrap_or("")
    }
}
