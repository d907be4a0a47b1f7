/// HTTP status codes this server can emit.
///
/// The set is closed: every response is one of these three, so an
/// unsupported code cannot be constructed at all.
/// - `Ok` (200): request served
/// - `Created` (201): file stored
/// - `NotFound` (404): no route or no file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 201 Created
    Created,
    /// 404 Not Found
    NotFound,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use courier::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::Created => 201,
            StatusCode::NotFound => 404,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use courier::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    /// assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
    /// ```
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::Created => "Created",
            StatusCode::NotFound => "Not Found",
        }
    }
}

pub const TEXT_PLAIN: &str = "text/plain";
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Response payload produced by a route handler, before wire encoding.
///
/// `length` is the byte length of `body` (not a character count) and is
/// recomputed by the encoder if the body gets compressed. `encoding` holds
/// the raw Accept-Encoding header value of the request; only routes that
/// opt in to compression set it, everything else leaves it empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Content {
    /// Byte length of `body`
    pub length: usize,
    /// Payload bytes, possibly binary (file contents)
    pub body: Vec<u8>,
    /// MIME type sent as Content-Type
    pub content_type: &'static str,
    /// Raw Accept-Encoding value from the request, empty if absent
    pub encoding: String,
}

impl Content {
    /// Creates content with `length` pinned to the body's byte length and
    /// no requested encoding.
    pub fn new(body: impl Into<Vec<u8>>, content_type: &'static str) -> Self {
        let body = body.into();
        Self {
            length: body.len(),
            body,
            content_type,
            encoding: String::new(),
        }
    }

    /// Records the encoding the client asked for (raw header value).
    pub fn with_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.encoding = encoding.into();
        self
    }
}

/// A complete HTTP response ready for serialization.
///
/// `content: None` is the headerless form: the wire format is just the
/// status line followed by a blank line, with no Content-Type or
/// Content-Length at all. That is how `GET /`, 201 and 404 answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: StatusCode,
    pub content: Option<Content>,
}

impl Response {
    /// A headerless, bodyless response with the given status.
    pub fn empty(status: StatusCode) -> Self {
        Self {
            status,
            content: None,
        }
    }

    /// A 200 response carrying the given content.
    pub fn ok(content: Content) -> Self {
        Self {
            status: StatusCode::Ok,
            content: Some(content),
        }
    }

    /// The empty 201 sent after a file write.
    pub fn created() -> Self {
        Self::empty(StatusCode::Created)
    }

    /// The empty 404 for unknown routes and missing files.
    pub fn not_found() -> Self {
        Self::empty(StatusCode::NotFound)
    }
}
