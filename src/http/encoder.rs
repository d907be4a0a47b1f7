use std::io::{self, Write};

use flate2::Compression;
use flate2::write::GzEncoder;

use crate::http::response::Content;

/// Post-encoding payload, ready for serialization.
///
/// `content_encoding` is `Some("gzip")` exactly when the body was
/// compressed; `length` always equals `body.len()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoded {
    pub content_encoding: Option<&'static str>,
    pub content_type: &'static str,
    pub length: usize,
    pub body: Vec<u8>,
}

/// Applies the negotiated content encoding to route content.
///
/// The check is substring containment on the raw Accept-Encoding value, not
/// a parse of the token list: `"gzip"`, `"gzip, br"` and even `"x-gzip"`
/// all select gzip, anything else passes the body through untouched.
/// Compression runs at flate2's default level and the length is recomputed
/// from the compressed bytes.
pub fn encode(content: Content) -> io::Result<Encoded> {
    if content.encoding.is_empty() || !content.encoding.contains("gzip") {
        return Ok(Encoded {
            content_encoding: None,
            content_type: content.content_type,
            length: content.body.len(),
            body: content.body,
        });
    }

    let mut gz = GzEncoder::new(Vec::new(), Compression::default());
    gz.write_all(&content.body)?;
    let body = gz.finish()?;

    Ok(Encoded {
        content_encoding: Some("gzip"),
        content_type: content.content_type,
        length: body.len(),
        body,
    })
}
