use std::io;

use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;

use crate::http::encoder::{self, Encoded};
use crate::http::response::{Response, StatusCode};

const HTTP_VERSION: &str = "HTTP/1.1";

/// Serializes a response into HTTP/1.1 wire bytes.
///
/// Header order is fixed (Content-Encoding when present, then Content-Type,
/// then Content-Length) so the output is deterministic. A response without
/// content is just the status line terminated by a blank line.
fn serialize_response(status: StatusCode, payload: Option<&Encoded>) -> Vec<u8> {
    let mut buf = Vec::new();

    // Status line
    let status_line = format!(
        "{} {} {}\r\n",
        HTTP_VERSION,
        status.as_u16(),
        status.reason_phrase()
    );
    buf.extend_from_slice(status_line.as_bytes());

    match payload {
        None => buf.extend_from_slice(b"\r\n"),
        Some(payload) => {
            if let Some(encoding) = payload.content_encoding {
                buf.extend_from_slice(format!("Content-Encoding: {}\r\n", encoding).as_bytes());
            }
            buf.extend_from_slice(format!("Content-Type: {}\r\n", payload.content_type).as_bytes());
            buf.extend_from_slice(format!("Content-Length: {}\r\n", payload.length).as_bytes());

            // Header/body separator
            buf.extend_from_slice(b"\r\n");

            // Body bytes go out untouched; file contents need not be UTF-8
            buf.extend_from_slice(&payload.body);
        }
    }

    buf
}

pub struct ResponseWriter {
    buffer: Vec<u8>,
    written: usize,
}

impl ResponseWriter {
    /// Runs the content encoder over the payload and serializes the whole
    /// response into an owned buffer.
    pub fn new(response: Response) -> io::Result<Self> {
        let payload = response.content.map(encoder::encode).transpose()?;

        Ok(Self {
            buffer: serialize_response(response.status, payload.as_ref()),
            written: 0,
        })
    }

    /// The serialized wire bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.buffer
    }

    pub async fn write_to_stream(&mut self, stream: &mut TcpStream) -> anyhow::Result<()> {
        while self.written < self.buffer.len() {
            let n = stream.write(&self.buffer[self.written..]).await?;

            if n == 0 {
                return Err(anyhow::anyhow!("connection closed while writing"));
            }

            self.written += n;
        }

        Ok(())
    }
}
