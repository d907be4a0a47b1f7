use bytes::{Buf, BytesMut};
use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;

use crate::http::parser::{ParseError, parse_http_request};
use crate::http::request::Request;
use crate::http::writer::ResponseWriter;
use crate::router::Router;

/// One accepted TCP connection, serving exactly one request.
///
/// The connection reads until a full request parses, routes it, writes the
/// full response, then closes. There is no keep-alive: after the Writing
/// state the machine always moves to Closed. A malformed request surfaces
/// as an error from [`Connection::run`], which the listener logs; only this
/// connection is affected.
pub struct Connection {
    stream: TcpStream,
    buffer: BytesMut,
    router: Router,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Processing(Request),
    Writing(ResponseWriter),
    Closed,
}

impl Connection {
    pub fn new(stream: TcpStream, router: Router) -> Self {
        Self {
            stream,
            buffer: BytesMut::with_capacity(4096),
            router,
            state: ConnectionState::Reading,
        }
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::Reading => {
                    match self.read_request().await? {
                        Some(req) => {
                            self.state = ConnectionState::Processing(req);
                        }
                        None => {
                            self.state = ConnectionState::Closed;
                        }
                    }
                }

                ConnectionState::Processing(req) => {
                    let response = self.router.route(req).await;

                    let writer = ResponseWriter::new(response)?;
                    self.state = ConnectionState::Writing(writer);
                }

                ConnectionState::Writing(writer) => {
                    writer.write_to_stream(&mut self.stream).await?;

                    // One request per connection
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    /// Reads until the buffer holds one full request. `None` means the
    /// client closed before sending a complete request.
    pub async fn read_request(&mut self) -> anyhow::Result<Option<Request>> {
        loop {
            match parse_http_request(&self.buffer) {
                Ok((request, consumed)) => {
                    self.buffer.advance(consumed);
                    return Ok(Some(request));
                }

                // Not enough buffered yet, keep reading
                Err(ParseError::Incomplete) => {}

                Err(e) => {
                    return Err(anyhow::anyhow!("HTTP parse error: {:?}", e));
                }
            }

            if self.stream.read_buf(&mut self.buffer).await? == 0 {
                // EOF before a full request
                return Ok(None);
            }
        }
    }
}
