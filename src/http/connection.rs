use std::sync::Arc;

use bytes::{Buf, BytesMut};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use crate::files::StaticHandler;
use crate::http::parser::{self, ParseError};
use crate::http::request::Request;
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;

/// Upper bound on buffered header bytes before the request is rejected.
const MAX_HEADER_BYTES: usize = 64 * 1024;

pub struct Connection {
    stream: TcpStream,
    buffer: BytesMut,
    state: ConnectionState,
    handler: Arc<StaticHandler>,
}

pub enum ConnectionState {
    Reading,
    Processing(Request),
    Writing(ResponseWriter),
    Closed,
}

impl Connection {
    pub fn new(stream: TcpStream, handler: Arc<StaticHandler>) -> Self {
        Self {
            stream,
            buffer: BytesMut::with_capacity(4096),
            state: ConnectionState::Reading,
            handler,
        }
    }

    /// Drives the connection through one request/response cycle.
    ///
    /// There is no transition from Writing back to Reading: an accepted
    /// socket serves exactly one request and is then shut down.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::Reading => {
                    match self.read_request().await? {
                        Some(Ok(request)) => {
                            self.state = ConnectionState::Processing(request);
                        }
                        Some(Err(err)) => {
                            tracing::debug!(error = ?err, "Malformed request");
                            let writer = ResponseWriter::new(&Response::bad_request());
                            self.state = ConnectionState::Writing(writer);
                        }
                        None => {
                            // peer closed before completing a request
                            self.state = ConnectionState::Closed;
                        }
                    }
                }

                ConnectionState::Processing(request) => {
                    let response = self.handler.handle(request).await;
                    tracing::info!(
                        "{:?} {} {}",
                        request.method,
                        request.uri,
                        response.status.as_u16()
                    );

                    let writer = ResponseWriter::new(&response);
                    self.state = ConnectionState::Writing(writer);
                }

                ConnectionState::Writing(writer) => {
                    writer.write_to_stream(&mut self.stream).await?;
                    self.stream.shutdown().await.ok();
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    /// Accumulates bytes until the request terminator arrives.
    ///
    /// Returns `None` when the peer closes before completing a request,
    /// `Some(Err(..))` when the header block is malformed or oversized.
    async fn read_request(&mut self) -> anyhow::Result<Option<Result<Request, ParseError>>> {
        loop {
            // Try to cut a complete header block from what we already have
            if let Some((end, terminator_len)) = parser::find_request_end(&self.buffer) {
                let block = self.buffer.split_to(end);
                self.buffer.advance(terminator_len);
                return Ok(Some(parser::parse_request(&block)));
            }

            if self.buffer.len() > MAX_HEADER_BYTES {
                return Ok(Some(Err(ParseError::HeadersTooLarge)));
            }

            let n = self.stream.read_buf(&mut self.buffer).await?;
            if n == 0 {
                return Ok(None);
            }
        }
    }
}
