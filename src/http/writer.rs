use std::time::SystemTime;

use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::http::response::Response;

const HTTP_VERSION: &str = "HTTP/1.1";
const SERVER_NAME: &str = concat!("staticd/", env!("CARGO_PKG_VERSION"));

/// Serializes a response into the exact bytes sent on the wire.
///
/// Header order is fixed: Date, Content-Type, Content-Length, Connection,
/// Server. Every connection closes after one response, so Connection is
/// always `close`. The Date value is an RFC 7231 HTTP-date.
pub fn serialize_response(resp: &Response) -> Vec<u8> {
    let mut buf = Vec::with_capacity(resp.body.len() + 256);

    // Status line
    let status_line = format!(
        "{} {} {}\r\n",
        HTTP_VERSION,
        resp.status.as_u16(),
        resp.status.reason_phrase()
    );
    buf.extend_from_slice(status_line.as_bytes());

    // Headers
    let date = httpdate::fmt_http_date(SystemTime::now());
    buf.extend_from_slice(format!("Date: {date}\r\n").as_bytes());
    buf.extend_from_slice(format!("Content-Type: {}\r\n", resp.content_type).as_bytes());
    buf.extend_from_slice(format!("Content-Length: {}\r\n", resp.content_length).as_bytes());
    buf.extend_from_slice(b"Connection: close\r\n");
    buf.extend_from_slice(format!("Server: {SERVER_NAME}\r\n").as_bytes());

    // Header/body separator
    buf.extend_from_slice(b"\r\n");

    // Body
    buf.extend_from_slice(&resp.body);

    buf
}

/// Drains a serialized response to the peer across one or more writes.
pub struct ResponseWriter {
    buffer: Vec<u8>,
    written: usize,
}

impl ResponseWriter {
    pub fn new(response: &Response) -> Self {
        Self {
            buffer: serialize_response(response),
            written: 0,
        }
    }

    /// Bytes not yet accepted by the socket.
    pub fn pending(&self) -> &[u8] {
        &self.buffer[self.written..]
    }

    /// Marks `n` bytes as sent. Partial sends are the normal case, not an
    /// error.
    pub fn advance(&mut self, n: usize) {
        self.written = (self.written + n).min(self.buffer.len());
    }

    pub fn is_done(&self) -> bool {
        self.written >= self.buffer.len()
    }

    pub async fn write_to_stream<S>(&mut self, stream: &mut S) -> anyhow::Result<()>
    where
        S: AsyncWrite + Unpin,
    {
        while !self.is_done() {
            let n = stream.write(self.pending()).await?;

            if n == 0 {
                return Err(anyhow::anyhow!("connection closed while writing"));
            }

            self.advance(n);
        }

        Ok(())
    }
}
