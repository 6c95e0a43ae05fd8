use bytes::{BufMut, Bytes, BytesMut};
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::http::response::Response;

const HTTP_VERSION: &str = "HTTP/1.1";

/// Renders status line, headers, blank line and body, all CRLF-framed.
pub fn serialize_response(resp: &Response) -> Bytes {
    let mut buf = BytesMut::with_capacity(128 + resp.body.len());

    // Status line
    let status_line = format!(
        "{} {} {}\r\n",
        HTTP_VERSION,
        resp.status.as_u16(),
        resp.status.reason_phrase()
    );
    buf.put_slice(status_line.as_bytes());

    for (k, v) in &resp.headers {
        buf.put_slice(k.as_bytes());
        buf.put_slice(b": ");
        buf.put_slice(v.as_bytes());
        buf.put_slice(b"\r\n");
    }

    // Header/body separator
    buf.put_slice(b"\r\n");

    buf.put_slice(&resp.body);

    buf.freeze()
}

pub struct ResponseWriter {
    buffer: Bytes,
    written: usize,
}

impl ResponseWriter {
    pub fn new(response: &Response) -> Self {
        Self {
            buffer: serialize_response(response),
            written: 0,
        }
    }

    /// Bytes already handed to the stream.
    pub fn written(&self) -> usize {
        self.written
    }

    /// Writes the whole response, then flushes.
    pub async fn write_to_stream<S>(&mut self, stream: &mut S) -> anyhow::Result<()>
    where
        S: AsyncWrite + Unpin,
    {
        while self.written < self.buffer.len() {
            let n = stream.write(&self.buffer[self.written..]).await?;

            if n == 0 {
                return Err(anyhow::anyhow!("connection closed while writing"));
            }

            self.written += n;
        }

        stream.flush().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::response::StatusCode;

    #[test]
    fn status_line_and_header_order() {
        let resp = Response::ok("text/css", "a{}");
        let raw = serialize_response(&resp);

        assert_eq!(
            &raw[..],
            b"HTTP/1.1 200 OK\r\nContent-Type: text/css\r\nContent-Length: 3\r\nConnection: close\r\n\r\na{}"
        );
    }

    #[tokio::test]
    async fn writes_everything_to_the_stream() {
        let resp = Response::error(StatusCode::NotFound);
        let expected = serialize_response(&resp);

        let mut out: Vec<u8> = Vec::new();
        let mut writer = ResponseWriter::new(&resp);
        writer.write_to_stream(&mut out).await.unwrap();

        assert_eq!(out, expected.to_vec());
        assert_eq!(writer.written(), expected.len());
    }
}
