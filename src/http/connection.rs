use std::sync::Arc;

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};

use crate::config::ServerConfig;
use crate::http::handler::process_request;
use crate::http::parser::first_line;
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;

/// Upper bound on how much of a request is read. Only one read is issued.
pub const READ_BUFFER_SIZE: usize = 4096;

pub struct Connection<S> {
    stream: S,
    config: Arc<ServerConfig>,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Processing(String),
    Writing(ResponseWriter),
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, config: Arc<ServerConfig>) -> Self {
        Self {
            stream,
            config,
            state: ConnectionState::Reading,
        }
    }

    /// Serves exactly one request and closes the stream.
    ///
    /// If anything fails before the response has started going out, a 500 is
    /// written on a best-effort basis. The stream is shut down on every path.
    pub async fn run(mut self) -> anyhow::Result<()> {
        let result = self.drive().await;

        if result.is_err() && self.nothing_written() {
            let mut fallback = ResponseWriter::new(&Response::internal_error());
            let _ = fallback.write_to_stream(&mut self.stream).await;
        }

        let _ = self.stream.shutdown().await;
        result
    }

    async fn drive(&mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::Reading => match self.read_request().await? {
                    Some(text) => self.state = ConnectionState::Processing(text),
                    None => {
                        debug!("Client closed connection before sending a request");
                        self.state = ConnectionState::Closed;
                    }
                },

                ConnectionState::Processing(text) => {
                    info!(request = %first_line(text), "Request received");

                    let response = process_request(&self.config, text).await;
                    info!(status = response.status.as_u16(), "Sending response");

                    self.state = ConnectionState::Writing(ResponseWriter::new(&response));
                }

                ConnectionState::Writing(writer) => {
                    writer.write_to_stream(&mut self.stream).await?;
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => break,
            }
        }

        Ok(())
    }

    /// One read of at most [`READ_BUFFER_SIZE`] bytes. `None` means the peer
    /// disconnected without sending anything.
    async fn read_request(&mut self) -> anyhow::Result<Option<String>> {
        let mut buf = vec![0u8; READ_BUFFER_SIZE];
        let n = self.stream.read(&mut buf).await?;

        if n == 0 {
            return Ok(None);
        }

        Ok(Some(String::from_utf8_lossy(&buf[..n]).into_owned()))
    }

    fn nothing_written(&self) -> bool {
        match &self.state {
            ConnectionState::Writing(writer) => writer.written() == 0,
            ConnectionState::Closed => false,
            _ => true,
        }
    }
}
