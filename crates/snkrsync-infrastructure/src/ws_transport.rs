//! WebSocket transport for the scrape channel.

use std::time::Duration;

use async_trait::async_trait;
use futures::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};
use tracing::{debug, warn};

use snkrsync_core::channel::{ChannelTransport, TransportEvent};
use snkrsync_core::config::ChannelConfig;
use snkrsync_core::error::{Result, SnkrError};

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// `ChannelTransport` over a real WebSocket connection.
///
/// Only text frames carry protocol messages; binary, ping and pong frames
/// are consumed and skipped.
pub struct WsTransport {
    config: ChannelConfig,
    stream: Option<WsStream>,
}

impl WsTransport {
    pub fn new(config: ChannelConfig) -> Self {
        Self {
            config,
            stream: None,
        }
    }
}

#[async_trait]
impl ChannelTransport for WsTransport {
    async fn connect(&mut self) -> Result<()> {
        let timeout = Duration::from_secs(self.config.connect_timeout_secs);
        let connect = tokio::time::timeout(timeout, connect_async(&self.config.url))
            .await
            .map_err(|_| {
                SnkrError::transport(format!(
                    "handshake timed out after {}s",
                    self.config.connect_timeout_secs
                ))
            })?;

        let (stream, _response) =
            connect.map_err(|e| SnkrError::transport(format!("connect failed: {e}")))?;
        debug!(url = %self.config.url, "websocket connected");
        self.stream = Some(stream);
        Ok(())
    }

    async fn send_text(&mut self, text: String) -> Result<()> {
        let stream = self
            .stream
            .as_mut()
            .ok_or_else(|| SnkrError::transport("not connected"))?;
        stream
            .send(Message::Text(text))
            .await
            .map_err(|e| SnkrError::transport(format!("send failed: {e}")))
    }

    async fn next_event(&mut self) -> TransportEvent {
        let Some(stream) = self.stream.as_mut() else {
            return TransportEvent::Closed;
        };

        loop {
            match stream.next().await {
                Some(Ok(Message::Text(text))) => {
                    return TransportEvent::Message(text.to_string());
                }
                Some(Ok(Message::Close(_))) | None => return TransportEvent::Closed,
                Some(Ok(other)) => {
                    debug!("skipping non-text frame: {other:?}");
                }
                Some(Err(e)) => return TransportEvent::Failed(e.to_string()),
            }
        }
    }

    async fn close(&mut self) {
        if let Some(mut stream) = self.stream.take() {
            if let Err(e) = stream.close(None).await {
                warn!("websocket close failed: {e}");
            }
        }
    }
}
