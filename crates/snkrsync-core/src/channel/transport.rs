//! Transport seam for the scrape channel.
//!
//! The session drives a `ChannelTransport` without knowing whether it is a
//! real WebSocket or a scripted test double.

use crate::error::Result;

/// An event produced by the transport's receive side.
#[derive(Debug, Clone, PartialEq)]
pub enum TransportEvent {
    /// A text frame arrived
    Message(String),
    /// The peer closed the connection (or the stream ended)
    Closed,
    /// The connection failed
    Failed(String),
}

/// One bidirectional text-message connection.
///
/// Implementations are owned exclusively by a single [`ChannelSession`];
/// there is no cross-session sharing.
///
/// [`ChannelSession`]: super::ChannelSession
#[async_trait::async_trait]
pub trait ChannelTransport: Send {
    /// Establishes the connection.
    ///
    /// # Errors
    ///
    /// Returns a `Transport` error if the handshake fails.
    async fn connect(&mut self) -> Result<()>;

    /// Sends one text frame.
    ///
    /// # Errors
    ///
    /// Returns a `Transport` error if the connection is gone.
    async fn send_text(&mut self, text: String) -> Result<()>;

    /// Waits for the next receive-side event.
    ///
    /// Returns `Closed` forever once the connection has ended.
    async fn next_event(&mut self) -> TransportEvent;

    /// Closes the connection. Safe to call multiple times.
    async fn close(&mut self);
}
