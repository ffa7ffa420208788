//! Channel session lifecycle and inbound message routing.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::error::{Result, SnkrError};
use crate::notify::Notifier;
use crate::selection::SelectionManager;
use crate::status::StatusStore;

use super::message::{InboundMessage, encode_request};
use super::transport::{ChannelTransport, TransportEvent};

/// Lifecycle state of a channel session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Closed,
    Connecting,
    Open,
    /// Connection-level failure; falls through to `Closed`
    Errored,
}

/// One lifetime of the scrape channel, scoped to a modal.
///
/// The session owns the transport, submits the batch request once, and
/// demultiplexes the streamed per-article responses into its status store.
/// It is owned exclusively by the UI scope that opened the modal and must be
/// closed on every exit path (cancel, navigation, unmount).
pub struct ChannelSession {
    state: SessionState,
    transport: Box<dyn ChannelTransport>,
    notifier: Arc<dyn Notifier>,
    store: StatusStore,
    /// Articles of the current submission; inbound messages for anything
    /// else are stale and get dropped
    submitted: HashSet<String>,
    /// Articles that already produced an error notification this session
    notified_articles: HashSet<String>,
    transport_error_notified: bool,
    batch_error_notified: bool,
}

impl ChannelSession {
    /// Creates a session over the given transport. No connection is made
    /// until [`open`](Self::open) is called.
    pub fn new(transport: Box<dyn ChannelTransport>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            state: SessionState::Closed,
            transport,
            notifier,
            store: StatusStore::new(),
            submitted: HashSet::new(),
            notified_articles: HashSet::new(),
            transport_error_notified: false,
            batch_error_notified: false,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Read access to the per-article status store for the rendering layer.
    pub fn store(&self) -> &StatusStore {
        &self.store
    }

    /// Establishes the channel connection and starts a fresh session.
    ///
    /// Idempotent while `Connecting` or `Open`. Opening from `Closed`
    /// clears the status store and all per-session bookkeeping.
    ///
    /// # Errors
    ///
    /// Returns a `Transport` error if the handshake fails; the session ends
    /// up `Errored` and the failure is surfaced once via notification.
    pub async fn open(&mut self) -> Result<()> {
        if matches!(self.state, SessionState::Connecting | SessionState::Open) {
            debug!("open() called while already {:?}, ignoring", self.state);
            return Ok(());
        }

        self.state = SessionState::Connecting;
        self.store.clear();
        self.submitted.clear();
        self.notified_articles.clear();
        self.transport_error_notified = false;
        self.batch_error_notified = false;

        match self.transport.connect().await {
            Ok(()) => {
                self.state = SessionState::Open;
                info!("scrape channel open");
                Ok(())
            }
            Err(e) => {
                self.fail(&e.to_string());
                Err(e)
            }
        }
    }

    /// Submits the current selection as one batch request.
    ///
    /// Every selected article is marked pending before the send goes out,
    /// so the UI shows progress immediately (optimistic transition).
    ///
    /// # Errors
    ///
    /// Returns `NotReady` unless the session is `Open`, `EmptySelection`
    /// for an empty selection, and a `Transport` error if the send fails.
    pub async fn submit(&mut self, selection: &SelectionManager) -> Result<()> {
        if self.state != SessionState::Open {
            return Err(SnkrError::not_ready(format!(
                "cannot submit while channel is {:?}",
                self.state
            )));
        }
        if selection.is_empty() {
            return Err(SnkrError::EmptySelection);
        }

        let items = selection.to_request();
        for item in &items {
            self.store.mark_pending(item.article.clone());
            self.submitted.insert(item.article.clone());
        }

        let payload = encode_request(&items)?;
        info!(count = items.len(), "submitting batch re-scrape request");
        if let Err(e) = self.transport.send_text(payload).await {
            self.fail(&e.to_string());
            return Err(e);
        }
        Ok(())
    }

    /// Routes one inbound text frame into the status store.
    ///
    /// Unparseable frames are dropped with a log entry only - transport
    /// noise is not a business failure. Articles outside the current
    /// submission are ignored as stale.
    pub fn handle_message(&mut self, raw: &str) {
        let message = match InboundMessage::decode(raw) {
            Ok(message) => message,
            Err(e) => {
                warn!("dropping malformed channel message: {e}");
                return;
            }
        };

        match message {
            InboundMessage::Success { article, data } => {
                if !self.submitted.contains(&article) {
                    debug!(%article, "ignoring success for article outside current submission");
                    return;
                }
                debug!(%article, "scrape succeeded");
                self.store.mark_succeeded(article, data);
            }
            InboundMessage::Error {
                article: Some(article),
                error,
            } => {
                if !self.submitted.contains(&article) {
                    debug!(%article, "ignoring error for article outside current submission");
                    return;
                }
                self.store.mark_failed(article.clone(), error.clone());
                if self.notified_articles.insert(article.clone()) {
                    self.notifier
                        .notify_error(&format!("Re-scrape failed for {article}: {error}"));
                }
            }
            InboundMessage::Error {
                article: None,
                error,
            } => {
                // Server rejected the batch before processing any item
                warn!("batch rejected by server: {error}");
                if !self.batch_error_notified {
                    self.batch_error_notified = true;
                    self.notifier
                        .notify_error(&format!("Re-scrape request rejected: {error}"));
                }
            }
            InboundMessage::Unknown => {
                warn!("dropping channel message with unrecognized shape");
            }
        }
    }

    /// Handles one transport event. Returns `false` once the session has
    /// ended and no further events should be pumped.
    pub async fn handle_event(&mut self, event: TransportEvent) -> bool {
        match event {
            TransportEvent::Message(text) => {
                self.handle_message(&text);
                true
            }
            TransportEvent::Closed => {
                self.close().await;
                false
            }
            TransportEvent::Failed(message) => {
                self.fail(&message);
                self.close().await;
                false
            }
        }
    }

    /// Drains transport events until the connection ends.
    pub async fn pump(&mut self) {
        loop {
            let event = self.transport.next_event().await;
            if !self.handle_event(event).await {
                break;
            }
        }
    }

    /// Closes the session. Safe to call from any state, any number of
    /// times.
    ///
    /// Articles still pending stay pending - no failure is synthesized for
    /// in-flight requests at close time.
    pub async fn close(&mut self) {
        if self.state == SessionState::Closed {
            return;
        }
        self.transport.close().await;
        self.state = SessionState::Closed;
        info!("scrape channel closed");
    }

    /// Records a connection-level failure: transitions to `Errored` and
    /// notifies the user once per session. No automatic retry; the user
    /// reopens the modal to try again.
    fn fail(&mut self, message: &str) {
        tracing::error!("scrape channel failed: {message}");
        self.state = SessionState::Errored;
        if !self.transport_error_notified {
            self.transport_error_notified = true;
            self.notifier
                .notify_error("Connection to the scrape service failed. Please try again.");
        }
    }
}
