//! Notifier that fans notifications out to the UI.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{error, info};

use snkrsync_core::id::RequestIdProvider;
use snkrsync_core::notify::{Notification, Notifier, Severity};

/// `Notifier` implementation that logs every notification and forwards a
/// structured record over an mpsc channel for the rendering layer to drain
/// into toasts.
pub struct ChannelNotifier {
    tx: mpsc::UnboundedSender<Notification>,
    ids: Arc<dyn RequestIdProvider>,
}

impl ChannelNotifier {
    /// Creates a notifier and the receiving end the UI consumes.
    pub fn new(ids: Arc<dyn RequestIdProvider>) -> (Self, mpsc::UnboundedReceiver<Notification>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx, ids }, rx)
    }

    fn push(&self, severity: Severity, message: &str) {
        let notification = Notification {
            id: self.ids.next_id(),
            severity,
            message: message.to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
        };
        // The UI side may already be gone during teardown; that is fine
        let _ = self.tx.send(notification);
    }
}

impl Notifier for ChannelNotifier {
    fn notify_error(&self, message: &str) {
        error!("{message}");
        self.push(Severity::Error, message);
    }

    fn notify_info(&self, message: &str) {
        info!("{message}");
        self.push(Severity::Info, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snkrsync_core::id::SequentialIdProvider;

    #[tokio::test]
    async fn test_notifications_arrive_with_ids_and_timestamps() {
        let ids = Arc::new(SequentialIdProvider::default());
        let (notifier, mut rx) = ChannelNotifier::new(ids);

        notifier.notify_error("scrape failed");
        notifier.notify_info("scrape done");

        let first = rx.recv().await.unwrap();
        assert_eq!(first.id, "id-0");
        assert_eq!(first.severity, Severity::Error);
        assert_eq!(first.message, "scrape failed");
        assert!(!first.created_at.is_empty());

        let second = rx.recv().await.unwrap();
        assert_eq!(second.severity, Severity::Info);
    }

    #[tokio::test]
    async fn test_dropped_receiver_does_not_panic() {
        let ids = Arc::new(SequentialIdProvider::default());
        let (notifier, rx) = ChannelNotifier::new(ids);
        drop(rx);

        notifier.notify_error("nobody listening");
    }
}
