//! User-facing notification seam.
//!
//! The original UI surfaced failures as toasts; the core only knows the
//! seam. De-duplication of repeated notifications is the channel session's
//! job, not the notifier's.

use serde::{Deserialize, Serialize};

/// Notification severity, mirroring the toast levels the UI renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Error,
}

/// A user-visible notification record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    /// Unique id for the rendering layer to key on
    pub id: String,
    pub severity: Severity,
    pub message: String,
    /// Creation timestamp (ISO 8601 format)
    pub created_at: String,
}

/// Sink for user-visible notifications.
pub trait Notifier: Send + Sync {
    /// Surfaces an error to the user.
    fn notify_error(&self, message: &str);

    /// Surfaces an informational message to the user.
    fn notify_info(&self, message: &str);
}

/// Notifier that discards everything. Useful in tests and headless runs.
#[derive(Debug, Clone, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify_error(&self, _message: &str) {}

    fn notify_info(&self, _message: &str) {}
}
