//! Injected ID generation.
//!
//! Notification records need unique ids for the rendering layer to key on.
//! The generator is an explicit capability passed in at construction time
//! instead of an ambient module-level singleton, so tests can make ids
//! deterministic.

use std::sync::atomic::{AtomicU64, Ordering};

/// Capability for generating unique ids.
pub trait RequestIdProvider: Send + Sync {
    /// Returns a new id, unique within the process.
    fn next_id(&self) -> String;
}

/// Default provider backed by UUID v4.
#[derive(Debug, Clone, Default)]
pub struct UuidRequestIdProvider;

impl RequestIdProvider for UuidRequestIdProvider {
    fn next_id(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

/// Sequential provider for tests that assert on ids.
#[derive(Debug, Default)]
pub struct SequentialIdProvider {
    counter: AtomicU64,
}

impl RequestIdProvider for SequentialIdProvider {
    fn next_id(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed);
        format!("id-{n}")
    }
}
