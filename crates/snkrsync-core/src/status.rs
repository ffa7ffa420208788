//! Per-article scrape status tracking.
//!
//! One record per submitted article, keyed by article code. The store is a
//! pure state container: the channel session writes into it, the rendering
//! layer reads from it. Absence of a record means "not yet submitted".

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Scrape progress for a single article within one channel session.
///
/// Modeled as a tagged enum so the "at most one of loading/success/error"
/// invariant is structural rather than convention-enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ScrapeStatus {
    /// Submitted, no response yet
    Pending,
    /// Scrape finished; carries the re-serialized shoe payload
    Succeeded { data: serde_json::Value },
    /// Scrape failed server-side for this article
    Failed { reason: String },
}

impl ScrapeStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn is_succeeded(&self) -> bool {
        matches!(self, Self::Succeeded { .. })
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// Mapping from article code to scrape status.
///
/// Append/update-only during a session; `clear` is called only when a new
/// channel session begins. Duplicate messages for the same article overwrite
/// the previous record (last write wins).
#[derive(Debug, Clone, Default)]
pub struct StatusStore {
    records: HashMap<String, ScrapeStatus>,
}

impl StatusStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the status for an article, if it was submitted this session.
    pub fn get(&self, article: &str) -> Option<&ScrapeStatus> {
        self.records.get(article)
    }

    /// Marks an article as submitted and awaiting a response.
    pub fn mark_pending(&mut self, article: impl Into<String>) {
        self.records.insert(article.into(), ScrapeStatus::Pending);
    }

    /// Records a successful scrape result for an article.
    pub fn mark_succeeded(&mut self, article: impl Into<String>, data: serde_json::Value) {
        self.records
            .insert(article.into(), ScrapeStatus::Succeeded { data });
    }

    /// Records a server-side scrape failure for an article.
    pub fn mark_failed(&mut self, article: impl Into<String>, reason: impl Into<String>) {
        self.records.insert(
            article.into(),
            ScrapeStatus::Failed {
                reason: reason.into(),
            },
        );
    }

    /// Empties the store. Used only when a new channel session begins.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Articles still awaiting a response.
    pub fn pending_articles(&self) -> Vec<&str> {
        self.records
            .iter()
            .filter(|(_, s)| s.is_pending())
            .map(|(a, _)| a.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_absent_means_not_submitted() {
        let store = StatusStore::new();
        assert!(store.get("A123").is_none());
    }

    #[test]
    fn test_pending_then_succeeded() {
        let mut store = StatusStore::new();
        store.mark_pending("A123");
        assert!(store.get("A123").unwrap().is_pending());

        store.mark_succeeded("A123", json!({"price": 99.0}));
        let status = store.get("A123").unwrap();
        assert!(status.is_succeeded());
        assert!(!status.is_pending());
        assert!(!status.is_failed());
    }

    #[test]
    fn test_failure_keeps_reason() {
        let mut store = StatusStore::new();
        store.mark_pending("A123");
        store.mark_failed("A123", "scraper timeout");

        match store.get("A123").unwrap() {
            ScrapeStatus::Failed { reason } => assert_eq!(reason, "scraper timeout"),
            other => panic!("expected Failed, got {other:?}"),
        }
    }

    #[test]
    fn test_updates_do_not_touch_other_articles() {
        let mut store = StatusStore::new();
        store.mark_pending("A123");
        store.mark_pending("B456");

        store.mark_succeeded("A123", json!({}));
        assert!(store.get("B456").unwrap().is_pending());
    }

    #[test]
    fn test_last_write_wins_on_duplicates() {
        let mut store = StatusStore::new();
        store.mark_succeeded("A123", json!({"v": 1}));
        store.mark_failed("A123", "retry failed");
        assert!(store.get("A123").unwrap().is_failed());
    }

    #[test]
    fn test_clear_empties_store() {
        let mut store = StatusStore::new();
        store.mark_pending("A123");
        store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn test_pending_articles_lists_only_pending() {
        let mut store = StatusStore::new();
        store.mark_pending("A123");
        store.mark_pending("B456");
        store.mark_succeeded("B456", json!({}));

        assert_eq!(store.pending_articles(), vec!["A123"]);
    }
}
