//! Bounded selection of shoes for a batch re-scrape.
//!
//! The selection set is an ordered collection, unique by shoe id, bounded by
//! the plan-derived limit. Mutation only ever happens through explicit user
//! actions (toggle, select-latest, reset); there are no concurrent writers.

use crate::channel::message::ScrapeRequestItem;
use crate::entity::Shoe;

/// Tracks which shoes the user has chosen for a batch re-scrape.
///
/// Invariant: the selection never grows beyond `max_selectable`. Attempts to
/// add past the bound are silent no-ops - this is a UI affordance, not a
/// validated transaction.
#[derive(Debug, Clone)]
pub struct SelectionManager {
    selected: Vec<Shoe>,
    max_selectable: usize,
}

impl SelectionManager {
    /// Creates an empty selection bounded by `max_selectable`.
    ///
    /// The bound is resolved once per modal-open from the plan lookup and
    /// stays fixed for the lifetime of the selection.
    pub fn new(max_selectable: usize) -> Self {
        Self {
            selected: Vec::new(),
            max_selectable,
        }
    }

    /// Adds the shoe if absent, removes it if present.
    ///
    /// Removal is always allowed. Adding is a no-op once the selection is at
    /// capacity.
    pub fn toggle(&mut self, shoe: &Shoe) {
        if let Some(pos) = self.selected.iter().position(|s| s.id == shoe.id) {
            self.selected.remove(pos);
        } else if self.selected.len() < self.max_selectable {
            self.selected.push(shoe.clone());
        }
    }

    /// Replaces the selection with the first `max_selectable` candidates.
    ///
    /// Candidate order is preserved, so "latest" is whatever order the
    /// parent view supplies. Deterministic and idempotent.
    pub fn select_latest(&mut self, candidates: &[Shoe]) {
        self.selected = candidates
            .iter()
            .take(self.max_selectable)
            .cloned()
            .collect();
    }

    /// Empties the selection unconditionally.
    pub fn reset(&mut self) {
        self.selected.clear();
    }

    /// Whether the shoe with the given id is currently selected.
    pub fn contains(&self, id: i64) -> bool {
        self.selected.iter().any(|s| s.id == id)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn max_selectable(&self) -> usize {
        self.max_selectable
    }

    /// The selected shoes, in selection order.
    pub fn shoes(&self) -> &[Shoe] {
        &self.selected
    }

    /// Serializes the selection into the outbound batch request.
    pub fn to_request(&self) -> Vec<ScrapeRequestItem> {
        self.selected
            .iter()
            .map(|s| ScrapeRequestItem {
                article: s.article.clone(),
                parse_from: s.parsed_from.clone(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shoe(id: i64) -> Shoe {
        Shoe::new(id, format!("A{id:03}"), format!("Shoe {id}"), 100.0, "Nike")
    }

    #[test]
    fn test_toggle_adds_and_removes() {
        let mut selection = SelectionManager::new(5);
        let s = shoe(1);

        selection.toggle(&s);
        assert!(selection.contains(1));

        selection.toggle(&s);
        assert!(!selection.contains(1));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_selection_never_exceeds_bound() {
        let mut selection = SelectionManager::new(5);
        for id in 0..20 {
            selection.toggle(&shoe(id));
        }
        assert_eq!(selection.len(), 5);
    }

    #[test]
    fn test_sixth_toggle_is_a_noop() {
        let mut selection = SelectionManager::new(5);
        for id in 0..5 {
            selection.toggle(&shoe(id));
        }
        assert_eq!(selection.len(), 5);

        selection.toggle(&shoe(99));
        assert_eq!(selection.len(), 5);
        assert!(!selection.contains(99));
    }

    #[test]
    fn test_removal_allowed_at_capacity() {
        let mut selection = SelectionManager::new(2);
        selection.toggle(&shoe(1));
        selection.toggle(&shoe(2));

        // Removing while full must still work
        selection.toggle(&shoe(1));
        assert_eq!(selection.len(), 1);
        assert!(selection.contains(2));
    }

    #[test]
    fn test_select_latest_takes_prefix_in_order() {
        let mut selection = SelectionManager::new(5);
        let candidates: Vec<Shoe> = (0..8).map(shoe).collect();

        selection.select_latest(&candidates);
        assert_eq!(selection.len(), 5);
        let ids: Vec<i64> = selection.shoes().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_select_latest_with_short_candidate_list() {
        let mut selection = SelectionManager::new(5);
        let candidates: Vec<Shoe> = (0..3).map(shoe).collect();

        selection.select_latest(&candidates);
        assert_eq!(selection.len(), 3);
    }

    #[test]
    fn test_select_latest_is_idempotent() {
        let mut selection = SelectionManager::new(5);
        let candidates: Vec<Shoe> = (0..8).map(shoe).collect();

        selection.select_latest(&candidates);
        let first = selection.shoes().to_vec();
        selection.select_latest(&candidates);
        assert_eq!(selection.shoes(), first.as_slice());
    }

    #[test]
    fn test_reset_empties() {
        let mut selection = SelectionManager::new(5);
        selection.toggle(&shoe(1));
        selection.toggle(&shoe(2));

        selection.reset();
        assert!(selection.is_empty());
    }

    #[test]
    fn test_to_request_carries_article_and_source() {
        let mut selection = SelectionManager::new(5);
        let mut s = shoe(7);
        s.parsed_from = "Adidas".to_string();
        selection.toggle(&s);

        let request = selection.to_request();
        assert_eq!(request.len(), 1);
        assert_eq!(request[0].article, "A007");
        assert_eq!(request[0].parse_from, "Adidas");
    }
}
