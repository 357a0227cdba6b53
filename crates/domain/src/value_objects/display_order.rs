//! Manual display order for the library views.
//!
//! A `DisplayOrder` is a list of ids kept apart from the collection it
//! orders. Ids that are missing from the list are not an error: they sort
//! after every ordered id, keeping their relative collection order.

use serde::{Deserialize, Serialize};

/// Sort key given to ids that are not in the order list.
pub const UNORDERED: usize = 9999;

/// An explicit id sequence defining manual display order.
///
/// # Invariants
///
/// - Every id appears at most once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DisplayOrder<Id> {
    ids: Vec<Id>,
}

impl<Id> Default for DisplayOrder<Id> {
    fn default() -> Self {
        Self { ids: Vec::new() }
    }
}

impl<Id: Clone + PartialEq> DisplayOrder<Id> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an order from a sequence, dropping repeated ids after their
    /// first occurrence.
    pub fn from_ids(ids: impl IntoIterator<Item = Id>) -> Self {
        let mut order = Self::new();
        for id in ids {
            if !order.contains(&id) {
                order.ids.push(id);
            }
        }
        order
    }

    pub fn ids(&self) -> &[Id] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: &Id) -> bool {
        self.ids.contains(id)
    }

    pub fn position(&self, id: &Id) -> Option<usize> {
        self.ids.iter().position(|candidate| candidate == id)
    }

    /// Position of `id`, or [`UNORDERED`] when it is not in the list.
    pub fn sort_key(&self, id: &Id) -> usize {
        self.position(id).unwrap_or(UNORDERED)
    }

    /// Stable sort of `items` by their position in this order.
    pub fn sorted<T>(&self, items: impl IntoIterator<Item = T>, id_of: impl Fn(&T) -> Id) -> Vec<T> {
        let mut sorted: Vec<T> = items.into_iter().collect();
        sorted.sort_by_key(|item| self.sort_key(&id_of(item)));
        sorted
    }

    /// Put `id` first, removing any earlier occurrence.
    pub fn prepend(&mut self, id: Id) {
        self.remove(&id);
        self.ids.insert(0, id);
    }

    /// Remove `id`. Returns whether it was present.
    pub fn remove(&mut self, id: &Id) -> bool {
        let before = self.ids.len();
        self.ids.retain(|candidate| candidate != id);
        self.ids.len() != before
    }

    /// Replace an empty order with `ids`. A non-empty order is left alone.
    pub fn seed_if_empty(&mut self, ids: impl IntoIterator<Item = Id>) {
        if self.ids.is_empty() {
            *self = Self::from_ids(ids);
        }
    }

    /// Move the item at display index `from` to index `to` in `visible`.
    ///
    /// Returns the new visible sequence, or `None` when the move is a no-op
    /// (same index, an index out of range, or fewer than two items).
    pub fn moved(visible: &[Id], from: usize, to: usize) -> Option<Vec<Id>> {
        if visible.len() < 2 || from == to || from >= visible.len() || to >= visible.len() {
            return None;
        }
        let mut reordered = visible.to_vec();
        let item = reordered.remove(from);
        reordered.insert(to, item);
        Some(reordered)
    }

    /// Write a reordered visible subsequence back into the global order.
    ///
    /// The slots currently held by the visible ids are refilled with
    /// `visible` in its new order; ids that are not visible keep their
    /// slots. Visible ids that were unordered get fresh slots at the end.
    pub fn splice_visible(&mut self, visible: &[Id]) {
        let mut slots: Vec<usize> = self
            .ids
            .iter()
            .enumerate()
            .filter(|(_, id)| visible.contains(id))
            .map(|(slot, _)| slot)
            .collect();

        for id in visible {
            if !self.contains(id) {
                slots.push(self.ids.len());
                self.ids.push(id.clone());
            }
        }

        for (slot, id) in slots.into_iter().zip(visible.iter()) {
            self.ids[slot] = id.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(ids: &[u32]) -> DisplayOrder<u32> {
        DisplayOrder::from_ids(ids.iter().copied())
    }

    mod sorting {
        use super::*;

        #[test]
        fn sorts_by_position() {
            let o = order(&[3, 1, 2]);
            assert_eq!(o.sorted(vec![1, 2, 3], |id| *id), vec![3, 1, 2]);
        }

        #[test]
        fn unknown_ids_sort_last_in_collection_order() {
            let o = order(&[2]);
            assert_eq!(o.sorted(vec![5, 1, 2, 4], |id| *id), vec![2, 5, 1, 4]);
        }

        #[test]
        fn sort_key_uses_sentinel() {
            let o = order(&[7]);
            assert_eq!(o.sort_key(&7), 0);
            assert_eq!(o.sort_key(&8), UNORDERED);
        }

        #[test]
        fn sorting_is_deterministic() {
            let o = order(&[4, 2]);
            let items = vec![1, 2, 3, 4, 5];
            let first = o.sorted(items.clone(), |id| *id);
            let second = o.sorted(items, |id| *id);
            assert_eq!(first, second);
        }

        #[test]
        fn sorts_records_by_key_fn() {
            let o = order(&[2, 1]);
            let items = vec![(1, "a"), (2, "b")];
            let sorted = o.sorted(items, |item| item.0);
            assert_eq!(sorted, vec![(2, "b"), (1, "a")]);
        }
    }

    mod mutation {
        use super::*;

        #[test]
        fn from_ids_drops_duplicates() {
            assert_eq!(order(&[1, 2, 1, 3, 2]).ids(), &[1, 2, 3]);
        }

        #[test]
        fn prepend_moves_existing_to_front() {
            let mut o = order(&[1, 2, 3]);
            o.prepend(3);
            assert_eq!(o.ids(), &[3, 1, 2]);
            o.prepend(9);
            assert_eq!(o.ids(), &[9, 3, 1, 2]);
        }

        #[test]
        fn remove_reports_presence() {
            let mut o = order(&[1, 2]);
            assert!(o.remove(&1));
            assert!(!o.remove(&1));
            assert_eq!(o.ids(), &[2]);
        }

        #[test]
        fn seed_only_when_empty() {
            let mut o = DisplayOrder::new();
            o.seed_if_empty([1, 2]);
            assert_eq!(o.ids(), &[1, 2]);
            o.seed_if_empty([9]);
            assert_eq!(o.ids(), &[1, 2]);
        }
    }

    mod reordering {
        use super::*;

        #[test]
        fn moved_is_remove_then_insert() {
            let visible = [10, 20, 30, 40];
            assert_eq!(
                DisplayOrder::moved(&visible, 0, 2),
                Some(vec![20, 30, 10, 40])
            );
            assert_eq!(
                DisplayOrder::moved(&visible, 3, 1),
                Some(vec![10, 40, 20, 30])
            );
        }

        #[test]
        fn moved_rejects_noops() {
            let visible = [1, 2, 3];
            assert_eq!(DisplayOrder::moved(&visible, 1, 1), None);
            assert_eq!(DisplayOrder::moved(&visible, 0, 3), None);
            assert_eq!(DisplayOrder::moved(&visible, 5, 0), None);
            assert_eq!(DisplayOrder::moved(&[1], 0, 0), None);
        }

        #[test]
        fn splice_full_view_replaces_order() {
            let mut o = order(&[1, 2, 3]);
            o.splice_visible(&[3, 1, 2]);
            assert_eq!(o.ids(), &[3, 1, 2]);
        }

        #[test]
        fn splice_subset_keeps_hidden_slots() {
            // 2 and 4 are hidden by a filter.
            let mut o = order(&[1, 2, 3, 4, 5]);
            o.splice_visible(&[5, 1, 3]);
            assert_eq!(o.ids(), &[5, 2, 1, 4, 3]);
        }

        #[test]
        fn splice_appends_unordered_visible_ids() {
            let mut o = order(&[1, 2]);
            o.splice_visible(&[2, 1, 7]);
            assert_eq!(o.ids(), &[2, 1, 7]);

            let mut o = order(&[1, 2]);
            o.splice_visible(&[7, 1]);
            assert_eq!(o.ids(), &[7, 2, 1]);
        }
    }
}
