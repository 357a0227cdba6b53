//! Drag and touch reordering of the displayed list.
//!
//! A session tracks the index of the item being dragged. Every hover over
//! a different index moves the item there and the session follows it, so
//! a continuous drag keeps shifting the same item instead of snapping back.

use legends_domain::DisplayOrder;

/// Attribute carrying an item's display index, used for touch hit-testing.
pub const REORDER_INDEX_ATTR: &str = "data-reorder-index";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReorderSession {
    dragged: Option<usize>,
}

impl ReorderSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self, index: usize) {
        tracing::debug!(index, "Reorder drag started");
        self.dragged = Some(index);
    }

    pub fn dragged_index(&self) -> Option<usize> {
        self.dragged
    }

    pub fn is_active(&self) -> bool {
        self.dragged.is_some()
    }

    /// Move the dragged item over `target` within `displayed`.
    ///
    /// Returns the new displayed id sequence, or `None` when nothing moved.
    pub fn hover<Id: Clone + PartialEq>(
        &mut self,
        target: usize,
        displayed: &[Id],
    ) -> Option<Vec<Id>> {
        let from = self.dragged?;
        let reordered = DisplayOrder::moved(displayed, from, target)?;
        self.dragged = Some(target);
        Some(reordered)
    }

    pub fn end(&mut self) {
        self.dragged = None;
    }
}

/// Parse the value of [`REORDER_INDEX_ATTR`] found under a touch point.
pub fn parse_reorder_index(raw: &str) -> Option<usize> {
    raw.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    mod session {
        use super::*;

        #[test]
        fn hover_without_begin_does_nothing() {
            let mut session = ReorderSession::new();

            assert_eq!(session.hover(1, &[1, 2, 3]), None);
        }

        #[test]
        fn hover_moves_item_and_tracks_target() {
            let mut session = ReorderSession::new();
            session.begin(0);

            assert_eq!(session.hover(2, &[1, 2, 3]), Some(vec![2, 3, 1]));
            assert_eq!(session.dragged_index(), Some(2));
        }

        #[test]
        fn continuous_drag_keeps_moving_the_same_item() {
            let mut session = ReorderSession::new();
            session.begin(0);

            let first = session.hover(1, &['a', 'b', 'c', 'd']).unwrap();
            let second = session.hover(2, &first).unwrap();
            let third = session.hover(3, &second).unwrap();

            assert_eq!(third, vec!['b', 'c', 'd', 'a']);
        }

        #[test]
        fn hovering_own_index_is_a_no_op() {
            let mut session = ReorderSession::new();
            session.begin(1);

            assert_eq!(session.hover(1, &[1, 2, 3]), None);
            assert_eq!(session.dragged_index(), Some(1));
        }

        #[test]
        fn single_item_lists_never_reorder() {
            let mut session = ReorderSession::new();
            session.begin(0);

            assert_eq!(session.hover(1, &[7]), None);
        }

        #[test]
        fn end_clears_the_session() {
            let mut session = ReorderSession::new();
            session.begin(2);
            session.end();

            assert!(!session.is_active());
        }
    }

    mod touch {
        use super::*;

        #[test]
        fn parses_index_attribute() {
            assert_eq!(parse_reorder_index("3"), Some(3));
            assert_eq!(parse_reorder_index(" 12 "), Some(12));
        }

        #[test]
        fn rejects_garbage() {
            assert_eq!(parse_reorder_index(""), None);
            assert_eq!(parse_reorder_index("-1"), None);
            assert_eq!(parse_reorder_index("two"), None);
        }
    }
}
