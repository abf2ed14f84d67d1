//! One-way visibility latch for list rows.
//!
//! A row that has been scrolled at least half into view is latched and always
//! renders its full content afterwards, even when it scrolls back out. This
//! trades a small amount of memory for never flickering back to a placeholder
//! on re-scroll.

use std::collections::HashSet;

/// Append-only set of product ids that have been on screen at least once.
///
/// Entries are never evicted for the lifetime of the screen. For very large
/// catalogs this grows without bound; whether it needs a cap is an open
/// question, but at catalog sizes served by the API it is a non-issue.
#[derive(Debug, Default)]
pub struct VisibilityLatch {
    seen: HashSet<u64>,
}

impl VisibilityLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latch every id in the currently-viewable set. Ids not in the set are
    /// left untouched — this is a one-way latch, not a live on/off signal.
    pub fn mark<I: IntoIterator<Item = u64>>(&mut self, ids: I) {
        self.seen.extend(ids);
    }

    pub fn is_seen(&self, id: u64) -> bool {
        self.seen.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marking_is_monotone() {
        let mut latch = VisibilityLatch::new();
        assert!(!latch.is_seen(1));

        latch.mark([1, 2]);
        assert!(latch.is_seen(1));
        assert!(latch.is_seen(2));

        // A later notification that omits id 1 does not clear it.
        latch.mark([3]);
        assert!(latch.is_seen(1));
        assert!(latch.is_seen(3));
        assert_eq!(latch.len(), 3);
    }

    #[test]
    fn test_duplicate_marks_are_idempotent() {
        let mut latch = VisibilityLatch::new();
        latch.mark([7, 7, 7]);
        latch.mark([7]);
        assert_eq!(latch.len(), 1);
    }
}
