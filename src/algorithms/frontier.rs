//! Min-priority frontier with deterministic tie-breaks.
//!
//! Entries are ordered by key, then by `order`; the smallest pops first.
//! Dijkstra uses the node index as `order` (first node in declaration order
//! wins among equal distances), Prim an insertion counter (equal weights pop
//! in the order they were queued, matching a stable re-sort of a list).

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

#[derive(Debug)]
struct Entry<T> {
    key: f64,
    order: usize,
    item: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        weight_order(self.key, other.key).then_with(|| self.order.cmp(&other.order))
    }
}

/// Total order on weights in which `-0.0` and `0.0` tie.
///
/// Adding `0.0` turns `-0.0` into `0.0` and leaves every other value alone.
pub(crate) fn weight_order(a: f64, b: f64) -> Ordering {
    (a + 0.0).total_cmp(&(b + 0.0))
}

/// Binary min-heap over `(key, order)`.
#[derive(Debug)]
pub(crate) struct Frontier<T> {
    heap: BinaryHeap<Reverse<Entry<T>>>,
    next_order: usize,
}

impl<T> Frontier<T> {
    pub(crate) fn new() -> Self {
        Frontier {
            heap: BinaryHeap::new(),
            next_order: 0,
        }
    }

    /// Queue with an explicit tie-break rank.
    pub(crate) fn push_ranked(&mut self, key: f64, order: usize, item: T) {
        self.heap.push(Reverse(Entry { key, order, item }));
    }

    /// Queue behind every equal-key entry already present.
    pub(crate) fn push(&mut self, key: f64, item: T) {
        let order = self.next_order;
        self.next_order += 1;
        self.push_ranked(key, order, item);
    }

    pub(crate) fn pop(&mut self) -> Option<(f64, T)> {
        self.heap.pop().map(|Reverse(e)| (e.key, e.item))
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pops_smallest_key() {
        let mut f = Frontier::new();
        f.push(3.0, 'c');
        f.push(1.0, 'a');
        f.push(2.0, 'b');
        assert_eq!(f.pop(), Some((1.0, 'a')));
        assert_eq!(f.pop(), Some((2.0, 'b')));
        assert_eq!(f.pop(), Some((3.0, 'c')));
        assert!(f.is_empty());
    }

    #[test]
    fn test_equal_keys_pop_in_insertion_order() {
        let mut f = Frontier::new();
        f.push(1.0, "first");
        f.push(0.5, "smaller");
        f.push(1.0, "second");
        f.push(1.0, "third");
        let order: Vec<_> = std::iter::from_fn(|| f.pop()).map(|(_, v)| v).collect();
        assert_eq!(order, vec!["smaller", "first", "second", "third"]);
    }

    #[test]
    fn test_signed_zero_keys_tie() {
        let mut f = Frontier::new();
        f.push(0.0, "positive");
        f.push(-0.0, "negative");
        assert_eq!(f.pop().map(|(_, v)| v), Some("positive"));
        assert_eq!(f.pop().map(|(_, v)| v), Some("negative"));
        assert_eq!(weight_order(-0.0, 0.0), Ordering::Equal);
        assert_eq!(weight_order(-1.0, 0.0), Ordering::Less);
    }

    #[test]
    fn test_ranked_ties_use_rank() {
        let mut f = Frontier::new();
        f.push_ranked(2.0, 5, 5usize);
        f.push_ranked(2.0, 1, 1usize);
        assert_eq!(f.pop(), Some((2.0, 1)));
    }
}
