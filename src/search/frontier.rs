//! Min-`f` priority queue over arena node ids.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::search::node::{FrontierKey, NodeId};

/// `BinaryHeap` is a max-heap, so keys are wrapped in `Reverse`. Ties on `f`
/// fall through to creation order, giving FIFO among equals.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<Reverse<(FrontierKey, NodeId)>>,
    high_water: usize,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: FrontierKey, id: NodeId) {
        self.heap.push(Reverse((key, id)));
        self.high_water = self.high_water.max(self.heap.len());
    }

    pub fn pop(&mut self) -> Option<NodeId> {
        self.heap.pop().map(|Reverse((_, id))| id)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Largest size the frontier has reached.
    pub fn high_water(&self) -> usize {
        self.high_water
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(f: u32, creation_order: NodeId) -> FrontierKey {
        FrontierKey { f, creation_order }
    }

    #[test]
    fn pops_lowest_f_first() {
        let mut frontier = Frontier::new();
        frontier.push(key(10, 0), 0);
        frontier.push(key(5, 1), 1);
        frontier.push(key(15, 2), 2);
        assert_eq!(frontier.pop(), Some(1));
        assert_eq!(frontier.pop(), Some(0));
        assert_eq!(frontier.pop(), Some(2));
        assert_eq!(frontier.pop(), None);
    }

    #[test]
    fn equal_f_pops_in_insertion_order() {
        let mut frontier = Frontier::new();
        for id in 0..5 {
            frontier.push(key(7, id), id);
        }
        let order: Vec<_> = std::iter::from_fn(|| frontier.pop()).collect();
        assert_eq!(order, [0, 1, 2, 3, 4]);
    }

    #[test]
    fn high_water_survives_pops() {
        let mut frontier = Frontier::new();
        frontier.push(key(1, 0), 0);
        frontier.push(key(2, 1), 1);
        frontier.push(key(3, 2), 2);
        let _ = frontier.pop();
        assert_eq!(frontier.len(), 2);
        assert_eq!(frontier.high_water(), 3);
    }
}
