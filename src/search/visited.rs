//! Hash set of boards discovered during one search.

use std::rc::Rc;

use rustc_hash::FxHashSet;

use crate::board::Board;

/// Entries are only ever added. Boards are shared with the search tree.
#[derive(Debug, Default)]
pub struct VisitedSet {
    seen: FxHashSet<Rc<Board>>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` if the board was already discovered.
    pub fn insert(&mut self, board: Rc<Board>) -> bool {
        self.seen.insert(board)
    }

    pub fn contains(&self, board: &Board) -> bool {
        self.seen.contains(board)
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
