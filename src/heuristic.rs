//! Manhattan-distance heuristic.
//!
//! Each move shifts exactly one tile by one cell, so the sum of per-tile
//! distances drops by at most one per edge: admissible and consistent.

use crate::board::Board;
use crate::coord::Coord;

/// Sum over every non-blank tile of its distance to its cell in `goal`.
///
/// Both boards must share a side length.
pub fn manhattan(state: &Board, goal: &Board) -> u32 {
    GoalTable::new(goal).estimate(state)
}

/// Goal positions indexed by tile value, so the engine can score each new
/// node without scanning the goal grid.
#[derive(Debug, Clone)]
pub struct GoalTable {
    positions: Vec<Coord>,
}

impl GoalTable {
    pub fn new(goal: &Board) -> Self {
        let mut positions = vec![Coord::new(0, 0); goal.cells().len()];
        for (i, &value) in goal.cells().iter().enumerate() {
            positions[value as usize] = Coord::from_index(i, goal.size());
        }
        Self { positions }
    }

    pub fn estimate(&self, state: &Board) -> u32 {
        state
            .cells()
            .iter()
            .enumerate()
            .filter(|&(_, &value)| value != 0)
            .map(|(i, &value)| {
                Coord::from_index(i, state.size()).manhattan_distance(self.positions[value as usize])
            })
            .sum()
    }
}
