//! Reachability invariant for sliding puzzles.
//!
//! Row-major inversion count of the tiles (blank excluded) changes parity on
//! every vertical move when the side length is even, and never when it is
//! odd. Horizontal moves never change it. So two boards are mutually
//! reachable iff their invariants agree.

use crate::board::Board;

/// Pairs `(i, j)` with `i < j` in row-major order whose tiles are out of order.
pub fn count_inversions(cells: &[u8]) -> usize {
    cells
        .iter()
        .enumerate()
        .filter(|&(_, &val)| val != 0)
        .map(|(i, &val)| {
            cells[i + 1..]
                .iter()
                .filter(|&&next| next != 0 && next < val)
                .count()
        })
        .sum()
}

/// Parity class of a board: equal classes are mutually reachable.
pub fn parity_class(board: &Board) -> usize {
    let inversions = count_inversions(board.cells());
    if board.size() % 2 == 1 {
        inversions % 2
    } else {
        (inversions + board.blank_location().row as usize) % 2
    }
}

/// Whether `goal` can be reached from `initial`. Boards must share a size.
pub fn is_solvable(initial: &Board, goal: &Board) -> bool {
    parity_class(initial) == parity_class(goal)
}
