//! Random puzzle generation.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::Board;
use crate::moves::{Move, CATALOG};
use crate::parity;

/// Walk the blank `steps` times from `goal`, never undoing the previous step.
/// The result is always solvable and at most `steps` moves from `goal`.
pub fn random_walk<R: Rng + ?Sized>(goal: &Board, steps: usize, rng: &mut R) -> Board {
    let mut board = goal.clone();
    let mut last: Option<Move> = None;

    for _ in 0..steps {
        let options: Vec<(Board, Move)> = board
            .successors()
            .filter(|&(_, m)| last != Some(m.opposite()))
            .collect();
        // every cell has at least two neighbours, so one option always remains
        let Some((next, m)) = options.choose(rng).cloned() else {
            break;
        };
        board = next;
        last = Some(m);
    }
    board
}

/// Uniformly shuffle the tiles until the arrangement can reach `goal`.
pub fn shuffle_solvable<R: Rng + ?Sized>(goal: &Board, rng: &mut R) -> Board {
    let mut cells = goal.cells().to_vec();
    loop {
        cells.shuffle(rng);
        if let Ok(board) = Board::from_cells(goal.size(), cells.clone()) {
            if parity::is_solvable(&board, goal) {
                return board;
            }
        }
    }
}
