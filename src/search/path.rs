//! Turning a terminal node back into a move list.

use crate::board::Board;
use crate::error::{Error, Result};
use crate::moves::Move;
use crate::search::node::{NodeId, SearchTree};

/// Moves from the root to `terminal`, in play order. The length equals the
/// terminal node's `g`.
pub fn reconstruct(tree: &SearchTree, terminal: NodeId) -> Vec<Move> {
    let mut moves = Vec::with_capacity(tree[terminal].g as usize);
    let mut cursor = Some(terminal);
    while let Some(id) = cursor {
        let node = &tree[id];
        moves.extend(node.producing_move);
        cursor = node.parent;
    }
    moves.reverse();
    moves
}

/// Play `moves` from `initial` and return the final board.
pub fn replay(initial: &Board, moves: &[Move]) -> Result<Board> {
    let mut board = initial.clone();
    for (step, &movement) in moves.iter().enumerate() {
        if !board.apply_move(movement) {
            return Err(Error::malformed(format!(
                "move {} ({movement}) pushes the blank off the board",
                step + 1
            )));
        }
    }
    Ok(board)
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::heuristic::GoalTable;
    use crate::search::node::SearchNode;

    #[test]
    fn root_reconstructs_to_empty() {
        let goal = Board::solved(3).unwrap();
        let table = GoalTable::new(&goal);
        let mut tree = SearchTree::new();
        let root = tree.push(SearchNode::root(Rc::new(goal), &table));
        assert!(reconstruct(&tree, root).is_empty());
    }

    #[test]
    fn chain_reconstructs_in_play_order() {
        let start = Board::solved(3).unwrap();
        let table = GoalTable::new(&start);
        let mut tree = SearchTree::new();
        let mut id = tree.push(SearchNode::root(Rc::new(start.clone()), &table));
        for m in [Move::Right, Move::Down, Move::Left] {
            let next = tree[id].board.try_move(m).unwrap();
            let child = SearchNode::child(id, &tree[id], Rc::new(next), m, &table);
            id = tree.push(child);
        }

        let moves = reconstruct(&tree, id);
        assert_eq!(moves, [Move::Right, Move::Down, Move::Left]);
        assert_eq!(moves.len(), tree[id].g as usize);
        assert_eq!(&replay(&start, &moves).unwrap(), tree[id].board.as_ref());
    }

    #[test]
    fn replay_rejects_off_board_move() {
        let start = Board::solved(3).unwrap();
        let err = replay(&start, &[Move::Right, Move::Left, Move::Left]).unwrap_err();
        assert!(err.to_string().contains("move 3"), "{err}");
    }
}
