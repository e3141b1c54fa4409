#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};

use npuzzle::Board;

pub fn board3(rows: [[u8; 3]; 3]) -> Board {
    Board::from_rows(&rows).unwrap()
}

pub fn goal3() -> Board {
    Board::solved(3).unwrap()
}

/// Shortest distance by plain breadth-first search, or `None` if unreachable.
pub fn bfs_distance(start: &Board, goal: &Board) -> Option<usize> {
    let mut dist: HashMap<Board, usize> = HashMap::from([(start.clone(), 0)]);
    let mut queue = VecDeque::from([start.clone()]);
    while let Some(current) = queue.pop_front() {
        let d = dist[&current];
        if &current == goal {
            return Some(d);
        }
        for (next, _) in current.successors() {
            if !dist.contains_key(&next) {
                dist.insert(next.clone(), d + 1);
                queue.push_back(next);
            }
        }
    }
    None
}

pub fn names(moves: &[npuzzle::Move]) -> Vec<&'static str> {
    moves.iter().map(|m| m.name()).collect()
}
