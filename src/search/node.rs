//! Search nodes and the arena that owns them.

use std::ops::Index;
use std::rc::Rc;

use crate::board::Board;
use crate::heuristic::GoalTable;
use crate::moves::Move;

/// Stable arena index. Also the node's creation order.
pub type NodeId = usize;

/// An immutable node of the search tree.
#[derive(Debug, Clone)]
pub struct SearchNode {
    /// Shared with the visited set.
    pub board: Rc<Board>,
    /// `None` for the root.
    pub parent: Option<NodeId>,
    /// The move that produced this node from its parent.
    pub producing_move: Option<Move>,
    /// Path cost, equal to depth since every move costs 1.
    pub g: u32,
    /// Heuristic estimate against the goal, computed once.
    pub h: u32,
}

impl SearchNode {
    pub fn root(board: Rc<Board>, goal: &GoalTable) -> Self {
        let h = goal.estimate(&board);
        Self {
            board,
            parent: None,
            producing_move: None,
            g: 0,
            h,
        }
    }

    pub fn child(
        parent_id: NodeId,
        parent: &SearchNode,
        board: Rc<Board>,
        movement: Move,
        goal: &GoalTable,
    ) -> Self {
        let h = goal.estimate(&board);
        Self {
            board,
            parent: Some(parent_id),
            producing_move: Some(movement),
            g: parent.g + 1,
            h,
        }
    }

    pub fn f(&self) -> u32 {
        self.g + self.h
    }
}

/// Frontier ordering key: lower `f` first, then older nodes first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FrontierKey {
    pub f: u32,
    pub creation_order: NodeId,
}

/// Append-only arena holding every node created by one search. Parent links
/// are indices into it, so the tree has no ownership cycles.
#[derive(Debug, Default)]
pub struct SearchTree {
    nodes: Vec<SearchNode>,
}

impl SearchTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: SearchNode) -> NodeId {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    pub fn get(&self, id: NodeId) -> Option<&SearchNode> {
        self.nodes.get(id)
    }

    pub fn key(&self, id: NodeId) -> FrontierKey {
        FrontierKey {
            f: self.nodes[id].f(),
            creation_order: id,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl Index<NodeId> for SearchTree {
    type Output = SearchNode;

    fn index(&self, id: NodeId) -> &Self::Output {
        &self.nodes[id]
    }
}
