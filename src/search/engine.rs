//! A* over board states.

use std::rc::Rc;

use tracing::{debug, info, trace, warn};

use crate::board::Board;
use crate::config::SearchConfig;
use crate::error::{Error, Result};
use crate::heuristic::GoalTable;
use crate::moves::Move;
use crate::parity;
use crate::search::frontier::Frontier;
use crate::search::node::{NodeId, SearchNode, SearchTree};
use crate::search::path;
use crate::search::visited::VisitedSet;

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes popped and expanded.
    pub expanded: usize,
    /// Successor boards produced, duplicates included.
    pub generated: usize,
    /// Successors skipped because they were already discovered.
    pub duplicates: usize,
    /// Largest frontier size observed.
    pub frontier_high_water: usize,
}

/// Why a search run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    GoalReached(NodeId),
    /// Every reachable state was expanded without meeting the goal.
    FrontierExhausted,
    /// The parity precheck proved the goal unreachable; nothing was searched.
    ParityMismatch,
    ExpansionLimit,
}

/// A completed search: the tree it built, why it stopped, and its counters.
#[derive(Debug)]
pub struct SearchRun {
    pub tree: SearchTree,
    pub termination: Termination,
    pub stats: SearchStats,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    /// Optimal move sequence, initial to goal.
    pub moves: Vec<Move>,
    /// Path cost of the terminal node; equals `moves.len()`.
    pub cost: usize,
    pub stats: SearchStats,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Solved(Solution),
    Unsolvable { stats: SearchStats },
    LimitReached { stats: SearchStats },
}

impl SearchOutcome {
    pub fn solution(&self) -> Option<&Solution> {
        match self {
            SearchOutcome::Solved(solution) => Some(solution),
            _ => None,
        }
    }

    pub fn stats(&self) -> &SearchStats {
        match self {
            SearchOutcome::Solved(solution) => &solution.stats,
            SearchOutcome::Unsolvable { stats } | SearchOutcome::LimitReached { stats } => stats,
        }
    }
}

impl SearchRun {
    /// The node the search stopped on, if it reached the goal.
    pub fn goal_node(&self) -> Option<&SearchNode> {
        match self.termination {
            Termination::GoalReached(id) => self.tree.get(id),
            _ => None,
        }
    }

    pub fn into_outcome(self) -> SearchOutcome {
        let stats = self.stats;
        match self.termination {
            Termination::GoalReached(id) => {
                let moves = path::reconstruct(&self.tree, id);
                SearchOutcome::Solved(Solution {
                    cost: self.tree[id].g as usize,
                    moves,
                    stats,
                })
            }
            Termination::FrontierExhausted | Termination::ParityMismatch => {
                SearchOutcome::Unsolvable { stats }
            }
            Termination::ExpansionLimit => SearchOutcome::LimitReached { stats },
        }
    }
}

/// Solve `initial` → `goal` and return the move list or why there is none.
///
/// # Errors
///
/// [`Error::SizeMismatch`] when the boards differ in side length and
/// [`Error::InvalidConfiguration`] for an unusable config. Both are raised
/// before any search step.
pub fn solve(initial: &Board, goal: &Board, config: &SearchConfig) -> Result<SearchOutcome> {
    astar(initial, goal, config).map(SearchRun::into_outcome)
}

/// Run A* and hand back the full search tree.
///
/// # Errors
///
/// Same as [`solve`].
pub fn astar(initial: &Board, goal: &Board, config: &SearchConfig) -> Result<SearchRun> {
    if initial.size() != goal.size() {
        return Err(Error::SizeMismatch {
            initial: initial.size(),
            goal: goal.size(),
        });
    }
    config.validate()?;

    let table = GoalTable::new(goal);
    let mut tree = SearchTree::new();
    let mut stats = SearchStats::default();

    let root_board = Rc::new(initial.clone());
    let root = tree.push(SearchNode::root(Rc::clone(&root_board), &table));
    debug!(size = initial.size(), h = tree[root].h, "starting search");

    if initial.is_goal(goal) {
        debug!("initial board already matches goal");
        return Ok(SearchRun {
            tree,
            termination: Termination::GoalReached(root),
            stats,
        });
    }

    if config.parity_precheck && !parity::is_solvable(initial, goal) {
        info!("parity mismatch, goal unreachable");
        return Ok(SearchRun {
            tree,
            termination: Termination::ParityMismatch,
            stats,
        });
    }

    let mut frontier = Frontier::new();
    let mut visited = VisitedSet::new();
    visited.insert(root_board);
    frontier.push(tree.key(root), root);

    let termination = loop {
        let Some(current) = frontier.pop() else {
            break Termination::FrontierExhausted;
        };
        if tree[current].board.is_goal(goal) {
            break Termination::GoalReached(current);
        }
        if config.max_expansions.is_some_and(|limit| stats.expanded >= limit) {
            warn!(limit = stats.expanded, "expansion limit reached");
            break Termination::ExpansionLimit;
        }

        stats.expanded += 1;
        let board = Rc::clone(&tree[current].board);
        trace!(node = current, g = tree[current].g, h = tree[current].h, "expanding");

        for (next, movement) in board.successors() {
            stats.generated += 1;
            if visited.contains(&next) {
                stats.duplicates += 1;
                continue;
            }
            let next = Rc::new(next);
            visited.insert(Rc::clone(&next));
            let child = SearchNode::child(current, &tree[current], next, movement, &table);
            let id = tree.push(child);
            frontier.push(tree.key(id), id);
        }
    };

    stats.frontier_high_water = frontier.high_water();
    info!(
        expanded = stats.expanded,
        generated = stats.generated,
        duplicates = stats.duplicates,
        frontier_high_water = stats.frontier_high_water,
        discovered = visited.len(),
        ?termination,
        "search finished"
    );

    Ok(SearchRun {
        tree,
        termination,
        stats,
    })
}
