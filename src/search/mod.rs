//! Best-first search: nodes, frontier, visited set, the A* loop and path
//! reconstruction.

pub mod engine;
pub mod frontier;
pub mod node;
pub mod path;
pub mod visited;

pub use engine::{astar, solve, SearchOutcome, SearchRun, SearchStats, Solution, Termination};
pub use frontier::Frontier;
pub use node::{FrontierKey, NodeId, SearchNode, SearchTree};
pub use path::{reconstruct, replay};
pub use visited::VisitedSet;
