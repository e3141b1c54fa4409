//! Optimal N-puzzle solver.
//!
//! Boards are immutable N×N permutations with `0` as the blank. [`solve`]
//! runs A* with the Manhattan-distance heuristic and returns a shortest move
//! list, or reports that the goal is unreachable.
//!
//! ```
//! use npuzzle::{solve, Board, SearchConfig};
//!
//! let goal = Board::solved(3)?;
//! let initial = Board::from_rows(&[[1u8, 2, 3], [4, 5, 6], [0, 7, 8]])?;
//! let outcome = solve(&initial, &goal, &SearchConfig::default())?;
//! let names: Vec<_> = outcome.solution().unwrap().moves.iter().map(|m| m.name()).collect();
//! assert_eq!(names, ["left", "left"]);
//! # Ok::<(), npuzzle::Error>(())
//! ```

#![forbid(unsafe_code)]

pub mod board;
pub mod config;
pub mod coord;
pub mod error;
pub mod format;
pub mod heuristic;
pub mod moves;
pub mod parity;
pub mod scramble;
pub mod search;

pub use board::Board;
pub use config::SearchConfig;
pub use coord::Coord;
pub use error::{Error, Result};
pub use heuristic::manhattan;
pub use moves::{Move, CATALOG};
pub use search::{solve, SearchOutcome, SearchStats, Solution};
