//! Error types for the solver.

use thiserror::Error;

/// Main error type for the crate.
///
/// An unreachable goal is not an error; see
/// [`SearchOutcome::Unsolvable`](crate::search::SearchOutcome::Unsolvable).
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("malformed board: {reason}")]
    MalformedState { reason: String },

    #[error("board size mismatch: initial is {initial}x{initial}, goal is {goal}x{goal}")]
    SizeMismatch { initial: usize, goal: usize },

    #[error("parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedState {
            reason: reason.into(),
        }
    }

    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
