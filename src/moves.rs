use std::fmt;
use std::str::FromStr;

use crate::coord::Coord;

/// A blank displacement, named after the direction the moved tile slides.
///
/// `Left` moves the blank one column right (the tile to its right slides left),
/// and so on for the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Left,
    Right,
    Up,
    Down,
}

/// Successor enumeration order. Observable: it decides which of several
/// equally short solutions the engine returns.
pub const CATALOG: [Move; 4] = [Move::Left, Move::Right, Move::Up, Move::Down];

impl Move {
    pub fn delta(self) -> Coord {
        match self {
            Move::Left => Coord::new(0, 1),
            Move::Right => Coord::new(0, -1),
            Move::Up => Coord::new(1, 0),
            Move::Down => Coord::new(-1, 0),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Move::Left => Move::Right,
            Move::Right => Move::Left,
            Move::Up => Move::Down,
            Move::Down => Move::Up,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Move::Left => "left",
            Move::Right => "right",
            Move::Up => "up",
            Move::Down => "down",
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Move {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CATALOG
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown move '{s}'"))
    }
}
