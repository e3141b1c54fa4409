use std::fmt;

use crate::coord::Coord;
use crate::error::{Error, Result};
use crate::moves::{Move, CATALOG};

/// Smallest and largest supported side lengths. Cells are stored as `u8`.
pub const MIN_SIZE: usize = 2;
pub const MAX_SIZE: usize = 16;

/// An immutable N×N tile arrangement. `0` is the blank.
///
/// Cells are kept flat in row-major order; a successor is a fresh copy of
/// that slice with exactly two cells swapped.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    cells: Box<[u8]>,
    blank: usize,
}

impl Board {
    /// Build a board from a row-major cell list, checking that it is a
    /// permutation of `0..size²`.
    pub fn from_cells(size: usize, cells: Vec<u8>) -> Result<Self> {
        if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
            return Err(Error::malformed(format!(
                "side length {size} outside {MIN_SIZE}..={MAX_SIZE}"
            )));
        }
        let area = size * size;
        if cells.len() != area {
            return Err(Error::malformed(format!(
                "expected {area} cells for a {size}x{size} board, got {}",
                cells.len()
            )));
        }

        let mut seen = vec![false; area];
        for &value in &cells {
            let slot = seen.get_mut(value as usize).ok_or_else(|| {
                Error::malformed(format!("value {value} out of range 0..{area}"))
            })?;
            if *slot {
                return Err(Error::malformed(format!("value {value} appears more than once")));
            }
            *slot = true;
        }

        // every value seen exactly once, so the blank is present
        let blank = cells.iter().position(|&v| v == 0).unwrap_or_default();
        Ok(Self {
            size,
            cells: cells.into_boxed_slice(),
            blank,
        })
    }

    /// Build a board from rows; every row must be as long as there are rows.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self> {
        let size = rows.len();
        if let Some((i, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, r)| r.as_ref().len() != size)
        {
            return Err(Error::malformed(format!(
                "row {i} has {} cells, expected {size}",
                row.as_ref().len()
            )));
        }
        let cells = rows.iter().flat_map(|r| r.as_ref().iter().copied()).collect();
        Self::from_cells(size, cells)
    }

    /// The conventional goal: tiles in order, blank in the last cell.
    pub fn solved(size: usize) -> Result<Self> {
        Self::with_blank_at(size, (size * size).saturating_sub(1))
    }

    /// Tiles `1..size²` in row-major order with the blank inserted at `blank`.
    pub fn with_blank_at(size: usize, blank: usize) -> Result<Self> {
        let area = size * size;
        if blank >= area {
            return Err(Error::malformed(format!(
                "blank index {blank} out of range 0..{area}"
            )));
        }
        let mut cells: Vec<u8> = (1..area).map(|v| v as u8).collect();
        cells.insert(blank, 0);
        Self::from_cells(size, cells)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.cells.chunks(self.size)
    }

    pub fn get(&self, at: Coord) -> Option<u8> {
        at.to_index(self.size).map(|i| self.cells[i])
    }

    /// Position of `value`; `None` only when `value` is not below `size²`.
    pub fn locate(&self, value: u8) -> Option<Coord> {
        self.cells
            .iter()
            .position(|&v| v == value)
            .map(|i| Coord::from_index(i, self.size))
    }

    pub fn blank_location(&self) -> Coord {
        Coord::from_index(self.blank, self.size)
    }

    /// The board reached by `movement`, or `None` if the blank would leave
    /// the grid.
    pub fn try_move(&self, movement: Move) -> Option<Self> {
        let target = (self.blank_location() + movement.delta()).to_index(self.size)?;
        let mut cells = self.cells.clone();
        cells.swap(self.blank, target);
        Some(Self {
            size: self.size,
            cells,
            blank: target,
        })
    }

    /// Apply `movement` in place. Returns `false` and leaves the board
    /// untouched when the move is off the grid.
    pub fn apply_move(&mut self, movement: Move) -> bool {
        match (self.blank_location() + movement.delta()).to_index(self.size) {
            Some(target) => {
                self.cells.swap(self.blank, target);
                self.blank = target;
                true
            }
            None => false,
        }
    }

    /// Every legal `(successor, move)` pair, in [`CATALOG`] order.
    pub fn successors(&self) -> impl Iterator<Item = (Board, Move)> + '_ {
        CATALOG
            .into_iter()
            .filter_map(move |m| self.try_move(m).map(|next| (next, m)))
    }

    pub fn is_goal(&self, goal: &Board) -> bool {
        self == goal
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.rows()).finish()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = (self.cells.len() - 1).to_string().len();
        for row in self.rows() {
            for (j, &val) in row.iter().enumerate() {
                if j > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{val:>width$}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn try_board(rows: &[[u8; 3]]) -> Result<Board> {
        Board::from_rows(rows)
    }

    fn board(rows: &[[u8; 3]]) -> Board {
        try_board(rows).unwrap()
    }

    fn successor_grids(b: &Board) -> (Vec<Board>, Vec<&'static str>) {
        b.successors().map(|(s, m)| (s, m.name())).unzip()
    }

    #[test]
    fn locate_maps_every_value() {
        let b = board(&[[1, 2, 3], [4, 5, 6], [7, 8, 0]]);
        assert_eq!(b.locate(1), Some(Coord::new(0, 0)));
        assert_eq!(b.locate(6), Some(Coord::new(1, 2)));
        assert_eq!(b.locate(8), Some(Coord::new(2, 1)));
        assert_eq!(b.locate(0), Some(Coord::new(2, 2)));
        assert_eq!(b.locate(9), None);
        assert_eq!(b.blank_location(), Coord::new(2, 2));
    }

    #[test]
    fn corner_blank_has_two_successors() {
        let b = board(&[[0, 2, 3], [1, 4, 5], [6, 7, 8]]);
        let (grids, names) = successor_grids(&b);
        assert_eq!(names, ["left", "up"]);
        assert_eq!(
            grids,
            [
                board(&[[2, 0, 3], [1, 4, 5], [6, 7, 8]]),
                board(&[[1, 2, 3], [0, 4, 5], [6, 7, 8]]),
            ]
        );
    }

    #[test]
    fn edge_blank_has_three_successors() {
        let b = board(&[[1, 2, 3], [0, 4, 5], [6, 7, 8]]);
        let (grids, names) = successor_grids(&b);
        assert_eq!(names, ["left", "up", "down"]);
        assert_eq!(
            grids,
            [
                board(&[[1, 2, 3], [4, 0, 5], [6, 7, 8]]),
                board(&[[1, 2, 3], [6, 4, 5], [0, 7, 8]]),
                board(&[[0, 2, 3], [1, 4, 5], [6, 7, 8]]),
            ]
        );
    }

    #[test]
    fn interior_blank_has_four_successors() {
        let b = board(&[[1, 2, 3], [4, 0, 5], [6, 7, 8]]);
        let (grids, names) = successor_grids(&b);
        assert_eq!(names, ["left", "right", "up", "down"]);
        assert_eq!(
            grids,
            [
                board(&[[1, 2, 3], [4, 5, 0], [6, 7, 8]]),
                board(&[[1, 2, 3], [0, 4, 5], [6, 7, 8]]),
                board(&[[1, 2, 3], [4, 7, 5], [6, 0, 8]]),
                board(&[[1, 0, 3], [4, 2, 5], [6, 7, 8]]),
            ]
        );
    }

    #[test]
    fn successors_leave_source_untouched() {
        let b = board(&[[1, 2, 3], [4, 0, 5], [6, 7, 8]]);
        let before = b.clone();
        let _ = b.successors().count();
        assert_eq!(b, before);
    }

    #[test]
    fn rejects_duplicate_values() {
        let err = try_board(&[[1, 1, 3], [4, 0, 5], [6, 7, 8]]).unwrap_err();
        assert!(matches!(err, Error::MalformedState { .. }), "{err}");
    }

    #[test]
    fn rejects_out_of_range_values() {
        let err = try_board(&[[1, 9, 3], [4, 0, 5], [6, 7, 8]]).unwrap_err();
        assert!(matches!(err, Error::MalformedState { .. }), "{err}");
    }

    #[test]
    fn rejects_ragged_rows() {
        let rows: Vec<Vec<u8>> = vec![vec![1, 2, 3], vec![4, 0], vec![5, 6, 7]];
        assert!(Board::from_rows(&rows).is_err());
    }

    #[test]
    fn with_blank_at_inserts_blank() {
        let b = Board::with_blank_at(3, 0).unwrap();
        assert_eq!(b.cells(), &[0, 1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(Board::solved(3).unwrap().cells(), &[1, 2, 3, 4, 5, 6, 7, 8, 0]);
        assert!(Board::with_blank_at(3, 9).is_err());
    }

    #[test]
    fn apply_move_rejects_off_grid() {
        let mut b = Board::solved(3).unwrap();
        assert!(!b.apply_move(Move::Left));
        assert!(b.apply_move(Move::Right));
        assert_eq!(b.blank_location(), Coord::new(2, 1));
    }

    #[test]
    fn display_aligns_columns() {
        let b = Board::solved(4).unwrap();
        let text = b.to_string();
        assert_eq!(text.lines().next(), Some(" 1  2  3  4"));
        assert_eq!(text.lines().last(), Some("13 14 15  0"));
    }
}
