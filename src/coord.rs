use std::ops::Add;

/// A cell position on the board, `(row, col)`.
///
/// Components are signed so that adding a move delta may step off the board;
/// use [`Coord::is_valid`] to filter those out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Coordinate of the `index`-th cell of a row-major `size`×`size` grid.
    #[inline]
    pub fn from_index(index: usize, size: usize) -> Self {
        Self::new((index / size) as i32, (index % size) as i32)
    }

    /// Row-major index, or `None` when off the board.
    #[inline]
    pub fn to_index(self, size: usize) -> Option<usize> {
        self.is_valid(size)
            .then(|| self.row as usize * size + self.col as usize)
    }

    #[inline]
    pub fn is_valid(self, size: usize) -> bool {
        let n = size as i32;
        (0..n).contains(&self.row) && (0..n).contains(&self.col)
    }

    #[inline]
    pub fn manhattan_distance(self, other: Coord) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl Add for Coord {
    type Output = Coord;

    #[inline]
    fn add(self, rhs: Coord) -> Self::Output {
        Coord::new(self.row + rhs.row, self.col + rhs.col)
    }
}
