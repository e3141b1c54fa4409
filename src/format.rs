//! Plain-text puzzle input and move-list output.
//!
//! Input layout, blank lines ignored:
//!
//! ```text
//! 8        tile count T; T + 1 must be a square
//! -1       goal blank index in 0..=T, or -1 for the last cell
//! 1 2 3    initial grid, one row per line
//! 4 5 6
//! 0 7 8
//! ```
//!
//! The goal is tiles `1..=T` in row-major order with the blank at the given
//! index. Output is the move count followed by one move name per line.

use std::io::Read;

use crate::board::Board;
use crate::error::{Error, Result};
use crate::moves::Move;

/// A parsed puzzle: where to start and where to end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    pub initial: Board,
    pub goal: Board,
}

pub fn read_puzzle<R: Read>(mut reader: R) -> Result<Puzzle> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|source| Error::Io {
            operation: "read puzzle".to_string(),
            source,
        })?;
    parse_puzzle(&text)
}

pub fn parse_puzzle(text: &str) -> Result<Puzzle> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let (line_no, line) = lines
        .next()
        .ok_or_else(|| Error::parse(1, "missing tile count"))?;
    let tiles: usize = line
        .parse()
        .map_err(|_| Error::parse(line_no, format!("tile count '{line}' is not a number")))?;
    let size = side_length(tiles)
        .ok_or_else(|| Error::parse(line_no, format!("{tiles} tiles do not fill a square board")))?;

    let (line_no, line) = lines
        .next()
        .ok_or_else(|| Error::parse(line_no + 1, "missing goal blank index"))?;
    let blank: i64 = line
        .parse()
        .map_err(|_| Error::parse(line_no, format!("blank index '{line}' is not a number")))?;
    let blank = match blank {
        -1 => tiles,
        i if (0..=tiles as i64).contains(&i) => i as usize,
        i => {
            return Err(Error::parse(
                line_no,
                format!("blank index {i} outside 0..={tiles} (or -1)"),
            ))
        }
    };
    let goal = Board::with_blank_at(size, blank)?;

    let mut rows = Vec::with_capacity(size);
    let mut last_line = line_no;
    for (line_no, line) in lines {
        if rows.len() == size {
            return Err(Error::parse(line_no, "unexpected content after the grid"));
        }
        let row = line
            .split_whitespace()
            .map(|token| {
                token
                    .parse::<u8>()
                    .map_err(|_| Error::parse(line_no, format!("'{token}' is not a tile value")))
            })
            .collect::<Result<Vec<u8>>>()?;
        if row.len() != size {
            return Err(Error::parse(
                line_no,
                format!("expected {size} values, got {}", row.len()),
            ));
        }
        rows.push(row);
        last_line = line_no;
    }
    if rows.len() != size {
        return Err(Error::parse(
            last_line + 1,
            format!("expected {size} grid rows, got {}", rows.len()),
        ));
    }

    let initial = Board::from_rows(&rows)?;
    Ok(Puzzle { initial, goal })
}

/// Render a puzzle back into the input layout. Only goals produced by
/// [`Board::with_blank_at`] can be expressed.
pub fn render_puzzle(puzzle: &Puzzle) -> Result<String> {
    let size = puzzle.goal.size();
    let blank = puzzle.goal.blank_location().to_index(size).unwrap_or_default();
    if Board::with_blank_at(size, blank)? != puzzle.goal {
        return Err(Error::malformed(
            "goal is not in tile order and cannot be written in puzzle format",
        ));
    }

    let tiles = size * size - 1;
    let blank = if blank == tiles { -1 } else { blank as i64 };
    let mut out = format!("{tiles}\n{blank}\n");
    for row in puzzle.initial.rows() {
        let cells: Vec<String> = row.iter().map(u8::to_string).collect();
        out.push_str(&cells.join(" "));
        out.push('\n');
    }
    Ok(out)
}

pub fn render_moves(moves: &[Move]) -> String {
    let mut out = format!("{}\n", moves.len());
    for m in moves {
        out.push_str(m.name());
        out.push('\n');
    }
    out
}

fn side_length(tiles: usize) -> Option<usize> {
    let area = tiles + 1;
    (2..=crate::board::MAX_SIZE).find(|k| k * k == area)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_default_goal() {
        let puzzle = parse_puzzle("8\n-1\n1 2 3\n4 5 6\n0 7 8\n").unwrap();
        assert_eq!(puzzle.goal, Board::solved(3).unwrap());
        assert_eq!(puzzle.initial.cells(), &[1, 2, 3, 4, 5, 6, 0, 7, 8]);
    }

    #[test]
    fn parses_explicit_blank_index_and_skips_blank_lines() {
        let puzzle = parse_puzzle("\n3\n0\n\n1 2\n 3 0 \n").unwrap();
        assert_eq!(puzzle.goal.cells(), &[0, 1, 2, 3]);
        assert_eq!(puzzle.initial.cells(), &[1, 2, 3, 0]);
    }

    #[test]
    fn rejects_non_square_tile_count() {
        let err = parse_puzzle("7\n-1\n").unwrap_err();
        assert!(matches!(err, Error::Parse { line: 1, .. }), "{err}");
    }

    #[test]
    fn rejects_short_row_with_line_number() {
        let err = parse_puzzle("8\n-1\n1 2 3\n4 5\n6 7 0\n").unwrap_err();
        assert!(matches!(err, Error::Parse { line: 4, .. }), "{err}");
    }

    #[test]
    fn rejects_missing_rows() {
        let err = parse_puzzle("8\n-1\n1 2 3\n4 5 6\n").unwrap_err();
        assert!(matches!(err, Error::Parse { line: 5, .. }), "{err}");
    }

    #[test]
    fn rejects_trailing_content() {
        let err = parse_puzzle("3\n-1\n1 2\n3 0\n9\n").unwrap_err();
        assert!(matches!(err, Error::Parse { line: 5, .. }), "{err}");
    }

    #[test]
    fn duplicate_tiles_surface_as_malformed_state() {
        let err = parse_puzzle("3\n-1\n1 1\n3 0\n").unwrap_err();
        assert!(matches!(err, Error::MalformedState { .. }), "{err}");
    }

    #[test]
    fn renders_moves_with_count_header() {
        assert_eq!(render_moves(&[Move::Left, Move::Up]), "2\nleft\nup\n");
        assert_eq!(render_moves(&[]), "0\n");
    }

    #[test]
    fn render_puzzle_reparses() {
        let text = "8\n4\n1 2 3\n4 0 5\n6 7 8\n";
        let puzzle = parse_puzzle(text).unwrap();
        assert_eq!(render_puzzle(&puzzle).unwrap(), text);
    }

    #[test]
    fn read_puzzle_from_reader() {
        let puzzle = read_puzzle("3\n-1\n1 2\n3 0\n".as_bytes()).unwrap();
        assert_eq!(puzzle.initial, puzzle.goal);
    }
}
