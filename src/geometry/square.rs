//! Square board operations: `q` is the column, `r` the row, storage is
//! `rows[r][q]`, and all eight compass directions count as adjacent.

use crate::board::Tile;
use crate::coordinate::Coord;

pub(super) const MIN_SIZE: i32 = 4;

/// The eight compass offsets, straight rays first.
pub(super) const DIRECTIONS: [(i32, i32); 8] = [
    (1, 0),
    (0, 1),
    (-1, 0),
    (0, -1),
    (1, -1),
    (-1, 1),
    (1, 1),
    (-1, -1),
];

pub(super) fn in_bounds(size: i32, c: Coord) -> bool {
    let Coord(q, r) = c;
    q >= 0 && q < size && r >= 0 && r < size
}

pub(super) fn index(c: Coord) -> (usize, usize) {
    (c.1 as usize, c.0 as usize)
}

pub(super) fn coord_at(row: usize, col: usize) -> Coord {
    Coord(col as i32, row as i32)
}

/// An even number of rows, at least four, all as wide as the board is tall.
pub(super) fn validate_shape(rows: &[Vec<Tile>]) -> bool {
    let s = rows.len();
    if s < MIN_SIZE as usize || s % 2 != 0 {
        return false;
    }
    rows.iter().all(|row| row.len() == s)
}

/// All-empty rows plus the four starting discs on the center diagonals.
pub(super) fn initial_rows(size: i32) -> Vec<Vec<Tile>> {
    let s = size as usize;
    let h = s / 2;
    let mut rows = vec![vec![Tile::Empty; s]; s];
    rows[h - 1][h - 1] = Tile::Black;
    rows[h - 1][h] = Tile::White;
    rows[h][h - 1] = Tile::White;
    rows[h][h] = Tile::Black;
    rows
}

pub(super) fn corners(size: i32) -> Vec<Coord> {
    let x = size - 1;
    let mut out = Vec::with_capacity(4);
    for i in 0..2 {
        for j in 0..2 {
            out.push(Coord(i * x, j * x));
        }
    }
    out
}
