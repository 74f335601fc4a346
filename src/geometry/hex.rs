//! Hexagonal board operations.
//!
//! Tiles are addressed with axial coordinates: `q` grows to the right, `r`
//! from the top-left toward the bottom-right. Storage is a jagged array
//! whose row lengths grow from `n` on the first row to `2n-1` on the middle
//! row and shrink back symmetrically; the per-row offset `max(0, n-1-r)`
//! maps an axial `q` onto its column slot. Coordinate `(0, 0)` would be the
//! top-left corner of the full axial parallelogram and is not on the board.

use crate::board::Tile;
use crate::coordinate::Coord;

pub(super) const MIN_SIZE: i32 = 3;

/// The six axial neighbor offsets. `(1, 1)` and `(-1, -1)` are not
/// hexagonal neighbors and are excluded.
pub(super) const DIRECTIONS: [(i32, i32); 6] =
    [(1, 0), (0, 1), (-1, 0), (0, -1), (1, -1), (-1, 1)];

pub(super) fn row_count(size: i32) -> usize {
    (2 * size - 1) as usize
}

pub(super) fn row_len(size: i32, row: usize) -> usize {
    let n = size as usize;
    let max = 2 * n - 1;
    if row < n {
        n + row
    } else {
        n + (max - row) - 1
    }
}

// Column slot of axial q = 0 in the given row (rows above the middle are
// shifted right).
fn offset(size: i32, r: i32) -> i32 {
    (size - 1 - r).max(0)
}

pub(super) fn in_bounds(size: i32, c: Coord) -> bool {
    let Coord(q, r) = c;
    if r < 0 || r > 2 * size - 2 {
        return false;
    }
    let min_q = offset(size, r);
    let max_q = 2 * size - 2 - (r - (size - 1)).max(0);
    q >= min_q && q <= max_q
}

pub(super) fn index(size: i32, c: Coord) -> (usize, usize) {
    (c.1 as usize, (c.0 - offset(size, c.1)) as usize)
}

pub(super) fn coord_at(size: i32, row: usize, col: usize) -> Coord {
    Coord(col as i32 + offset(size, row as i32), row as i32)
}

/// A valid hexagonal shape has `2n-1` rows whose lengths grow from the
/// first row's `n` up to the middle row and mirror back down.
pub(super) fn validate_shape(rows: &[Vec<Tile>]) -> bool {
    let n = match rows.first() {
        Some(first) => first.len(),
        None => return false,
    };
    if n < MIN_SIZE as usize || rows.len() != 2 * n - 1 {
        return false;
    }
    rows.iter()
        .enumerate()
        .all(|(i, row)| row.len() == row_len(n as i32, i))
}

/// All-empty rows plus the six starting discs alternating around the
/// center tile.
pub(super) fn initial_rows(size: i32) -> Vec<Vec<Tile>> {
    let n = size as usize;
    let mut rows: Vec<Vec<Tile>> = (0..row_count(size))
        .map(|row| vec![Tile::Empty; row_len(size, row)])
        .collect();
    rows[n - 2][n - 2] = Tile::Black;
    rows[n - 2][n - 1] = Tile::White;
    rows[n - 1][n - 2] = Tile::White;
    rows[n - 1][n] = Tile::Black;
    rows[n][n - 2] = Tile::Black;
    rows[n][n - 1] = Tile::White;
    rows
}

/// The six extreme cells: both components drawn from `{0, n-1, 2n-2}`,
/// scaled indices differing.
pub(super) fn corners(size: i32) -> Vec<Coord> {
    let x = size - 1;
    let mut out = Vec::with_capacity(6);
    for i in 0..3 {
        for j in 0..3 {
            if i != j {
                out.push(Coord(i * x, j * x));
            }
        }
    }
    out
}
