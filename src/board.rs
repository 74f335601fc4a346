//! Tiles, colors, and the validated playing surface.

use std::fmt;

use crate::coordinate::Coord;
use crate::error::{ConfigError, GameError};
use crate::geometry::Geometry;

/// The contents of one board cell.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Tile {
    Empty,
    Black,
    White,
}

impl Tile {
    /// The color occupying this tile, if any.
    pub fn color(self) -> Option<Color> {
        match self {
            Tile::Empty => None,
            Tile::Black => Some(Color::Black),
            Tile::White => Some(Color::White),
        }
    }

    /// Single-character form used by the text renderings.
    pub fn symbol(self) -> char {
        match self {
            Tile::Empty => '_',
            Tile::Black => 'O',
            Tile::White => 'X',
        }
    }
}

/// One of the two disc colors in play. The game knows exactly these two;
/// a third state is unrepresentable.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// The color on the other side of the table.
    pub fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// The tile a disc of this color shows.
    pub fn tile(self) -> Tile {
        match self {
            Color::Black => Tile::Black,
            Color::White => Tile::White,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => write!(f, "black"),
            Color::White => write!(f, "white"),
        }
    }
}

/// A validated playing surface: a geometry tag, a side length, and jagged
/// tile storage.
///
/// The shape is checked once at construction; afterwards every read or
/// write goes through the geometry's bounds rules, so the shape invariant
/// cannot be broken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    geometry: Geometry,
    size: i32,
    rows: Vec<Vec<Tile>>,
}

impl Board {
    /// A board of the given side length carrying the canonical starting
    /// discs.
    pub fn new(geometry: Geometry, size: i32) -> Result<Self, ConfigError> {
        geometry.check_size(size)?;
        Ok(Board {
            geometry,
            size,
            rows: geometry.initial_rows(size),
        })
    }

    /// Wraps pre-built rows after validating their shape.
    pub fn from_rows(geometry: Geometry, rows: Vec<Vec<Tile>>) -> Result<Self, ConfigError> {
        let size = geometry.size_of(&rows);
        geometry.check_size(size)?;
        if !geometry.validate_shape(&rows) {
            return Err(ConfigError::InvalidShape(geometry));
        }
        Ok(Board {
            geometry,
            size,
            rows,
        })
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// Length of one board edge.
    pub fn size(&self) -> i32 {
        self.size
    }

    pub fn in_bounds(&self, c: Coord) -> bool {
        self.geometry.in_bounds(self.size, c)
    }

    /// The tile at an in-bounds coordinate.
    pub fn tile_at(&self, c: Coord) -> Result<Tile, GameError> {
        if !self.in_bounds(c) {
            return Err(GameError::OutOfBounds(c));
        }
        Ok(self.get(c))
    }

    /// Writes one tile, validating bounds.
    pub fn set_tile(&mut self, c: Coord, tile: Tile) -> Result<(), GameError> {
        if !self.in_bounds(c) {
            return Err(GameError::OutOfBounds(c));
        }
        self.put(c, tile);
        Ok(())
    }

    // Unchecked accessors for coordinates already known to be in bounds.
    pub(crate) fn get(&self, c: Coord) -> Tile {
        let (row, col) = self.geometry.index(self.size, c);
        self.rows[row][col]
    }

    pub(crate) fn put(&mut self, c: Coord, tile: Tile) {
        let (row, col) = self.geometry.index(self.size, c);
        self.rows[row][col] = tile;
    }

    /// Defensive copy of the storage grid.
    pub fn snapshot(&self) -> Vec<Vec<Tile>> {
        self.rows.clone()
    }

    /// The coordinate stored at the given row/column slot.
    pub fn coord_at(&self, row: usize, col: usize) -> Coord {
        self.geometry.coord_at(self.size, row, col)
    }

    /// Every coordinate in storage reading order: top row first, leftmost
    /// column first.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        let geometry = self.geometry;
        let size = self.size;
        self.rows.iter().enumerate().flat_map(move |(row, cells)| {
            (0..cells.len()).map(move |col| geometry.coord_at(size, row, col))
        })
    }

    /// Number of tiles showing the given color.
    pub fn count(&self, color: Color) -> i32 {
        let tile = color.tile();
        self.rows.iter().flatten().filter(|&&t| t == tile).count() as i32
    }

    /// Corner coordinates of this board's geometry.
    pub fn corners(&self) -> Vec<Coord> {
        self.geometry.corners(self.size)
    }

    /// Ray directions of this board's geometry.
    pub fn directions(&self) -> &'static [(i32, i32)] {
        self.geometry.directions()
    }
}
