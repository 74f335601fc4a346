use std::fmt;
use std::str::FromStr;

/// A position on the board, written `(q, r)`.
///
/// On the hexagonal grid these are axial coordinates: `q` grows to the
/// right, `r` from the top-left toward the bottom-right. On the square grid
/// `q` is the column and `r` the row. The coordinate itself carries no
/// bounds; validity is decided by the owning board's geometry.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Coord(pub i32, pub i32);

impl Coord {
    /// Sentinel returned by strategies that found no legal move. Reserved:
    /// it is never an in-bounds coordinate for any geometry.
    pub const NO_MOVE: Coord = Coord(-1, -1);

    /// The `q` component.
    pub fn q(self) -> i32 {
        self.0
    }

    /// The `r` component.
    pub fn r(self) -> i32 {
        self.1
    }

    /// The coordinate one step away in the given direction.
    pub fn step(self, (dq, dr): (i32, i32)) -> Coord {
        Coord(self.0 + dq, self.1 + dr)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.0, self.1)
    }
}

impl FromStr for Coord {
    type Err = String;

    /// Parses a coordinate from its `"q,r"` form.
    ///
    /// # Examples
    /// ```
    /// use std::str::FromStr;
    /// use reversi::Coord;
    /// let c = Coord::from_str("3,4").unwrap();
    /// assert_eq!(c, Coord(3, 4));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(|p| p.trim()).collect();
        if parts.len() != 2 {
            return Err("Expected format: q,r".to_string());
        }
        let q = parts[0].parse::<i32>().map_err(|e| e.to_string())?;
        let r = parts[1].parse::<i32>().map_err(|e| e.to_string())?;
        Ok(Coord(q, r))
    }
}
