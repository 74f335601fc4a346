use crate::coordinate::Coord;
use crate::geometry::Geometry;

/// Errors that reject a game or board at construction time.
///
/// Construction either succeeds completely or produces no state at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{geometry} board side {size} is below the geometry minimum")]
    SizeTooSmall { geometry: Geometry, size: i32 },

    #[error("square boards need an even side, got {0}")]
    OddSquareSize(i32),

    #[error("rows do not form a valid {0} board")]
    InvalidShape(Geometry),

    #[error("the two players must use distinct colors")]
    DuplicateColors,
}

/// Errors raised by game operations at run time.
///
/// Every variant leaves the game state untouched; retrying is the caller's
/// policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("coordinate {0} is outside the board")]
    OutOfBounds(Coord),

    #[error("cannot place at {0}: no capturing line")]
    IllegalMove(Coord),

    #[error("the game is already over")]
    GameOver,
}
