//! Player records and autonomous move selection.

use crate::board::Color;
use crate::coordinate::Coord;
use crate::game::Game;
use crate::strategy::Strategy;

/// What a player wants to do with their turn.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Choice {
    /// Place a disc at the coordinate.
    Move(Coord),
    /// Give up the turn.
    Pass,
}

/// One seat at the table: a color, its running score, whether its most
/// recent turn was a pass, and an optional strategy that plays the seat
/// autonomously. A seat without a strategy is driven from outside.
#[derive(Debug, Clone)]
pub struct Player {
    color: Color,
    score: i32,
    passed: bool,
    strategy: Option<Strategy>,
}

impl Player {
    /// A seat with no strategy bound; moves come from an external driver.
    pub fn new(color: Color) -> Self {
        Player {
            color,
            score: 0,
            passed: false,
            strategy: None,
        }
    }

    /// A seat that picks its own moves with the given strategy.
    pub fn with_strategy(color: Color, strategy: Strategy) -> Self {
        Player {
            color,
            score: 0,
            passed: false,
            strategy: Some(strategy),
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Disc count after the most recent placement.
    pub fn score(&self) -> i32 {
        self.score
    }

    /// Whether this seat's most recent turn was a pass, voluntary or
    /// forced.
    pub fn has_passed(&self) -> bool {
        self.passed
    }

    pub fn strategy(&self) -> Option<&Strategy> {
        self.strategy.as_ref()
    }

    /// Binds (or replaces) the strategy playing this seat.
    pub fn set_strategy(&mut self, strategy: Strategy) {
        self.strategy = Some(strategy);
    }

    pub(crate) fn set_score(&mut self, score: i32) {
        self.score = score;
    }

    pub(crate) fn set_passed(&mut self, passed: bool) {
        self.passed = passed;
    }

    /// Asks the bound strategy for this seat's move. `None` when no
    /// strategy is bound; [`Choice::Pass`] when the strategy found no legal
    /// move.
    pub fn choose_move(&self, game: &Game) -> Option<Choice> {
        let strategy = self.strategy.as_ref()?;
        let best = strategy.best_move(game, self.color);
        if best == Coord::NO_MOVE {
            Some(Choice::Pass)
        } else {
            Some(Choice::Move(best))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Tile};
    use crate::geometry::Geometry;

    #[test]
    fn test_unbound_seat_chooses_nothing() {
        let game = Game::new(Geometry::Hex, 4).unwrap();
        let seat = Player::new(Color::Black);
        assert_eq!(seat.choose_move(&game), None);
    }

    #[test]
    fn test_bound_seat_chooses_a_legal_move() {
        let game = Game::new(Geometry::Hex, 4).unwrap();
        let seat = Player::with_strategy(Color::Black, Strategy::MostCaptures);
        match seat.choose_move(&game) {
            Some(Choice::Move(c)) => assert!(game.legal_moves(Color::Black).contains(&c)),
            other => panic!("expected a move, got {:?}", other),
        }
    }

    #[test]
    fn test_blocked_seat_passes() {
        // A lone black disc leaves white nothing to capture.
        let mut rows = vec![vec![Tile::Empty; 4]; 4];
        rows[0][0] = Tile::Black;
        let board = Board::from_rows(Geometry::Square, rows).unwrap();
        let game = Game::with_players(
            board,
            [Player::new(Color::Black), Player::new(Color::White)],
        )
        .unwrap();
        let seat = Player::with_strategy(Color::White, Strategy::MostCaptures);
        assert_eq!(seat.choose_move(&game), Some(Choice::Pass));
    }

    #[test]
    fn test_set_strategy() {
        let mut seat = Player::new(Color::White);
        assert!(seat.strategy().is_none());
        seat.set_strategy(Strategy::TakeCorners);
        assert_eq!(seat.strategy(), Some(&Strategy::TakeCorners));
    }
}
