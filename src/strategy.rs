//! # Move-Evaluation Strategies
//!
//! Pure scoring over a read-only game borrow. Each strategy assigns one
//! integer per candidate move (the score array is parallel to
//! [`Game::legal_moves`]), and [`Strategy::best_move`] resolves the array
//! with a deterministic upper-left tie-break, so AI seats and hint displays
//! always agree on the same move.
//!
//! Strategies never mutate the game and hold no state of their own;
//! composition is a tagged [`Strategy::Combined`] variant summed by one
//! recursive scorer rather than a chain of dispatching objects.

use std::str::FromStr;

use crate::board::Color;
use crate::coordinate::Coord;
use crate::game::Game;

/// A move evaluator. Leaf variants score one concern; [`Strategy::Combined`]
/// sums its children over the same move list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Strategy {
    /// Score each move by the number of discs it flips.
    MostCaptures,
    /// Score 2 for corner cells, 0 otherwise.
    TakeCorners,
    /// Score -2 for cells one step away from a corner, 0 otherwise.
    AvoidNearCorners,
    /// Element-wise sum of the child scores.
    Combined(Vec<Strategy>),
}

impl Strategy {
    /// Scores for every legal move of `color`, in [`Game::legal_moves`]
    /// order.
    pub fn move_values(&self, game: &Game, color: Color) -> Vec<i32> {
        let moves = game.legal_moves(color);
        self.score_moves(game, color, &moves)
    }

    /// The highest-scoring legal move, upper-left winning ties;
    /// [`Coord::NO_MOVE`] when the color cannot move at all.
    pub fn best_move(&self, game: &Game, color: Color) -> Coord {
        let moves = game.legal_moves(color);
        let values = self.score_moves(game, color, &moves);
        pick_best(&moves, &values)
    }

    // Scores an explicit candidate list. Combined recurses here so every
    // child sees the identical list.
    fn score_moves(&self, game: &Game, color: Color, moves: &[Coord]) -> Vec<i32> {
        match self {
            Strategy::MostCaptures => moves
                .iter()
                .map(|&c| game.capture_value(c, color))
                .collect(),
            Strategy::TakeCorners => {
                let corners = game.corners();
                moves
                    .iter()
                    .map(|c| if corners.contains(c) { 2 } else { 0 })
                    .collect()
            }
            Strategy::AvoidNearCorners => {
                let danger = near_corners(game);
                moves
                    .iter()
                    .map(|c| if danger.contains(c) { -2 } else { 0 })
                    .collect()
            }
            Strategy::Combined(parts) => {
                let mut totals = vec![0; moves.len()];
                for part in parts {
                    let values = part.score_moves(game, color, moves);
                    for (total, value) in totals.iter_mut().zip(values) {
                        *total += value;
                    }
                }
                totals
            }
        }
    }
}

// Cells one geometry step away from a corner. Only the direction offsets
// are applied and none of them is (0, 0), so a corner never counts as near
// itself.
fn near_corners(game: &Game) -> Vec<Coord> {
    let mut cells = Vec::new();
    for corner in game.corners() {
        for &dir in game.directions() {
            cells.push(corner.step(dir));
        }
    }
    cells
}

/// Resolves a parallel score array to the winning move.
///
/// Scanning left to right, a strictly higher score takes over; an equal
/// score takes over only from a lower `r`, or the same `r` and a lower `q`
/// (upper-left wins ties). Returns [`Coord::NO_MOVE`] for an empty list.
pub fn pick_best(moves: &[Coord], values: &[i32]) -> Coord {
    if values.is_empty() {
        return Coord::NO_MOVE;
    }
    let mut best = 0;
    let mut highest = values[0];
    for (i, &value) in values.iter().enumerate() {
        if value > highest {
            highest = value;
            best = i;
        } else if value == highest {
            let (cur, top) = (moves[i], moves[best]);
            if cur.1 < top.1 || (cur.1 == top.1 && cur.0 < top.0) {
                best = i;
            }
        }
    }
    moves[best]
}

impl FromStr for Strategy {
    type Err = String;

    /// Parses a strategy name as given on the command line; `"combined"`
    /// is every leaf strategy summed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "most-captures" => Ok(Strategy::MostCaptures),
            "take-corners" => Ok(Strategy::TakeCorners),
            "avoid-near-corners" => Ok(Strategy::AvoidNearCorners),
            "combined" => Ok(Strategy::Combined(vec![
                Strategy::MostCaptures,
                Strategy::TakeCorners,
                Strategy::AvoidNearCorners,
            ])),
            other => Err(format!("unknown strategy: {}", other)),
        }
    }
}
