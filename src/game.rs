//! # Game State Machine
//!
//! [`Game`] owns the board, the two players, and the turn/termination
//! state, and is the only place mutation happens. Placement runs the
//! directional capture rays defined by the board's geometry; voluntary and
//! forced passes drive termination. Registered listeners hear every
//! state-affecting transition synchronously and in registration order.
//!
//! ## Rules
//! - A placement is legal only on an empty, in-bounds cell from which at
//!   least one direction holds a contiguous run of opposing discs ending in
//!   an own-color disc; every such run is flipped.
//! - A player left without legal moves is passed automatically; two
//!   consecutive passes of any kind end the game.
//! - Rejected mutations leave the state untouched and notify listeners, so
//!   a driver can re-prompt without resynchronizing.

use std::fmt;

use crate::board::{Board, Color, Tile};
use crate::coordinate::Coord;
use crate::error::{ConfigError, GameError};
use crate::geometry::Geometry;
use crate::player::Player;

/// A notification delivered to registered listeners.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameEvent {
    /// The turn advanced to the given color.
    TurnChanged(Color),
    /// Both players passed consecutively; no further mutation is accepted.
    GameOver,
    /// A mutating call was rejected; the state is unchanged.
    IllegalMove,
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameEvent::TurnChanged(color) => write!(f, "turn changed to {}", color),
            GameEvent::GameOver => write!(f, "game over"),
            GameEvent::IllegalMove => write!(f, "illegal move attempted"),
        }
    }
}

/// Receives every state-affecting transition. Reacting to one, such as
/// repainting or prompting an AI seat, is entirely the listener's business;
/// the engine only reports.
pub trait GameListener {
    fn notify(&mut self, event: GameEvent);
}

/// A running game of Reversi on either topology.
pub struct Game {
    board: Board,
    players: [Player; 2],
    current: usize,
    game_over: bool,
    listeners: Vec<Box<dyn GameListener>>,
}

impl Game {
    /// A game on a fresh board with the canonical starting discs and two
    /// strategy-less players; black moves first.
    pub fn new(geometry: Geometry, size: i32) -> Result<Self, ConfigError> {
        let board = Board::new(geometry, size)?;
        Self::with_players(
            board,
            [Player::new(Color::Black), Player::new(Color::White)],
        )
    }

    /// Wraps an already-validated board and two players; the first player
    /// moves first.
    pub fn with_players(board: Board, players: [Player; 2]) -> Result<Self, ConfigError> {
        if players[0].color() == players[1].color() {
            return Err(ConfigError::DuplicateColors);
        }
        let mut game = Game {
            board,
            players,
            current: 0,
            game_over: false,
            listeners: Vec::new(),
        };
        game.refresh_scores();
        Ok(game)
    }

    /// Registers a listener for every future transition.
    pub fn add_listener(&mut self, listener: Box<dyn GameListener>) {
        self.listeners.push(listener);
    }

    /// Announces the opening turn to listeners.
    pub fn start(&mut self) {
        self.emit(GameEvent::TurnChanged(self.current_color()));
    }

    pub fn geometry(&self) -> Geometry {
        self.board.geometry()
    }

    /// Length of one board edge.
    pub fn board_size(&self) -> i32 {
        self.board.size()
    }

    /// The tile at an in-bounds coordinate.
    pub fn tile_at(&self, c: Coord) -> Result<Tile, GameError> {
        self.board.tile_at(c)
    }

    /// Defensive copy of the tile grid in storage order.
    pub fn board_snapshot(&self) -> Vec<Vec<Tile>> {
        self.board.snapshot()
    }

    /// The coordinate stored at the given row/column slot.
    pub fn coord_at(&self, row: usize, col: usize) -> Coord {
        self.board.coord_at(row, col)
    }

    /// Number of discs showing the given color.
    pub fn score(&self, color: Color) -> i32 {
        self.board.count(color)
    }

    /// Whose turn it is.
    pub fn current_color(&self) -> Color {
        self.players[self.current].color()
    }

    /// Clones of both player records, in turn order.
    pub fn players_snapshot(&self) -> [Player; 2] {
        self.players.clone()
    }

    pub fn is_over(&self) -> bool {
        self.game_over
    }

    /// The colors participating, in turn order.
    pub fn colors_in_play(&self) -> [Color; 2] {
        [self.players[0].color(), self.players[1].color()]
    }

    /// Corner coordinates of this board's geometry.
    pub fn corners(&self) -> Vec<Coord> {
        self.board.corners()
    }

    /// Ray directions of this board's geometry.
    pub fn directions(&self) -> &'static [(i32, i32)] {
        self.board.directions()
    }

    /// Every coordinate where the given color has a capturing placement, in
    /// storage reading order.
    pub fn legal_moves(&self, color: Color) -> Vec<Coord> {
        self.board
            .coords()
            .filter(|&c| self.capture_value(c, color) > 0)
            .collect()
    }

    /// Total number of opposing discs a placement at `c` would flip, summed
    /// over every direction; 0 when the cell is out of bounds or occupied.
    pub fn capture_value(&self, c: Coord, color: Color) -> i32 {
        if !self.board.in_bounds(c) || self.board.get(c) != Tile::Empty {
            return 0;
        }
        self.board
            .directions()
            .iter()
            .map(|&dir| self.ray_length(c, dir, color))
            .sum()
    }

    // Length of the capturing run leaving `from` in one direction: a
    // contiguous sequence of opposing discs terminated by an own-color
    // anchor. A run broken by an empty cell or the board edge captures
    // nothing.
    fn ray_length(&self, from: Coord, dir: (i32, i32), color: Color) -> i32 {
        let own = color.tile();
        let other = color.opponent().tile();
        let mut at = from.step(dir);
        let mut run = 0;
        loop {
            if !self.board.in_bounds(at) {
                return 0;
            }
            let tile = self.board.get(at);
            if tile == other {
                run += 1;
            } else if tile == own {
                return run;
            } else {
                return 0;
            }
            at = at.step(dir);
        }
    }

    /// Writes one tile directly, outside the move rules; for controllers
    /// and tests setting up positions. Bounds are validated and a finished
    /// game rejects the write.
    pub fn set_tile(&mut self, c: Coord, tile: Tile) -> Result<(), GameError> {
        if self.game_over {
            self.emit(GameEvent::IllegalMove);
            return Err(GameError::GameOver);
        }
        self.board.set_tile(c, tile)
    }

    /// Places the current player's disc at `c` and flips every captured
    /// run.
    ///
    /// Rejects, without mutating, placements with zero capture value and
    /// any call after the game has ended; both rejections notify listeners.
    /// After a successful placement the scores are recomputed, the turn
    /// advances, and a new current player without legal moves is passed
    /// automatically.
    pub fn place(&mut self, c: Coord) -> Result<(), GameError> {
        if self.game_over {
            self.emit(GameEvent::IllegalMove);
            return Err(GameError::GameOver);
        }
        let mover = self.current_color();
        if self.capture_value(c, mover) == 0 {
            self.emit(GameEvent::IllegalMove);
            return Err(GameError::IllegalMove(c));
        }
        self.board.put(c, mover.tile());
        for &dir in self.board.directions() {
            let run = self.ray_length(c, dir, mover);
            self.flip_run(c, dir, run, mover);
        }
        self.refresh_scores();
        self.players[self.current].set_passed(false);
        self.advance_turn();
        self.auto_pass_blocked();
        Ok(())
    }

    /// Gives up the current player's turn; two consecutive passes end the
    /// game.
    pub fn pass_turn(&mut self) -> Result<(), GameError> {
        if self.game_over {
            self.emit(GameEvent::IllegalMove);
            return Err(GameError::GameOver);
        }
        self.players[self.current].set_passed(true);
        self.advance_turn();
        if self.players.iter().all(Player::has_passed) {
            self.finish();
        }
        Ok(())
    }

    fn flip_run(&mut self, from: Coord, dir: (i32, i32), run: i32, color: Color) {
        let mut at = from.step(dir);
        for _ in 0..run {
            self.board.put(at, color.tile());
            at = at.step(dir);
        }
    }

    fn refresh_scores(&mut self) {
        for i in 0..self.players.len() {
            let count = self.board.count(self.players[i].color());
            self.players[i].set_score(count);
        }
    }

    fn advance_turn(&mut self) {
        self.current = (self.current + 1) % self.players.len();
        self.emit(GameEvent::TurnChanged(self.current_color()));
    }

    // A player left without legal moves is passed without their say, and
    // the turn returns to the other side; if that strands both players the
    // game ends. Not an error: the forced pass is normal control flow.
    fn auto_pass_blocked(&mut self) {
        while !self.game_over && self.legal_moves(self.current_color()).is_empty() {
            self.players[self.current].set_passed(true);
            if self.players.iter().all(Player::has_passed) {
                self.finish();
                break;
            }
            self.advance_turn();
        }
    }

    fn finish(&mut self) {
        self.game_over = true;
        self.emit(GameEvent::GameOver);
    }

    fn emit(&mut self, event: GameEvent) {
        for listener in &mut self.listeners {
            listener.notify(event);
        }
    }
}

impl fmt::Display for Game {
    /// Renders the board as text: `_` empty, `O` black, `X` white, hex rows
    /// centered with leading spaces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.board.snapshot().iter().enumerate() {
            if self.geometry() == Geometry::Hex {
                let lead = (self.board_size() - 1 - i as i32).unsigned_abs() as usize;
                write!(f, "{}", " ".repeat(lead))?;
            }
            for (j, tile) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", tile.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
