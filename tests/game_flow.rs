//! End-to-end exercises of the game state machine on both topologies.

use std::cell::RefCell;
use std::rc::Rc;

use reversi::{
    Board, Color, ConfigError, Coord, Game, GameError, GameEvent, GameListener, Geometry, Player,
    Tile,
};

/// Appends every notification to a shared log.
struct Recorder(Rc<RefCell<Vec<GameEvent>>>);

impl GameListener for Recorder {
    fn notify(&mut self, event: GameEvent) {
        self.0.borrow_mut().push(event);
    }
}

fn record(game: &mut Game) -> Rc<RefCell<Vec<GameEvent>>> {
    let log = Rc::new(RefCell::new(Vec::new()));
    game.add_listener(Box::new(Recorder(log.clone())));
    log
}

fn empty_square_rows() -> Vec<Vec<Tile>> {
    vec![vec![Tile::Empty; 4]; 4]
}

#[test]
fn hex_game_starts_balanced() {
    let game = Game::new(Geometry::Hex, 4).unwrap();
    assert_eq!(game.board_size(), 4);
    assert_eq!(game.score(Color::Black), 3);
    assert_eq!(game.score(Color::White), 3);
    assert_eq!(game.current_color(), Color::Black);
    assert_eq!(game.colors_in_play(), [Color::Black, Color::White]);
    assert!(!game.is_over());
    let [black, white] = game.players_snapshot();
    assert_eq!(black.score(), 3);
    assert_eq!(white.score(), 3);
    assert!(!black.has_passed());
}

#[test]
fn square_game_starts_balanced() {
    let game = Game::new(Geometry::Square, 4).unwrap();
    assert_eq!(game.score(Color::Black), 2);
    assert_eq!(game.score(Color::White), 2);
    assert_eq!(game.current_color(), Color::Black);
}

#[test]
fn hex_opening_capture_flips_the_line() {
    let mut game = Game::new(Geometry::Hex, 4).unwrap();
    let log = record(&mut game);

    game.place(Coord(2, 2)).unwrap();

    assert_eq!(game.score(Color::Black), 5);
    assert_eq!(game.score(Color::White), 2);
    assert_eq!(game.tile_at(Coord(2, 2)).unwrap(), Tile::Black);
    assert_eq!(game.tile_at(Coord(2, 3)).unwrap(), Tile::Black);
    assert_eq!(game.current_color(), Color::White);
    assert_eq!(
        *log.borrow(),
        vec![GameEvent::TurnChanged(Color::White)]
    );
    let [black, white] = game.players_snapshot();
    assert_eq!(black.score(), 5);
    assert_eq!(white.score(), 2);
}

#[test]
fn square_opening_capture_flips_the_diagonal_run() {
    let mut game = Game::new(Geometry::Square, 4).unwrap();
    // Black flips exactly the one white disc between (3,1) and the (1,1)
    // anchor, gaining the flipped count plus the placed disc.
    game.place(Coord(3, 1)).unwrap();
    assert_eq!(game.score(Color::Black), 4);
    assert_eq!(game.score(Color::White), 1);
    assert_eq!(game.tile_at(Coord(2, 1)).unwrap(), Tile::Black);
    assert_eq!(game.current_color(), Color::White);
}

#[test]
fn fresh_hex_board_has_six_openings_for_black() {
    let game = Game::new(Geometry::Hex, 4).unwrap();
    let moves = game.legal_moves(Color::Black);
    assert_eq!(
        moves,
        vec![
            Coord(4, 1),
            Coord(2, 2),
            Coord(5, 2),
            Coord(1, 4),
            Coord(4, 4),
            Coord(2, 5),
        ]
    );
    for &c in &moves {
        assert_eq!(game.capture_value(c, Color::Black), 1);
    }
    // Idempotent without intervening mutation.
    assert_eq!(game.legal_moves(Color::Black), moves);
}

#[test]
fn illegal_placements_are_rejected_without_mutation() {
    let mut game = Game::new(Geometry::Hex, 4).unwrap();
    let log = record(&mut game);
    let before = game.board_snapshot();

    // Occupied cell.
    assert_eq!(
        game.place(Coord(3, 2)),
        Err(GameError::IllegalMove(Coord(3, 2)))
    );
    // Out of bounds.
    assert_eq!(
        game.place(Coord(0, 0)),
        Err(GameError::IllegalMove(Coord(0, 0)))
    );
    // Empty but capturing nothing.
    assert_eq!(
        game.place(Coord(3, 0)),
        Err(GameError::IllegalMove(Coord(3, 0)))
    );

    assert_eq!(game.board_snapshot(), before);
    assert_eq!(game.current_color(), Color::Black);
    assert!(!game.is_over());
    assert_eq!(
        *log.borrow(),
        vec![
            GameEvent::IllegalMove,
            GameEvent::IllegalMove,
            GameEvent::IllegalMove
        ]
    );
}

#[test]
fn two_consecutive_passes_end_the_game() {
    let mut game = Game::new(Geometry::Hex, 4).unwrap();
    let log = record(&mut game);

    game.pass_turn().unwrap();
    assert!(!game.is_over());
    game.pass_turn().unwrap();
    assert!(game.is_over());
    assert_eq!(
        *log.borrow(),
        vec![
            GameEvent::TurnChanged(Color::White),
            GameEvent::TurnChanged(Color::Black),
            GameEvent::GameOver,
        ]
    );
}

#[test]
fn a_placement_interrupts_the_pass_chain() {
    let mut game = Game::new(Geometry::Square, 4).unwrap();
    game.pass_turn().unwrap();
    // White places, clearing its own flag; black's later pass is then the
    // first of a fresh pair.
    game.place(Coord(1, 0)).unwrap();
    assert!(!game.is_over());
    game.pass_turn().unwrap();
    assert!(!game.is_over());
}

#[test]
fn finished_games_reject_all_mutation() {
    let mut game = Game::new(Geometry::Hex, 4).unwrap();
    game.pass_turn().unwrap();
    game.pass_turn().unwrap();
    let log = record(&mut game);

    assert_eq!(game.place(Coord(2, 2)), Err(GameError::GameOver));
    assert_eq!(game.pass_turn(), Err(GameError::GameOver));
    assert_eq!(
        game.set_tile(Coord(2, 2), Tile::Black),
        Err(GameError::GameOver)
    );
    assert_eq!(
        *log.borrow(),
        vec![
            GameEvent::IllegalMove,
            GameEvent::IllegalMove,
            GameEvent::IllegalMove
        ]
    );
}

#[test]
fn stranded_opponent_is_passed_automatically() {
    // Black plays (1,1), flipping (2,1); white keeps only (0,1) and has no
    // answer, so the turn comes straight back to black.
    let mut rows = empty_square_rows();
    rows[0][0] = Tile::Black;
    rows[1][0] = Tile::White;
    rows[1][2] = Tile::White;
    rows[1][3] = Tile::Black;
    let board = Board::from_rows(Geometry::Square, rows).unwrap();
    let mut game = Game::with_players(
        board,
        [Player::new(Color::Black), Player::new(Color::White)],
    )
    .unwrap();
    let log = record(&mut game);

    game.place(Coord(1, 1)).unwrap();

    assert!(!game.is_over());
    assert_eq!(game.current_color(), Color::Black);
    assert_eq!(game.score(Color::Black), 4);
    assert_eq!(game.score(Color::White), 1);
    let [black, white] = game.players_snapshot();
    assert!(white.has_passed());
    assert!(!black.has_passed());
    assert_eq!(
        *log.borrow(),
        vec![
            GameEvent::TurnChanged(Color::White),
            GameEvent::TurnChanged(Color::Black),
        ]
    );
    // Black indeed still has a move.
    assert!(game.legal_moves(Color::Black).contains(&Coord(0, 2)));
    assert!(game.legal_moves(Color::White).is_empty());
}

#[test]
fn stranding_both_players_ends_the_game() {
    // Black's capture removes the last white disc; neither side can move
    // again, so both are passed and the game ends.
    let mut rows = empty_square_rows();
    rows[0][1] = Tile::White;
    rows[0][2] = Tile::Black;
    let board = Board::from_rows(Geometry::Square, rows).unwrap();
    let mut game = Game::with_players(
        board,
        [Player::new(Color::Black), Player::new(Color::White)],
    )
    .unwrap();
    let log = record(&mut game);

    game.place(Coord(0, 0)).unwrap();

    assert!(game.is_over());
    assert_eq!(game.score(Color::Black), 3);
    assert_eq!(game.score(Color::White), 0);
    assert_eq!(
        *log.borrow(),
        vec![
            GameEvent::TurnChanged(Color::White),
            GameEvent::TurnChanged(Color::Black),
            GameEvent::GameOver,
        ]
    );
}

#[test]
fn duplicate_colors_are_rejected_at_construction() {
    let board = Board::new(Geometry::Square, 4).unwrap();
    assert_eq!(
        Game::with_players(
            board,
            [Player::new(Color::Black), Player::new(Color::Black)]
        )
        .err(),
        Some(ConfigError::DuplicateColors)
    );
}

#[test]
fn start_announces_the_opening_turn() {
    let mut game = Game::new(Geometry::Hex, 4).unwrap();
    let log = record(&mut game);
    game.start();
    assert_eq!(*log.borrow(), vec![GameEvent::TurnChanged(Color::Black)]);
}

#[test]
fn read_surface_defends_its_copies() {
    let mut game = Game::new(Geometry::Square, 4).unwrap();
    let mut snapshot = game.board_snapshot();
    snapshot[0][0] = Tile::Black;
    assert_eq!(game.tile_at(Coord(0, 0)).unwrap(), Tile::Empty);

    let [mut black, _] = game.players_snapshot();
    black.set_strategy("combined".parse().unwrap());
    assert!(game.players_snapshot()[0].strategy().is_none());

    // Direct tile writes go through bounds validation.
    assert_eq!(
        game.set_tile(Coord(9, 9), Tile::White),
        Err(GameError::OutOfBounds(Coord(9, 9)))
    );
    assert_eq!(
        game.tile_at(Coord(-1, 0)),
        Err(GameError::OutOfBounds(Coord(-1, 0)))
    );
}
