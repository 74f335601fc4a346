//! # Reversi Rules Engine
//!
//! A rules engine and move-evaluation layer for Reversi (Othello) played on
//! either of two board topologies: a symmetric hexagonal grid addressed with
//! axial coordinates, or the standard square grid. Both run under one rule
//! model; everything topology-specific is dispatched through the closed
//! [`Geometry`] enum.
//!
//! ## Architecture
//! - [`Game`] owns the board and both players and is the only place mutation
//!   happens: legal placement, directional capture, voluntary and forced
//!   passes, and termination.
//! - [`Strategy`] evaluates candidate moves over a read-only game borrow and
//!   resolves ties deterministically, so AI seats and hint displays agree.
//! - Registered [`GameListener`]s hear every state-affecting transition
//!   synchronously and in order.
//!
//! The `play` binary is an external driver: it wires strategies to seats and
//! loops turns using only the public read/write surface.

pub mod board;
pub mod coordinate;
pub mod error;
pub mod game;
pub mod geometry;
pub mod player;
pub mod strategy;

pub use board::{Board, Color, Tile};
pub use coordinate::Coord;
pub use error::{ConfigError, GameError};
pub use game::{Game, GameEvent, GameListener};
pub use geometry::Geometry;
pub use player::{Choice, Player};
pub use strategy::{pick_best, Strategy};
