//! Move legality for standard chess: piece geometry, captures, promotion and the rule that a
//! move may not leave the mover's own king in check.
//!
//! Castling and en passant are not modelled, and a promoting pawn always becomes a queen.

pub mod board;
pub mod command;
pub mod error;
pub mod game;
pub mod moves;

pub use board::{Board, Color, Piece, PieceType, Square};
pub use error::ChessError;
pub use game::{create_initial_state, GameState};
