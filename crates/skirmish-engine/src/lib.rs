//! Capture-chess engine with piece-record board representation.
//!
//! This crate provides:
//! - [`Position`] - piece records per side, immutable value semantics
//! - [`generate_moves`] - per-piece movement-rule move generation
//! - [`apply_move`] - move application with capture by displacement
//! - [`evaluate`] - material-only evaluation
//!
//! The rules are deliberately minimal: a game ends when a king is
//! captured, and there is no check detection, castling, en passant,
//! promotion, or draw handling. Callers own board setup and turn
//! sequencing.
//!
//! # Example
//!
//! ```
//! use skirmish_core::Color;
//! use skirmish_engine::{apply_move, generate_moves, Position};
//!
//! let position = Position::standard();
//! let moves = generate_moves(&position, Color::White);
//! assert_eq!(moves.len(), 20);
//!
//! let next = apply_move(&position, moves[0]).unwrap();
//! assert_eq!(next.piece_count(), 32);
//! ```

mod error;
mod eval;
mod movegen;
mod position;

pub use error::MoveError;
pub use eval::evaluate;
pub use movegen::generate_moves;
pub use position::{apply_move, PlacedPiece, Position};
