//! Engine error types.

use skirmish_core::{Piece, Square};
use thiserror::Error;

/// Errors that can occur when applying a move to a position.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MoveError {
    /// Neither side fields the moving piece type on the move's origin
    /// square. The position the move was applied to is left untouched.
    #[error("no {piece} at origin {square}")]
    InvalidOrigin {
        /// The piece type the move claimed to relocate.
        piece: Piece,
        /// The origin square no piece was found on.
        square: Square,
    },
}
