//! Board position as explicit piece records per side.

use skirmish_core::{Color, Move, Piece, Square};

use crate::MoveError;

/// A single piece standing on a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedPiece {
    /// The piece type.
    pub piece: Piece,
    /// The square the piece stands on.
    pub square: Square,
}

impl PlacedPiece {
    /// Creates a new placed piece.
    #[inline]
    pub const fn new(piece: Piece, square: Square) -> Self {
        PlacedPiece { piece, square }
    }
}

/// A board position: one list of piece records per side.
///
/// Positions are immutable values. [`apply_move`] returns a new position
/// and never touches its input, so positions on different search branches
/// never alias each other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    /// Piece records per side, indexed by [`Color::index`].
    sides: [Vec<PlacedPiece>; 2],
}

impl Position {
    /// Creates a position with no pieces.
    pub fn empty() -> Self {
        Position {
            sides: [Vec::new(), Vec::new()],
        }
    }

    /// Creates a position from one piece list per side.
    pub fn new(white: Vec<PlacedPiece>, black: Vec<PlacedPiece>) -> Self {
        Position {
            sides: [white, black],
        }
    }

    /// Creates the conventional 32-piece starting setup.
    pub fn standard() -> Self {
        const BACK_RANK: [Piece; 8] = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];

        let mut white = Vec::with_capacity(16);
        let mut black = Vec::with_capacity(16);
        for file in 0..8u8 {
            let at = |rank: u8| {
                Square::from_coords(file, rank).expect("standard setup squares are on the board")
            };
            white.push(PlacedPiece::new(BACK_RANK[file as usize], at(0)));
            white.push(PlacedPiece::new(Piece::Pawn, at(1)));
            black.push(PlacedPiece::new(BACK_RANK[file as usize], at(7)));
            black.push(PlacedPiece::new(Piece::Pawn, at(6)));
        }
        Position::new(white, black)
    }

    /// Returns the piece records of the given side.
    #[inline]
    pub fn pieces(&self, color: Color) -> &[PlacedPiece] {
        &self.sides[color.index()]
    }

    /// Returns the piece and color standing on the given square, if any.
    pub fn piece_at(&self, square: Square) -> Option<(Piece, Color)> {
        for color in [Color::White, Color::Black] {
            if let Some(placed) = self.pieces(color).iter().find(|p| p.square == square) {
                return Some((placed.piece, color));
            }
        }
        None
    }

    /// Returns true if any piece stands on the given square.
    #[inline]
    pub fn is_occupied(&self, square: Square) -> bool {
        self.is_occupied_by(Color::White, square) || self.is_occupied_by(Color::Black, square)
    }

    /// Returns true if a piece of the given side stands on the given square.
    #[inline]
    pub fn is_occupied_by(&self, color: Color, square: Square) -> bool {
        self.pieces(color).iter().any(|p| p.square == square)
    }

    /// Returns the total number of pieces on the board.
    #[inline]
    pub fn piece_count(&self) -> usize {
        self.sides[0].len() + self.sides[1].len()
    }

    /// Returns true if the given side still has its king.
    pub fn has_king(&self, color: Color) -> bool {
        self.pieces(color).iter().any(|p| p.piece == Piece::King)
    }

    /// Returns true if either side has lost its king.
    ///
    /// King capture is the sole terminal condition; there is no checkmate,
    /// stalemate, or draw detection.
    pub fn is_game_over(&self) -> bool {
        !self.has_king(Color::White) || !self.has_king(Color::Black)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::standard()
    }
}

/// Applies a move to a position, returning the resulting position.
///
/// The owning side is resolved by membership: a side owns the move when it
/// fields the moving piece type and occupies the origin square, with Black
/// tested first. Within the owning side the moving record is the first one
/// standing on the origin. If the destination holds an opposing piece, that
/// piece is removed (capture by displacement); the relative order of the
/// surviving records is preserved.
///
/// Returns [`MoveError::InvalidOrigin`] when no side qualifies. The input
/// position is never modified, so on failure the caller's position is
/// exactly as it was.
pub fn apply_move(position: &Position, mov: Move) -> Result<Position, MoveError> {
    for color in [Color::Black, Color::White] {
        let fields_piece = position.pieces(color).iter().any(|p| p.piece == mov.piece);
        let origin = position
            .pieces(color)
            .iter()
            .position(|p| p.square == mov.from);
        if let (true, Some(index)) = (fields_piece, origin) {
            let mut next = position.clone();
            next.sides[color.index()][index].square = mov.to;

            let them = color.opposite();
            let captured = next.sides[them.index()]
                .iter()
                .position(|p| p.square == mov.to);
            if let Some(captured) = captured {
                next.sides[them.index()].remove(captured);
            }
            return Ok(next);
        }
    }
    Err(MoveError::InvalidOrigin {
        piece: mov.piece,
        square: mov.from,
    })
}
