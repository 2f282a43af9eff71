//! Per-piece move generation.
//!
//! Moves are generated by movement rule only: captures of the opposing
//! king are legal, and no filtering against check is performed.

use skirmish_core::{Color, Move, Piece, Square};

use crate::Position;

/// The eight knight jumps.
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

/// The eight king steps.
const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (-1, 1),
    (1, -1),
    (-1, -1),
];

/// The four axis directions rooks slide along.
const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// The four diagonal directions bishops slide along.
const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];

/// Generates all moves for the given side.
///
/// Moves are produced in piece-record order, so callers that break ties by
/// taking the first candidate get a deterministic result. A final filter
/// drops any candidate whose destination is occupied by the moving side.
pub fn generate_moves(position: &Position, color: Color) -> Vec<Move> {
    let mut moves = Vec::new();
    for placed in position.pieces(color) {
        let from = placed.square;
        match placed.piece {
            Piece::Pawn => pawn_moves(position, color, from, &mut moves),
            Piece::Knight => {
                step_moves(position, color, from, Piece::Knight, &KNIGHT_OFFSETS, &mut moves)
            }
            Piece::King => {
                step_moves(position, color, from, Piece::King, &KING_OFFSETS, &mut moves)
            }
            Piece::Rook => {
                ray_moves(position, color, from, Piece::Rook, &ROOK_DIRECTIONS, &mut moves)
            }
            Piece::Bishop => {
                ray_moves(position, color, from, Piece::Bishop, &BISHOP_DIRECTIONS, &mut moves)
            }
            Piece::Queen => {
                ray_moves(position, color, from, Piece::Queen, &ROOK_DIRECTIONS, &mut moves);
                ray_moves(position, color, from, Piece::Queen, &BISHOP_DIRECTIONS, &mut moves);
            }
        }
    }

    // No destination may coincide with a square the moving side occupies.
    moves.retain(|m| !position.is_occupied_by(color, m.to));
    moves
}

/// Pawn moves: forward steps onto empty squares and diagonal captures.
///
/// The double step is allowed only from the side's home rank and checks
/// only its destination square, not the intervening one: a pawn may jump
/// over a blocker standing directly in front of it.
fn pawn_moves(position: &Position, color: Color, from: Square, moves: &mut Vec<Move>) {
    let dir = color.pawn_direction();

    if let Some(to) = from.offset(0, dir) {
        if !position.is_occupied(to) {
            moves.push(Move::new(from, Piece::Pawn, to));
        }
    }

    if from.rank() == color.home_rank() {
        if let Some(to) = from.offset(0, 2 * dir) {
            if !position.is_occupied(to) {
                moves.push(Move::new(from, Piece::Pawn, to));
            }
        }
    }

    for file_delta in [1i8, -1] {
        if let Some(to) = from.offset(file_delta, dir) {
            if position.is_occupied_by(color.opposite(), to) {
                moves.push(Move::new(from, Piece::Pawn, to));
            }
        }
    }
}

/// Fixed-offset moves for knights and kings: each in-bounds destination
/// that is empty or holds an opposing piece.
fn step_moves(
    position: &Position,
    color: Color,
    from: Square,
    piece: Piece,
    offsets: &[(i8, i8)],
    moves: &mut Vec<Move>,
) {
    for &(file_delta, rank_delta) in offsets {
        if let Some(to) = from.offset(file_delta, rank_delta) {
            if !position.is_occupied_by(color, to) {
                moves.push(Move::new(from, piece, to));
            }
        }
    }
}

/// Sliding moves for rooks, bishops, and queens.
///
/// Each ray walks outward one square at a time: empty squares are added
/// and the walk continues; an opposing piece is added as a capture and the
/// walk stops; an own piece or the board edge stops the walk without a
/// move. A stopped ray is never resumed.
fn ray_moves(
    position: &Position,
    color: Color,
    from: Square,
    piece: Piece,
    directions: &[(i8, i8)],
    moves: &mut Vec<Move>,
) {
    for &(file_delta, rank_delta) in directions {
        let mut current = from;
        loop {
            let to = match current.offset(file_delta, rank_delta) {
                Some(to) => to,
                None => break,
            };
            if position.is_occupied_by(color, to) {
                break;
            }
            if position.is_occupied_by(color.opposite(), to) {
                moves.push(Move::new(from, piece, to));
                break;
            }
            moves.push(Move::new(from, piece, to));
            current = to;
        }
    }
}
