//! Minimax move selection with alpha-beta pruning.
//!
//! A fixed-depth adversarial search over the engine's move generator,
//! move applier, and material evaluation. White is always the maximizer
//! and Black the minimizer, matching the white-positive sign of
//! [`evaluate`]. There is no move ordering, transposition table,
//! quiescence, or iterative deepening.
//!
//! # Example
//!
//! ```
//! use bot_minimax::select_move;
//! use skirmish_engine::Position;
//!
//! // Black to move from the standard setup.
//! let mov = select_move(&Position::standard());
//! assert!(mov.is_some());
//! ```

use skirmish_core::{Color, Move};
use skirmish_engine::{apply_move, evaluate, generate_moves, Position};

/// Search depth below each candidate move, in plies.
pub const SEARCH_DEPTH: u8 = 3;

/// Depth-limited minimax with alpha-beta pruning.
///
/// Returns [`evaluate`] of the position once `depth` reaches zero or a
/// king has been captured. Otherwise the maximizing branch searches
/// White's moves and the minimizing branch Black's, each child one ply
/// shallower with the roles swapped. Siblings at a node are abandoned as
/// soon as `beta <= alpha`.
///
/// With no moves to search, the maximizing branch yields `i32::MIN` and
/// the minimizing branch `i32::MAX`; the extremes double as the
/// unbounded starting window. Callers must not read a stalemate out of
/// these sentinels.
pub fn minimax(
    position: &Position,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
) -> i32 {
    if depth == 0 || position.is_game_over() {
        return evaluate(position);
    }

    if maximizing {
        let mut best = i32::MIN;
        for mov in generate_moves(position, Color::White) {
            // Generated moves always apply to the position they came
            // from; anything else is skipped, not propagated.
            let child = match apply_move(position, mov) {
                Ok(child) => child,
                Err(_) => continue,
            };
            let score = minimax(&child, depth - 1, alpha, beta, false);
            best = best.max(score);
            alpha = alpha.max(score);
            if beta <= alpha {
                break;
            }
        }
        best
    } else {
        let mut best = i32::MAX;
        for mov in generate_moves(position, Color::Black) {
            let child = match apply_move(position, mov) {
                Ok(child) => child,
                Err(_) => continue,
            };
            let score = minimax(&child, depth - 1, alpha, beta, true);
            best = best.min(score);
            beta = beta.min(score);
            if beta <= alpha {
                break;
            }
        }
        best
    }
}

/// Selects a move for Black.
///
/// Every candidate move of Black is applied and the resulting position is
/// searched [`SEARCH_DEPTH`] plies deep with White to move as the
/// maximizer. The candidate whose search score is strictly minimal wins;
/// on ties the first candidate in generation order is kept. Black
/// minimizes because the evaluation is white-positive.
///
/// Returns `None` when Black has no moves. Callers must not read a
/// stalemate out of this: move legality here is movement-rule only.
pub fn select_move(position: &Position) -> Option<Move> {
    let mut best_move = None;
    let mut best_score = i32::MAX;

    for mov in generate_moves(position, Color::Black) {
        let child = match apply_move(position, mov) {
            Ok(child) => child,
            Err(_) => continue,
        };
        let score = minimax(&child, SEARCH_DEPTH, i32::MIN, i32::MAX, true);
        if score < best_score {
            best_score = score;
            best_move = Some(mov);
        }
    }

    best_move
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use skirmish_core::{Piece, Square};
    use skirmish_engine::PlacedPiece;

    fn sq(file: u8, rank: u8) -> Square {
        Square::from_coords(file, rank).unwrap()
    }

    fn placed(piece: Piece, file: u8, rank: u8) -> PlacedPiece {
        PlacedPiece::new(piece, sq(file, rank))
    }

    /// Full-width reference search without pruning.
    fn full_minimax(position: &Position, depth: u8, maximizing: bool) -> i32 {
        if depth == 0 || position.is_game_over() {
            return evaluate(position);
        }
        let color = if maximizing { Color::White } else { Color::Black };
        let scores = generate_moves(position, color).into_iter().map(|mov| {
            let child = apply_move(position, mov).unwrap();
            full_minimax(&child, depth - 1, !maximizing)
        });
        if maximizing {
            scores.fold(i32::MIN, i32::max)
        } else {
            scores.fold(i32::MAX, i32::min)
        }
    }

    #[test]
    fn depth_zero_returns_the_static_evaluation() {
        let position = Position::new(
            vec![placed(Piece::King, 4, 0), placed(Piece::Rook, 0, 0)],
            vec![placed(Piece::King, 4, 7)],
        );
        assert_eq!(minimax(&position, 0, i32::MIN, i32::MAX, true), 5);
        assert_eq!(minimax(&position, 0, i32::MIN, i32::MAX, false), 5);
    }

    #[test]
    fn a_captured_king_short_circuits_the_search() {
        let position = Position::new(
            vec![placed(Piece::King, 4, 0), placed(Piece::Queen, 3, 0)],
            vec![placed(Piece::Rook, 0, 7), placed(Piece::Rook, 7, 7)],
        );
        assert!(position.is_game_over());
        // Depth is irrelevant once a king is gone.
        assert_eq!(
            minimax(&position, 5, i32::MIN, i32::MAX, true),
            evaluate(&position)
        );
        assert_eq!(minimax(&position, 5, i32::MIN, i32::MAX, true), 999);
    }

    #[test]
    fn the_maximizer_takes_a_hanging_queen() {
        let position = Position::new(
            vec![placed(Piece::King, 7, 0), placed(Piece::Rook, 0, 0)],
            vec![placed(Piece::King, 7, 7), placed(Piece::Queen, 0, 5)],
        );
        // Rook takes the queen on a6: material goes from -4 to +5.
        assert_eq!(minimax(&position, 1, i32::MIN, i32::MAX, true), 5);
    }

    #[test]
    fn the_minimizer_takes_a_hanging_rook() {
        let position = Position::new(
            vec![placed(Piece::King, 7, 0), placed(Piece::Rook, 0, 5)],
            vec![placed(Piece::King, 7, 7), placed(Piece::Queen, 0, 2)],
        );
        // Queen takes the rook on a6: material goes from -4 to -9.
        assert_eq!(minimax(&position, 1, i32::MIN, i32::MAX, false), -9);
    }

    #[test]
    fn a_side_with_no_moves_degrades_to_the_sentinel() {
        // Both corners are fully self-blocked: every pawn is stuck and
        // each king is boxed in by its own pawns.
        let position = Position::new(
            vec![
                placed(Piece::King, 7, 7),
                placed(Piece::Pawn, 6, 7),
                placed(Piece::Pawn, 7, 6),
                placed(Piece::Pawn, 6, 6),
            ],
            vec![
                placed(Piece::King, 0, 0),
                placed(Piece::Pawn, 1, 0),
                placed(Piece::Pawn, 0, 1),
                placed(Piece::Pawn, 1, 1),
            ],
        );
        assert!(generate_moves(&position, Color::White).is_empty());
        assert!(generate_moves(&position, Color::Black).is_empty());
        assert_eq!(minimax(&position, 2, i32::MIN, i32::MAX, true), i32::MIN);
        assert_eq!(minimax(&position, 2, i32::MIN, i32::MAX, false), i32::MAX);
    }

    #[test]
    fn select_move_takes_a_hanging_white_queen() {
        let position = Position::new(
            vec![placed(Piece::King, 0, 0), placed(Piece::Queen, 3, 3)],
            vec![placed(Piece::King, 7, 7), placed(Piece::Rook, 3, 6)],
        );
        let mov = select_move(&position).unwrap();
        assert_eq!(mov, Move::new(sq(3, 6), Piece::Rook, sq(3, 3)));
    }

    #[test]
    fn select_move_keeps_the_first_candidate_on_ties() {
        // Lone kings in opposite corners: no line of play within the
        // search horizon changes material, so every candidate scores the
        // same and the first generated king step must win.
        let position = Position::new(
            vec![placed(Piece::King, 0, 0)],
            vec![placed(Piece::King, 7, 7)],
        );
        let mov = select_move(&position).unwrap();
        assert_eq!(mov, Move::new(sq(7, 7), Piece::King, sq(6, 7)));
    }

    #[test]
    fn select_move_returns_none_without_candidates() {
        let position = Position::new(vec![placed(Piece::King, 4, 0)], vec![]);
        assert_eq!(select_move(&position), None);
    }

    #[test]
    fn select_move_plays_from_the_standard_setup() {
        let position = Position::standard();
        let mov = select_move(&position).unwrap();
        let candidates = generate_moves(&position, Color::Black);
        assert!(candidates.contains(&mov));
    }

    #[test]
    fn pruning_matches_the_full_width_search() {
        let positions = [
            Position::new(
                vec![placed(Piece::King, 0, 0), placed(Piece::Queen, 3, 3)],
                vec![placed(Piece::King, 7, 7), placed(Piece::Rook, 3, 6)],
            ),
            Position::new(
                vec![
                    placed(Piece::King, 4, 0),
                    placed(Piece::Rook, 0, 0),
                    placed(Piece::Pawn, 4, 1),
                ],
                vec![
                    placed(Piece::King, 4, 7),
                    placed(Piece::Bishop, 2, 5),
                    placed(Piece::Pawn, 4, 6),
                ],
            ),
        ];
        for position in &positions {
            for depth in 1..=3 {
                for maximizing in [true, false] {
                    assert_eq!(
                        minimax(position, depth, i32::MIN, i32::MAX, maximizing),
                        full_minimax(position, depth, maximizing),
                        "depth {} maximizing {}",
                        depth,
                        maximizing
                    );
                }
            }
        }
    }

    #[test]
    fn pruning_matches_the_full_width_search_from_the_standard_setup() {
        let position = Position::standard();
        for maximizing in [true, false] {
            assert_eq!(
                minimax(&position, 2, i32::MIN, i32::MAX, maximizing),
                full_minimax(&position, 2, maximizing)
            );
        }
    }

    fn arb_square() -> impl Strategy<Value = Square> {
        (0u8..8, 0u8..8).prop_map(|(file, rank)| Square::from_coords(file, rank).unwrap())
    }

    fn arb_position() -> impl Strategy<Value = Position> {
        (
            prop::collection::btree_set(arb_square(), 2..8),
            prop::collection::vec(
                (prop::sample::select(Piece::ALL.to_vec()), any::<bool>()),
                8,
            ),
        )
            .prop_map(|(squares, tags)| {
                let mut white = Vec::new();
                let mut black = Vec::new();
                for (square, (piece, is_white)) in squares.into_iter().zip(tags) {
                    let record = PlacedPiece::new(piece, square);
                    if is_white {
                        white.push(record);
                    } else {
                        black.push(record);
                    }
                }
                Position::new(white, black)
            })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn pruning_never_changes_the_search_value(
            position in arb_position(),
            maximizing in any::<bool>(),
        ) {
            prop_assert_eq!(
                minimax(&position, 2, i32::MIN, i32::MAX, maximizing),
                full_minimax(&position, 2, maximizing)
            );
        }
    }
}
