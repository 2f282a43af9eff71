//! Material evaluation.

use skirmish_core::Color;

use crate::Position;

/// Scores a position by material alone, from White's point of view.
///
/// The score is the sum of White's piece values minus the sum of Black's.
/// Positive favors White, negative favors Black, and mirrored positions
/// negate. There are no positional, mobility, or king-safety terms.
pub fn evaluate(position: &Position) -> i32 {
    let material = |color: Color| -> i32 {
        position
            .pieces(color)
            .iter()
            .map(|p| p.piece.material_value())
            .sum()
    };
    material(Color::White) - material(Color::Black)
}
