use super::super::directions::Direction;
use super::super::{Color, Field, MoveSet, PawnMoves, PawnValidation, Verdict};

#[inline]
const fn forward(color: Color) -> Direction {
    match color {
        Color::White => Direction::Up,
        Color::Black => Direction::Down,
    }
}

/// Forward moves of a pawn of `color` standing on `from`.
///
/// Returns `None` when `from` is on the row a pawn of that color can never
/// occupy (row 1 for White, row 8 for Black). On the start row both the
/// single and double step are offered; there is no occupancy to block the
/// double step.
#[must_use]
pub fn pawn_moves_for(from: Field, color: Color) -> Option<MoveSet> {
    if from.row() == color.pawn_forbidden_row() {
        return None;
    }
    let distances: &[i8] = if from.row() == color.pawn_start_row() {
        &[1, 2]
    } else {
        &[1]
    };
    let direction = forward(color);
    Some(
        distances
            .iter()
            .map(|&distance| direction.step(from, distance))
            .filter(|to| to.is_on_board())
            .collect(),
    )
}

#[must_use]
pub fn pawn_moves(from: Field) -> PawnMoves {
    PawnMoves {
        white: pawn_moves_for(from, Color::White),
        black: pawn_moves_for(from, Color::Black),
    }
}

/// Judge `dest` separately for each color.
pub(crate) fn pawn_validation(moves: &PawnMoves, dest: Field) -> PawnValidation {
    let judge = |set: Option<&MoveSet>| {
        set.map_or(Verdict::NotApplicable, |set| {
            Verdict::from_membership(set, dest)
        })
    };
    PawnValidation {
        white: judge(moves.white.as_ref()),
        black: judge(moves.black.as_ref()),
    }
}
