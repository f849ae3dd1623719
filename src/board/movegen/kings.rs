use super::super::directions::Direction;
use super::super::move_tables::{table_index, KING_MOVES};
use super::super::{Field, MoveSet};

/// One step in each of the eight directions.
pub(crate) fn compute_king_moves(from: Field) -> MoveSet {
    Direction::ALL
        .into_iter()
        .map(|direction| direction.step(from, 1))
        .filter(|to| to.is_on_board())
        .collect()
}

#[must_use]
pub fn king_moves(from: Field) -> MoveSet {
    match table_index(from) {
        Some(idx) => KING_MOVES[idx].clone(),
        None => compute_king_moves(from),
    }
}
