//! Precomputed King and Knight move sets.
//!
//! Leaper moves only depend on the origin, so they are computed once for
//! all 64 fields on first use.

use once_cell::sync::Lazy;

use super::movegen::{compute_king_moves, compute_knight_moves};
use super::types::{Field, MoveSet, BOARD_SIZE};

/// Table index of an on-board field (A1=0, A2=1, ..., H8=63), matching
/// the order of [`Field::all`].
#[inline]
pub(crate) fn table_index(field: Field) -> Option<usize> {
    field
        .is_on_board()
        .then(|| ((field.column() - 1) * BOARD_SIZE + (field.row() - 1)) as usize)
}

pub(crate) static KING_MOVES: Lazy<Vec<MoveSet>> =
    Lazy::new(|| Field::all().map(compute_king_moves).collect());

pub(crate) static KNIGHT_MOVES: Lazy<Vec<MoveSet>> =
    Lazy::new(|| Field::all().map(compute_knight_moves).collect());
