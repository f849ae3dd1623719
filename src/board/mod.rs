//! Piece move generation and validation on an empty board.
//!
//! Each piece stands alone on the 8x8 board: there is no occupancy, no
//! turn order and no check. A query names a piece kind and an origin
//! field, and optionally a destination.
//!
//! # Example
//! ```
//! use figure_moves::board::{list_moves, validate_move, Field, PieceKind, Verdict};
//!
//! let d4: Field = "d4".parse().unwrap();
//! let moves = list_moves(PieceKind::Knight, d4).unwrap();
//! assert_eq!(moves.single().unwrap().len(), 8);
//!
//! let verdict = validate_move(PieceKind::Queen, d4, "e5".parse().unwrap()).unwrap();
//! assert_eq!(verdict.single(), Some(Verdict::Valid));
//! ```

pub mod directions;
mod engine;
mod error;
mod move_tables;
mod movegen;
pub mod prelude;
mod types;

#[cfg(test)]
mod tests;

pub use engine::{list_moves, list_moves_by_name, validate_move, validate_move_by_name};
pub use error::{FieldError, MoveError};
pub use movegen::{
    bishop_moves, king_moves, knight_moves, pawn_moves, pawn_moves_for, queen_moves, rook_moves,
    MoveRule,
};
pub use types::{
    Color, Coordinate, Field, MoveSet, Moves, PawnMoves, PawnValidation, PieceKind, Validation,
    Verdict, BOARD_SIZE,
};
