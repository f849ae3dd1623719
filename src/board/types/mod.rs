//! Core value types.
//!
//! - `Field` and `Coordinate` - board squares and their numeric form
//! - `PieceKind` and `Color` - rule selectors
//! - `MoveSet`, `PawnMoves`, `Moves` - generated destinations
//! - `Verdict`, `PawnValidation`, `Validation` - validation outcomes

mod field;
mod moves;
mod piece;

pub use field::{Coordinate, Field, BOARD_SIZE};
pub use moves::{MoveSet, Moves, PawnMoves, PawnValidation, Validation, Verdict};
pub use piece::{Color, PieceKind};
