//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//! ```
//! use figure_moves::board::prelude::*;
//!
//! let moves = list_moves_by_name("rook", "h4").unwrap();
//! assert_eq!(moves.single().map(MoveSet::len), Some(14));
//! ```

pub use super::{
    list_moves, list_moves_by_name, validate_move, validate_move_by_name, Color, Field,
    FieldError, MoveError, MoveSet, Moves, PieceKind, Validation, Verdict,
};
