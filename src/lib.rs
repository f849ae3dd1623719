pub mod board;
pub mod cli;

pub use board::{list_moves, validate_move, Field, MoveError, Moves, PieceKind, Validation, Verdict};
