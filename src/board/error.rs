//! Error types for field parsing and move queries.

use std::fmt;

/// Error type for field parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// Not a letter followed by a digit
    InvalidNotation { notation: String },
    /// Well-formed, but outside A1..H8
    OffBoard { notation: String },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::InvalidNotation { notation } => {
                write!(f, "Invalid field notation '{notation}'")
            }
            FieldError::OffBoard { notation } => {
                write!(f, "Field '{notation}' is not on the board")
            }
        }
    }
}

impl std::error::Error for FieldError {}

/// Error type for move listing and validation requests.
///
/// A destination outside the move set is not an error; it is reported
/// as a [`Verdict`](crate::board::Verdict).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// Name does not match any of the six piece kinds
    UnknownPieceKind { name: String },
    /// Origin is malformed or off the board
    OriginFieldNotFound { field: String },
    /// Destination is malformed or off the board
    DestinationFieldNotFound { field: String },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::UnknownPieceKind { name } => write!(f, "invalid figure '{name}'"),
            MoveError::OriginFieldNotFound { field } => {
                write!(f, "current field does not exist: '{field}'")
            }
            MoveError::DestinationFieldNotFound { field } => {
                write!(f, "destination field does not exist: '{field}'")
            }
        }
    }
}

impl std::error::Error for MoveError {}
