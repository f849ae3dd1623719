//! Move listing and validation entry points.
//!
//! These are the two operations callers use. Both check their field
//! arguments before any rule runs: origin first, then destination.

use super::error::MoveError;
use super::movegen::pawn_validation;
use super::{Field, Moves, PieceKind, Validation, Verdict};

fn ensure_origin(origin: Field) -> Result<(), MoveError> {
    if origin.is_on_board() {
        Ok(())
    } else {
        Err(MoveError::OriginFieldNotFound {
            field: origin.to_string(),
        })
    }
}

fn ensure_destination(dest: Field) -> Result<(), MoveError> {
    if dest.is_on_board() {
        Ok(())
    } else {
        Err(MoveError::DestinationFieldNotFound {
            field: dest.to_string(),
        })
    }
}

fn parse_origin(origin: &str) -> Result<Field, MoveError> {
    origin
        .parse()
        .map_err(|_| MoveError::OriginFieldNotFound {
            field: origin.to_string(),
        })
}

fn parse_destination(dest: &str) -> Result<Field, MoveError> {
    dest.parse()
        .map_err(|_| MoveError::DestinationFieldNotFound {
            field: dest.to_string(),
        })
}

/// List the moves of `kind` standing on `origin`.
///
/// # Errors
///
/// Returns `MoveError::OriginFieldNotFound` if `origin` is off the board.
pub fn list_moves(kind: PieceKind, origin: Field) -> Result<Moves, MoveError> {
    ensure_origin(origin)?;
    let moves = kind.generate(origin);
    #[cfg(feature = "logging")]
    log::trace!("{kind} on {origin}: {moves:?}");
    Ok(moves)
}

/// Check whether `kind` on `origin` may move to `dest`.
///
/// Pawns are judged once per color.
///
/// # Errors
///
/// Returns `MoveError::OriginFieldNotFound` or
/// `MoveError::DestinationFieldNotFound` if either field is off the board,
/// checked in that order.
pub fn validate_move(
    kind: PieceKind,
    origin: Field,
    dest: Field,
) -> Result<Validation, MoveError> {
    ensure_origin(origin)?;
    ensure_destination(dest)?;
    let validation = match kind.generate(origin) {
        Moves::Single(set) => Validation::Single(Verdict::from_membership(&set, dest)),
        Moves::Pawn(pawn) => Validation::Pawn(pawn_validation(&pawn, dest)),
    };
    #[cfg(feature = "logging")]
    log::debug!("{kind} {origin} -> {dest}: {validation:?}");
    Ok(validation)
}

/// [`list_moves`] with the piece kind and origin given as text.
///
/// # Errors
///
/// `UnknownPieceKind` if `kind` names no piece, `OriginFieldNotFound` if
/// `origin` is malformed or off the board.
pub fn list_moves_by_name(kind: &str, origin: &str) -> Result<Moves, MoveError> {
    let kind: PieceKind = kind.parse()?;
    let origin = parse_origin(origin)?;
    list_moves(kind, origin)
}

/// [`validate_move`] with all three inputs given as text.
///
/// # Errors
///
/// `UnknownPieceKind`, `OriginFieldNotFound` and `DestinationFieldNotFound`
/// are checked in that order.
pub fn validate_move_by_name(
    kind: &str,
    origin: &str,
    dest: &str,
) -> Result<Validation, MoveError> {
    let kind: PieceKind = kind.parse()?;
    let origin = parse_origin(origin)?;
    let dest = parse_destination(dest)?;
    validate_move(kind, origin, dest)
}
