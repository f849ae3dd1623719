//! Per-kind move rules.
//!
//! Each rule is a pure function from an origin field to the moves of one
//! piece kind on an otherwise empty board. Rules are looked up by kind in
//! a fixed table indexed by `PieceKind::index`.

mod kings;
mod knights;
mod pawns;
mod sliders;

pub use kings::king_moves;
pub use knights::knight_moves;
pub use pawns::{pawn_moves, pawn_moves_for};
pub use sliders::{bishop_moves, queen_moves, rook_moves};

pub(crate) use kings::compute_king_moves;
pub(crate) use knights::compute_knight_moves;
pub(crate) use pawns::pawn_validation;

use super::{Field, Moves, PieceKind};

/// A move rule: origin field to generated moves.
pub type MoveRule = fn(Field) -> Moves;

const RULES: [MoveRule; 6] = [bishop_rule, rook_rule, queen_rule, king_rule, knight_rule, pawn_rule];

fn bishop_rule(from: Field) -> Moves {
    Moves::Single(bishop_moves(from))
}

fn rook_rule(from: Field) -> Moves {
    Moves::Single(rook_moves(from))
}

fn queen_rule(from: Field) -> Moves {
    Moves::Single(queen_moves(from))
}

fn king_rule(from: Field) -> Moves {
    Moves::Single(king_moves(from))
}

fn knight_rule(from: Field) -> Moves {
    Moves::Single(knight_moves(from))
}

fn pawn_rule(from: Field) -> Moves {
    Moves::Pawn(pawn_moves(from))
}

impl PieceKind {
    /// The move rule for this kind.
    #[inline]
    #[must_use]
    pub fn rule(self) -> MoveRule {
        RULES[self.index()]
    }

    /// Generate the moves of this kind from `from`, without checking that
    /// `from` is on the board.
    #[must_use]
    pub fn generate(self, from: Field) -> Moves {
        (self.rule())(from)
    }
}
