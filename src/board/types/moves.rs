//! Move sets and validation verdicts.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::field::Field;
use super::piece::Color;

/// Sorted, duplicate-free set of on-board destination fields.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "Vec<Field>", into = "Vec<Field>"))]
pub struct MoveSet(Vec<Field>);

impl MoveSet {
    #[must_use]
    pub const fn new() -> Self {
        MoveSet(Vec::new())
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, field: Field) -> bool {
        self.0.binary_search(&field).is_ok()
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Field] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Field> {
        self.0.iter()
    }
}

impl FromIterator<Field> for MoveSet {
    fn from_iter<I: IntoIterator<Item = Field>>(iter: I) -> Self {
        let mut fields: Vec<Field> = iter.into_iter().filter(|f| f.is_on_board()).collect();
        fields.sort_unstable();
        fields.dedup();
        MoveSet(fields)
    }
}

impl From<Vec<Field>> for MoveSet {
    fn from(fields: Vec<Field>) -> Self {
        fields.into_iter().collect()
    }
}

impl From<MoveSet> for Vec<Field> {
    fn from(set: MoveSet) -> Self {
        set.0
    }
}

impl IntoIterator for MoveSet {
    type Item = Field;
    type IntoIter = std::vec::IntoIter<Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a MoveSet {
    type Item = &'a Field;
    type IntoIter = std::slice::Iter<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for MoveSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, field) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{field}")?;
        }
        Ok(())
    }
}

/// Per-color move sets of a pawn.
///
/// `None` means the color has no forward-move concept from the origin
/// row (White on row 1, Black on row 8), which is not the same as an
/// empty set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PawnMoves {
    pub white: Option<MoveSet>,
    pub black: Option<MoveSet>,
}

impl PawnMoves {
    #[must_use]
    pub fn for_color(&self, color: Color) -> Option<&MoveSet> {
        match color {
            Color::White => self.white.as_ref(),
            Color::Black => self.black.as_ref(),
        }
    }
}

/// Result of listing moves: one set, or a per-color pair for pawns.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Moves {
    Single(MoveSet),
    Pawn(PawnMoves),
}

impl Moves {
    /// The single move set, `None` for pawns.
    #[must_use]
    pub fn single(&self) -> Option<&MoveSet> {
        match self {
            Moves::Single(set) => Some(set),
            Moves::Pawn(_) => None,
        }
    }

    /// The per-color move sets, `None` for every kind but the pawn.
    #[must_use]
    pub fn pawn(&self) -> Option<&PawnMoves> {
        match self {
            Moves::Single(_) => None,
            Moves::Pawn(pawn) => Some(pawn),
        }
    }
}

/// Outcome of validating one destination for one color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Verdict {
    Valid,
    /// Destination is on the board but not in the move set.
    NotPermitted,
    /// The origin row leaves this color without a move set.
    NotApplicable,
}

impl Verdict {
    #[inline]
    #[must_use]
    pub const fn is_valid(self) -> bool {
        matches!(self, Verdict::Valid)
    }

    #[must_use]
    pub(crate) fn from_membership(set: &MoveSet, dest: Field) -> Self {
        if set.contains(dest) {
            Verdict::Valid
        } else {
            Verdict::NotPermitted
        }
    }

    /// Why the move is invalid, `None` for a valid move.
    #[must_use]
    pub const fn reason(self) -> Option<&'static str> {
        match self {
            Verdict::Valid => None,
            Verdict::NotPermitted => Some("current move is not permitted"),
            Verdict::NotApplicable => Some("invalid position for figure"),
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Valid => write!(f, "valid"),
            Verdict::NotPermitted | Verdict::NotApplicable => write!(f, "invalid"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PawnValidation {
    pub white: Verdict,
    pub black: Verdict,
}

impl PawnValidation {
    #[must_use]
    pub fn for_color(&self, color: Color) -> Verdict {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }
}

/// Result of validating a move: one verdict, or a per-color pair for pawns.
///
/// A `Single` verdict is never [`Verdict::NotApplicable`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Validation {
    Single(Verdict),
    Pawn(PawnValidation),
}

impl Validation {
    #[must_use]
    pub fn single(&self) -> Option<Verdict> {
        match self {
            Validation::Single(verdict) => Some(*verdict),
            Validation::Pawn(_) => None,
        }
    }

    #[must_use]
    pub fn pawn(&self) -> Option<PawnValidation> {
        match self {
            Validation::Single(_) => None,
            Validation::Pawn(pawn) => Some(*pawn),
        }
    }
}
