//! Field and coordinate types.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::FieldError;

/// Number of columns and rows on the board.
pub const BOARD_SIZE: i8 = 8;

/// A (column, row) pair, both 1-based.
///
/// Components may leave `1..=8` while moves are being projected; only
/// coordinates with both components in range are on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coordinate {
    pub column: i8,
    pub row: i8,
}

impl Coordinate {
    #[inline]
    #[must_use]
    pub const fn new(column: i8, row: i8) -> Self {
        Coordinate { column, row }
    }

    #[inline]
    #[must_use]
    pub const fn is_on_board(self) -> bool {
        self.column >= 1 && self.column <= BOARD_SIZE && self.row >= 1 && self.row <= BOARD_SIZE
    }

    /// Shift by a column/row offset, without any bounds check.
    ///
    /// Components saturate at the `i8` limits, so a coordinate pushed far
    /// off the board stays off the board.
    #[inline]
    #[must_use]
    pub const fn offset(self, d_column: i8, d_row: i8) -> Self {
        Coordinate {
            column: self.column.saturating_add(d_column),
            row: self.row.saturating_add(d_row),
        }
    }
}

/// One square of the board in algebraic notation ("A1".."H8").
///
/// A `Field` may describe a square off the board; producers filter those
/// out with [`Field::is_on_board`] before handing fields to callers.
/// Ordering is column first, then row, which is the same as ordering
/// the field names lexicographically.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(into = "String", try_from = "String"))]
pub struct Field(Coordinate);

impl Field {
    /// Create an on-board field from 1-based column and row.
    #[must_use]
    pub fn new(column: i8, row: i8) -> Option<Self> {
        let field = Field(Coordinate::new(column, row));
        field.is_on_board().then_some(field)
    }

    #[inline]
    #[must_use]
    pub const fn from_coordinate(coordinate: Coordinate) -> Self {
        Field(coordinate)
    }

    #[inline]
    #[must_use]
    pub const fn to_coordinate(self) -> Coordinate {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn column(self) -> i8 {
        self.0.column
    }

    #[inline]
    #[must_use]
    pub const fn row(self) -> i8 {
        self.0.row
    }

    #[inline]
    #[must_use]
    pub const fn is_on_board(self) -> bool {
        self.0.is_on_board()
    }

    /// Upper-case column letter, `None` when the column is not in A..=Z.
    #[must_use]
    pub fn column_letter(self) -> Option<char> {
        u8::try_from(self.0.column.saturating_sub(1))
            .ok()
            .filter(|c| *c < 26)
            .map(|c| (b'A' + c) as char)
    }

    /// All 64 on-board fields, A1, A2, ..., H8.
    pub fn all() -> impl Iterator<Item = Field> {
        (1..=BOARD_SIZE)
            .flat_map(|column| (1..=BOARD_SIZE).map(move |row| Field(Coordinate::new(column, row))))
    }

    /// Parse without the on-board check.
    ///
    /// Accepts exactly one ASCII letter followed by one ASCII digit, so
    /// "a9" parses to an off-board field while "a10" is rejected.
    pub fn parse_unchecked(s: &str) -> Result<Self, FieldError> {
        let bytes = s.as_bytes();
        match bytes {
            [letter, digit] if letter.is_ascii_alphabetic() && digit.is_ascii_digit() => {
                let column = (letter.to_ascii_uppercase() - b'A') as i8 + 1;
                let row = (digit - b'0') as i8;
                Ok(Field(Coordinate::new(column, row)))
            }
            _ => Err(FieldError::InvalidNotation {
                notation: s.to_string(),
            }),
        }
    }
}

impl From<Coordinate> for Field {
    fn from(coordinate: Coordinate) -> Self {
        Field(coordinate)
    }
}

impl From<Field> for Coordinate {
    fn from(field: Field) -> Self {
        field.0
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.column_letter() {
            Some(letter) if (0..=9).contains(&self.0.row) => write!(f, "{letter}{}", self.0.row),
            _ => write!(f, "({}, {})", self.0.column, self.0.row),
        }
    }
}

impl FromStr for Field {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let field = Field::parse_unchecked(s)?;
        if !field.is_on_board() {
            return Err(FieldError::OffBoard {
                notation: s.to_string(),
            });
        }
        Ok(field)
    }
}

impl From<Field> for String {
    fn from(field: Field) -> Self {
        field.to_string()
    }
}

impl TryFrom<String> for Field {
    type Error = FieldError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl TryFrom<&str> for Field {
    type Error = FieldError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}
