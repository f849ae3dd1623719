//! Directional stepping primitives.
//!
//! Every function here moves a field by `distance` squares in one of the
//! eight compass directions. None of them checks the board bounds; callers
//! test [`Field::is_on_board`] on the result.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::types::Field;

#[inline]
#[must_use]
pub fn up(field: Field, distance: i8) -> Field {
    Field::from_coordinate(field.to_coordinate().offset(0, distance))
}

#[inline]
#[must_use]
pub fn down(field: Field, distance: i8) -> Field {
    Field::from_coordinate(field.to_coordinate().offset(0, distance.saturating_neg()))
}

#[inline]
#[must_use]
pub fn left(field: Field, distance: i8) -> Field {
    Field::from_coordinate(field.to_coordinate().offset(distance.saturating_neg(), 0))
}

#[inline]
#[must_use]
pub fn right(field: Field, distance: i8) -> Field {
    Field::from_coordinate(field.to_coordinate().offset(distance, 0))
}

#[inline]
#[must_use]
pub fn up_left(field: Field, distance: i8) -> Field {
    up(left(field, distance), distance)
}

#[inline]
#[must_use]
pub fn up_right(field: Field, distance: i8) -> Field {
    up(right(field, distance), distance)
}

#[inline]
#[must_use]
pub fn down_left(field: Field, distance: i8) -> Field {
    down(left(field, distance), distance)
}

#[inline]
#[must_use]
pub fn down_right(field: Field, distance: i8) -> Field {
    down(right(field, distance), distance)
}

/// The eight compass directions. "Up" is towards row 8.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Direction {
    pub const ORTHOGONAL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub const DIAGONAL: [Direction; 4] = [
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownLeft,
        Direction::DownRight,
    ];

    pub const ALL: [Direction; 8] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownLeft,
        Direction::DownRight,
    ];

    /// (column, row) offset of a single step
    #[must_use]
    pub const fn offset(self) -> (i8, i8) {
        match self {
            Direction::Up => (0, 1),
            Direction::Down => (0, -1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::UpLeft => (-1, 1),
            Direction::UpRight => (1, 1),
            Direction::DownLeft => (-1, -1),
            Direction::DownRight => (1, -1),
        }
    }

    /// Step `distance` squares in this direction, unchecked.
    #[must_use]
    pub fn step(self, field: Field, distance: i8) -> Field {
        let primitive: fn(Field, i8) -> Field = match self {
            Direction::Up => up,
            Direction::Down => down,
            Direction::Left => left,
            Direction::Right => right,
            Direction::UpLeft => up_left,
            Direction::UpRight => up_right,
            Direction::DownLeft => down_left,
            Direction::DownRight => down_right,
        };
        primitive(field, distance)
    }
}

/// On-board fields at distance 1, 2, ... from `from`, ending at the edge.
pub fn ray(from: Field, direction: Direction) -> impl Iterator<Item = Field> {
    (1..)
        .map(move |distance| direction.step(from, distance))
        .take_while(|field| field.is_on_board())
}
