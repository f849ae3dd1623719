use super::super::directions::{ray, Direction};
use super::super::{Field, MoveSet};

/// Union of the rays from `from` in each direction, cut at the board edge.
fn slide(from: Field, directions: &[Direction]) -> MoveSet {
    directions
        .iter()
        .flat_map(|&direction| ray(from, direction))
        .collect()
}

#[must_use]
pub fn bishop_moves(from: Field) -> MoveSet {
    slide(from, &Direction::DIAGONAL)
}

#[must_use]
pub fn rook_moves(from: Field) -> MoveSet {
    slide(from, &Direction::ORTHOGONAL)
}

#[must_use]
pub fn queen_moves(from: Field) -> MoveSet {
    slide(from, &Direction::ALL)
}
