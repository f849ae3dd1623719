use super::super::directions::Direction;
use super::super::move_tables::{table_index, KNIGHT_MOVES};
use super::super::{Field, MoveSet};

/// (long leg, short leg) of each L-shaped jump: two squares along the
/// first direction, then one along the second.
const KNIGHT_JUMPS: [(Direction, Direction); 8] = [
    (Direction::Up, Direction::Right),
    (Direction::Up, Direction::Left),
    (Direction::Down, Direction::Right),
    (Direction::Down, Direction::Left),
    (Direction::Left, Direction::Up),
    (Direction::Left, Direction::Down),
    (Direction::Right, Direction::Up),
    (Direction::Right, Direction::Down),
];

/// The corner square of a jump may be off the board; only the landing
/// square is checked.
pub(crate) fn compute_knight_moves(from: Field) -> MoveSet {
    KNIGHT_JUMPS
        .into_iter()
        .map(|(long, short)| short.step(long.step(from, 2), 1))
        .filter(|to| to.is_on_board())
        .collect()
}

#[must_use]
pub fn knight_moves(from: Field) -> MoveSet {
    match table_index(from) {
        Some(idx) => KNIGHT_MOVES[idx].clone(),
        None => compute_knight_moves(from),
    }
}
