//! Edge case tests for fields on the border of the board.

use crate::board::{
    list_moves, list_moves_by_name, validate_move, validate_move_by_name, Field, MoveError,
    MoveSet, PieceKind, Validation, Verdict,
};

fn field(s: &str) -> Field {
    s.parse().unwrap()
}

fn single(kind: PieceKind, from: &str) -> MoveSet {
    list_moves(kind, field(from))
        .unwrap()
        .single()
        .cloned()
        .unwrap()
}

#[test]
fn test_corners_for_every_single_kind() {
    assert_eq!(single(PieceKind::King, "a1").to_string(), "A2 B1 B2");
    assert_eq!(single(PieceKind::Knight, "h8").to_string(), "F7 G6");
    assert_eq!(single(PieceKind::Bishop, "h1").len(), 7);
    assert_eq!(single(PieceKind::Rook, "a8").len(), 14);
    assert_eq!(single(PieceKind::Queen, "a1").len(), 21);
}

#[test]
fn test_queen_in_center() {
    assert_eq!(single(PieceKind::Queen, "d4").len(), 27);
    assert_eq!(single(PieceKind::Bishop, "d4").len(), 13);
}

#[test]
fn test_pawn_on_every_white_start_field() {
    for column in 1..=8 {
        let from = Field::new(column, 2).unwrap();
        let moves = list_moves(PieceKind::Pawn, from).unwrap();
        let pawn = moves.pawn().unwrap();
        assert_eq!(pawn.white.as_ref().map(MoveSet::len), Some(2), "{from}");
        assert_eq!(pawn.black.as_ref().map(MoveSet::len), Some(1), "{from}");
    }
}

#[test]
fn test_pawn_first_row_validation_against_any_field() {
    for dest in Field::all() {
        let validation = validate_move(PieceKind::Pawn, field("e1"), dest).unwrap();
        let pawn = validation.pawn().unwrap();
        assert_eq!(pawn.white, Verdict::NotApplicable, "e1 -> {dest}");
        assert_eq!(pawn.black, Verdict::NotPermitted, "e1 -> {dest}");
        assert!(!pawn.white.is_valid());
    }
}

#[test]
fn test_pawn_last_row_validation_against_any_field() {
    for dest in Field::all() {
        let validation = validate_move(PieceKind::Pawn, field("c8"), dest).unwrap();
        let pawn = validation.pawn().unwrap();
        assert_eq!(pawn.white, Verdict::NotPermitted, "c8 -> {dest}");
        assert_eq!(pawn.black, Verdict::NotApplicable, "c8 -> {dest}");
    }
}

#[test]
fn test_pawn_double_step_only_from_start_row() {
    let from_start = validate_move_by_name("pawn", "a2", "a4").unwrap();
    assert_eq!(from_start.pawn().map(|p| p.white), Some(Verdict::Valid));
    assert_eq!(from_start.pawn().map(|p| p.black), Some(Verdict::NotPermitted));

    let from_third = validate_move_by_name("pawn", "a3", "a5").unwrap();
    assert_eq!(from_third.pawn().map(|p| p.white), Some(Verdict::NotPermitted));
}

#[test]
fn test_moving_onto_origin_is_never_valid() {
    for kind in PieceKind::ALL {
        for from in Field::all() {
            match validate_move(kind, from, from).unwrap() {
                Validation::Single(verdict) => assert_eq!(verdict, Verdict::NotPermitted),
                Validation::Pawn(pawn) => {
                    assert!(!pawn.white.is_valid());
                    assert!(!pawn.black.is_valid());
                }
            }
        }
    }
}

#[test]
fn test_unknown_piece_beats_bad_fields() {
    assert_eq!(
        list_moves_by_name("non_existing_figure", "a4"),
        Err(MoveError::UnknownPieceKind {
            name: "non_existing_figure".to_string()
        })
    );
    assert!(matches!(
        list_moves_by_name("pawn", "a9"),
        Err(MoveError::OriginFieldNotFound { .. })
    ));
}

#[test]
fn test_malformed_fields_are_not_found() {
    for bad in ["", "4a", "a10", "zz", "h 1"] {
        assert!(
            matches!(
                validate_move_by_name("rook", bad, "a1"),
                Err(MoveError::OriginFieldNotFound { .. })
            ),
            "origin {bad:?}"
        );
        assert!(
            matches!(
                validate_move_by_name("rook", "a1", bad),
                Err(MoveError::DestinationFieldNotFound { .. })
            ),
            "destination {bad:?}"
        );
    }
}
