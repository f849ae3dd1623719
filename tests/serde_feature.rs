#![cfg(feature = "serde")]

use figure_moves::board::{list_moves_by_name, validate_move_by_name, Field, Moves, Validation};

#[test]
fn field_serializes_as_notation() {
    let field: Field = "e4".parse().unwrap();
    assert_eq!(serde_json::to_string(&field).unwrap(), "\"E4\"");
    let back: Field = serde_json::from_str("\"e4\"").unwrap();
    assert_eq!(back, field);
    assert!(serde_json::from_str::<Field>("\"a9\"").is_err());
}

#[test]
fn pawn_moves_keep_not_applicable_as_null() {
    let moves = list_moves_by_name("pawn", "e1").unwrap();
    let json = serde_json::to_value(&moves).unwrap();
    assert_eq!(json, serde_json::json!({ "white": null, "black": [] }));
    let back: Moves = serde_json::from_value(json).unwrap();
    assert_eq!(back, moves);
}

#[test]
fn validation_serializes_verdicts() {
    let validation = validate_move_by_name("pawn", "a2", "a4").unwrap();
    let json = serde_json::to_value(validation).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "white": "valid", "black": "not_permitted" })
    );
    let back: Validation = serde_json::from_value(json).unwrap();
    assert_eq!(back, validation);
}
