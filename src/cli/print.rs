//! Rendering of engine results as protocol lines.

use crate::board::{MoveError, MoveSet, Moves, PieceKind, Validation, Verdict};

/// Shown for a pawn color that has no move set from its origin row.
pub const NOT_APPLICABLE: &str = "n/a (invalid field for figure)";

fn format_set(set: &MoveSet) -> String {
    if set.is_empty() {
        "-".to_string()
    } else {
        set.to_string()
    }
}

fn format_verdict(verdict: Verdict) -> String {
    match verdict.reason() {
        None => verdict.to_string(),
        Some(reason) => format!("{verdict} ({reason})"),
    }
}

#[must_use]
pub fn format_moves(moves: &Moves) -> Vec<String> {
    match moves {
        Moves::Single(set) => vec![format!("moves {}", format_set(set))],
        Moves::Pawn(pawn) => [("white", pawn.white.as_ref()), ("black", pawn.black.as_ref())]
            .into_iter()
            .map(|(color, set)| match set {
                Some(set) => format!("{color} {}", format_set(set)),
                None => format!("{color} {NOT_APPLICABLE}"),
            })
            .collect(),
    }
}

#[must_use]
pub fn format_validation(validation: &Validation) -> Vec<String> {
    match validation {
        Validation::Single(verdict) => vec![format!("move {}", format_verdict(*verdict))],
        Validation::Pawn(pawn) => vec![
            format!("white {}", format_verdict(pawn.white)),
            format!("black {}", format_verdict(pawn.black)),
        ],
    }
}

#[must_use]
pub fn format_error(err: &MoveError) -> String {
    format!("error {err}")
}

#[must_use]
pub fn format_figures() -> String {
    let names: Vec<&str> = PieceKind::ALL.iter().map(|kind| kind.name()).collect();
    format!("figures {}", names.join(" "))
}

#[must_use]
pub fn help_lines() -> Vec<String> {
    [
        "moves <figure> <field>         list destinations, e.g. moves knight d4",
        "validate <figure> <from> <to>  check one move, e.g. validate pawn a2 a4",
        "<figure>/<field>[/<to>]        short form of the two commands above",
        "figures                        list the known figures",
        "quit                           end the session",
    ]
    .iter()
    .map(|line| (*line).to_string())
    .collect()
}
