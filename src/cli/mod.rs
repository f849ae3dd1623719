//! Line-oriented text front end.
//!
//! Reads one command per line and answers with one or more lines. Engine
//! errors are reported as `error ...` lines and do not end the session.

use std::io::{self, BufRead, Write};

use crate::board::{list_moves_by_name, validate_move_by_name};

pub mod command;
pub mod print;

use command::{parse_command, Command};

/// What a single command produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Output(Vec<String>),
    Error(String),
    Quit,
}

impl Response {
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        match self {
            Response::Output(lines) => {
                for line in lines {
                    writeln!(out, "{line}")?;
                }
            }
            Response::Error(line) => writeln!(out, "{line}")?,
            Response::Quit => {}
        }
        out.flush()
    }
}

#[must_use]
pub fn respond(command: &Command) -> Response {
    match command {
        Command::Moves { figure, field } => match list_moves_by_name(figure, field) {
            Ok(moves) => Response::Output(print::format_moves(&moves)),
            Err(e) => Response::Error(print::format_error(&e)),
        },
        Command::Validate { figure, from, to } => match validate_move_by_name(figure, from, to) {
            Ok(validation) => Response::Output(print::format_validation(&validation)),
            Err(e) => Response::Error(print::format_error(&e)),
        },
        Command::Figures => Response::Output(vec![print::format_figures()]),
        Command::Help => Response::Output(print::help_lines()),
        Command::Quit => Response::Quit,
        Command::Unknown(line) => Response::Error(format!("error unknown command '{line}'")),
    }
}

/// Answer commands from `input` until `quit` or end of input.
pub fn run_session<R: BufRead, W: Write>(input: R, mut output: W) -> io::Result<()> {
    for line in input.lines() {
        let line = line?;
        let Some(command) = parse_command(&line) else {
            continue;
        };
        let response = respond(&command);
        if response == Response::Quit {
            break;
        }
        response.write_to(&mut output)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(input: &str) -> String {
        let mut out = Vec::new();
        run_session(input.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_session_answers_each_command() {
        let out = session("moves rook h4\n\nvalidate king d4 h5\n");
        assert_eq!(
            out,
            "moves A4 B4 C4 D4 E4 F4 G4 H1 H2 H3 H5 H6 H7 H8\n\
             move invalid (current move is not permitted)\n"
        );
    }

    #[test]
    fn test_session_stops_at_quit() {
        let out = session("figures\nquit\nmoves king a1\n");
        assert_eq!(out, "figures bishop rook queen king knight pawn\n");
    }

    #[test]
    fn test_session_survives_errors() {
        let out = session("moves dragon a1\nfoo\npawn/b7\n");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines,
            [
                "error invalid figure 'dragon'",
                "error unknown command 'foo'",
                "white B8",
                "black B5 B6",
            ]
        );
    }

    #[test]
    fn test_respond_reports_origin_error() {
        let response = respond(&Command::Moves {
            figure: "pawn".to_string(),
            field: "a9".to_string(),
        });
        assert_eq!(
            response,
            Response::Error("error current field does not exist: 'a9'".to_string())
        );
    }
}
