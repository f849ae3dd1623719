//! Command parsing for the text front end.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `moves <figure> <field>` or `<figure>/<field>`
    Moves { figure: String, field: String },
    /// `validate <figure> <from> <to>` or `<figure>/<from>/<to>`
    Validate {
        figure: String,
        from: String,
        to: String,
    },
    Figures,
    Help,
    Quit,
    Unknown(String),
}

fn parse_path(path: &str) -> Option<Command> {
    let segments: Vec<&str> = path.trim_matches('/').split('/').collect();
    match segments.as_slice() {
        [figure, field] => Some(Command::Moves {
            figure: (*figure).to_string(),
            field: (*field).to_string(),
        }),
        [figure, from, to] => Some(Command::Validate {
            figure: (*figure).to_string(),
            from: (*from).to_string(),
            to: (*to).to_string(),
        }),
        _ => None,
    }
}

pub fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }
    let parts: Vec<&str> = trimmed.split_whitespace().collect();

    let cmd = match parts.as_slice() {
        ["moves", figure, field] => Command::Moves {
            figure: (*figure).to_string(),
            field: (*field).to_string(),
        },
        ["validate", figure, from, to] => Command::Validate {
            figure: (*figure).to_string(),
            from: (*from).to_string(),
            to: (*to).to_string(),
        },
        ["figures"] => Command::Figures,
        ["help"] => Command::Help,
        ["quit"] => Command::Quit,
        [path] if path.contains('/') => {
            parse_path(path).unwrap_or_else(|| Command::Unknown(trimmed.to_string()))
        }
        _ => Command::Unknown(trimmed.to_string()),
    };

    Some(cmd)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_line() {
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("   \t"), None);
    }

    #[test]
    fn test_moves_command() {
        assert_eq!(
            parse_command("moves knight d4\n"),
            Some(Command::Moves {
                figure: "knight".to_string(),
                field: "d4".to_string()
            })
        );
    }

    #[test]
    fn test_validate_command() {
        assert_eq!(
            parse_command("validate pawn a2 a4"),
            Some(Command::Validate {
                figure: "pawn".to_string(),
                from: "a2".to_string(),
                to: "a4".to_string()
            })
        );
    }

    #[test]
    fn test_path_form() {
        assert_eq!(
            parse_command("/queen/F8"),
            Some(Command::Moves {
                figure: "queen".to_string(),
                field: "F8".to_string()
            })
        );
        assert_eq!(
            parse_command("king/d4/h5"),
            Some(Command::Validate {
                figure: "king".to_string(),
                from: "d4".to_string(),
                to: "h5".to_string()
            })
        );
        assert_eq!(
            parse_command("a/b/c/d"),
            Some(Command::Unknown("a/b/c/d".to_string()))
        );
    }

    #[test]
    fn test_wrong_arity_is_unknown() {
        assert_eq!(
            parse_command("moves knight"),
            Some(Command::Unknown("moves knight".to_string()))
        );
        assert_eq!(
            parse_command("validate pawn a2"),
            Some(Command::Unknown("validate pawn a2".to_string()))
        );
    }

    #[test]
    fn test_keywords() {
        assert_eq!(parse_command("figures"), Some(Command::Figures));
        assert_eq!(parse_command("help"), Some(Command::Help));
        assert_eq!(parse_command(" quit "), Some(Command::Quit));
    }
}
