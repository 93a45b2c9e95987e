use sweeper_core::{Action, Coord, Coord2};
use thiserror::Error;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Command {
    /// Zero-based coordinates, already translated from what the player typed
    Move { coords: Coord2, action: Action },
    Help,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub(crate) enum ParseError {
    #[error("Expected `<row> <column> <directive>`, type h for help")]
    Malformed,
    #[error("Invalid {axis} `{value}`, numbering starts at 1")]
    InvalidCoord { axis: &'static str, value: String },
    #[error("Unknown directive `{0}`, use V, F, ? or #")]
    UnknownDirective(String),
}

/// Parses one input line such as `3 5 V`.
pub(crate) fn parse(line: &str) -> Result<Command, ParseError> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    match parts.as_slice() {
        [word] if matches!(word.to_lowercase().as_str(), "q" | "quit" | "exit") => Ok(Command::Quit),
        [word] if matches!(word.to_lowercase().as_str(), "h" | "help") => Ok(Command::Help),
        &[row, column, directive] => {
            let row = parse_coord("row", row)?;
            let column = parse_coord("column", column)?;
            let action = parse_directive(directive)?;
            Ok(Command::Move {
                coords: (row, column),
                action,
            })
        }
        _ => Err(ParseError::Malformed),
    }
}

fn parse_coord(axis: &'static str, value: &str) -> Result<Coord, ParseError> {
    value
        .parse::<Coord>()
        .ok()
        .and_then(|one_based| one_based.checked_sub(1))
        .ok_or_else(|| ParseError::InvalidCoord {
            axis,
            value: value.to_string(),
        })
}

fn parse_directive(directive: &str) -> Result<Action, ParseError> {
    match directive {
        "V" | "v" => Ok(Action::Reveal),
        "F" | "f" => Ok(Action::Flag),
        "?" => Ok(Action::Doubt),
        "#" => Ok(Action::ClearMark),
        other => Err(ParseError::UnknownDirective(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_is_translated_to_zero_based() {
        assert_eq!(
            parse("3 5 V\n"),
            Ok(Command::Move {
                coords: (2, 4),
                action: Action::Reveal,
            })
        );
        assert_eq!(
            parse("  1\t1  #"),
            Ok(Command::Move {
                coords: (0, 0),
                action: Action::ClearMark,
            })
        );
    }

    #[test]
    fn every_directive_is_recognized() {
        let action = |directive: &str| match parse(&format!("1 1 {directive}")) {
            Ok(Command::Move { action, .. }) => Some(action),
            _ => None,
        };

        assert_eq!(action("f"), Some(Action::Flag));
        assert_eq!(action("?"), Some(Action::Doubt));
        assert_eq!(action("X"), None);
    }

    #[test]
    fn zero_and_garbage_coords_are_rejected() {
        assert_eq!(
            parse("0 1 V"),
            Err(ParseError::InvalidCoord {
                axis: "row",
                value: "0".to_string(),
            })
        );
        assert_eq!(
            parse("1 -2 V"),
            Err(ParseError::InvalidCoord {
                axis: "column",
                value: "-2".to_string(),
            })
        );
    }

    #[test]
    fn words_and_malformed_lines() {
        assert_eq!(parse("Q"), Ok(Command::Quit));
        assert_eq!(parse("help"), Ok(Command::Help));
        assert_eq!(parse(""), Err(ParseError::Malformed));
        assert_eq!(parse("1 2"), Err(ParseError::Malformed));
        assert_eq!(
            parse("1 2 boom"),
            Err(ParseError::UnknownDirective("boom".to_string()))
        );
    }
}
