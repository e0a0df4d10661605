// File: src/command.rs
use crate::core::types::{CodedLetter, DecodedLetter};
use crate::error::CommandError;
use log::warn;

/// A plugin command this crate understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Decode,
    Learn {
        coded: CodedLetter,
        decoded: DecodedLetter,
    },
}

impl Command {
    /// Resolves a command name and its arguments. Names are case-insensitive.
    /// Returns `Ok(None)` for commands that belong to someone else.
    pub fn parse(name: &str, args: &[&str]) -> Result<Option<Self>, CommandError> {
        match name.to_lowercase().as_str() {
            "moosedecode" | "decode" => Ok(Some(Command::Decode)),
            "mooselearn" | "learn" => {
                let coded = letter_argument(name, args.first(), "coded letter")?;
                let decoded = letter_argument(name, args.get(1), "decoded letter")?;
                Ok(Some(Command::Learn { coded, decoded }))
            }
            _ => Ok(None),
        }
    }

    /// Splits a whitespace-separated command line, e.g. `MooseLearn Y A`.
    pub fn parse_line(line: &str) -> Result<Option<Self>, CommandError> {
        let mut parts = line.split_whitespace();
        let Some(name) = parts.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = parts.collect();
        Self::parse(name, &args)
    }
}

fn letter_argument(
    command: &str,
    arg: Option<&&str>,
    argument: &'static str,
) -> Result<char, CommandError> {
    let missing = || CommandError::MissingArgument {
        command: command.to_string(),
        argument,
    };
    let arg = arg.ok_or_else(missing)?;
    let mut chars = arg.chars();
    let letter = chars.next().ok_or_else(missing)?;
    if chars.next().is_some() {
        warn!("{} argument '{}' is longer than one letter, using '{}'", argument, arg, letter);
    }
    Ok(letter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decode() {
        assert_eq!(Command::parse("MooseDecode", &[]).unwrap(), Some(Command::Decode));
        assert_eq!(Command::parse_line("moosedecode").unwrap(), Some(Command::Decode));
    }

    #[test]
    fn test_parse_learn() {
        assert_eq!(
            Command::parse_line("MooseLearn Y A").unwrap(),
            Some(Command::Learn { coded: 'Y', decoded: 'A' })
        );
        assert_eq!(
            Command::parse("LEARN", &["é", "e"]).unwrap(),
            Some(Command::Learn { coded: 'é', decoded: 'e' })
        );
    }

    #[test]
    fn test_learn_long_argument_uses_first_letter() {
        assert_eq!(
            Command::parse("learn", &["Yx", "Ab"]).unwrap(),
            Some(Command::Learn { coded: 'Y', decoded: 'A' })
        );
    }

    #[test]
    fn test_learn_missing_argument() {
        let err = Command::parse_line("MooseLearn Y").unwrap_err();
        assert!(matches!(
            err,
            CommandError::MissingArgument { argument: "decoded letter", .. }
        ));
    }

    #[test]
    fn test_foreign_commands_ignored() {
        assert_eq!(Command::parse_line("ShowPicture 1").unwrap(), None);
        assert_eq!(Command::parse_line("   ").unwrap(), None);
    }
}
