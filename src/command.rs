use std::fmt::Display;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Store(i32),
    Retrieve,
    Display,
    Peek,
}

impl Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::Store(v) => write!(f, "store {}", v),
            Command::Retrieve => write!(f, "retrieve"),
            Command::Display => write!(f, "display"),
            Command::Peek => write!(f, "peek"),
        }
    }
}

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command '{0}'")]
    UnknownCommand(String),
    #[error("'{0}' expects an integer operand")]
    MissingOperand(String),
    #[error("'{operand}' is not a valid operand for '{keyword}'")]
    InvalidOperand {
        keyword: String,
        operand: String
    },
    #[error("Unexpected '{operand}' after '{keyword}'")]
    TrailingOperand {
        keyword: String,
        operand: String
    },
}

/// Parses one line of input. Blank lines and `//` comments give `Ok(None)`.
pub fn parse_line(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with("//") {
        return Ok(None);
    }

    let mut words = line.split_whitespace();
    let keyword = match words.next() {
        Some(k) => k,
        None => return Ok(None),
    };
    let operand = words.next();

    let command = match keyword.to_ascii_lowercase().as_str() {
        "store" | "push" => {
            let operand = operand.ok_or_else(|| CommandError::MissingOperand(keyword.to_string()))?;
            let value = operand.parse::<i32>()
                .map_err(|_| CommandError::InvalidOperand { keyword: keyword.to_string(), operand: operand.to_string() })?;
            return expect_end(keyword, words.next()).map(|_| Some(Command::Store(value)));
        },
        "retrieve" | "pop" => Command::Retrieve,
        "display" | "show" => Command::Display,
        "peek" => Command::Peek,
        _ => return Err(CommandError::UnknownCommand(keyword.to_string())),
    };

    expect_end(keyword, operand)?;
    Ok(Some(command))
}

fn expect_end(keyword: &str, extra: Option<&str>) -> Result<(), CommandError> {
    match extra {
        Some(operand) => Err(CommandError::TrailingOperand { keyword: keyword.to_string(), operand: operand.to_string() }),
        None => Ok(()),
    }
}
