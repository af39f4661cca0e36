use std::fmt::Display;

use anyhow::{Context, Result};
use thiserror::Error;
use tracing::{debug, info};

use crate::command::{parse_line, Command};
use crate::stack::{BoundedStack, RetrieveResult, StoreResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Stored(StoreResult),
    Retrieved(RetrieveResult),
    Displayed(Vec<i32>),
    Peeked(Option<i32>),
}

impl Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Stored(result) => write!(f, "{} ({})", result, result.code()),
            Outcome::Retrieved(result) => write!(f, "{}", result),
            Outcome::Displayed(values) => write!(f, "{:?}", values),
            Outcome::Peeked(Some(v)) => write!(f, "{}", v),
            Outcome::Peeked(None) => write!(f, "#Repository Empty"),
        }
    }
}

/// Runs commands against a single stack.
#[derive(Debug)]
pub struct Session {
    stack: BoundedStack,
    trace: bool
}

impl Session {
    pub fn new(capacity: usize, trace: bool) -> Self {
        info!(capacity, "session started");
        Self { stack: BoundedStack::new(capacity), trace }
    }

    pub fn stack(&self) -> &BoundedStack {
        &self.stack
    }

    pub fn execute(&mut self, command: &Command) -> Outcome {
        if self.trace {
            debug!(stack = ?self.stack.display(), len = self.stack.len(), capacity = self.stack.capacity(),
                full = self.stack.is_full(), %command, "executing");
        }

        match command {
            Command::Store(value) => Outcome::Stored(self.stack.store(*value)),
            Command::Retrieve => Outcome::Retrieved(self.stack.retrieve()),
            Command::Display => Outcome::Displayed(self.stack.display()),
            Command::Peek => Outcome::Peeked(self.stack.peek()),
        }
    }

    /// Parses and executes every line of `source`. Stops at the first bad line.
    pub fn run_source(&mut self, source: &str) -> Result<Vec<Outcome>> {
        let mut outcomes = Vec::new();

        for (i, line) in source.lines().enumerate() {
            let command = parse_line(line)
                .with_context(|| SessionError::new(format!("Failed to parse line {}", i + 1)))?;

            if let Some(command) = command {
                outcomes.push(self.execute(&command));
            }
        }

        Ok(outcomes)
    }
}

#[derive(Error, Debug)]
#[error("{msg}")]
pub struct SessionError {
    msg: String
}

impl SessionError {
    pub fn new<M: Into<String>>(msg: M) -> Self {
        Self { msg: msg.into() }
    }
}
