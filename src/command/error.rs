//! Dispatch errors

use thiserror::Error;

use super::help::Help;
use crate::value::CoerceError;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum DispatchError {
    #[error("The option --{0} is not a recognized option")]
    UnknownOption(String),

    #[error("No value passed for option --{0}")]
    MissingOptionValue(String),

    #[error(transparent)]
    Coerce(#[from] CoerceError),

    #[error("{0} is not a valid command")]
    UnknownCommand(String),

    #[error("{command} requires {expected} argument(s), got {got}")]
    ArityMismatch {
        command: String,
        expected: usize,
        got: usize,
    },

    #[error("No command given")]
    NoCommand,

    #[error("Operation '{0}' is declared more than once")]
    DuplicateOperation(String),

    #[error("Option --{0} is declared more than once")]
    DuplicateOption(String),

    #[error("Command group '{0}' is declared more than once")]
    DuplicateGroup(String),

    #[error("Command group '{0}' contains itself")]
    RecursiveGroup(String),

    #[error("{0} is not an addressable command object")]
    InvalidRootObject(String),
}

/// A dispatch that did not end in an invocation
///
/// Carries the help of the deepest command group reached, so the caller
/// can show it next to the error.
#[derive(Debug, Error)]
#[error("{error}")]
pub struct Failure {
    pub error: DispatchError,
    pub help: Help,
}

impl Failure {
    pub fn new(error: DispatchError, help: Help) -> Self {
        Self { error, help }
    }

    /// Returns true for the empty invocation, which shows help and succeeds
    pub fn is_clean(&self) -> bool {
        self.error == DispatchError::NoCommand
    }
}
