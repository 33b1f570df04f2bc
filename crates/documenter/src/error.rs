use std::fmt;

use thiserror::Error;

/// Errors raised while tokenizing input, resolving commands, or filling templates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocError {
    #[error("no command registered as '{0}'")]
    CommandNotFound(String),
    #[error("{command} requires <{field}> as argument {position}")]
    InsufficientArguments {
        command: &'static str,
        field: &'static str,
        position: usize,
    },
    #[error("unterminated quote opened at column {column}")]
    MalformedInput { column: usize },
    /// More than one registered command shares an identifier. This is a setup bug, never user input.
    #[error("duplicate command identifier '{0}' in registry")]
    DuplicateCommand(String),
}

impl DocError {
    /// The user-facing code for this error, if it has one.
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            DocError::CommandNotFound(_) => Some(ErrorCode::DoesNotExist),
            DocError::InsufficientArguments { .. } => Some(ErrorCode::InvalidArgumentCount),
            DocError::MalformedInput { .. } => Some(ErrorCode::MalformedInput),
            DocError::DuplicateCommand(_) => None,
        }
    }

    /// Fatal errors stop the REPL instead of being reported and skipped.
    pub fn is_fatal(&self) -> bool {
        matches!(self, DocError::DuplicateCommand(_))
    }
}

/// Closed table of error codes shown to REPL users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::IntoStaticStr, strum::EnumIter)]
pub enum ErrorCode {
    #[strum(serialize = "DNE")]
    DoesNotExist,
    #[strum(serialize = "ARGC")]
    InvalidArgumentCount,
    #[strum(serialize = "MALFORMED")]
    MalformedInput,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }

    pub fn message(&self) -> &'static str {
        match self {
            ErrorCode::DoesNotExist => "DOES NOT EXIST",
            ErrorCode::InvalidArgumentCount => "NOT ENOUGH ARGUMENTS",
            ErrorCode::MalformedInput => "MALFORMED INPUT",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Renders the single line printed for a failed REPL command.
///
/// Errors with a code use the fixed message table, anything else falls back to the
/// "unknown code" line with the error's own description.
pub fn error_line(err: &(dyn std::error::Error + 'static)) -> String {
    match err.downcast_ref::<DocError>().and_then(DocError::code) {
        Some(code) => format!("[ERROR]({code}) {}", code.message()),
        None => format!("[ERROR] Errored with unknown code: {err}"),
    }
}
