//! Error types for the Doodle reader and core namespace

use thiserror::Error;

/// Doodle errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    // Parse errors
    /// Token stream ran out where a form was expected
    #[error("Unexpected end of input")]
    UnexpectedEof,

    /// Opening delimiter without its closing counterpart, or a stray closer
    ///
    /// **Triggered by:** `(`, `[` or `{` left open at end of input, or `)` with nothing open
    /// **Example:** `(1 2`
    #[error("Unbalanced parentheses")]
    UnbalancedParentheses,

    /// Map key expression has no key representation
    ///
    /// **Triggered by:** a lambda or identifier in key position of a map literal
    #[error("Invalid map key")]
    InvalidMapKey,

    /// Map literal ended after a key with no value
    ///
    /// **Example:** `{:a 1 :b}`
    #[error("Map literal has a key without a value: {key}")]
    UnequalKeyValueCount {
        /// Rendered key that was left dangling
        key: String,
    },

    /// Malformed literal content (bad escape sequence, trailing backslash)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Form the reader does not know how to parse
    ///
    /// **Triggered by:** a reserved statement keyword (`let`, `func`, `if`, `for`, `while`)
    /// in leading position
    #[error("Invalid syntax: {0}")]
    InvalidSyntax(String),

    /// Sequences or maps nested deeper than the reader allows
    ///
    /// **Example:** ten thousand `(` in a row
    #[error("Nesting too deep: more than {limit} levels")]
    NestingTooDeep {
        /// Deepest accepted level
        limit: usize,
    },

    // Evaluation errors
    /// Operation called with an unsupported number of arguments
    #[error("Wrong number of arguments in {operation}: expected {expected}, found {found}")]
    WrongNumberOfArguments {
        /// Operation name
        operation: String,
        /// Expected count description ("1", "at least one")
        expected: String,
        /// Actual argument count
        found: String,
    },

    /// Argument of the wrong kind for an operation
    ///
    /// **Example:** `(+ 1 "two")`, `(count 5)`
    #[error("Invalid argument {argument} in {operation}")]
    InvalidArgument {
        /// Description of the offending argument
        argument: String,
        /// Operation name
        operation: String,
    },

    /// Division with a zero divisor
    #[error("Division by zero in {operation}")]
    DivisionByZero {
        /// Operation name
        operation: String,
    },

    /// Lookup of an operation the namespace does not define
    #[error("Undefined builtin: {name}")]
    UndefinedBuiltin {
        /// Requested name
        name: String,
    },

    /// Writing to the output stream failed
    #[error("I/O error: {0}")]
    Io(String),
}

/// Broad error classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Raised while tokenizing or reading source text
    Parse,
    /// Raised by a builtin operation or namespace lookup
    Evaluation,
}

impl Error {
    /// Create a wrong-arity error
    pub fn arity(operation: &str, expected: impl Into<String>, found: usize) -> Self {
        Error::WrongNumberOfArguments {
            operation: operation.to_string(),
            expected: expected.into(),
            found: found.to_string(),
        }
    }

    /// Create an invalid-argument error
    pub fn invalid_argument(argument: impl Into<String>, operation: &str) -> Self {
        Error::InvalidArgument {
            argument: argument.into(),
            operation: operation.to_string(),
        }
    }

    /// Classify error origin
    pub fn classify(&self) -> ErrorKind {
        match self {
            Error::UnexpectedEof
            | Error::UnbalancedParentheses
            | Error::InvalidMapKey
            | Error::UnequalKeyValueCount { .. }
            | Error::InvalidInput(_)
            | Error::InvalidSyntax(_)
            | Error::NestingTooDeep { .. } => ErrorKind::Parse,

            Error::WrongNumberOfArguments { .. }
            | Error::InvalidArgument { .. }
            | Error::DivisionByZero { .. }
            | Error::UndefinedBuiltin { .. }
            | Error::Io(_) => ErrorKind::Evaluation,
        }
    }
}

/// Result type for Doodle operations
pub type Result<T> = std::result::Result<T, Error>;
