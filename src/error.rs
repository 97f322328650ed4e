//! Error types for the Minicalc interpreter

use thiserror::Error;

/// Minicalc interpreter errors
///
/// Every variant is fatal for the current run: it aborts the remaining
/// statement stream, while statements already executed keep their effects.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    // Lexical errors
    /// Unrecognized character in the source
    ///
    /// **Triggered by:** A character that starts no token, surfaced when the
    /// parser reaches the resulting `Invalid` token
    /// **Example:** `2 $ 3`
    #[error("Unrecognized character at line {line}, column {column}")]
    LexicalError {
        /// Line number where the character appears
        line: usize,
        /// Column number where the character appears
        column: usize,
    },

    // Parse errors
    /// Syntax error encountered during parsing
    ///
    /// **Triggered by:** A token that cannot start the construct being parsed
    /// **Example:** `2 +` (missing right operand)
    #[error("Syntax error at line {line}, column {column}: {message}")]
    SyntaxError {
        /// Line number where error occurred
        line: usize,
        /// Column number where error occurred
        column: usize,
        /// Error description
        message: String,
    },

    /// Lookahead did not match the token the grammar requires
    #[error("Unexpected token at line {line}, column {column}: expected {expected}, got {found}")]
    UnexpectedToken {
        /// Expected token description
        expected: String,
        /// Actual token received
        found: String,
        /// Line number of the offending token
        line: usize,
        /// Column number of the offending token
        column: usize,
    },

    /// Numeric literal that does not fit a double
    #[error("Invalid number literal: {text}")]
    InvalidNumber {
        /// Literal text as written
        text: String,
    },

    // Runtime errors
    /// Reference to undefined variable
    ///
    /// **Triggered by:** Reading a variable before any assignment
    /// **Example:** `y + 1` (when y was never assigned)
    /// **Prevention:** Assign with `y = value;` before use
    #[error("Undefined variable: {name}")]
    UndefinedVariable {
        /// Variable name
        name: String,
    },

    /// Division by zero error
    ///
    /// **Triggered by:** A divisor that evaluates to exactly zero
    /// **Example:** `4 / 0`, `4 / (2 - 2)`
    #[error("Division by zero")]
    DivisionByZero,
}

/// Coarse error classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Unrecognized character
    Lexical,
    /// Grammar violation, including premature end of input
    Syntax,
    /// Variable read before assignment
    UndefinedVariable,
    /// Divisor evaluated to zero
    DivisionByZero,
}

impl Error {
    /// Create a syntax error at the given position
    pub fn syntax(line: usize, column: usize, message: impl Into<String>) -> Self {
        Error::SyntaxError {
            line,
            column,
            message: message.into(),
        }
    }

    /// Classify the error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::LexicalError { .. } => ErrorKind::Lexical,
            Error::SyntaxError { .. }
            | Error::UnexpectedToken { .. }
            | Error::InvalidNumber { .. } => ErrorKind::Syntax,
            Error::UndefinedVariable { .. } => ErrorKind::UndefinedVariable,
            Error::DivisionByZero => ErrorKind::DivisionByZero,
        }
    }

    /// Returns true for grammar violations
    pub fn is_syntax(&self) -> bool {
        self.kind() == ErrorKind::Syntax
    }
}

/// Result type for Minicalc operations
pub type Result<T> = std::result::Result<T, Error>;
