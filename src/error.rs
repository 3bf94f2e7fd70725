//! Error types for the calclang interpreter

use thiserror::Error;

/// calclang interpreter errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    // Lexing
    /// Character that cannot start any token
    ///
    /// **Triggered by:** Anything outside digits, letters, operators, parentheses and whitespace
    /// **Example:** `3 $ 4`, `1.` (a dot must be followed by digits)
    #[error("Lexical error at line {line}, column {column}: unexpected character '{character}'")]
    LexicalError {
        /// Offending character
        character: char,
        /// Line number (1-indexed)
        line: usize,
        /// Column number (1-indexed)
        column: usize,
    },

    // Parsing
    /// Token sequence does not match the grammar
    ///
    /// **Triggered by:** Truncated expressions, unbalanced parentheses, stray tokens
    /// **Example:** `2 +`, `(1 + 2`, `2 3`
    #[error("Syntax error at line {line}, column {column}: expected {expected}, found {found}")]
    SyntaxError {
        /// Description of what the grammar allows here
        expected: String,
        /// Description of the token actually found
        found: String,
        /// Line number where error occurred
        line: usize,
        /// Column number where error occurred
        column: usize,
    },

    // Runtime errors
    /// Reference to undefined variable
    ///
    /// **Triggered by:** Reading a variable before it is assigned
    /// **Example:** `y + 1` (when y was never assigned)
    #[error("Undefined variable: {name}")]
    UndefinedVariable {
        /// Variable name
        name: String,
    },

    /// Division by zero error
    ///
    /// **Example:** `1 / 0`, `x / (y - y)`
    #[error("Division by zero")]
    DivisionByZero,

    /// Result outside the finite range of a 64-bit float
    ///
    /// **Example:** `1e200` written out in digits, squared
    #[error("Numeric overflow: result is not a finite number")]
    NumericOverflow,

    // I/O
    /// Reading the program text or writing an output line failed
    #[error("I/O error: {0}")]
    Io(String),
}

/// Pipeline stage an error originates from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Converting text to tokens
    Lexing,
    /// Building the AST
    Parsing,
    /// Walking the AST
    Evaluation,
    /// Reading source or writing output
    Io,
}

impl Error {
    /// Builds a syntax error from descriptions of the expected and found tokens
    pub fn syntax(
        expected: impl Into<String>,
        found: impl Into<String>,
        line: usize,
        column: usize,
    ) -> Self {
        Error::SyntaxError {
            expected: expected.into(),
            found: found.into(),
            line,
            column,
        }
    }

    /// Classify the stage that produced this error
    pub fn stage(&self) -> Stage {
        match self {
            Error::LexicalError { .. } => Stage::Lexing,
            Error::SyntaxError { .. } => Stage::Parsing,
            Error::UndefinedVariable { .. } | Error::DivisionByZero | Error::NumericOverflow => {
                Stage::Evaluation
            }
            Error::Io(_) => Stage::Io,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

/// Result type for calclang operations
pub type Result<T> = std::result::Result<T, Error>;
