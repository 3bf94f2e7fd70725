use serde::{Deserialize, Serialize};
use std::fmt;

/// A single token from the source code
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// The type of token
    pub kind: TokenKind,
    /// Original text of the token
    pub lexeme: String,
    /// Line number where token appears (1-indexed)
    pub line: usize,
    /// Column number where token starts (1-indexed)
    pub column: usize,
}

impl Token {
    /// Creates a new token with the given properties
    pub fn new(kind: TokenKind, lexeme: String, line: usize, column: usize) -> Self {
        Token {
            kind,
            lexeme,
            line,
            column,
        }
    }
}

/// All possible token types in calclang
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TokenKind {
    /// Numeric literal, integral or with a fractional part
    Number(f64),
    /// Variable name
    Identifier(String),

    /// Plus operator (+)
    Plus,
    /// Minus operator (-), binary or unary
    Minus,
    /// Star operator (*)
    Star,
    /// Slash operator (/)
    Slash,
    /// Assignment operator (=)
    Assign,

    /// Left parenthesis (
    LeftParen,
    /// Right parenthesis )
    RightParen,

    /// Line break, terminates a statement
    Newline,
    /// End of file marker
    Eof,
}

impl TokenKind {
    /// Check if token ends a statement
    pub fn is_terminator(&self) -> bool {
        matches!(self, TokenKind::Newline | TokenKind::Eof)
    }
}

/// Human-readable description used in syntax error messages
impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TokenKind::Number(n) => write!(f, "number `{}`", n),
            TokenKind::Identifier(name) => write!(f, "identifier `{}`", name),
            TokenKind::Plus => write!(f, "`+`"),
            TokenKind::Minus => write!(f, "`-`"),
            TokenKind::Star => write!(f, "`*`"),
            TokenKind::Slash => write!(f, "`/`"),
            TokenKind::Assign => write!(f, "`=`"),
            TokenKind::LeftParen => write!(f, "`(`"),
            TokenKind::RightParen => write!(f, "`)`"),
            TokenKind::Newline => write!(f, "end of line"),
            TokenKind::Eof => write!(f, "end of file"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminators() {
        assert!(TokenKind::Newline.is_terminator());
        assert!(TokenKind::Eof.is_terminator());
        assert!(!TokenKind::RightParen.is_terminator());
    }

    #[test]
    fn test_display_names() {
        assert_eq!(TokenKind::Eof.to_string(), "end of file");
        assert_eq!(
            TokenKind::Identifier("x".to_string()).to_string(),
            "identifier `x`"
        );
        assert_eq!(TokenKind::Number(2.5).to_string(), "number `2.5`");
    }
}
