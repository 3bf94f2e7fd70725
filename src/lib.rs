//! # calclang - a tiny calculator language
//!
//! calclang reads a program made of one statement per line, evaluates the
//! statements top to bottom against a variable environment and prints the
//! value of every statement.
//!
//! ```text
//! rate = 0.25
//! price = 80
//! price * (1 - rate)
//! ```
//!
//! prints `0.25`, `80` and `60`.
//!
//! ## Language Overview
//!
//! - **Numbers**: `42`, `3.14` (no exponent form)
//! - **Variables**: `x = 5` assigns and prints `5`; reading an unassigned name is an error
//! - **Operators**: `+ - * /`, left-associative, `*` and `/` bind tighter than `+` and `-`
//! - **Unary minus**: `-x`, `-(a + b)`, binds tighter than everything else
//! - **Comments**: `#` to end of line
//!
//! ## Architecture
//!
//! ```text
//! Source Code → Scanner → Tokens → Parser → AST → Evaluator → Output lines
//! ```
//!
//! - [`Scanner`] - Lazily tokenizes source code
//! - [`Parser`] - Builds the [`Program`] AST with one token of lookahead
//! - [`Evaluator`] - Walks the AST and produces one [`Value`] per statement
//! - [`Environment`] - Variable storage for one run, passed explicitly
//!
//! ## Basic Usage
//!
//! ```rust
//! use calclang::{Environment, Evaluator, Parser, Scanner, Value};
//!
//! # fn main() -> calclang::Result<()> {
//! let code = "x = 5\nx * 2";
//!
//! // Tokens are pulled lazily by the parser
//! let mut parser = Parser::new(Scanner::new(code));
//! let program = parser.parse()?;
//!
//! let mut env = Environment::new();
//! let mut evaluator = Evaluator::new();
//! let values = evaluator.execute(&program, &mut env)?;
//!
//! assert_eq!(values, vec![Value::new(5.0), Value::new(10.0)]);
//! assert_eq!(env.get("x")?, Value::new(5.0));
//! # Ok(())
//! # }
//! ```
//!
//! Or in one call:
//!
//! ```rust
//! assert_eq!(calclang::run("a = 1\na = a + 1\na").unwrap(), vec!["1", "2", "2"]);
//! ```
//!
//! ## Error Handling
//!
//! Every stage fails fast with a single [`Error`]:
//!
//! ```rust
//! use calclang::Error;
//!
//! assert_eq!(calclang::run("1 / 0"), Err(Error::DivisionByZero));
//! assert!(matches!(calclang::run("2 +"), Err(Error::SyntaxError { .. })));
//! assert!(matches!(calclang::run("y"), Err(Error::UndefinedVariable { .. })));
//! assert!(matches!(calclang::run("3 % 2"), Err(Error::LexicalError { character: '%', .. })));
//! ```

use std::io::Write;

/// Version of the calclang interpreter
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod cli;
pub mod config;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod runtime;
pub mod source;

// Re-export main types
pub use error::{Error, Result, Stage};
pub use lexer::{Scanner, Token, TokenKind};
pub use parser::{BinaryOp, Expression, Parser, Program, Statement, UnaryOp};
pub use runtime::{evaluate, Environment, Evaluator, Value};
pub use source::Source;

/// Tokenizes and parses a whole program
pub fn parse_source(source: &str) -> Result<Program> {
    Parser::new(Scanner::new(source)).parse()
}

/// Runs a program in a fresh environment and returns its output lines
pub fn run(source: &str) -> Result<Vec<String>> {
    let program = parse_source(source)?;
    let mut env = Environment::new();
    evaluate(&program, &mut env)
}

/// Runs a program against `env`, streaming output lines to `out`
///
/// The program is parsed completely before the first statement runs, so a
/// syntax error anywhere produces no output at all. Returns the number of
/// lines written.
pub fn run_into<W: Write>(source: &str, env: &mut Environment, out: &mut W) -> Result<usize> {
    let program = parse_source(source)?;
    Evaluator::new().execute_into(&program, env, out)
}
