//! calclang Parser Module
//!
//! Parses the token stream into an Abstract Syntax Tree (AST).

mod ast;
mod expr_parser;

pub use ast::{BinaryOp, Expression, Program, Statement, UnaryOp};
pub use expr_parser::{Parser, TokenVec, MAX_NESTING_DEPTH};
