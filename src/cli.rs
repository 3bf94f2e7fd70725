//! Command-line arguments for the `calclang` binary

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Evaluate a calclang program and print the value of every statement
#[derive(Parser, Debug)]
#[command(name = "calclang")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct Args {
    /// Program file; reads standard input when omitted or `-`
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// What to print
    #[arg(long, value_enum, default_value_t = Emit::Values)]
    pub emit: Emit,

    /// Log every assignment after a successful run
    #[arg(long)]
    pub trace: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Output selected with `--emit`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Emit {
    /// One value per statement
    Values,
    /// Token stream as JSON, without evaluating
    Tokens,
    /// Program AST as JSON, without evaluating
    Ast,
}
