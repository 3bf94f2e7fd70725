//! Run configuration derived from command-line arguments

use tracing::Level;

use crate::cli::{Args, Emit};
use crate::source::Source;

/// Everything one invocation of the binary needs to know
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    /// Where to read the program from
    pub source: Source,
    /// What to print
    pub emit: Emit,
    /// Log the assignment trace after a successful run
    pub trace: bool,
    /// Default log level when `RUST_LOG` is unset
    pub log_level: Level,
}

impl RunConfig {
    /// Builds the configuration from parsed arguments
    pub fn from_args(args: &Args) -> Self {
        let log_level = match args.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        };

        RunConfig {
            source: Source::from_arg(args.file.clone()),
            emit: args.emit,
            trace: args.trace,
            // trace output is emitted at INFO
            log_level: if args.trace && log_level < Level::INFO {
                Level::INFO
            } else {
                log_level
            },
        }
    }
}
