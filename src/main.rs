use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Context;
use calclang::cli::{Args, Emit};
use calclang::config::RunConfig;
use calclang::{parse_source, Environment, Evaluator, Scanner, Stage};
use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

// sysexits.h
const EX_DATAERR: u8 = 65;
const EX_SOFTWARE: u8 = 70;
const EX_IOERR: u8 = 74;

fn main() -> ExitCode {
    let args = Args::parse();
    let config = RunConfig::from_args(&args);
    init_tracing(config.log_level);

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::from(exit_code(&err))
        }
    }
}

fn init_tracing(level: Level) {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level).into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(config: &RunConfig) -> anyhow::Result<()> {
    let text = config
        .source
        .read_to_string()
        .with_context(|| format!("failed to read program from {}", config.source))?;
    info!(source = %config.source, bytes = text.len(), "read program");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match config.emit {
        Emit::Tokens => {
            let tokens = Scanner::new(&text).scan_tokens()?;
            writeln!(out, "{}", serde_json::to_string_pretty(&tokens)?)?;
        }
        Emit::Ast => {
            let program = parse_source(&text)?;
            writeln!(out, "{}", serde_json::to_string_pretty(&program)?)?;
        }
        Emit::Values => {
            let program = parse_source(&text)?;
            let mut env = Environment::new();
            let mut evaluator = Evaluator::new();

            let result = evaluator.execute_into(&program, &mut env, &mut out);
            out.flush()?;
            let lines = result?;
            info!(statements = lines, variables = env.len(), "run complete");

            if config.trace {
                for (name, value) in evaluator.execution_trace() {
                    info!(%name, %value, "assignment");
                }
            }
        }
    }

    out.flush()?;
    Ok(())
}

fn exit_code(err: &anyhow::Error) -> u8 {
    if let Some(err) = err.downcast_ref::<calclang::Error>() {
        return match err.stage() {
            Stage::Lexing | Stage::Parsing => EX_DATAERR,
            Stage::Evaluation => EX_SOFTWARE,
            Stage::Io => EX_IOERR,
        };
    }
    if err.downcast_ref::<io::Error>().is_some() {
        return EX_IOERR;
    }
    1
}
