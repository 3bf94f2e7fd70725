//! Where program text comes from: a named file or standard input

use std::fmt;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use crate::error::{Error, Result};

/// Program text provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Read the whole file at this path
    File(PathBuf),
    /// Read standard input to the end
    Stdin,
}

impl Source {
    /// Maps an optional command-line path to a source; no path or `-` means stdin
    pub fn from_arg(path: Option<PathBuf>) -> Self {
        match path {
            Some(p) if p.as_os_str() != "-" => Source::File(p),
            _ => Source::Stdin,
        }
    }

    /// Reads the complete program text in one go
    pub fn read_to_string(&self) -> Result<String> {
        match self {
            Source::File(path) => fs::read_to_string(path)
                .map_err(|err| Error::Io(format!("cannot read '{}': {}", path.display(), err))),
            Source::Stdin => Self::read_from(io::stdin().lock()),
        }
    }

    /// Reads program text from any reader
    pub fn read_from<R: Read>(mut reader: R) -> Result<String> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Ok(text)
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Source::File(path) => write!(f, "{}", path.display()),
            Source::Stdin => write!(f, "<stdin>"),
        }
    }
}
