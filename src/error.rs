//! Error types for loading input and validating the command line.

use std::path::PathBuf;
use thiserror::Error;

use crate::types::LineNo;

/// Failure to turn a delimited text file into a matrix. Any of these aborts
/// the whole load.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}:{line}:{column}: '{text}' is not a number", .path.display())]
    Parse {
        path: PathBuf,
        line: LineNo,
        column: usize,
        text: String,
    },

    #[error("{}:{line}: expected {expected} fields, found {found}", .path.display())]
    Ragged {
        path: PathBuf,
        line: LineNo,
        expected: usize,
        found: usize,
    },

    #[error("{}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Problems with the command line itself, each with its own exit status.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsageError {
    #[error("You must provide an action and a filename.")]
    MissingArguments,

    #[error("Action is not one of --min, --mean, or --max: {0}")]
    UnknownStatistic(String),
}

impl UsageError {
    pub fn exit_code(&self) -> u8 {
        match self {
            UsageError::MissingArguments => 1,
            UsageError::UnknownStatistic(_) => 2,
        }
    }
}
