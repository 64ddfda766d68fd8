// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Taboo Contributors

use std::path::PathBuf;

use crate::noise::NoiseError;

/// Taboo error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid command-line arguments
    #[error("argument error: {0}")]
    Argument(String),

    /// Wordlist file could not be read
    #[error("wordlist error: {path}: {source}")]
    Wordlist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Other file I/O error
    #[error("io error: {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Noise pattern failed to compile
    #[error(transparent)]
    Pattern(#[from] NoiseError),

    /// Internal error (bug)
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type using taboo Error
pub type Result<T> = std::result::Result<T, Error>;

/// Exit codes for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Text is clean (or the command does not detect)
    Success = 0,
    /// A vocabulary entry matched
    MatchFound = 1,
    /// Configuration or argument error
    ConfigError = 2,
    /// Internal error
    InternalError = 3,
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::Argument(_) | Error::Wordlist { .. } | Error::Pattern(_) => {
                ExitCode::ConfigError
            }
            Error::Io { .. } => ExitCode::InternalError,
            Error::Internal(_) => ExitCode::InternalError,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
