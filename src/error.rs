// File: ./src/error.rs
//! Error taxonomy.
//!
//! Per-line problems (`ParseError::InvalidTimeFormat`, `MalformedEventLine`, ...)
//! are always recoverable: the line is dropped and processing continues.
//! `UsageError` and a file-mode `InvalidDateFormat` abort the run.
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid date '{0}'. Use today, tomorrow or an explicit date")]
    InvalidDateFormat(String),

    #[error("Invalid time '{0}'. Expected h:mmAM or h:mmPM")]
    InvalidTimeFormat(String),

    #[error("Time '{0}' does not exist in the configured timezone")]
    NonexistentLocalTime(String),

    #[error("Expected '<start> <end> <name>', got '{0}'")]
    MalformedEventLine(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UsageError {
    #[error("Invalid flag '{0}'")]
    InvalidFlag(String),

    #[error("Must provide file name after -f")]
    MissingFileName,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unknown timezone '{0}'")]
    UnknownTimezone(String),

    #[error("Invalid date format '{0}'")]
    InvalidDateFormat(String),

    #[error("Invalid log level '{0}'")]
    InvalidLogLevel(String),
}
