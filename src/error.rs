//! Error types for building, running and decoding nmap scans.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, NmapError>;

#[derive(Error, Debug)]
pub enum NmapError {
    /// An option setter was given a value outside its accepted shape or range
    #[error("invalid value for {option}: {reason}")]
    InvalidOption { option: &'static str, reason: String },

    /// The nmap executable could not be resolved
    #[error("nmap executable not found ({name}): {source}")]
    NotFound {
        name: String,
        #[source]
        source: which::Error,
    },

    #[error("failed to launch {path}: {source}")]
    Spawn {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The run was cancelled or its deadline passed before nmap exited
    #[error("timeout exceeded")]
    Timeout,

    /// Captured output is not a well-formed nmap XML document
    #[error("unsupported result format: {0}")]
    Decode(#[from] quick_xml::DeError),

    /// nmap finished but reported a failure inside its own XML output
    #[error("{0}")]
    Run(String),

    #[error("failed to save raw output to {path}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid configuration {path}: {message}")]
    Config { path: PathBuf, message: String },

    #[error("spreadsheet export failed: {0}")]
    Export(#[from] rust_xlsxwriter::XlsxError),

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl NmapError {
    pub(crate) fn invalid(option: &'static str, reason: impl Into<String>) -> Self {
        NmapError::InvalidOption {
            option,
            reason: reason.into(),
        }
    }

    /// True for the cancellation/deadline outcome
    pub fn is_timeout(&self) -> bool {
        matches!(self, NmapError::Timeout)
    }
}
