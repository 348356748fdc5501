//! The module contains the errors the engine can throw.
//!
//! The errors are:
//!
//! - [`Validation`] thrown when raw input is rejected before it reaches a store.
//! - [`Io`] thrown when the backing resource cannot be opened, read or written.
//! - [`Parse`] thrown when a persisted line is malformed.
//! - [`Overflow`] thrown when a total does not fit in an [`Amount`].
//!
//!  [`Validation`]: EngineError::Validation
//!  [`Io`]: EngineError::Io
//!  [`Parse`]: EngineError::Parse
//!  [`Overflow`]: EngineError::Overflow
use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

use crate::Amount;

/// Reasons raw input is rejected by the validator.
///
/// All of them are recoverable: the caller asks again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid date format \"{0}\", expected YYYY-MM-DD")]
    InvalidFormat(String),
    #[error("future dates are not allowed: {0}")]
    FutureDate(NaiveDate),
    #[error("\"{0}\" is not a valid amount")]
    NotNumeric(String),
    #[error("amount must be positive, got {0}")]
    NonPositive(Amount),
    #[error("category selection must be between 1 and 6, got {0}")]
    InvalidSelection(u8),
    #[error("month must be between 1 and 12, got {0}")]
    InvalidMonth(u32),
}

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("cannot access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed record at line {line}: {reason}")]
    Parse { line: u64, reason: String },
    #[error("total exceeds the largest representable amount")]
    Overflow,
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl EngineError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn parse(line: u64, reason: impl Into<String>) -> Self {
        Self::Parse {
            line,
            reason: reason.into(),
        }
    }
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Validation(a), Self::Validation(b)) => a == b,
            (Self::Io { path: a, source: sa }, Self::Io { path: b, source: sb }) => {
                a == b && sa.kind() == sb.kind()
            }
            (
                Self::Parse { line: a, reason: ra },
                Self::Parse { line: b, reason: rb },
            ) => a == b && ra == rb,
            (Self::Overflow, Self::Overflow) => true,
            (Self::Csv(a), Self::Csv(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
