//! Error type for the parsing pipeline
//!
//! Every failure aborts the call; there are no partial results.

use thiserror::Error;

/// Errors produced while turning an expression into a duration
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TimestringError {
    /// Input was empty, whitespace only, or not a usable number
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// No (number, unit) pair could be found anywhere in the expression
    #[error("Failed to parse '{0}': no number followed by a unit was found")]
    Parse(String),

    /// A unit keyword was scanned but no canonical unit knows it
    #[error("Unknown unit '{0}'")]
    UnknownUnit(String),

    /// The requested output unit is not a recognised code or keyword
    #[error("Invalid output unit '{0}' (expected one of: ms, s, m, h, d, w, mth, y)")]
    InvalidUnit(String),

    /// A calendar constant is zero, negative, or not finite
    #[error("Invalid calendar constant {name}: {value} (must be a finite number greater than 0)")]
    InvalidConstant { name: &'static str, value: f64 },

    /// The total does not fit in a structured duration
    #[error("Duration of {0} seconds is out of range")]
    OutOfRange(f64),
}

pub type Result<T> = std::result::Result<T, TimestringError>;
