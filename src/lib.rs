//! Timestring - parse human-written duration expressions
//!
//! Converts expressions such as `"1d 3h 25m 18s"` or `"1 d 3HOurS 25 min"`
//! into a number of seconds, a number of any other unit, or a
//! [`chrono::TimeDelta`]. This crate provides:
//! - A forgiving tokenizer for mixed number/keyword input
//! - Keyword resolution with caller-supplied synonym tables
//! - Configurable calendar constants (hours per day, days per year, ...)
//! - An rc-file configuration layer and a small CLI
//!
//! A bare number (`60`, `"60"`) is always a count of seconds.
//!
//! # Example
//!
//! ```
//! use timestring::{parse, parse_seconds, CalendarConstants, ParseOptions, Unit};
//!
//! assert_eq!(parse_seconds("1d 3h 25m 18s").unwrap(), 98718.0);
//!
//! let workday = ParseOptions::new()
//!     .with_calendar(CalendarConstants { hours_per_day: 7.5, days_per_week: 5.0, ..Default::default() })
//!     .with_unit_keywords(Unit::Day, ["tag"]);
//! assert_eq!(parse("1 tag", "h", &workday).unwrap(), 7.5);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod parser;

pub use error::{Result, TimestringError};
pub use models::{CalendarConstants, Unit};
pub use parser::{parse, parse_duration, parse_seconds, Input, ParseOptions, Parser, SynonymTable};
