//! Duration expression parser
//!
//! Turns expressions like `"1d 3h 25m 18s"` into a number of seconds, a number
//! of any other unit, or a [`chrono::TimeDelta`].
//!
//! # Pipeline
//!
//! 1. [`normalizer`] lowercases and trims the input, and short-circuits bare
//!    numbers (always seconds)
//! 2. [`tokenizer`] pairs each number with the keyword after it
//! 3. [`resolver`] maps keywords to canonical units
//! 4. [`accumulator`] sums the tokens in seconds and converts the total
//!
//! # Example
//!
//! ```
//! use timestring::parser::{parse, parse_seconds, ParseOptions};
//!
//! assert_eq!(parse_seconds("1h 15m").unwrap(), 4500.0);
//! assert_eq!(parse("90 minutes", "h", &ParseOptions::default()).unwrap(), 1.5);
//! ```

pub mod accumulator;
pub mod normalizer;
pub mod resolver;
pub mod tokenizer;

pub use normalizer::Input;
pub use resolver::SynonymTable;
pub use tokenizer::{tokenize, Token};

use std::collections::HashMap;
use chrono::TimeDelta;
use log::debug;
use crate::error::{Result, TimestringError};
use crate::models::{CalendarConstants, Unit};
use normalizer::Normalized;

/// Per-call configuration
///
/// `custom_units` replaces the default keyword list of every unit it names;
/// units it does not name keep their defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseOptions {
    pub calendar: CalendarConstants,
    pub custom_units: HashMap<Unit, Vec<String>>,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_calendar(mut self, calendar: CalendarConstants) -> Self {
        self.calendar = calendar;
        self
    }

    /// Set the keywords for `unit`, replacing its defaults
    pub fn with_unit_keywords<I, S>(mut self, unit: Unit, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.custom_units.insert(unit, words.into_iter().map(Into::into).collect());
        self
    }
}

/// A validated calendar plus a merged synonym table, ready for repeated use
#[derive(Debug, Clone)]
pub struct Parser {
    table: SynonymTable,
    calendar: CalendarConstants,
}

impl Parser {
    pub fn new(options: &ParseOptions) -> Result<Self> {
        let table = SynonymTable::with_overrides(&options.custom_units);
        Self::with_table(table, options.calendar)
    }

    pub fn with_table(table: SynonymTable, calendar: CalendarConstants) -> Result<Self> {
        calendar.validate()?;
        debug!("Parser ready with calendar {:?}", calendar);
        Ok(Parser { table, calendar })
    }

    pub fn table(&self) -> &SynonymTable {
        &self.table
    }

    pub fn calendar(&self) -> &CalendarConstants {
        &self.calendar
    }

    /// Total of `input` in seconds
    pub fn seconds<'a>(&self, input: impl Into<Input<'a>>) -> Result<f64> {
        match normalizer::normalize(input.into())? {
            Normalized::Seconds(n) => Ok(n),
            Normalized::Expression(expr) => {
                let tokens = tokenize(&expr);
                if tokens.is_empty() {
                    return Err(TimestringError::Parse(expr));
                }
                accumulator::accumulate(&tokens, &self.table, &self.calendar)
            }
        }
    }

    /// Total of `input` expressed in `output_unit` (a code or any known keyword)
    pub fn parse<'a>(&self, input: impl Into<Input<'a>>, output_unit: &str) -> Result<f64> {
        let total = self.seconds(input)?;
        self.convert(total, output_unit)
    }

    /// Express a second count in `output_unit`
    pub fn convert(&self, total_seconds: f64, output_unit: &str) -> Result<f64> {
        let unit = self.table.resolve_output(output_unit)?;
        Ok(accumulator::convert(total_seconds, unit, &self.calendar))
    }

    /// Total of `input` as a structured duration
    pub fn duration<'a>(&self, input: impl Into<Input<'a>>) -> Result<TimeDelta> {
        to_time_delta(self.seconds(input)?)
    }
}

/// Parse `input` and express it in `output_unit`
pub fn parse<'a>(input: impl Into<Input<'a>>, output_unit: &str, options: &ParseOptions) -> Result<f64> {
    Parser::new(options)?.parse(input, output_unit)
}

/// Parse `input` into seconds with the default table and calendar
pub fn parse_seconds<'a>(input: impl Into<Input<'a>>) -> Result<f64> {
    parse(input, Unit::Second.code(), &ParseOptions::default())
}

/// Parse `input` into a [`TimeDelta`]
pub fn parse_duration<'a>(input: impl Into<Input<'a>>, options: &ParseOptions) -> Result<TimeDelta> {
    Parser::new(options)?.duration(input)
}

/// Wrap a second count, keeping nanosecond precision
pub fn to_time_delta(total_seconds: f64) -> Result<TimeDelta> {
    if !total_seconds.is_finite() {
        return Err(TimestringError::OutOfRange(total_seconds));
    }
    let whole = total_seconds.trunc();
    let nanos = ((total_seconds - whole) * 1e9).round() as i64;

    TimeDelta::try_seconds(whole as i64)
        .and_then(|secs| secs.checked_add(&TimeDelta::nanoseconds(nanos)))
        .ok_or(TimestringError::OutOfRange(total_seconds))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seconds() {
        let parser = Parser::new(&ParseOptions::default()).unwrap();
        assert_eq!(parser.seconds("1h 15m").unwrap(), 4500.0);
        assert_eq!(parser.seconds("1d 3h 25m 18s").unwrap(), 98718.0);
        assert_eq!(parser.seconds(60).unwrap(), 60.0);
    }

    #[test]
    fn test_parse_errors() {
        let parser = Parser::new(&ParseOptions::default()).unwrap();
        assert_eq!(
            parser.seconds("aaabbbccc"),
            Err(TimestringError::Parse("aaabbbccc".to_string()))
        );
        assert!(matches!(parser.seconds("   "), Err(TimestringError::InvalidInput(_))));
        assert_eq!(parser.seconds("1xyz"), Err(TimestringError::UnknownUnit("xyz".to_string())));
        assert_eq!(parser.parse("1h", "fortnight"), Err(TimestringError::InvalidUnit("fortnight".to_string())));
    }

    #[test]
    fn test_invalid_calendar_rejected() {
        let options = ParseOptions::new().with_calendar(CalendarConstants {
            hours_per_day: 0.0,
            ..CalendarConstants::DEFAULT
        });
        assert!(matches!(Parser::new(&options), Err(TimestringError::InvalidConstant { .. })));
    }

    #[test]
    fn test_output_unit_by_keyword() {
        let parser = Parser::new(&ParseOptions::default()).unwrap();
        assert_eq!(parser.parse("1h", "minutes").unwrap(), 60.0);
        assert_eq!(parser.parse("3600s", "h").unwrap(), 1.0);
    }

    #[test]
    fn test_to_time_delta() {
        assert_eq!(to_time_delta(98718.0).unwrap(), TimeDelta::seconds(98718));
        assert_eq!(to_time_delta(1.5).unwrap(), TimeDelta::milliseconds(1500));
        assert_eq!(to_time_delta(-1800.0).unwrap(), TimeDelta::minutes(-30));
        assert!(matches!(to_time_delta(f64::INFINITY), Err(TimestringError::OutOfRange(_))));
        assert!(matches!(to_time_delta(1e30), Err(TimestringError::OutOfRange(_))));
    }

    #[test]
    fn test_duration() {
        let parser = Parser::new(&ParseOptions::default()).unwrap();
        let delta = parser.duration("1d 3h 25m 18s").unwrap();
        assert_eq!(delta.num_days(), 1);
        assert_eq!(delta.num_seconds(), 98718);
    }
}
