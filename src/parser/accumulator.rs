// Summing resolved tokens into seconds and converting totals between units

use log::debug;
use crate::error::Result;
use crate::models::{CalendarConstants, Unit};
use crate::parser::resolver::SynonymTable;
use crate::parser::tokenizer::Token;

/// Resolve every token and sum the result in seconds
///
/// A single unknown keyword fails the whole sum.
pub fn accumulate(tokens: &[Token], table: &SynonymTable, calendar: &CalendarConstants) -> Result<f64> {
    let mut total = 0.0;
    for token in tokens {
        let unit = table.resolve(&token.keyword)?;
        total += token.value * calendar.seconds_per(unit);
    }
    debug!("Accumulated {} token(s) into {} seconds", tokens.len(), total);
    Ok(total)
}

/// Express a second count in `unit`
pub fn convert(total_seconds: f64, unit: Unit, calendar: &CalendarConstants) -> f64 {
    match unit {
        Unit::Second => total_seconds,
        other => total_seconds / calendar.seconds_per(other),
    }
}
