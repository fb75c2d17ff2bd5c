// Output formatting for the timestring CLI

use chrono::TimeDelta;
use crate::models::{CalendarConstants, Unit};
use crate::parser::SynonymTable;

/// Format a result value; whole numbers print without a fractional part
pub fn format_value(value: f64) -> String {
    format!("{}", value)
}

/// Format a duration as `1d 3h 25m 18s`, with `ms` when there is a
/// sub-second part
///
/// Days are 24 hours here regardless of the configured calendar. Negative
/// durations sign every component so the text parses back to the same total.
pub fn format_breakdown(delta: TimeDelta) -> String {
    if delta.is_zero() {
        return "0s".to_string();
    }

    let sign = if delta < TimeDelta::zero() { "-" } else { "" };
    let delta = delta.abs();

    let components = [
        (delta.num_days(), "d"),
        (delta.num_hours() % 24, "h"),
        (delta.num_minutes() % 60, "m"),
        (delta.num_seconds() % 60, "s"),
        (delta.num_milliseconds() % 1000, "ms"),
    ];

    let parts: Vec<String> = components.iter()
        .filter(|(amount, _)| *amount > 0)
        .map(|(amount, suffix)| format!("{}{}{}", sign, amount, suffix))
        .collect();

    if parts.is_empty() {
        // Only nanoseconds left
        return "0s".to_string();
    }
    parts.join(" ")
}

/// Human-readable synonym table
pub fn format_unit_table(table: &SynonymTable, calendar: &CalendarConstants) -> String {
    let mut out = String::new();
    out.push_str(&format!("{:<12} {:<5} {:<14} {}\n", "Unit", "Code", "Seconds", "Keywords"));
    out.push_str(&format!("{}\n", "-".repeat(60)));
    for (unit, words) in table.iter() {
        out.push_str(&format!(
            "{:<12} {:<5} {:<14} {}\n",
            unit.name(),
            unit.code(),
            format_value(calendar.seconds_per(unit)),
            words.join(", ")
        ));
    }
    out
}

/// Human-readable calendar constants with derived unit lengths
pub fn format_constants(calendar: &CalendarConstants) -> String {
    let mut out = String::new();
    for (name, value) in calendar.fields() {
        out.push_str(&format!("{:<16} {}\n", name, format_value(value)));
    }
    out.push('\n');
    for unit in [Unit::Day, Unit::Week, Unit::Month, Unit::Year] {
        out.push_str(&format!("1 {:<14} {} s\n", unit.name(), format_value(calendar.seconds_per(unit))));
    }
    out
}

pub fn unit_table_json(table: &SynonymTable, calendar: &CalendarConstants) -> serde_json::Value {
    let units: Vec<serde_json::Value> = table.iter().map(|(unit, words)| {
        serde_json::json!({
            "unit": unit,
            "code": unit.code(),
            "seconds": calendar.seconds_per(unit),
            "keywords": words,
        })
    }).collect();
    serde_json::Value::Array(units)
}

pub fn constants_json(calendar: &CalendarConstants) -> serde_json::Value {
    let seconds_per: serde_json::Map<String, serde_json::Value> = Unit::ALL.iter()
        .map(|unit| (unit.code().to_string(), serde_json::json!(calendar.seconds_per(*unit))))
        .collect();
    serde_json::json!({
        "calendar": calendar,
        "seconds_per_unit": seconds_per,
    })
}
