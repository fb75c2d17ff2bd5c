// Input normalization: lowercase, trim, and detect bare second counts

use crate::error::{Result, TimestringError};

/// Raw input to the parser
///
/// A bare number is always a count of seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Input<'a> {
    Text(&'a str),
    Seconds(f64),
}

impl<'a> From<&'a str> for Input<'a> {
    fn from(s: &'a str) -> Self {
        Input::Text(s)
    }
}

impl<'a> From<&'a String> for Input<'a> {
    fn from(s: &'a String) -> Self {
        Input::Text(s.as_str())
    }
}

macro_rules! seconds_from {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Input<'_> {
                fn from(n: $t) -> Self {
                    Input::Seconds(n as f64)
                }
            }
        )*
    };
}

seconds_from!(f64, f32, i64, i32, u64, u32);

/// What the rest of the pipeline receives
#[derive(Debug, Clone, PartialEq)]
pub enum Normalized {
    /// Already a second count; skip tokenizing
    Seconds(f64),
    /// Lowercased, trimmed expression
    Expression(String),
}

pub fn normalize(input: Input<'_>) -> Result<Normalized> {
    match input {
        Input::Seconds(n) => {
            if !n.is_finite() {
                return Err(TimestringError::InvalidInput(format!("{} is not a finite number", n)));
            }
            Ok(Normalized::Seconds(n))
        }
        Input::Text(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Err(TimestringError::InvalidInput("expression cannot be empty".to_string()));
            }
            if let Some(n) = parse_bare_number(trimmed) {
                return Ok(Normalized::Seconds(n));
            }
            Ok(Normalized::Expression(trimmed.to_lowercase()))
        }
    }
}

/// `"10"`, `"-5"`, `"2.5"` and friends; anything with a unit returns None
fn parse_bare_number(s: &str) -> Option<f64> {
    let digits = s.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(s);
    let valid = digits.chars().any(|c| c.is_ascii_digit())
        && digits.chars().all(|c| c.is_ascii_digit() || c == '.')
        && digits.matches('.').count() <= 1;
    if !valid {
        return None;
    }
    s.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_and_trim() {
        assert_eq!(
            normalize(Input::from("  1 D 3HOurS ")),
            Ok(Normalized::Expression("1 d 3hours".to_string()))
        );
    }

    #[test]
    fn test_empty_rejected() {
        assert!(matches!(normalize(Input::from("")), Err(TimestringError::InvalidInput(_))));
        assert!(matches!(normalize(Input::from(" \t\n ")), Err(TimestringError::InvalidInput(_))));
    }

    #[test]
    fn test_bare_numbers_are_seconds() {
        assert_eq!(normalize(Input::from(60)), Ok(Normalized::Seconds(60.0)));
        assert_eq!(normalize(Input::from(1.5f64)), Ok(Normalized::Seconds(1.5)));
        assert_eq!(normalize(Input::from("10")), Ok(Normalized::Seconds(10.0)));
        assert_eq!(normalize(Input::from(" -5 ")), Ok(Normalized::Seconds(-5.0)));
        assert_eq!(normalize(Input::from("2.5")), Ok(Normalized::Seconds(2.5)));
        assert_eq!(normalize(Input::from("0")), Ok(Normalized::Seconds(0.0)));
    }

    #[test]
    fn test_not_bare_numbers() {
        assert!(matches!(normalize(Input::from("10s")), Ok(Normalized::Expression(_))));
        assert!(matches!(normalize(Input::from("1.2.3")), Ok(Normalized::Expression(_))));
        assert!(matches!(normalize(Input::from(".")), Ok(Normalized::Expression(_))));
        assert!(matches!(normalize(Input::from("1 0")), Ok(Normalized::Expression(_))));
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(normalize(Input::from(f64::NAN)).is_err());
        assert!(normalize(Input::from(f64::INFINITY)).is_err());
    }
}
