use serde::{Deserialize, Serialize};

/// Canonical duration unit
///
/// Variants are declared from smallest to largest, so the derived ordering
/// matches granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Millisecond,
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

impl Unit {
    /// All units, smallest first
    pub const ALL: [Unit; 8] = [
        Unit::Millisecond,
        Unit::Second,
        Unit::Minute,
        Unit::Hour,
        Unit::Day,
        Unit::Week,
        Unit::Month,
        Unit::Year,
    ];

    /// Short code, accepted both as an input keyword and as an output selector
    pub fn code(&self) -> &'static str {
        match self {
            Unit::Millisecond => "ms",
            Unit::Second => "s",
            Unit::Minute => "m",
            Unit::Hour => "h",
            Unit::Day => "d",
            Unit::Week => "w",
            Unit::Month => "mth",
            Unit::Year => "y",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Unit::Millisecond => "millisecond",
            Unit::Second => "second",
            Unit::Minute => "minute",
            Unit::Hour => "hour",
            Unit::Day => "day",
            Unit::Week => "week",
            Unit::Month => "month",
            Unit::Year => "year",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ms" => Some(Unit::Millisecond),
            "s" => Some(Unit::Second),
            "m" => Some(Unit::Minute),
            "h" => Some(Unit::Hour),
            "d" => Some(Unit::Day),
            "w" => Some(Unit::Week),
            "mth" => Some(Unit::Month),
            "y" => Some(Unit::Year),
            _ => None,
        }
    }

    /// Keywords recognised for this unit when no custom table is given
    pub fn default_keywords(&self) -> &'static [&'static str] {
        match self {
            Unit::Millisecond => &["ms", "milli", "millisecond", "milliseconds"],
            Unit::Second => &["s", "sec", "secs", "second", "seconds"],
            Unit::Minute => &["m", "min", "mins", "minute", "minutes"],
            Unit::Hour => &["h", "hr", "hrs", "hour", "hours"],
            Unit::Day => &["d", "day", "days"],
            Unit::Week => &["w", "week", "weeks"],
            Unit::Month => &["mon", "mth", "mths", "month", "months"],
            Unit::Year => &["y", "yr", "yrs", "year", "years"],
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip() {
        for unit in Unit::ALL {
            assert_eq!(Unit::from_code(unit.code()), Some(unit));
        }
        assert_eq!(Unit::from_code("mon"), None);
        assert_eq!(Unit::from_code(""), None);
    }

    #[test]
    fn test_ordering_is_by_granularity() {
        assert!(Unit::Millisecond < Unit::Second);
        assert!(Unit::Week < Unit::Month);
        assert!(Unit::Month < Unit::Year);
    }

    #[test]
    fn test_default_keywords_include_code() {
        for unit in Unit::ALL {
            assert!(unit.default_keywords().contains(&unit.code()), "{} missing its code", unit.name());
        }
    }
}
