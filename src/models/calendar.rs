use serde::{Deserialize, Serialize};
use crate::error::{Result, TimestringError};
use crate::models::Unit;

/// Ratios used to convert non-SI units into seconds
///
/// `weeks_per_month` is carried for completeness but does not take part in
/// any conversion: a month is always `days_per_year / months_per_year` days.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalendarConstants {
    pub hours_per_day: f64,
    pub days_per_week: f64,
    pub weeks_per_month: f64,
    pub months_per_year: f64,
    pub days_per_year: f64,
}

impl CalendarConstants {
    pub const DEFAULT: CalendarConstants = CalendarConstants {
        hours_per_day: 24.0,
        days_per_week: 7.0,
        weeks_per_month: 4.0,
        months_per_year: 12.0,
        days_per_year: 365.25,
    };

    /// Check every field is finite and strictly positive
    pub fn validate(&self) -> Result<()> {
        for (name, value) in self.fields() {
            if !value.is_finite() || value <= 0.0 {
                return Err(TimestringError::InvalidConstant { name, value });
            }
        }
        Ok(())
    }

    /// Named fields, in declaration order
    pub fn fields(&self) -> [(&'static str, f64); 5] {
        [
            ("hours_per_day", self.hours_per_day),
            ("days_per_week", self.days_per_week),
            ("weeks_per_month", self.weeks_per_month),
            ("months_per_year", self.months_per_year),
            ("days_per_year", self.days_per_year),
        ]
    }

    /// Number of seconds in one `unit`
    pub fn seconds_per(&self, unit: Unit) -> f64 {
        const MINUTE: f64 = 60.0;
        const HOUR: f64 = 60.0 * MINUTE;
        let day = self.hours_per_day * HOUR;
        let year = self.days_per_year * day;

        match unit {
            Unit::Millisecond => 0.001,
            Unit::Second => 1.0,
            Unit::Minute => MINUTE,
            Unit::Hour => HOUR,
            Unit::Day => day,
            Unit::Week => self.days_per_week * day,
            Unit::Month => year / self.months_per_year,
            Unit::Year => year,
        }
    }
}

impl Default for CalendarConstants {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_factors() {
        let c = CalendarConstants::default();
        assert_eq!(c.seconds_per(Unit::Millisecond), 0.001);
        assert_eq!(c.seconds_per(Unit::Second), 1.0);
        assert_eq!(c.seconds_per(Unit::Minute), 60.0);
        assert_eq!(c.seconds_per(Unit::Hour), 3600.0);
        assert_eq!(c.seconds_per(Unit::Day), 86400.0);
        assert_eq!(c.seconds_per(Unit::Week), 604800.0);
        assert_eq!(c.seconds_per(Unit::Year), 31_557_600.0);
        assert_eq!(c.seconds_per(Unit::Month), 2_629_800.0);
    }

    #[test]
    fn test_custom_hours_per_day() {
        let c = CalendarConstants { hours_per_day: 8.0, ..CalendarConstants::DEFAULT };
        assert_eq!(c.seconds_per(Unit::Day), 28800.0);
        assert_eq!(c.seconds_per(Unit::Week), 7.0 * 28800.0);
    }

    #[test]
    fn test_weeks_per_month_does_not_affect_month() {
        let c = CalendarConstants { weeks_per_month: 5.0, ..CalendarConstants::DEFAULT };
        assert_eq!(c.seconds_per(Unit::Month), CalendarConstants::DEFAULT.seconds_per(Unit::Month));
    }

    #[test]
    fn test_validate() {
        assert!(CalendarConstants::default().validate().is_ok());

        let c = CalendarConstants { months_per_year: 0.0, ..CalendarConstants::DEFAULT };
        assert_eq!(
            c.validate(),
            Err(TimestringError::InvalidConstant { name: "months_per_year", value: 0.0 })
        );

        let c = CalendarConstants { hours_per_day: f64::NAN, ..CalendarConstants::DEFAULT };
        assert!(c.validate().is_err());

        let c = CalendarConstants { days_per_week: -7.0, ..CalendarConstants::DEFAULT };
        assert!(c.validate().is_err());
    }
}
