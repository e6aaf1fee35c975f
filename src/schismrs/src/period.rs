// schismrs/src/period.rs

use crate::constants::SECONDS_PER_DAY;
use crate::error::{Result, SchismError};
use chrono::{Datelike, Duration, NaiveDateTime, Timelike};

/// Simulated time window of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl TimeRange {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Result<Self> {
        if end < start {
            return Err(SchismError::InvalidPeriod { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn from_duration(start: NaiveDateTime, duration: Duration) -> Result<Self> {
        Self::new(start, start + duration)
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Run length in days, as SCHISM's `rnday`.
    pub fn days(&self) -> f64 {
        self.duration().num_milliseconds() as f64 / 1000.0 / SECONDS_PER_DAY
    }

    pub(crate) fn start_year(&self) -> i32 {
        self.start.year()
    }

    pub(crate) fn start_month(&self) -> u32 {
        self.start.month()
    }

    pub(crate) fn start_day(&self) -> u32 {
        self.start.day()
    }

    /// Whole hour of day of the start; minutes and seconds are dropped.
    pub(crate) fn start_hour(&self) -> f64 {
        self.start.hour() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2020, 2, day)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn test_days_and_start_fields() {
        let period = TimeRange::new(at(21, 4, 30), at(22, 16, 30)).unwrap();
        assert_eq!(period.days(), 1.5);
        assert_eq!(period.start_year(), 2020);
        assert_eq!(period.start_month(), 2);
        assert_eq!(period.start_day(), 21);
        assert_eq!(period.start_hour(), 4.0);
    }

    #[test]
    fn test_end_before_start_is_rejected() {
        let err = TimeRange::new(at(22, 0, 0), at(21, 0, 0)).unwrap_err();
        assert!(matches!(err, SchismError::InvalidPeriod { .. }));
        assert!(TimeRange::new(at(21, 0, 0), at(21, 0, 0)).is_ok());
    }

    #[test]
    fn test_from_duration() {
        let period = TimeRange::from_duration(at(21, 0, 0), Duration::hours(36)).unwrap();
        assert_eq!(period.end(), at(22, 12, 0));
    }
}
