use std::fmt;

use chrono::{Datelike, Timelike, Weekday};

/// Wall-clock reading taken at one tick.
///
/// Hours are on the 12-hour dial (`0..=11`). Snapshots are never mutated;
/// every tick produces a new one.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct TimeSnapshot {
    hour: u8,
    minute: u8,
    second: u8,
    weekday: Weekday,
}

/// Field out of range in [`TimeSnapshot::new`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SnapshotError {
    Hour(u8),
    Minute(u8),
    Second(u8),
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotError::Hour(h) => write!(f, "hour {h} is outside 0..=11"),
            SnapshotError::Minute(m) => write!(f, "minute {m} is outside 0..=59"),
            SnapshotError::Second(s) => write!(f, "second {s} is outside 0..=59"),
        }
    }
}

impl std::error::Error for SnapshotError {}

impl TimeSnapshot {
    /// Checked constructor.
    pub fn new(hour: u8, minute: u8, second: u8, weekday: Weekday) -> Result<Self, SnapshotError> {
        if hour > 11 {
            return Err(SnapshotError::Hour(hour));
        }
        if minute > 59 {
            return Err(SnapshotError::Minute(minute));
        }
        if second > 59 {
            return Err(SnapshotError::Second(second));
        }
        Ok(Self { hour, minute, second, weekday })
    }

    /// Reads a chrono date-time, folding the hour onto the 12-hour dial.
    pub fn from_datetime<T: Timelike + Datelike>(t: &T) -> Self {
        Self {
            hour: (t.hour() % 12) as u8,
            minute: t.minute() as u8,
            second: t.second() as u8,
            weekday: t.weekday(),
        }
    }

    #[inline]
    pub fn hour(&self) -> u8 {
        self.hour
    }

    #[inline]
    pub fn minute(&self) -> u8 {
        self.minute
    }

    #[inline]
    pub fn second(&self) -> u8 {
        self.second
    }

    #[inline]
    pub fn weekday(&self) -> Weekday {
        self.weekday
    }

    /// Three-letter uppercase day name, e.g. `"MON"`.
    pub fn day_label(&self) -> String {
        // chrono's short weekday name, the same text `%a` produces.
        self.weekday.to_string().to_uppercase()
    }
}

impl fmt::Display for TimeSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn new_rejects_out_of_range_fields() {
        assert_eq!(TimeSnapshot::new(12, 0, 0, Weekday::Mon), Err(SnapshotError::Hour(12)));
        assert_eq!(TimeSnapshot::new(0, 60, 0, Weekday::Mon), Err(SnapshotError::Minute(60)));
        assert_eq!(TimeSnapshot::new(0, 0, 60, Weekday::Mon), Err(SnapshotError::Second(60)));
        assert!(TimeSnapshot::new(11, 59, 59, Weekday::Sun).is_ok());
    }

    #[test]
    fn afternoon_folds_onto_twelve_hour_dial() {
        let dt = NaiveDate::from_ymd_opt(2024, 3, 18)
            .and_then(|d| d.and_hms_opt(15, 4, 5))
            .unwrap();
        let s = TimeSnapshot::from_datetime(&dt);
        assert_eq!((s.hour(), s.minute(), s.second()), (3, 4, 5));
        assert_eq!(s.weekday(), Weekday::Mon);
    }

    #[test]
    fn noon_and_midnight_are_hour_zero() {
        let d = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let noon = TimeSnapshot::from_datetime(&d.and_hms_opt(12, 0, 0).unwrap());
        let midnight = TimeSnapshot::from_datetime(&d.and_hms_opt(0, 0, 0).unwrap());
        assert_eq!(noon.hour(), 0);
        assert_eq!(midnight.hour(), 0);
    }

    // ── formatting ────────────────────────────────────────────────────────

    #[test]
    fn day_label_is_uppercase_short_name() {
        let s = TimeSnapshot::new(1, 2, 3, Weekday::Wed).unwrap();
        assert_eq!(s.day_label(), "WED");
    }

    #[test]
    fn display_pads_minutes_and_seconds() {
        let s = TimeSnapshot::new(9, 5, 7, Weekday::Fri).unwrap();
        assert_eq!(s.to_string(), "9:05:07");
    }

    #[test]
    fn error_message_names_the_field() {
        assert_eq!(SnapshotError::Minute(75).to_string(), "minute 75 is outside 0..=59");
    }
}
