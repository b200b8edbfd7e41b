use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

const SECONDS_PER_DAY: u32 = 24 * 60 * 60;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimeOfDayError {
    #[error("invalid time of day '{0}', expected HH:MM or HH:MM:SS")]
    InvalidFormat(String),
    #[error("time of day out of range: {0}s since midnight")]
    OutOfRange(u32),
}

/// Wall-clock time of day, stored as seconds since midnight.
///
/// Ordering is the plain linear ordering of that offset: there is no notion
/// of a day boundary, so 23:00 is always greater than 01:00.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TimeOfDay(u32);

impl TimeOfDay {
    pub const MIDNIGHT: TimeOfDay = TimeOfDay(0);

    pub fn from_seconds(seconds: u32) -> Result<Self, TimeOfDayError> {
        if seconds >= SECONDS_PER_DAY {
            return Err(TimeOfDayError::OutOfRange(seconds));
        }
        Ok(Self(seconds))
    }

    pub fn from_hms(hour: u32, minute: u32, second: u32) -> Result<Self, TimeOfDayError> {
        if minute >= 60 || second >= 60 {
            return Err(TimeOfDayError::InvalidFormat(format!(
                "{:02}:{:02}:{:02}",
                hour, minute, second
            )));
        }
        Self::from_seconds(hour * 3600 + minute * 60 + second)
    }

    pub fn seconds_since_midnight(&self) -> u32 {
        self.0
    }

    pub fn hour(&self) -> u32 {
        self.0 / 3600
    }

    pub fn minute(&self) -> u32 {
        (self.0 % 3600) / 60
    }

    pub fn second(&self) -> u32 {
        self.0 % 60
    }

    /// `HH:mm`, used wherever hours are shown to the user
    pub fn display_short(&self) -> String {
        format!("{:02}:{:02}", self.hour(), self.minute())
    }
}

impl From<NaiveTime> for TimeOfDay {
    fn from(t: NaiveTime) -> Self {
        // chrono keeps leap seconds in the nanosecond field, never in the seconds count
        Self(t.num_seconds_from_midnight())
    }
}

impl FromStr for TimeOfDay {
    type Err = TimeOfDayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        NaiveTime::parse_from_str(trimmed, "%H:%M:%S")
            .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M"))
            .map(TimeOfDay::from)
            .map_err(|_| TimeOfDayError::InvalidFormat(s.to_string()))
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hour(),
            self.minute(),
            self.second()
        )
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_long_and_short_forms() {
        let t: TimeOfDay = "09:30:15".parse().unwrap();
        assert_eq!(t.seconds_since_midnight(), 9 * 3600 + 30 * 60 + 15);

        let t: TimeOfDay = "18:00".parse().unwrap();
        assert_eq!(t, TimeOfDay::from_hms(18, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("".parse::<TimeOfDay>().is_err());
        assert!("9h30".parse::<TimeOfDay>().is_err());
        assert!("25:00:00".parse::<TimeOfDay>().is_err());
        assert!("12:61".parse::<TimeOfDay>().is_err());
    }

    #[test]
    fn test_display_formats() {
        let t = TimeOfDay::from_hms(7, 5, 9).unwrap();
        assert_eq!(t.to_string(), "07:05:09");
        assert_eq!(t.display_short(), "07:05");
    }

    #[test]
    fn test_range_checks() {
        assert!(TimeOfDay::from_seconds(SECONDS_PER_DAY).is_err());
        assert!(TimeOfDay::from_seconds(SECONDS_PER_DAY - 1).is_ok());
        assert!(TimeOfDay::from_hms(10, 60, 0).is_err());
        assert!(TimeOfDay::from_hms(24, 0, 0).is_err());
    }

    #[test]
    fn test_serde_uses_clock_string() {
        let t = TimeOfDay::from_hms(22, 15, 0).unwrap();
        assert_eq!(serde_json::to_string(&t).unwrap(), "\"22:15:00\"");

        let back: TimeOfDay = serde_json::from_str("\"22:15\"").unwrap();
        assert_eq!(back, t);
        assert!(serde_json::from_str::<TimeOfDay>("\"noon\"").is_err());
    }

    #[test]
    fn test_ordering_is_linear() {
        let late = TimeOfDay::from_hms(23, 0, 0).unwrap();
        let early = TimeOfDay::from_hms(1, 0, 0).unwrap();
        assert!(early < late);
        assert!(TimeOfDay::MIDNIGHT < early);
    }
}
