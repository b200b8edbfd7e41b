//! Conversions between HTML `date` / `time` inputs and domain values

use chrono::NaiveDate;
use contracts::domain::a001_shop::TimeOfDay;

/// `<input type="date">` value (`YYYY-MM-DD`); empty or malformed gives `None`
pub fn parse_date_input(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

pub fn date_input_value(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// `<input type="time">` value; browsers send `HH:MM` or `HH:MM:SS`
pub fn parse_time_input(value: &str) -> Option<TimeOfDay> {
    value.parse().ok()
}

/// `HH:MM`, or `HH:MM:SS` when the time carries seconds
pub fn time_input_value(time: TimeOfDay) -> String {
    if time.second() != 0 {
        time.to_string()
    } else {
        time.display_short()
    }
}
