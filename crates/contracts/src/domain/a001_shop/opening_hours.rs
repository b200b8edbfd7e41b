use super::time_of_day::TimeOfDay;
use serde::{Deserialize, Serialize};

pub const MONDAY: u8 = 1;
pub const SUNDAY: u8 = 7;

/// French day labels indexed by `day - 1`
const DAY_LABELS: [&str; 7] = [
    "Lundi", "Mardi", "Mercredi", "Jeudi", "Vendredi", "Samedi", "Dimanche",
];

/// Label for a weekday number (1 = Monday .. 7 = Sunday)
pub fn day_label(day: u8) -> &'static str {
    match day {
        MONDAY..=SUNDAY => DAY_LABELS[(day - 1) as usize],
        _ => "?",
    }
}

pub fn is_valid_day(day: u8) -> bool {
    (MONDAY..=SUNDAY).contains(&day)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum OpeningHoursError {
    /// At least one pair of same-day intervals intersects. Which pair is not reported.
    #[error("Les horaires se chevauchent pour le même jour")]
    ConflictDetected,
}

/// One contiguous period during which a shop is open on one weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpeningInterval {
    pub day: u8,
    pub open_at: TimeOfDay,
    pub close_at: TimeOfDay,
}

impl OpeningInterval {
    pub fn new(day: u8, open_at: TimeOfDay, close_at: TimeOfDay) -> Self {
        Self {
            day,
            open_at,
            close_at,
        }
    }

    /// Strict intersection of `[open_at, close_at)` ranges on the same day.
    ///
    /// Times are compared as plain offsets from midnight, so an interval with
    /// `close_at <= open_at` gets no wraparound treatment.
    pub fn overlaps(&self, other: &OpeningInterval) -> bool {
        self.day == other.day && self.open_at < other.close_at && other.open_at < self.close_at
    }
}

impl Default for OpeningInterval {
    /// Monday, 09:00 to 18:00
    fn default() -> Self {
        Self {
            day: MONDAY,
            open_at: TimeOfDay::from_hms(9, 0, 0).unwrap_or_default(),
            close_at: TimeOfDay::from_hms(18, 0, 0).unwrap_or_default(),
        }
    }
}

/// Returns `true` when no two distinct same-day intervals overlap.
///
/// Pairwise `O(n^2)` scan that stops at the first conflict. Touching
/// intervals (one closes exactly when the other opens) do not conflict.
pub fn is_conflict_free(intervals: &[OpeningInterval]) -> bool {
    for (i, first) in intervals.iter().enumerate() {
        for second in &intervals[i + 1..] {
            if first.overlaps(second) {
                return false;
            }
        }
    }
    true
}

/// Result-typed form of [`is_conflict_free`]
pub fn check_conflicts(intervals: &[OpeningInterval]) -> Result<(), OpeningHoursError> {
    if is_conflict_free(intervals) {
        Ok(())
    } else {
        Err(OpeningHoursError::ConflictDetected)
    }
}

/// Ordered opening hours of one shop draft.
///
/// Edits never mutate in place: each returns a new set that replaces the old
/// one in the owning draft.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OpeningHoursSet(Vec<OpeningInterval>);

impl OpeningHoursSet {
    pub fn new(intervals: Vec<OpeningInterval>) -> Self {
        Self(intervals)
    }

    pub fn intervals(&self) -> &[OpeningInterval] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&OpeningInterval> {
        self.0.get(index)
    }

    /// New set with a default interval appended
    pub fn with_appended(&self) -> Self {
        self.with_pushed(OpeningInterval::default())
    }

    pub fn with_pushed(&self, interval: OpeningInterval) -> Self {
        let mut next = self.0.clone();
        next.push(interval);
        Self(next)
    }

    /// New set with the interval at `index` replaced; unchanged copy if out of range
    pub fn with_replaced(&self, index: usize, interval: OpeningInterval) -> Self {
        let mut next = self.0.clone();
        if let Some(slot) = next.get_mut(index) {
            *slot = interval;
        }
        Self(next)
    }

    /// New set without the interval at `index`; unchanged copy if out of range
    pub fn without(&self, index: usize) -> Self {
        Self(
            self.0
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != index)
                .map(|(_, interval)| *interval)
                .collect(),
        )
    }

    /// Copy ordered by day, keeping entry order within a day
    pub fn sorted_by_day(&self) -> Self {
        let mut next = self.0.clone();
        next.sort_by_key(|interval| interval.day);
        Self(next)
    }

    pub fn is_conflict_free(&self) -> bool {
        is_conflict_free(&self.0)
    }

    pub fn validate(&self) -> Result<(), OpeningHoursError> {
        check_conflicts(&self.0)
    }

    pub fn has_invalid_day(&self) -> bool {
        self.0.iter().any(|interval| !is_valid_day(interval.day))
    }

    pub fn into_inner(self) -> Vec<OpeningInterval> {
        self.0
    }
}

impl From<Vec<OpeningInterval>> for OpeningHoursSet {
    fn from(intervals: Vec<OpeningInterval>) -> Self {
        Self(intervals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(day: u8, open: &str, close: &str) -> OpeningInterval {
        OpeningInterval::new(day, open.parse().unwrap(), close.parse().unwrap())
    }

    #[test]
    fn test_empty_and_singleton_are_conflict_free() {
        assert!(is_conflict_free(&[]));
        assert!(is_conflict_free(&[at(3, "08:00", "20:00")]));
    }

    #[test]
    fn test_overlap_on_same_day_conflicts() {
        let hours = [at(1, "09:00", "12:00"), at(1, "11:00", "13:00")];
        assert!(!is_conflict_free(&hours));
        assert_eq!(
            check_conflicts(&hours),
            Err(OpeningHoursError::ConflictDetected)
        );
    }

    #[test]
    fn test_touching_intervals_do_not_conflict() {
        assert!(is_conflict_free(&[
            at(1, "09:00", "12:00"),
            at(1, "12:00", "15:00")
        ]));
    }

    #[test]
    fn test_different_days_never_conflict() {
        assert!(is_conflict_free(&[
            at(1, "09:00", "12:00"),
            at(2, "10:00", "11:00")
        ]));
        assert!(is_conflict_free(&[
            at(6, "00:00", "23:59"),
            at(7, "00:00", "23:59")
        ]));
    }

    #[test]
    fn test_identical_duplicates_conflict() {
        assert!(!is_conflict_free(&[
            at(5, "10:00", "19:00"),
            at(5, "10:00", "19:00")
        ]));
    }

    #[test]
    fn test_containment_conflicts() {
        assert!(!is_conflict_free(&[
            at(4, "08:00", "20:00"),
            at(4, "12:00", "13:00")
        ]));
    }

    #[test]
    fn test_overnight_entry_has_no_wraparound() {
        // 22:00-02:00 compares as an empty linear range
        let overnight = at(1, "22:00", "02:00");
        assert!(is_conflict_free(&[overnight, at(1, "23:00", "23:30")]));
        assert!(is_conflict_free(&[overnight, at(1, "01:00", "03:00")]));
        // a range spanning the whole linear gap still intersects it
        assert!(!is_conflict_free(&[overnight, at(1, "01:00", "23:00")]));
    }

    #[test]
    fn test_zero_length_interval() {
        let empty = at(2, "10:00", "10:00");
        assert!(is_conflict_free(&[empty, at(2, "09:00", "10:00")]));
        assert!(!is_conflict_free(&[empty, at(2, "09:00", "11:00")]));
    }

    #[test]
    fn test_set_edits_leave_original_untouched() {
        let original = OpeningHoursSet::default().with_appended();
        assert_eq!(original.len(), 1);
        assert_eq!(original.get(0), Some(&OpeningInterval::default()));

        let replaced = original.with_replaced(0, at(2, "10:00", "11:00"));
        assert_eq!(original.get(0).unwrap().day, 1);
        assert_eq!(replaced.get(0).unwrap().day, 2);

        let removed = replaced.without(0);
        assert!(removed.is_empty());
        assert_eq!(replaced.len(), 1);
    }

    #[test]
    fn test_out_of_range_edits_are_noops() {
        let set = OpeningHoursSet::new(vec![at(1, "09:00", "10:00")]);
        assert_eq!(set.with_replaced(5, at(2, "09:00", "10:00")), set);
        assert_eq!(set.without(5), set);
    }

    #[test]
    fn test_sorted_by_day_is_stable() {
        let set = OpeningHoursSet::new(vec![
            at(3, "14:00", "18:00"),
            at(1, "09:00", "12:00"),
            at(3, "08:00", "12:00"),
        ]);
        let sorted = set.sorted_by_day();
        let days: Vec<u8> = sorted.intervals().iter().map(|i| i.day).collect();
        assert_eq!(days, vec![1, 3, 3]);
        assert_eq!(sorted.intervals()[1].open_at.display_short(), "14:00");
    }

    #[test]
    fn test_day_labels() {
        assert_eq!(day_label(1), "Lundi");
        assert_eq!(day_label(7), "Dimanche");
        assert_eq!(day_label(0), "?");
        assert_eq!(day_label(8), "?");
        assert!(!is_valid_day(0));
        assert!(is_valid_day(7));
    }

    #[test]
    fn test_wire_format() {
        let json = r#"[{"day":1,"openAt":"09:00:00","closeAt":"18:00:00"}]"#;
        let set: OpeningHoursSet = serde_json::from_str(json).unwrap();
        assert_eq!(set.get(0), Some(&OpeningInterval::default()));
        assert_eq!(serde_json::to_string(&set).unwrap(), json);
    }
}
