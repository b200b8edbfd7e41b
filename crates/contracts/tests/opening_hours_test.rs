use contracts::domain::a001_shop::{
    check_conflicts, is_conflict_free, OpeningHoursError, OpeningHoursSet, OpeningInterval,
    ShopDto, ShopValidationError,
};

fn at(day: u8, open: &str, close: &str) -> OpeningInterval {
    OpeningInterval::new(day, open.parse().unwrap(), close.parse().unwrap())
}

#[test]
fn three_intervals_where_only_first_and_last_conflict() {
    let hours = [
        at(1, "09:00", "12:00"),
        at(2, "09:00", "12:00"),
        at(1, "11:30", "14:00"),
    ];
    assert!(!is_conflict_free(&hours));
    assert_eq!(check_conflicts(&hours), Err(OpeningHoursError::ConflictDetected));
}

#[test]
fn result_does_not_depend_on_order() {
    let cases = [
        (at(1, "09:00", "12:00"), at(1, "11:00", "13:00")),
        (at(1, "09:00", "12:00"), at(1, "12:00", "15:00")),
        (at(1, "09:00", "12:00"), at(2, "10:00", "11:00")),
        (at(3, "22:00", "02:00"), at(3, "01:00", "23:00")),
    ];
    for (a, b) in cases {
        assert_eq!(is_conflict_free(&[a, b]), is_conflict_free(&[b, a]));
        assert_eq!(a.overlaps(&b), b.overlaps(&a));
    }
}

#[test]
fn validation_is_idempotent() {
    let set = OpeningHoursSet::new(vec![
        at(1, "09:00", "12:00"),
        at(1, "14:00", "18:00"),
        at(6, "10:00", "16:00"),
    ]);
    let first = set.is_conflict_free();
    let second = set.is_conflict_free();
    assert!(first);
    assert_eq!(first, second);
    assert_eq!(set.validate(), Ok(()));
}

#[test]
fn full_week_of_split_shifts_is_accepted() {
    let mut set = OpeningHoursSet::default();
    for day in 1..=7 {
        set = set
            .with_pushed(at(day, "08:00", "12:00"))
            .with_pushed(at(day, "12:00", "19:30"));
    }
    assert_eq!(set.len(), 14);
    assert!(set.is_conflict_free());
}

#[test]
fn conflicting_draft_cannot_be_submitted() {
    let dto = ShopDto {
        name: "Chez Paul".into(),
        opening_hours: vec![at(4, "10:00", "18:00"), at(4, "17:00", "20:00")].into(),
        ..Default::default()
    };
    assert!(dto.validate().is_valid());
    assert_eq!(
        dto.check_submittable(),
        Err(ShopValidationError::OpeningHours(OpeningHoursError::ConflictDetected))
    );
}
