use chrono::{NaiveTime, Weekday};

use crate::itinerary::opening_hours::{
    normalize_opening_hours, opening_status, parse_provider_schedule,
};
use crate::models::{RawPeriod, WeeklySchedule};
use crate::tests::at;
use crate::TripError;

fn period(day: u8, open: &str, close: &str) -> RawPeriod {
    RawPeriod {
        day,
        open: open.to_string(),
        close: Some(close.to_string()),
    }
}

fn clock(h: u32, m: u32, s: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, s).unwrap()
}

#[test]
fn empty_period_list_means_no_schedule() {
    assert_eq!(normalize_opening_hours(&[]).unwrap(), None);
}

#[test]
fn absent_close_time_means_always_open() {
    let periods = vec![
        RawPeriod {
            day: 1,
            open: "0000".to_string(),
            close: None,
        },
        // Other periods are ignored once the always-open shorthand shows up.
        period(3, "0900", "1700"),
    ];
    let schedule = normalize_opening_hours(&periods).unwrap().unwrap();

    assert_eq!(schedule, WeeklySchedule::always_open());
    for day in [Weekday::Mon, Weekday::Thu, Weekday::Sun] {
        let intervals = &schedule.by_weekday[&day];
        assert_eq!(intervals.len(), 1);
        assert_eq!(intervals[0].start, NaiveTime::MIN);
        assert_eq!(intervals[0].end, clock(23, 59, 59));
    }
}

#[test]
fn single_day_schedule_maps_to_one_interval() {
    // Provider day 1 is Monday.
    let schedule = normalize_opening_hours(&[period(1, "0900", "1700")])
        .unwrap()
        .unwrap();

    let monday = &schedule.by_weekday[&Weekday::Mon];
    assert_eq!(monday.len(), 1);
    assert_eq!(monday[0].start, clock(9, 0, 0));
    assert_eq!(monday[0].end, clock(17, 0, 0));
    assert!(!schedule.by_weekday.contains_key(&Weekday::Tue));
}

#[test]
fn provider_day_zero_is_sunday() {
    let schedule = normalize_opening_hours(&[period(0, "1000", "1400")])
        .unwrap()
        .unwrap();
    assert!(schedule.by_weekday.contains_key(&Weekday::Sun));
    assert!(!schedule.by_weekday.contains_key(&Weekday::Mon));
}

#[test]
fn status_messages_around_the_boundaries() {
    let schedule = normalize_opening_hours(&[period(1, "0900", "1700")])
        .unwrap()
        .unwrap();
    let schedule = Some(&schedule);

    // 2024-06-03 is a Monday.
    assert_eq!(
        opening_status(schedule, at(2024, 6, 3, 8, 59)),
        "Will open at 09:00"
    );
    assert_eq!(opening_status(schedule, at(2024, 6, 3, 12, 0)), "");
    assert_eq!(
        opening_status(schedule, at(2024, 6, 3, 17, 1)),
        "Will be closed since 17:00"
    );
    // Tuesday has no intervals at all.
    assert_eq!(
        opening_status(schedule, at(2024, 6, 4, 12, 0)),
        "Closed at this day of week"
    );
}

#[test]
fn no_schedule_yields_no_message() {
    assert_eq!(opening_status(None, at(2024, 6, 3, 12, 0)), "");
}

#[test]
fn multiple_intervals_per_day_report_the_next_opening() {
    let periods = vec![period(1, "0900", "1200"), period(1, "1400", "1800")];
    let schedule = normalize_opening_hours(&periods).unwrap().unwrap();

    let monday = &schedule.by_weekday[&Weekday::Mon];
    assert_eq!(monday.len(), 2);
    assert_eq!(
        opening_status(Some(&schedule), at(2024, 6, 3, 12, 30)),
        "Will open at 14:00"
    );
}

#[test]
fn days_skipped_between_explicit_days_are_open_all_day() {
    let periods = vec![period(1, "0900", "1700"), period(3, "0900", "1700")];
    let schedule = normalize_opening_hours(&periods).unwrap().unwrap();

    let tuesday = &schedule.by_weekday[&Weekday::Tue];
    assert_eq!(tuesday.len(), 1);
    assert_eq!(tuesday[0].start, NaiveTime::MIN);
    assert_eq!(tuesday[0].end, clock(23, 59, 59));

    // Days before the first explicit event and after the last stay closed.
    assert!(!schedule.by_weekday.contains_key(&Weekday::Thu));
    assert!(!schedule.by_weekday.contains_key(&Weekday::Sun));
}

#[test]
fn close_without_matching_open_is_malformed() {
    // Sorted events put the bare close after a completed interval, where
    // no open is pending and the day is no longer fresh.
    let periods = vec![period(1, "0800", "0830"), period(1, "1200", "0900")];
    let result = normalize_opening_hours(&periods);
    assert!(matches!(result, Err(TripError::MalformedSchedule(_))));
}

#[test]
fn bad_clock_strings_are_malformed() {
    let result = normalize_opening_hours(&[period(1, "9am", "1700")]);
    assert!(matches!(result, Err(TripError::MalformedSchedule(_))));
}

#[test]
fn out_of_range_weekday_is_malformed() {
    let result = normalize_opening_hours(&[period(7, "0900", "1700")]);
    assert!(matches!(result, Err(TripError::MalformedSchedule(_))));
}

#[test]
fn provider_json_parses_once_at_the_boundary() {
    assert_eq!(parse_provider_schedule("").unwrap(), None);
    assert_eq!(parse_provider_schedule("  ").unwrap(), None);
    assert_eq!(parse_provider_schedule("\"\"").unwrap(), None);

    let raw = r#"{"periods":[{"day":1,"open":"0900","close":"1700"}]}"#;
    let schedule = parse_provider_schedule(raw).unwrap().unwrap();
    assert_eq!(schedule.by_weekday[&Weekday::Mon][0].start, clock(9, 0, 0));

    assert!(matches!(
        parse_provider_schedule("{not json"),
        Err(TripError::MalformedSchedule(_))
    ));
}

#[test]
fn overnight_period_splits_at_the_day_boundary() {
    // Open 20:00 with close 09:00 sorts the close first: the day starts
    // open from midnight, and the evening open runs to the end-of-day
    // sentinel.
    let schedule = normalize_opening_hours(&[period(1, "2000", "0900")])
        .unwrap()
        .unwrap();

    let monday = &schedule.by_weekday[&Weekday::Mon];
    assert_eq!(monday.len(), 2);
    assert_eq!(monday[0].start, NaiveTime::MIN);
    assert_eq!(monday[0].end, clock(9, 0, 0));
    assert_eq!(monday[1].start, clock(20, 0, 0));
    assert_eq!(monday[1].end, clock(23, 59, 59));
}

#[test]
fn open_day_is_closed_out_before_the_next_explicit_day() {
    // Monday's evening open has no close before Tuesday's events arrive;
    // the sweep closes Monday at end of day.
    let periods = vec![period(2, "0900", "1700"), period(1, "0900", "0830")];
    // day 1 close 08:30 sorts before the 09:00 open, so Monday holds an
    // open without a close when Tuesday begins.
    let schedule = normalize_opening_hours(&periods).unwrap().unwrap();

    let monday = &schedule.by_weekday[&Weekday::Mon];
    assert_eq!(monday.len(), 2);
    assert_eq!(monday[1].start, clock(9, 0, 0));
    assert_eq!(monday[1].end, clock(23, 59, 59));

    let tuesday = &schedule.by_weekday[&Weekday::Tue];
    assert_eq!(tuesday.len(), 1);
    assert_eq!(tuesday[0].start, clock(9, 0, 0));
    assert_eq!(tuesday[0].end, clock(17, 0, 0));
}
