use chrono::{NaiveTime, Weekday};
use serde::Deserialize;
use std::collections::HashMap;

/// Raw provider schedule, parsed from JSON once at the boundary and never
/// re-parsed downstream. Day index is the provider's: 0 = Sunday,
/// 1..=6 = Monday..Saturday. Times are "HHMM". An absent close time marks
/// a venue that never closes.
#[derive(Clone, Debug, Deserialize)]
pub struct RawSchedule {
    pub periods: Vec<RawPeriod>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RawPeriod {
    pub day: u8,
    pub open: String,
    pub close: Option<String>,
}

/// Open interval within a single day. 23:59:59 stands in for end-of-day;
/// intervals never roll over midnight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeInterval {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl TimeInterval {
    pub fn contains(&self, time: NaiveTime) -> bool {
        self.start <= time && self.end >= time
    }
}

pub fn end_of_day() -> NaiveTime {
    NaiveTime::from_hms_opt(23, 59, 59).expect("23:59:59 is a valid time")
}

pub(crate) fn full_day() -> TimeInterval {
    TimeInterval {
        start: NaiveTime::MIN,
        end: end_of_day(),
    }
}

/// Per-weekday open intervals, sorted and non-overlapping within a day.
/// A weekday with no entry is closed all day.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WeeklySchedule {
    pub by_weekday: HashMap<Weekday, Vec<TimeInterval>>,
}

impl WeeklySchedule {
    pub fn always_open() -> Self {
        let all_week = [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
        ];
        WeeklySchedule {
            by_weekday: all_week.into_iter().map(|d| (d, vec![full_day()])).collect(),
        }
    }
}
