use chrono::{Datelike, NaiveDateTime, NaiveTime, Weekday};
use std::collections::HashMap;

use crate::error::TripError;
use crate::models::opening_hours::{end_of_day, full_day, RawPeriod, RawSchedule, TimeInterval};
use crate::models::WeeklySchedule;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum EventKind {
    Open,
    Close,
}

#[derive(Clone, Copy, Debug)]
struct Event {
    day: Weekday,
    kind: EventKind,
    time: NaiveTime,
}

/// Parses the provider's serialized schedule once at the boundary. Empty
/// or blank input means the venue published no schedule at all.
pub fn parse_provider_schedule(raw: &str) -> Result<Option<WeeklySchedule>, TripError> {
    if raw.trim().is_empty() || raw == "\"\"" {
        return Ok(None);
    }
    let schedule: RawSchedule = serde_json::from_str(raw)
        .map_err(|err| TripError::MalformedSchedule(err.to_string()))?;
    normalize_opening_hours(&schedule.periods)
}

/// Converts provider periods into per-weekday open intervals.
///
/// A period without a close time is the provider's shorthand for a venue
/// that never closes; it wins over everything else. Otherwise the periods
/// expand into open/close events, sorted Monday-first, and a single sweep
/// builds the intervals. Weekdays entirely skipped between two explicit
/// days come out open all day; days before the first explicit event stay
/// closed.
pub fn normalize_opening_hours(
    periods: &[RawPeriod],
) -> Result<Option<WeeklySchedule>, TripError> {
    if periods.is_empty() {
        return Ok(None);
    }
    if periods.iter().any(|period| period.close.is_none()) {
        return Ok(Some(WeeklySchedule::always_open()));
    }

    let mut events = Vec::with_capacity(periods.len() * 2);
    for period in periods {
        let day = weekday_from_provider(period.day)?;
        events.push(Event {
            day,
            kind: EventKind::Open,
            time: parse_clock(&period.open)?,
        });
        if let Some(close) = &period.close {
            events.push(Event {
                day,
                kind: EventKind::Close,
                time: parse_clock(close)?,
            });
        }
    }
    events.sort_by_key(|event| (event.day.num_days_from_monday(), event.time));

    Ok(Some(sweep(&events)?))
}

fn sweep(events: &[Event]) -> Result<WeeklySchedule, TripError> {
    let mut by_weekday: HashMap<Weekday, Vec<TimeInterval>> = HashMap::new();
    let mut cursor: Option<Weekday> = None;
    let mut open_since: Option<NaiveTime> = None;
    // True until the current day has consumed an event; a close on a fresh
    // day means the day opened at midnight.
    let mut fresh_day = true;

    for event in events {
        match cursor {
            Some(day) if day == event.day => {}
            Some(day) => {
                if let Some(start) = open_since.take() {
                    by_weekday.entry(day).or_default().push(TimeInterval {
                        start,
                        end: end_of_day(),
                    });
                }
                let mut skipped = day.succ();
                while skipped != event.day {
                    by_weekday.entry(skipped).or_default().push(full_day());
                    skipped = skipped.succ();
                }
                cursor = Some(event.day);
                fresh_day = true;
            }
            None => {
                cursor = Some(event.day);
                fresh_day = true;
            }
        }

        match event.kind {
            EventKind::Open => {
                open_since = Some(event.time);
            }
            EventKind::Close => {
                let start = match open_since.take() {
                    Some(start) => start,
                    None if fresh_day => NaiveTime::MIN,
                    None => {
                        return Err(TripError::MalformedSchedule(format!(
                            "close at {} on {} without a matching open",
                            event.time, event.day
                        )));
                    }
                };
                by_weekday.entry(event.day).or_default().push(TimeInterval {
                    start,
                    end: event.time,
                });
            }
        }
        fresh_day = false;
    }

    if let (Some(day), Some(start)) = (cursor, open_since) {
        by_weekday.entry(day).or_default().push(TimeInterval {
            start,
            end: end_of_day(),
        });
    }

    Ok(WeeklySchedule { by_weekday })
}

/// Human-readable status for an instant. Empty string means open (or no
/// schedule to check against).
pub fn opening_status(schedule: Option<&WeeklySchedule>, at: NaiveDateTime) -> String {
    let Some(schedule) = schedule else {
        return String::new();
    };
    let Some(intervals) = schedule.by_weekday.get(&at.weekday()) else {
        return "Closed at this day of week".to_string();
    };

    let time = at.time();
    if intervals.iter().any(|interval| interval.contains(time)) {
        return String::new();
    }
    if let Some(next) = intervals.iter().find(|interval| interval.start > time) {
        return format!("Will open at {}", next.start.format("%H:%M"));
    }
    if let Some(last) = intervals.last() {
        return format!("Will be closed since {}", last.end.format("%H:%M"));
    }
    "Closed at this day of week".to_string()
}

/// The provider indexes days 0 = Sunday, 1..=6 = Monday..Saturday.
fn weekday_from_provider(day: u8) -> Result<Weekday, TripError> {
    match day {
        0 => Ok(Weekday::Sun),
        1 => Ok(Weekday::Mon),
        2 => Ok(Weekday::Tue),
        3 => Ok(Weekday::Wed),
        4 => Ok(Weekday::Thu),
        5 => Ok(Weekday::Fri),
        6 => Ok(Weekday::Sat),
        other => Err(TripError::MalformedSchedule(format!(
            "weekday index {} out of range",
            other
        ))),
    }
}

fn parse_clock(text: &str) -> Result<NaiveTime, TripError> {
    NaiveTime::parse_from_str(text, "%H%M")
        .map_err(|_| TripError::MalformedSchedule(format!("bad clock time {:?}", text)))
}
