mod opening_hours_tests;
mod weather_tests;

use chrono::{Duration, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::models::{CurrencyCode, Day, DayPoint, Duty, PointKind, TravelMode, Trip, User};
use crate::storage::Storage;
use crate::InMemoryStorage;

pub fn test_user(name: &str) -> User {
    User::new(format!("{}@example.com", name.to_lowercase()), name.to_string())
}

pub fn test_duty(
    payer: Uuid,
    amount: Decimal,
    currency: CurrencyCode,
    participants: Vec<Uuid>,
) -> Duty {
    Duty {
        id: Uuid::new_v4(),
        title: "Shared bill".to_string(),
        amount,
        currency,
        payer_id: payer,
        day_point_id: Uuid::new_v4(),
        participant_ids: participants,
        deleted: false,
        created_at: Utc::now(),
    }
}

pub fn test_point(day_id: Uuid, title: &str, date: NaiveDateTime, duration_min: i64) -> DayPoint {
    DayPoint {
        id: Uuid::new_v4(),
        day_id,
        title: title.to_string(),
        date,
        duration: Duration::minutes(duration_min),
        kind: PointKind::Sights,
        latitude: 50.087,
        longitude: 14.421,
        travel_time: Duration::zero(),
        travel_mode: TravelMode::Driving,
        travel_distance: 0,
        opening_hours: None,
        deleted: false,
    }
}

/// Seeds a trip with one day and one day point; returns (trip, day, point) ids.
pub async fn seed_trip(
    storage: &InMemoryStorage,
    author: &User,
    members: &[&User],
    day_start: NaiveDateTime,
) -> (Uuid, Uuid, Uuid) {
    storage.save_user(author.clone()).await.unwrap();
    for member in members {
        storage.save_user((*member).clone()).await.unwrap();
    }
    let trip = Trip {
        id: Uuid::new_v4(),
        title: "Test trip".to_string(),
        author_id: author.id,
        member_ids: members.iter().map(|m| m.id).collect(),
        created_at: Utc::now(),
    };
    let day = Day {
        id: Uuid::new_v4(),
        trip_id: trip.id,
        date: day_start,
    };
    let point = test_point(day.id, "First stop", day_start, 60);
    let ids = (trip.id, day.id, point.id);
    storage.save_trip(trip).await.unwrap();
    storage.save_day(day).await.unwrap();
    storage.save_day_point(point).await.unwrap();
    ids
}

pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    chrono::NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}
