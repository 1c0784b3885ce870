use chrono::{Duration, NaiveDateTime};
use uuid::Uuid;

use super::opening_hours::WeeklySchedule;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointKind {
    Start,
    Food,
    Hotel,
    Gas,
    Sights,
    Custom,
    Unknown,
}

/// How the hop from the previous point is covered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TravelMode {
    Walking,
    Driving,
}

/// One itinerary stop. `date` is derived state: for every point after the
/// first, date = previous date + previous duration + travel_time.
#[derive(Clone, Debug)]
pub struct DayPoint {
    pub id: Uuid,
    pub day_id: Uuid,
    pub title: String,
    pub date: NaiveDateTime,
    pub duration: Duration,
    pub kind: PointKind,
    pub latitude: f64,
    pub longitude: f64,
    pub travel_time: Duration,
    pub travel_mode: TravelMode,
    pub travel_distance: i32,
    pub opening_hours: Option<WeeklySchedule>,
    pub deleted: bool,
}

impl DayPoint {
    pub fn coords(&self) -> LatLng {
        LatLng {
            lat: self.latitude,
            lng: self.longitude,
        }
    }
}
