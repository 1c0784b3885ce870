use chrono::{Duration, NaiveDateTime};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::CONFIG;
use crate::error::TripError;
use crate::infrastructure::travel::{RouteProvider, TravelPlanner};
use crate::itinerary::opening_hours::parse_provider_schedule;
use crate::itinerary::timeline::recalculate_timeline;
use crate::models::{Day, DayPoint, LatLng, PointKind, TravelMode, Trip};
use crate::storage::Storage;

#[derive(Clone, Debug)]
pub struct NewDayPoint {
    pub day_id: Uuid,
    pub title: String,
    pub kind: PointKind,
    pub lat: f64,
    pub lng: f64,
    pub duration: Duration,
    /// Provider opening-hours JSON, parsed once here at the boundary.
    pub opening_hours: Option<String>,
}

pub struct DayPointService<'a, S: Storage, P: RouteProvider> {
    storage: &'a S,
    planner: TravelPlanner<P>,
}

impl<'a, S: Storage, P: RouteProvider> DayPointService<'a, S, P> {
    pub fn new(storage: &'a S, planner: TravelPlanner<P>) -> Self {
        DayPointService { storage, planner }
    }

    /// Appends a point to its day. The hop from the current last point is
    /// resolved immediately; the first point of a day starts at the
    /// configured morning hour with no travel.
    pub async fn create_day_point(&self, new_point: NewDayPoint) -> Result<DayPoint, TripError> {
        let day = self
            .storage
            .get_day(new_point.day_id)
            .await?
            .ok_or(TripError::DayNotFound(new_point.day_id))?;
        let points = self.active_points(day.id).await?;

        let destination = LatLng {
            lat: new_point.lat,
            lng: new_point.lng,
        };
        let (date, travel_time, travel_mode, travel_distance) = match points.last() {
            Some(last) => {
                let info = self.planner.travel_info(last, destination).await?;
                (
                    last.date + last.duration + info.travel_time,
                    info.travel_time,
                    info.mode,
                    info.distance_m,
                )
            }
            None => (
                day.date + Duration::hours(CONFIG.day_start_hour as i64),
                Duration::zero(),
                TravelMode::Driving,
                0,
            ),
        };

        let opening_hours = match &new_point.opening_hours {
            Some(raw) => parse_provider_schedule(raw)?,
            None => None,
        };

        let point = DayPoint {
            id: Uuid::new_v4(),
            day_id: day.id,
            title: new_point.title,
            date,
            duration: new_point.duration,
            kind: new_point.kind,
            latitude: new_point.lat,
            longitude: new_point.lng,
            travel_time,
            travel_mode,
            travel_distance,
            opening_hours,
            deleted: false,
        };
        self.storage.save_day_point(point.clone()).await?;
        info!("day point {} appended to day {} at {}", point.id, day.id, point.date);
        Ok(point)
    }

    /// Moves a point in front of another point of the same day, then
    /// re-derives the whole day from its previous start time.
    pub async fn reorder_day_points(
        &self,
        moving_id: Uuid,
        target_before_id: Uuid,
    ) -> Result<Vec<DayPoint>, TripError> {
        let moving = self.get_point(moving_id).await?;
        let target = self.get_point(target_before_id).await?;
        if moving.day_id != target.day_id {
            return Err(TripError::PointsInDifferentDays);
        }

        let mut points = self.active_points(moving.day_id).await?;
        let anchor = points[0].date;
        let from = points
            .iter()
            .position(|point| point.id == moving_id)
            .ok_or(TripError::DayPointNotFound(moving_id))?;
        let to = points
            .iter()
            .position(|point| point.id == target_before_id)
            .ok_or(TripError::DayPointNotFound(target_before_id))?;
        let item = points.remove(from);
        points.insert(to, item);

        recalculate_timeline(&mut points, anchor, &self.planner).await?;
        self.storage.save_day_points(points.clone()).await?;
        debug!("day {} reordered, {} points", moving.day_id, points.len());
        Ok(points)
    }

    /// Re-anchors the day at a new start time. Only the first point may be
    /// re-anchored; everything downstream shifts with it.
    pub async fn change_day_point_time(
        &self,
        day_point_id: Uuid,
        new_date: NaiveDateTime,
    ) -> Result<Vec<DayPoint>, TripError> {
        let point = self.get_point(day_point_id).await?;
        let mut points = self.active_points(point.day_id).await?;
        if points.first().map(|p| p.id) != Some(day_point_id) {
            return Err(TripError::NotStartPoint);
        }

        if points.len() == 1 {
            points[0].date = new_date;
            points[0].travel_time = Duration::zero();
        } else {
            recalculate_timeline(&mut points, new_date, &self.planner).await?;
        }
        self.storage.save_day_points(points.clone()).await?;
        Ok(points)
    }

    /// Changes how long a stop lasts and shifts everything after it.
    pub async fn change_duration(
        &self,
        day_point_id: Uuid,
        duration: Duration,
    ) -> Result<Vec<DayPoint>, TripError> {
        let point = self.get_point(day_point_id).await?;
        let mut points = self.active_points(point.day_id).await?;
        let index = points
            .iter()
            .position(|p| p.id == day_point_id)
            .ok_or(TripError::DayPointNotFound(day_point_id))?;
        points[index].duration = duration;

        let anchor = points[0].date;
        recalculate_timeline(&mut points, anchor, &self.planner).await?;
        self.storage.save_day_points(points.clone()).await?;
        Ok(points)
    }

    /// Soft delete by a trip member, followed by a recalculation of the
    /// remaining points. Deleting an already-missing point is a no-op.
    pub async fn delete_day_point(&self, day_point_id: Uuid, user_id: Uuid) -> Result<Uuid, TripError> {
        let Some(mut point) = self.storage.get_day_point(day_point_id).await? else {
            return Ok(day_point_id);
        };
        let trip = self.trip_of(point.day_id).await?;
        if !trip.is_member(user_id) {
            warn!("user {} may not delete day point {}", user_id, day_point_id);
            return Err(TripError::NotPermitted(user_id));
        }

        point.deleted = true;
        self.storage.save_day_point(point.clone()).await?;

        let mut points = self.active_points(point.day_id).await?;
        if !points.is_empty() {
            let anchor = points[0].date;
            recalculate_timeline(&mut points, anchor, &self.planner).await?;
            self.storage.save_day_points(points).await?;
        }
        Ok(day_point_id)
    }

    async fn get_point(&self, id: Uuid) -> Result<DayPoint, TripError> {
        self.storage
            .get_day_point(id)
            .await?
            .filter(|point| !point.deleted)
            .ok_or(TripError::DayPointNotFound(id))
    }

    /// Active points of a day, ordered by their current dates.
    async fn active_points(&self, day_id: Uuid) -> Result<Vec<DayPoint>, TripError> {
        let mut points: Vec<DayPoint> = self
            .storage
            .list_day_points(day_id)
            .await?
            .into_iter()
            .filter(|point| !point.deleted)
            .collect();
        points.sort_by_key(|point| point.date);
        Ok(points)
    }

    async fn trip_of(&self, day_id: Uuid) -> Result<Trip, TripError> {
        let day: Day = self
            .storage
            .get_day(day_id)
            .await?
            .ok_or(TripError::DayNotFound(day_id))?;
        self.storage
            .get_trip(day.trip_id)
            .await?
            .ok_or(TripError::TripNotFound(day.trip_id))
    }
}
