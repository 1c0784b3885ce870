use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::error::TripError;
use crate::models::{Day, DayPoint, Duty, Trip, User};
use crate::storage::Storage;

pub struct InMemoryStorage {
    users: Mutex<HashMap<Uuid, User>>,
    trips: Mutex<HashMap<Uuid, Trip>>,
    days: Mutex<HashMap<Uuid, Day>>,
    day_points: Mutex<HashMap<Uuid, DayPoint>>,
    duties: Mutex<HashMap<Uuid, Duty>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        InMemoryStorage {
            users: Mutex::new(HashMap::new()),
            trips: Mutex::new(HashMap::new()),
            days: Mutex::new(HashMap::new()),
            day_points: Mutex::new(HashMap::new()),
            duties: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Storage for InMemoryStorage {
    async fn save_user(&self, user: User) -> Result<(), TripError> {
        self.users.lock().await.insert(user.id, user);
        Ok(())
    }

    async fn get_user(&self, id: Uuid) -> Result<Option<User>, TripError> {
        Ok(self.users.lock().await.get(&id).cloned())
    }

    async fn save_trip(&self, trip: Trip) -> Result<(), TripError> {
        self.trips.lock().await.insert(trip.id, trip);
        Ok(())
    }

    async fn get_trip(&self, id: Uuid) -> Result<Option<Trip>, TripError> {
        Ok(self.trips.lock().await.get(&id).cloned())
    }

    async fn save_day(&self, day: Day) -> Result<(), TripError> {
        self.days.lock().await.insert(day.id, day);
        Ok(())
    }

    async fn get_day(&self, id: Uuid) -> Result<Option<Day>, TripError> {
        Ok(self.days.lock().await.get(&id).cloned())
    }

    async fn list_days(&self, trip_id: Uuid) -> Result<Vec<Day>, TripError> {
        let mut days: Vec<Day> = self
            .days
            .lock()
            .await
            .values()
            .filter(|day| day.trip_id == trip_id)
            .cloned()
            .collect();
        days.sort_by_key(|day| day.date);
        Ok(days)
    }

    async fn save_day_point(&self, point: DayPoint) -> Result<(), TripError> {
        self.day_points.lock().await.insert(point.id, point);
        Ok(())
    }

    async fn save_day_points(&self, points: Vec<DayPoint>) -> Result<(), TripError> {
        let mut store = self.day_points.lock().await;
        for point in points {
            store.insert(point.id, point);
        }
        Ok(())
    }

    async fn get_day_point(&self, id: Uuid) -> Result<Option<DayPoint>, TripError> {
        Ok(self.day_points.lock().await.get(&id).cloned())
    }

    async fn list_day_points(&self, day_id: Uuid) -> Result<Vec<DayPoint>, TripError> {
        Ok(self
            .day_points
            .lock()
            .await
            .values()
            .filter(|point| point.day_id == day_id)
            .cloned()
            .collect())
    }

    async fn save_duty(&self, duty: Duty) -> Result<(), TripError> {
        self.duties.lock().await.insert(duty.id, duty);
        Ok(())
    }

    async fn get_duty(&self, id: Uuid) -> Result<Option<Duty>, TripError> {
        Ok(self.duties.lock().await.get(&id).cloned())
    }

    async fn list_duties(&self, day_point_id: Uuid) -> Result<Vec<Duty>, TripError> {
        let mut duties: Vec<Duty> = self
            .duties
            .lock()
            .await
            .values()
            .filter(|duty| duty.day_point_id == day_point_id)
            .cloned()
            .collect();
        duties.sort_by_key(|duty| duty.created_at);
        Ok(duties)
    }
}
