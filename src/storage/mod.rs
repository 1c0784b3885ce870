use async_trait::async_trait;
use uuid::Uuid;

use crate::error::TripError;
use crate::models::{Day, DayPoint, Duty, Trip, User};

/// Repository-by-id over the trip entities. Relations are carried as ids;
/// callers compose lookups instead of walking an object graph.
#[async_trait]
pub trait Storage: Send + Sync {
    async fn save_user(&self, user: User) -> Result<(), TripError>;
    async fn get_user(&self, id: Uuid) -> Result<Option<User>, TripError>;

    async fn save_trip(&self, trip: Trip) -> Result<(), TripError>;
    async fn get_trip(&self, id: Uuid) -> Result<Option<Trip>, TripError>;

    async fn save_day(&self, day: Day) -> Result<(), TripError>;
    async fn get_day(&self, id: Uuid) -> Result<Option<Day>, TripError>;
    async fn list_days(&self, trip_id: Uuid) -> Result<Vec<Day>, TripError>;

    async fn save_day_point(&self, point: DayPoint) -> Result<(), TripError>;
    async fn save_day_points(&self, points: Vec<DayPoint>) -> Result<(), TripError>;
    async fn get_day_point(&self, id: Uuid) -> Result<Option<DayPoint>, TripError>;
    async fn list_day_points(&self, day_id: Uuid) -> Result<Vec<DayPoint>, TripError>;

    async fn save_duty(&self, duty: Duty) -> Result<(), TripError>;
    async fn get_duty(&self, id: Uuid) -> Result<Option<Duty>, TripError>;
    async fn list_duties(&self, day_point_id: Uuid) -> Result<Vec<Duty>, TripError>;
}

pub mod in_memory;
