use async_trait::async_trait;
use chrono::{Duration, NaiveDateTime};

use crate::config::CONFIG;
use crate::error::TripError;
use crate::models::{DayPoint, LatLng, TravelMode};

/// Single-mode route estimate from the external routing service.
#[derive(Clone, Debug)]
pub struct RouteEstimate {
    pub duration: Duration,
    pub distance_m: i32,
}

/// External routing collaborator. Implementations own transport, retries
/// and timeouts; the core treats a call as a plain blocking lookup.
#[async_trait]
pub trait RouteProvider: Send + Sync {
    async fn route(
        &self,
        origin: LatLng,
        destination: LatLng,
        mode: TravelMode,
        departure: Option<NaiveDateTime>,
    ) -> Result<RouteEstimate, TripError>;
}

/// Resolved hop between two consecutive day points.
#[derive(Clone, Debug)]
pub struct TravelInfo {
    pub travel_time: Duration,
    pub mode: TravelMode,
    pub distance_m: i32,
}

/// Wraps a route provider with the mode policy: walk when the walk is
/// short, otherwise re-query as a drive departing at the previous point's
/// resolved time.
pub struct TravelPlanner<P> {
    provider: P,
    walk_limit: Duration,
}

impl<P: RouteProvider> TravelPlanner<P> {
    pub fn new(provider: P) -> Self {
        Self::with_walk_limit(provider, Duration::minutes(CONFIG.walk_limit_min))
    }

    pub fn with_walk_limit(provider: P, walk_limit: Duration) -> Self {
        TravelPlanner {
            provider,
            walk_limit,
        }
    }

    pub async fn travel_info(&self, from: &DayPoint, to: LatLng) -> Result<TravelInfo, TripError> {
        let walk = self
            .provider
            .route(from.coords(), to, TravelMode::Walking, None)
            .await?;
        if walk.duration > self.walk_limit {
            let drive = self
                .provider
                .route(from.coords(), to, TravelMode::Driving, Some(from.date))
                .await?;
            Ok(TravelInfo {
                travel_time: drive.duration,
                mode: TravelMode::Driving,
                distance_m: drive.distance_m,
            })
        } else {
            Ok(TravelInfo {
                travel_time: walk.duration,
                mode: TravelMode::Walking,
                distance_m: walk.distance_m,
            })
        }
    }
}
