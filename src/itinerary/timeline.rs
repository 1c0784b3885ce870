use chrono::{Duration, NaiveDateTime};

use crate::error::TripError;
use crate::infrastructure::travel::{RouteProvider, TravelPlanner};
use crate::models::DayPoint;

/// Re-derives every stop's start time from a fixed anchor. The first stop
/// takes the anchor and zero travel time; each later stop starts when the
/// previous one ends plus the hop's travel time. Hops resolve strictly in
/// order because each depends on the previous stop's finalized date.
/// Lists of zero or one stop are left untouched.
pub async fn recalculate_timeline<P: RouteProvider>(
    points: &mut [DayPoint],
    anchor: NaiveDateTime,
    planner: &TravelPlanner<P>,
) -> Result<(), TripError> {
    if points.len() <= 1 {
        return Ok(());
    }

    points[0].travel_time = Duration::zero();
    points[0].date = anchor;

    for i in 1..points.len() {
        let (head, tail) = points.split_at_mut(i);
        let prev = &head[i - 1];
        let point = &mut tail[0];

        let info = planner.travel_info(prev, point.coords()).await?;
        point.date = prev.date + prev.duration + info.travel_time;
        point.travel_time = info.travel_time;
        point.travel_mode = info.mode;
        point.travel_distance = info.distance_m;
    }

    Ok(())
}
