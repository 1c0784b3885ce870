use chrono::{NaiveTime, Utc};
use rust_decimal::Decimal;
use std::collections::HashMap;
use tracing::info;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use tripsplit::config::CONFIG;
use tripsplit::error::TripError;
use tripsplit::models::{CurrencyCode, Day, Trip, User};
use tripsplit::settlement::service::{DutyService, NewDuty};
use tripsplit::storage::Storage;
use tripsplit::InMemoryStorage;

/// Seeds a small trip and prints the settlement plan for it.
#[tokio::main]
async fn main() -> Result<(), TripError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(CONFIG.log_level.clone()))
        .init();

    let storage = InMemoryStorage::new();

    let mut names: HashMap<Uuid, String> = HashMap::new();
    let mut ids = Vec::new();
    for name in ["Vasya", "Lena", "Ilya", "Petya"] {
        let user = User::new(format!("{}@example.com", name.to_lowercase()), name.to_string());
        names.insert(user.id, user.name.clone());
        ids.push(user.id);
        storage.save_user(user).await?;
    }
    let (vasya, lena, ilya, petya) = (ids[0], ids[1], ids[2], ids[3]);

    let trip = Trip {
        id: Uuid::new_v4(),
        title: "Down under".to_string(),
        author_id: vasya,
        member_ids: vec![lena, ilya, petya],
        created_at: Utc::now(),
    };
    let day = Day {
        id: Uuid::new_v4(),
        trip_id: trip.id,
        date: Utc::now().date_naive().and_time(NaiveTime::MIN),
    };
    let point = tripsplit::models::DayPoint {
        id: Uuid::new_v4(),
        day_id: day.id,
        title: "Harbour dinner".to_string(),
        date: day.date,
        duration: chrono::Duration::hours(2),
        kind: tripsplit::models::PointKind::Food,
        latitude: -33.8568,
        longitude: 151.2153,
        travel_time: chrono::Duration::zero(),
        travel_mode: tripsplit::models::TravelMode::Driving,
        travel_distance: 0,
        opening_hours: None,
        deleted: false,
    };
    let trip_id = trip.id;
    let point_id = point.id;
    storage.save_trip(trip).await?;
    storage.save_day(day).await?;
    storage.save_day_point(point).await?;

    let duties = DutyService::new(&storage);
    for (payer, amount, participants) in [
        (vasya, 150, vec![vasya, lena, ilya]),
        (lena, 200, vec![lena, petya]),
        (petya, 109, vec![petya, vasya]),
    ] {
        duties
            .create_duty(
                NewDuty {
                    day_point_id: point_id,
                    title: format!("Shared bill of {}", names[&payer]),
                    amount: Decimal::from(amount),
                    currency: CurrencyCode::AUD,
                    participant_ids: participants,
                },
                payer,
            )
            .await?;
    }

    let plan = duties.duty_calculations(trip_id).await?;
    info!("settlement plan has {} transactions", plan.len());
    for tx in &plan {
        println!(
            "{} pays {} {} {}",
            names[&tx.source_user_id], names[&tx.target_user_id], tx.amount, tx.currency
        );
    }
    Ok(())
}
