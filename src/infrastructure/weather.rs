use async_trait::async_trait;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use futures::future::join_all;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::warn;

use crate::config::CONFIG;
use crate::error::TripError;
use crate::models::{DailyWeather, LatLng};

/// Raw provider sample for one day: a WMO weather code plus the daily
/// temperature band.
#[derive(Clone, Debug)]
pub struct ForecastSample {
    pub wmo_code: Option<i32>,
    pub temp_min: f64,
    pub temp_max: f64,
}

/// External forecast collaborator returning already-shaped data.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn daily_forecast(&self, at: LatLng, date: NaiveDate)
    -> Result<ForecastSample, TripError>;
}

pub fn weather_key(at: LatLng, date: NaiveDate) -> String {
    format!("weather:{:.4}:{:.4}:{}", at.lat, at.lng, date)
}

/// Per-day forecasts with a time-boxed cache. Entries expire passively on
/// read; concurrent writers may race to repopulate a key, which is fine
/// because values are idempotent for the same key.
pub struct WeatherService<P> {
    provider: P,
    cache: RwLock<HashMap<String, (DailyWeather, DateTime<Utc>)>>,
    ttl: Duration,
    horizon: Duration,
}

impl<P: WeatherProvider> WeatherService<P> {
    pub fn new(provider: P) -> Self {
        Self::with_settings(
            provider,
            Duration::seconds(CONFIG.weather_ttl_secs as i64),
            Duration::days(CONFIG.forecast_horizon_days),
        )
    }

    pub fn with_settings(provider: P, ttl: Duration, horizon: Duration) -> Self {
        WeatherService {
            provider,
            cache: RwLock::new(HashMap::new()),
            ttl,
            horizon,
        }
    }

    /// One forecast per trip day, fetched concurrently. `None` marks a day
    /// without any points; it resolves to the unknown sentinel without a
    /// lookup.
    pub async fn forecast(&self, requests: &[Option<(LatLng, NaiveDate)>]) -> Vec<DailyWeather> {
        self.forecast_on(Utc::now().date_naive(), requests).await
    }

    pub async fn forecast_on(
        &self,
        today: NaiveDate,
        requests: &[Option<(LatLng, NaiveDate)>],
    ) -> Vec<DailyWeather> {
        let tasks = requests
            .iter()
            .map(|request| self.day_forecast(today, *request));
        join_all(tasks).await
    }

    async fn day_forecast(
        &self,
        today: NaiveDate,
        request: Option<(LatLng, NaiveDate)>,
    ) -> DailyWeather {
        let Some((at, date)) = request else {
            return DailyWeather::unknown();
        };
        if date > today + self.horizon {
            return DailyWeather::unknown();
        }

        let key = weather_key(at, date);
        {
            let cache = self.cache.read().await;
            if let Some((content, expires_at)) = cache.get(&key) {
                if *expires_at >= Utc::now() {
                    return content.clone();
                }
            }
        }

        match self.provider.daily_forecast(at, date).await {
            Ok(sample) => {
                let content = DailyWeather {
                    icon: sample.wmo_code.and_then(translate_wmo).unwrap_or(-1),
                    temp_min: sample.temp_min,
                    temp_max: sample.temp_max,
                };
                let mut cache = self.cache.write().await;
                cache.insert(key, (content.clone(), Utc::now() + self.ttl));
                content
            }
            Err(err) => {
                // A trip view must not fail because one forecast did.
                warn!("weather lookup failed for {}: {}", key, err);
                DailyWeather::unknown()
            }
        }
    }
}

/// Maps WMO weather codes onto the icon set the clients render.
pub fn translate_wmo(wmo: i32) -> Option<i32> {
    let icon = match wmo {
        0..=2 => 41,
        3 => 1,
        4..=19 => 6,
        20..=21 => 4,
        22..=23 => 12,
        24 => 36,
        25 => 15,
        26 => 40,
        27 => 35,
        28 => 6,
        29 => 29,
        40..=49 => 6,
        50..=52 => 4,
        53 => 5,
        54..=55 => 15,
        56..=57 => 13,
        58..=59 => 15,
        60 => 18,
        62..=63 => 15,
        64..=65 => 30,
        66 => 11,
        67 => 13,
        68 => 11,
        69 => 13,
        70..=71 => 25,
        72..=73 => 39,
        74..=79 => 14,
        80 => 2,
        81 => 17,
        82 => 28,
        83 => 20,
        84 => 35,
        85 => 37,
        86 => 38,
        87 => 37,
        88 => 38,
        89 => 37,
        90 => 38,
        91 => 16,
        92 => 29,
        93 => 22,
        94 => 34,
        95..=99 => 9,
        _ => return None,
    };
    Some(icon)
}
