use async_trait::async_trait;
use chrono::{Duration, NaiveDate};
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::error::TripError;
use crate::infrastructure::weather::{
    translate_wmo, ForecastSample, WeatherProvider, WeatherService,
};
use crate::models::{DailyWeather, LatLng};

struct FixedForecast {
    wmo_code: Option<i32>,
    calls: AtomicUsize,
    fail: bool,
}

impl FixedForecast {
    fn new(wmo_code: Option<i32>) -> Self {
        FixedForecast {
            wmo_code,
            calls: AtomicUsize::new(0),
            fail: false,
        }
    }

    fn failing() -> Self {
        FixedForecast {
            wmo_code: None,
            calls: AtomicUsize::new(0),
            fail: true,
        }
    }
}

#[async_trait]
impl WeatherProvider for &FixedForecast {
    async fn daily_forecast(
        &self,
        _at: LatLng,
        _date: NaiveDate,
    ) -> Result<ForecastSample, TripError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(TripError::ProviderError("forecast unavailable".to_string()));
        }
        Ok(ForecastSample {
            wmo_code: self.wmo_code,
            temp_min: 12.5,
            temp_max: 23.0,
        })
    }
}

fn service(provider: &FixedForecast) -> WeatherService<&FixedForecast> {
    WeatherService::with_settings(provider, Duration::hours(1), Duration::days(15))
}

fn prague() -> LatLng {
    LatLng {
        lat: 50.0875,
        lng: 14.4213,
    }
}

fn day(offset: i64) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap() + Duration::days(offset)
}

#[tokio::test]
async fn forecasts_are_cached_within_the_ttl() {
    let provider = FixedForecast::new(Some(0));
    let weather = service(&provider);
    let today = day(0);
    let request = [Some((prague(), day(2)))];

    let first = weather.forecast_on(today, &request).await;
    let second = weather.forecast_on(today, &request).await;

    assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
    assert_eq!(first, second);
    // WMO 0 (clear sky) renders as icon 41.
    assert_eq!(first[0].icon, 41);
    assert_eq!(first[0].temp_max, 23.0);
}

#[tokio::test]
async fn dates_beyond_the_horizon_never_reach_the_provider() {
    let provider = FixedForecast::new(Some(0));
    let weather = service(&provider);

    let result = weather
        .forecast_on(day(0), &[Some((prague(), day(16)))])
        .await;

    assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
    assert!(result[0].is_unknown());
}

#[tokio::test]
async fn days_without_points_resolve_to_unknown() {
    let provider = FixedForecast::new(Some(0));
    let weather = service(&provider);

    let result = weather
        .forecast_on(day(0), &[None, Some((prague(), day(1)))])
        .await;

    assert_eq!(result[0], DailyWeather::unknown());
    assert_eq!(result[1].icon, 41);
    assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn provider_failures_degrade_to_unknown() {
    let provider = FixedForecast::failing();
    let weather = service(&provider);

    let result = weather
        .forecast_on(day(0), &[Some((prague(), day(1)))])
        .await;

    assert!(result[0].is_unknown());
}

#[tokio::test]
async fn each_distinct_day_is_fetched_once() {
    let provider = FixedForecast::new(Some(3));
    let weather = service(&provider);
    let requests: Vec<_> = (0..3).map(|i| Some((prague(), day(i)))).collect();

    let result = weather.forecast_on(day(0), &requests).await;

    assert_eq!(result.len(), 3);
    assert!(result.iter().all(|w| w.icon == 1));
    assert_eq!(provider.calls.load(Ordering::SeqCst), 3);
}

#[test]
fn wmo_codes_map_onto_the_icon_set() {
    assert_eq!(translate_wmo(0), Some(41));
    assert_eq!(translate_wmo(3), Some(1));
    assert_eq!(translate_wmo(45), Some(6));
    assert_eq!(translate_wmo(65), Some(30));
    assert_eq!(translate_wmo(95), Some(9));
    // 61 was never given an icon upstream.
    assert_eq!(translate_wmo(61), None);
    assert_eq!(translate_wmo(120), None);
}

#[tokio::test]
async fn unknown_wmo_codes_render_the_unknown_icon() {
    let provider = FixedForecast::new(None);
    let weather = service(&provider);

    let result = weather
        .forecast_on(day(0), &[Some((prague(), day(1)))])
        .await;

    assert_eq!(result[0].icon, -1);
    assert_eq!(result[0].temp_min, 12.5);
}
