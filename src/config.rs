use dotenv::dotenv;
use once_cell::sync::Lazy;
use std::env;

use crate::constants::{
    DEFAULT_DAY_START_HOUR, FORECAST_HORIZON_DAYS, WALK_LIMIT_MIN, WEATHER_TTL_SECS,
};

#[derive(Debug)]
pub struct Config {
    pub log_level: String,
    pub walk_limit_min: i64,
    pub weather_ttl_secs: u64,
    pub forecast_horizon_days: i64,
    pub day_start_hour: u32,
}

impl Config {
    fn from_env() -> Self {
        dotenv().ok();

        Self {
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            walk_limit_min: env::var("WALK_LIMIT_MIN")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(WALK_LIMIT_MIN),
            weather_ttl_secs: env::var("WEATHER_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(WEATHER_TTL_SECS),
            forecast_horizon_days: env::var("FORECAST_HORIZON_DAYS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(FORECAST_HORIZON_DAYS),
            day_start_hour: env::var("DAY_START_HOUR")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_DAY_START_HOUR),
        }
    }
}

pub static CONFIG: Lazy<Config> = Lazy::new(Config::from_env);
