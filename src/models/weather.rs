use serde::Serialize;

/// One day's forecast in the app's icon vocabulary. `icon` of -1 means no
/// data (beyond the horizon, no points that day, or a provider failure).
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct DailyWeather {
    pub icon: i32,
    pub temp_min: f64,
    pub temp_max: f64,
}

impl DailyWeather {
    pub fn unknown() -> Self {
        DailyWeather {
            icon: -1,
            temp_min: -273.0,
            temp_max: -273.0,
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.icon == -1
    }
}
