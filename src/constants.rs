/// Scale used for intermediate per-participant shares. Keeps the total
/// rounding error across many small splits under one minor currency unit.
pub const SHARE_SCALE: u32 = 5;

/// Scale at which a balance counts as settled and at which transaction
/// amounts are emitted.
pub const SETTLE_SCALE: u32 = 2;

/// Walking routes longer than this fall back to a driving query.
pub const WALK_LIMIT_MIN: i64 = 10;

/// First point of an otherwise empty day starts this many hours into it.
pub const DEFAULT_DAY_START_HOUR: u32 = 7;

/// Forecasts are only available this many days out; anything beyond
/// short-circuits to the unknown sentinel.
pub const FORECAST_HORIZON_DAYS: i64 = 15;

/// Weather cache entries expire after this interval.
pub const WEATHER_TTL_SECS: u64 = 3600;

/// Duty titles of this length or shorter are rejected.
pub const MIN_DUTY_TITLE_LEN: usize = 4;
