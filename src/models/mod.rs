pub mod currency;
pub mod day_point;
pub mod duty;
pub mod opening_hours;
pub mod transaction;
pub mod trip;
pub mod user;
pub mod weather;

pub use currency::CurrencyCode;
pub use day_point::{DayPoint, LatLng, PointKind, TravelMode};
pub use duty::Duty;
pub use opening_hours::{RawPeriod, RawSchedule, TimeInterval, WeeklySchedule};
pub use transaction::Transaction;
pub use trip::{Day, Trip};
pub use user::User;
pub use weather::DailyWeather;
