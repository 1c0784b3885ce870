pub mod opening_hours;
pub mod service;
pub mod timeline;
