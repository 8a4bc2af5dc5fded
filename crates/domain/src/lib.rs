//! Daycast Domain Layer
pub mod config;
pub mod errors;
pub mod forecast;
pub mod location;
pub mod query;

pub use config::{CliOverrides, Config};
pub use errors::DomainError;
pub use forecast::{DailyForecastEntry, ForecastPoint, ForecastResponse};
pub use location::Location;
pub use query::{ForecastQuery, ForecastRequest, TimezoneOption};
