mod cache;
mod errors;
mod geocoding;
mod location;
mod logging;
mod rate_limit;
mod root;
mod server;
mod weather;

pub use cache::CacheConfig;
pub use errors::ConfigError;
pub use geocoding::GeocodingConfig;
pub use location::DefaultLocation;
pub use logging::LoggingConfig;
pub use rate_limit::RateLimitConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
pub use weather::WeatherConfig;
