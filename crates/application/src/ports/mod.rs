mod forecast_fetcher;
mod geocoder;
mod rate_limiter;
mod shared_store;
mod timezone_lookup;
mod weather_provider;

pub use forecast_fetcher::ForecastFetcher;
pub use geocoder::{GeocodedPlace, Geocoder};
pub use rate_limiter::RateLimiter;
pub use shared_store::SharedStore;
pub use timezone_lookup::TimezoneLookup;
pub use weather_provider::WeatherProvider;

// Re-export for convenience
pub use daycast_domain::ForecastQuery;
