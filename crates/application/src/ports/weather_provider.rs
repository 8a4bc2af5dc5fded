use async_trait::async_trait;
use daycast_domain::{DomainError, ForecastPoint};

/// Upstream weather-timeseries collaborator.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Fetch the raw timeseries for the given coordinates. The returned
    /// sequence is usually time-ordered but must be treated as unsorted.
    async fn fetch_timeseries(&self, lat: f64, lon: f64)
        -> Result<Vec<ForecastPoint>, DomainError>;
}
