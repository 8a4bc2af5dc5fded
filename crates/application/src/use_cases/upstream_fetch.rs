use crate::ports::{ForecastFetcher, RateLimiter, WeatherProvider};
use crate::services::aggregator;
use async_trait::async_trait;
use chrono_tz::Tz;
use daycast_domain::{DomainError, ForecastQuery, ForecastResponse};
use std::sync::Arc;
use tracing::{debug, info};

/// The one path that consumes a rate-limit permit and hits the real
/// upstream weather API. The caching layer wraps this fetcher, so a burst
/// of concurrent misses on one key runs it once and spends one permit
/// collectively.
pub struct UpstreamForecastFetcher {
    provider: Arc<dyn WeatherProvider>,
    limiter: Arc<dyn RateLimiter>,
    target_hour: u32,
    tolerance_hours: u32,
}

impl UpstreamForecastFetcher {
    pub fn new(
        provider: Arc<dyn WeatherProvider>,
        limiter: Arc<dyn RateLimiter>,
        target_hour: u32,
        tolerance_hours: u32,
    ) -> Self {
        Self {
            provider,
            limiter,
            target_hour,
            tolerance_hours,
        }
    }
}

#[async_trait]
impl ForecastFetcher for UpstreamForecastFetcher {
    async fn fetch(&self, query: &ForecastQuery) -> Result<ForecastResponse, DomainError> {
        // Permit first: a rejected request must never reach the upstream.
        self.limiter.admit().await?;

        let points = self
            .provider
            .fetch_timeseries(query.location.lat, query.location.lon)
            .await?;

        debug!(
            lat = query.location.lat,
            lon = query.location.lon,
            samples = points.len(),
            "Fetched upstream timeseries"
        );

        let tz: Tz = query
            .timezone
            .parse()
            .map_err(|_| DomainError::Internal(format!("invalid timezone '{}'", query.timezone)))?;

        let forecast = aggregator::aggregate(&points, tz, self.target_hour, self.tolerance_hours);

        if forecast.is_empty() {
            return Err(DomainError::NoForecastData);
        }

        info!(
            lat = query.location.lat,
            lon = query.location.lon,
            timezone = %query.timezone,
            days = forecast.len(),
            "Aggregated daily forecast"
        );

        Ok(ForecastResponse {
            location: query.location.clone(),
            timezone: query.timezone.clone(),
            forecast,
        })
    }
}
