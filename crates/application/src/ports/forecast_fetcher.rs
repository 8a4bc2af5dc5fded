use async_trait::async_trait;
use daycast_domain::{DomainError, ForecastQuery, ForecastResponse};

/// Produces the full per-day forecast for a resolved query.
///
/// The infrastructure layer decorates the plain upstream fetcher with a
/// caching/coalescing layer implementing this same trait, the way a cached
/// resolver wraps an upstream resolver.
#[async_trait]
pub trait ForecastFetcher: Send + Sync {
    async fn fetch(&self, query: &ForecastQuery) -> Result<ForecastResponse, DomainError>;
}
