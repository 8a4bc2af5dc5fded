use daycast_api::AppState;
use daycast_application::ports::{ForecastFetcher, Geocoder, SharedStore};
use daycast_application::use_cases::{GetForecastUseCase, UpstreamForecastFetcher};
use daycast_domain::{Config, DomainError};
use daycast_infrastructure::{
    CachedForecastFetcher, CachedGeocoder, FixedWindowLimiter, MemoryStore, MetNoClient,
    NominatimClient, TzfTimezoneLookup,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Wires the full dependency graph. The rate limiter sits inside the
/// caching fetcher, so a coalesced burst of misses spends one permit.
pub fn build_state(config: &Config) -> Result<AppState, DomainError> {
    let store: Arc<dyn SharedStore> = Arc::new(MemoryStore::new());

    let limiter = Arc::new(FixedWindowLimiter::new(
        Arc::clone(&store),
        config.rate_limit.clone(),
    ));

    let provider = Arc::new(MetNoClient::new(&config.weather)?);
    let upstream: Arc<dyn ForecastFetcher> = Arc::new(UpstreamForecastFetcher::new(
        provider,
        limiter,
        config.weather.target_hour,
        config.weather.tolerance_hours,
    ));
    let fetcher = Arc::new(CachedForecastFetcher::new(
        upstream,
        Arc::clone(&store),
        Duration::from_secs(config.cache.ttl_secs),
        Duration::from_secs(config.cache.claim_ttl_secs),
    ));

    let nominatim: Arc<dyn Geocoder> = Arc::new(NominatimClient::new(&config.geocoding)?);
    let geocoder = Arc::new(CachedGeocoder::new(
        nominatim,
        config.geocoding.cache_capacity,
        Duration::from_secs(config.geocoding.cache_ttl_secs),
    ));

    let tz_lookup = Arc::new(TzfTimezoneLookup::new());

    debug!("Dependency graph wired");

    let get_forecast = Arc::new(GetForecastUseCase::new(
        geocoder,
        fetcher,
        tz_lookup,
        config.default_location.clone(),
    ));

    Ok(AppState {
        get_forecast,
        default_location: config.default_location.clone(),
        data_source: config.weather.base_url.clone(),
    })
}
