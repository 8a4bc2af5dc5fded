use async_trait::async_trait;
use daycast_domain::DomainError;

/// A geocoding match for a city name.
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodedPlace {
    pub lat: f64,
    pub lon: f64,
    pub display_name: Option<String>,
}

/// Upstream geocoding collaborator. `CityNotFound` (no match) and
/// `UpstreamUnavailable` (network/timeout/non-2xx) are distinct outcomes.
#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn geocode(&self, city: &str) -> Result<GeocodedPlace, DomainError>;

    /// City label for a coordinate pair. `Ok(None)` when the point
    /// resolves to no named place; callers treat the label as
    /// best-effort and never fail a request over it.
    async fn reverse(&self, lat: f64, lon: f64) -> Result<Option<String>, DomainError>;
}
