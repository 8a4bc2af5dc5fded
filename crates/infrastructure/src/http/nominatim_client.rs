use async_trait::async_trait;
use daycast_application::ports::{GeocodedPlace, Geocoder};
use daycast_domain::config::GeocodingConfig;
use daycast_domain::DomainError;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// Client for a Nominatim-style geocoding endpoint.
pub struct NominatimClient {
    client: reqwest::Client,
    base_url: String,
}

// Nominatim serializes coordinates as strings.
#[derive(Debug, Deserialize)]
struct SearchResult {
    lat: String,
    lon: String,
    display_name: Option<String>,
}

// /reverse answers with a single object; an unresolvable point comes back
// as `{"error": ...}` with status 200, which deserializes to all-None here.
#[derive(Debug, Default, Deserialize)]
struct ReverseResult {
    #[serde(default)]
    address: Option<ReverseAddress>,
}

#[derive(Debug, Default, Deserialize)]
struct ReverseAddress {
    city: Option<String>,
    town: Option<String>,
    village: Option<String>,
    municipality: Option<String>,
    county: Option<String>,
}

impl ReverseAddress {
    fn city_label(self) -> Option<String> {
        self.city
            .or(self.town)
            .or(self.village)
            .or(self.municipality)
            .or(self.county)
    }
}

impl NominatimClient {
    pub fn new(config: &GeocodingConfig) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| DomainError::Internal(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }
}

#[async_trait]
impl Geocoder for NominatimClient {
    async fn geocode(&self, city: &str) -> Result<GeocodedPlace, DomainError> {
        debug!(city = %city, "Geocoding city");

        let url = format!("{}/search", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("q", city), ("format", "json"), ("limit", "1")])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    DomainError::UpstreamUnavailable("geocoding request timed out".to_string())
                } else {
                    DomainError::UpstreamUnavailable(format!("geocoding request failed: {e}"))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(DomainError::UpstreamUnavailable(format!(
                "geocoding API returned {status}"
            )));
        }

        let results: Vec<SearchResult> = response.json().await.map_err(|e| {
            DomainError::UpstreamUnavailable(format!("invalid geocoding payload: {e}"))
        })?;

        let Some(result) = results.into_iter().next() else {
            return Err(DomainError::CityNotFound(city.to_string()));
        };

        let lat: f64 = result.lat.parse().map_err(|_| {
            DomainError::UpstreamUnavailable("invalid latitude in geocoding payload".to_string())
        })?;
        let lon: f64 = result.lon.parse().map_err(|_| {
            DomainError::UpstreamUnavailable("invalid longitude in geocoding payload".to_string())
        })?;

        debug!(city = %city, lat, lon, "Geocoded city");

        Ok(GeocodedPlace {
            lat,
            lon,
            display_name: result.display_name,
        })
    }

    async fn reverse(&self, lat: f64, lon: f64) -> Result<Option<String>, DomainError> {
        debug!(lat, lon, "Reverse geocoding coordinates");

        let url = format!("{}/reverse", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("lat", format!("{lat:.4}")),
                ("lon", format!("{lon:.4}")),
                ("format", "json".to_string()),
            ])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    DomainError::UpstreamUnavailable(
                        "reverse geocoding request timed out".to_string(),
                    )
                } else {
                    DomainError::UpstreamUnavailable(format!(
                        "reverse geocoding request failed: {e}"
                    ))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(DomainError::UpstreamUnavailable(format!(
                "geocoding API returned {status}"
            )));
        }

        let result: ReverseResult = response.json().await.map_err(|e| {
            DomainError::UpstreamUnavailable(format!("invalid reverse geocoding payload: {e}"))
        })?;

        let city = result.address.and_then(ReverseAddress::city_label);
        debug!(lat, lon, city = ?city, "Reverse geocoded coordinates");
        Ok(city)
    }
}
