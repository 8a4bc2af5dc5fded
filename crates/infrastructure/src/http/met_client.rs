use async_trait::async_trait;
use chrono::{DateTime, Utc};
use daycast_application::ports::WeatherProvider;
use daycast_domain::config::WeatherConfig;
use daycast_domain::{DomainError, ForecastPoint};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

/// Client for a met.no-style locationforecast endpoint. The upstream
/// usage policy requires an identifying User-Agent on every request.
pub struct MetNoClient {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct ForecastDocument {
    properties: ForecastProperties,
}

#[derive(Debug, Deserialize)]
struct ForecastProperties {
    #[serde(default)]
    timeseries: Vec<TimeseriesEntry>,
}

#[derive(Debug, Deserialize)]
struct TimeseriesEntry {
    time: String,
    data: TimeseriesData,
}

#[derive(Debug, Deserialize)]
struct TimeseriesData {
    instant: InstantBlock,
}

#[derive(Debug, Deserialize)]
struct InstantBlock {
    details: InstantDetails,
}

#[derive(Debug, Deserialize)]
struct InstantDetails {
    air_temperature: Option<f64>,
}

impl MetNoClient {
    pub fn new(config: &WeatherConfig) -> Result<Self, DomainError> {
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
impl WeatherProvider for MetNoClient {
    async fn fetch_timeseries(
        &self,
        lat: f64,
        lon: f64,
    ) -> Result<Vec<ForecastPoint>, DomainError> {
        debug!(lat, lon, "Fetching forecast timeseries");

        let response = self
            .client
            .get(&self.base_url)
            .query(&[("lat", format!("{lat:.4}")), ("lon", format!("{lon:.4}"))])
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(DomainError::UpstreamUnavailable(format!(
                "weather API returned {status}"
            )));
        }

        let document: ForecastDocument = response
            .json()
            .await
            .map_err(|e| DomainError::UpstreamUnavailable(format!("invalid forecast payload: {e}")))?;

        let mut points = Vec::with_capacity(document.properties.timeseries.len());
        for entry in document.properties.timeseries {
            let timestamp: DateTime<Utc> = match entry.time.parse() {
                Ok(ts) => ts,
                Err(e) => {
                    warn!(time = %entry.time, error = %e, "Skipping entry with invalid timestamp");
                    continue;
                }
            };
            let Some(temperature_c) = entry.data.instant.details.air_temperature else {
                warn!(time = %entry.time, "Skipping entry without air_temperature");
                continue;
            };
            points.push(ForecastPoint {
                timestamp,
                temperature_c,
            });
        }

        if points.is_empty() {
            return Err(DomainError::NoForecastData);
        }

        debug!(samples = points.len(), "Fetched forecast timeseries");
        Ok(points)
    }
}

fn transport_error(e: reqwest::Error) -> DomainError {
    if e.is_timeout() {
        DomainError::UpstreamUnavailable("weather API request timed out".to_string())
    } else {
        DomainError::UpstreamUnavailable(format!("weather API request failed: {e}"))
    }
}
