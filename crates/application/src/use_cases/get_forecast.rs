use crate::ports::{ForecastFetcher, Geocoder, TimezoneLookup};
use daycast_domain::config::DefaultLocation;
use daycast_domain::{
    DomainError, ForecastQuery, ForecastRequest, ForecastResponse, Location, TimezoneOption,
};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

enum LocationInput {
    City(String),
    Coordinates { lat: f64, lon: f64 },
    Default,
}

/// Per-request orchestration:
/// `Validate -> ResolveLocation -> fetch (cache / rate limit / upstream)`.
pub struct GetForecastUseCase {
    geocoder: Arc<dyn Geocoder>,
    fetcher: Arc<dyn ForecastFetcher>,
    tz_lookup: Arc<dyn TimezoneLookup>,
    defaults: DefaultLocation,
}

impl GetForecastUseCase {
    pub fn new(
        geocoder: Arc<dyn Geocoder>,
        fetcher: Arc<dyn ForecastFetcher>,
        tz_lookup: Arc<dyn TimezoneLookup>,
        defaults: DefaultLocation,
    ) -> Self {
        Self {
            geocoder,
            fetcher,
            tz_lookup,
            defaults,
        }
    }

    pub async fn execute(&self, request: &ForecastRequest) -> Result<ForecastResponse, DomainError> {
        let start = Instant::now();

        // Location exclusivity is checked before any network access.
        let input = validate(request)?;

        let (location, is_default) = match input {
            LocationInput::City(city) => {
                let place = self.geocoder.geocode(&city).await?;
                (Location::new(place.lat, place.lon)?.with_city(city), false)
            }
            LocationInput::Coordinates { lat, lon } => {
                let location = Location::new(lat, lon)?;
                let city = self.reverse_city_label(&location).await;
                (location.with_city(city), false)
            }
            LocationInput::Default => {
                debug!(city = %self.defaults.city, "Using default location");
                (
                    Location::new(self.defaults.lat, self.defaults.lon)?
                        .with_city(self.defaults.city.clone()),
                    true,
                )
            }
        };

        let timezone = self.resolve_timezone(&location, request.timezone_option, is_default);

        let query = ForecastQuery {
            location,
            timezone,
            timezone_option: request.timezone_option,
        };

        debug!(
            lat = query.location.lat,
            lon = query.location.lon,
            timezone = %query.timezone,
            key = %query.cache_key(),
            "Resolved forecast query"
        );

        let response = self.fetcher.fetch(&query).await?;

        info!(
            lat = query.location.lat,
            lon = query.location.lon,
            days = response.forecast.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Forecast request served"
        );

        Ok(response)
    }

    /// Best-effort city label for a coordinate request. A lookup failure
    /// or an unlabelled point never fails the request.
    async fn reverse_city_label(&self, location: &Location) -> String {
        match self.geocoder.reverse(location.lat, location.lon).await {
            Ok(Some(city)) => city,
            Ok(None) => "Unknown Location".to_string(),
            Err(e) => {
                warn!(
                    lat = location.lat,
                    lon = location.lon,
                    error = %e,
                    "Reverse geocoding failed, labelling location as unknown"
                );
                "Unknown Location".to_string()
            }
        }
    }

    fn resolve_timezone(
        &self,
        location: &Location,
        option: TimezoneOption,
        is_default: bool,
    ) -> String {
        match option {
            TimezoneOption::Utc => "UTC".to_string(),
            TimezoneOption::Local => {
                if is_default {
                    return self.defaults.timezone.clone();
                }
                match self.tz_lookup.timezone_at(location.lat, location.lon) {
                    Some(tz) => tz,
                    None => {
                        warn!(
                            lat = location.lat,
                            lon = location.lon,
                            "No timezone found for coordinates, defaulting to UTC"
                        );
                        "UTC".to_string()
                    }
                }
            }
        }
    }
}

fn validate(request: &ForecastRequest) -> Result<LocationInput, DomainError> {
    let has_coordinates = request.lat.is_some() || request.lon.is_some();
    let city = request.city.as_deref().map(str::trim);

    if let Some(city) = city {
        if has_coordinates {
            return Err(DomainError::Validation(
                "Cannot provide both coordinates and city name. Use either lat/lon OR city."
                    .to_string(),
            ));
        }
        if city.is_empty() {
            return Err(DomainError::Validation("City name cannot be empty".to_string()));
        }
        return Ok(LocationInput::City(city.to_string()));
    }

    match (request.lat, request.lon) {
        (Some(lat), Some(lon)) => Ok(LocationInput::Coordinates { lat, lon }),
        (None, None) => Ok(LocationInput::Default),
        _ => Err(DomainError::Validation(
            "Both latitude and longitude must be provided when using coordinates.".to_string(),
        )),
    }
}
