use crate::errors::DomainError;
use serde::{Deserialize, Serialize};

/// A geographic point, optionally labelled with a city name.
///
/// Coordinates are always rounded to 4 decimal places (~11 m) so that
/// physically equal points collapse to one cache key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lon: f64,
    pub city: Option<String>,
}

impl Location {
    /// Build a location from raw coordinates, validating ranges and
    /// rounding to 4 decimal places.
    pub fn new(lat: f64, lon: f64) -> Result<Self, DomainError> {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(DomainError::Validation(format!(
                "latitude {lat} out of range [-90, 90]"
            )));
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(DomainError::Validation(format!(
                "longitude {lon} out of range [-180, 180]"
            )));
        }
        Ok(Self {
            lat: round4(lat),
            lon: round4(lon),
            city: None,
        })
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }
}

pub fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
