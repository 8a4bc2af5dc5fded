use daycast_domain::{DailyForecastEntry, ForecastResponse, Location};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Debug, Default)]
pub struct WeatherParams {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub city: Option<String>,
    #[serde(default = "default_timezone_option")]
    pub timezone_option: String,
}

fn default_timezone_option() -> String {
    "utc".to_string()
}

#[derive(Serialize, Debug)]
pub struct LocationDto {
    pub lat: f64,
    pub lon: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
}

#[derive(Serialize, Debug)]
pub struct DailyEntryDto {
    /// ISO calendar date in the target timezone.
    pub date: String,
    /// "HH:MM" in the target timezone.
    pub time: String,
    pub temperature_c: f64,
}

#[derive(Serialize, Debug)]
pub struct WeatherResponse {
    pub location: LocationDto,
    pub timezone: String,
    pub forecast: Vec<DailyEntryDto>,
}

impl From<Location> for LocationDto {
    fn from(location: Location) -> Self {
        Self {
            lat: location.lat,
            lon: location.lon,
            city: location.city,
        }
    }
}

impl From<DailyForecastEntry> for DailyEntryDto {
    fn from(entry: DailyForecastEntry) -> Self {
        Self {
            date: entry.date.format("%Y-%m-%d").to_string(),
            time: entry.time,
            temperature_c: entry.temperature_c,
        }
    }
}

impl From<ForecastResponse> for WeatherResponse {
    fn from(response: ForecastResponse) -> Self {
        Self {
            location: response.location.into(),
            timezone: response.timezone,
            forecast: response.forecast.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Serialize, Debug)]
pub struct InfoResponse {
    pub service: String,
    pub version: String,
    pub data_source: String,
    pub default_location: LocationDto,
    pub default_timezone: String,
}
