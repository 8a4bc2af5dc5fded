use crate::location::Location;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One raw sample from the upstream timeseries. The upstream contract says
/// samples arrive time-ordered, but consumers must not rely on that.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub timestamp: DateTime<Utc>,
    pub temperature_c: f64,
}

/// The selected sample for one calendar date in the target timezone.
/// `time` is "HH:MM" in that timezone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyForecastEntry {
    pub date: NaiveDate,
    pub time: String,
    pub temperature_c: f64,
}

/// The unit cached and returned to callers. `forecast` is ordered by
/// ascending date and never holds two entries for the same date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResponse {
    pub location: Location,
    pub timezone: String,
    pub forecast: Vec<DailyForecastEntry>,
}
