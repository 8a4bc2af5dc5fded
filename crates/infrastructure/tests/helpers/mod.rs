#![allow(dead_code)]

use async_trait::async_trait;
use daycast_application::ports::{ForecastFetcher, GeocodedPlace, Geocoder, SharedStore};
use daycast_domain::{
    DailyForecastEntry, DomainError, ForecastQuery, ForecastResponse, Location, TimezoneOption,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Store that is permanently unreachable, for fail-open/fallback tests.
pub struct FailingStore;

#[async_trait]
impl SharedStore for FailingStore {
    async fn increment(&self, _key: &str, _ttl: Duration) -> Result<i64, DomainError> {
        Err(DomainError::Store("store offline".to_string()))
    }

    async fn set_if_absent(
        &self,
        _key: &str,
        _value: &str,
        _ttl: Duration,
    ) -> Result<bool, DomainError> {
        Err(DomainError::Store("store offline".to_string()))
    }

    async fn get(&self, _key: &str) -> Result<Option<String>, DomainError> {
        Err(DomainError::Store("store offline".to_string()))
    }

    async fn set(&self, _key: &str, _value: &str, _ttl: Duration) -> Result<(), DomainError> {
        Err(DomainError::Store("store offline".to_string()))
    }

    async fn remove(&self, _key: &str) -> Result<(), DomainError> {
        Err(DomainError::Store("store offline".to_string()))
    }
}

/// Upstream fetcher that sleeps before answering, so concurrent callers
/// overlap and coalescing is observable.
pub struct DelayedMockFetcher {
    delay: Duration,
    result: Result<ForecastResponse, DomainError>,
    calls: AtomicUsize,
}

impl DelayedMockFetcher {
    pub fn new(delay_ms: u64, response: ForecastResponse) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            result: Ok(response),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn new_failing(delay_ms: u64, error: DomainError) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            result: Err(error),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ForecastFetcher for DelayedMockFetcher {
    async fn fetch(&self, _query: &ForecastQuery) -> Result<ForecastResponse, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;
        self.result.clone()
    }
}

pub struct CountingGeocoder {
    result: Result<GeocodedPlace, DomainError>,
    reverse_result: Result<Option<String>, DomainError>,
    calls: AtomicUsize,
    reverse_calls: AtomicUsize,
}

impl CountingGeocoder {
    pub fn found(lat: f64, lon: f64) -> Self {
        Self {
            result: Ok(GeocodedPlace {
                lat,
                lon,
                display_name: None,
            }),
            reverse_result: Ok(None),
            calls: AtomicUsize::new(0),
            reverse_calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(error: DomainError) -> Self {
        Self {
            result: Err(error),
            reverse_result: Ok(None),
            calls: AtomicUsize::new(0),
            reverse_calls: AtomicUsize::new(0),
        }
    }

    pub fn with_reverse(mut self, result: Result<Option<String>, DomainError>) -> Self {
        self.reverse_result = result;
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn reverse_call_count(&self) -> usize {
        self.reverse_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Geocoder for CountingGeocoder {
    async fn geocode(&self, _city: &str) -> Result<GeocodedPlace, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }

    async fn reverse(&self, _lat: f64, _lon: f64) -> Result<Option<String>, DomainError> {
        self.reverse_calls.fetch_add(1, Ordering::SeqCst);
        self.reverse_result.clone()
    }
}

pub fn sample_query() -> ForecastQuery {
    ForecastQuery {
        location: Location::new(44.8125, 20.4612).unwrap(),
        timezone: "UTC".to_string(),
        timezone_option: TimezoneOption::Utc,
    }
}

pub fn sample_response() -> ForecastResponse {
    ForecastResponse {
        location: Location::new(44.8125, 20.4612).unwrap(),
        timezone: "UTC".to_string(),
        forecast: vec![DailyForecastEntry {
            date: chrono::NaiveDate::from_ymd_opt(2025, 12, 3).unwrap(),
            time: "14:30".to_string(),
            temperature_c: 9.2,
        }],
    }
}
