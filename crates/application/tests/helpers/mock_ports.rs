#![allow(dead_code)]

use async_trait::async_trait;
use daycast_application::ports::{
    ForecastFetcher, GeocodedPlace, Geocoder, RateLimiter, TimezoneLookup, WeatherProvider,
};
use daycast_domain::{
    DailyForecastEntry, DomainError, ForecastPoint, ForecastQuery, ForecastResponse, Location,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub struct MockGeocoder {
    result: Result<GeocodedPlace, DomainError>,
    reverse_result: Result<Option<String>, DomainError>,
    calls: AtomicUsize,
    reverse_calls: AtomicUsize,
}

impl MockGeocoder {
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
impl Geocoder for MockGeocoder {
    async fn geocode(&self, _city: &str) -> Result<GeocodedPlace, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }

    async fn reverse(&self, _lat: f64, _lon: f64) -> Result<Option<String>, DomainError> {
        self.reverse_calls.fetch_add(1, Ordering::SeqCst);
        self.reverse_result.clone()
    }
}

pub struct MockFetcher {
    response: Result<ForecastResponse, DomainError>,
    calls: AtomicUsize,
    last_query: Mutex<Option<ForecastQuery>>,
}

impl MockFetcher {
    pub fn returning(response: ForecastResponse) -> Self {
        Self {
            response: Ok(response),
            calls: AtomicUsize::new(0),
            last_query: Mutex::new(None),
        }
    }

    pub fn failing(error: DomainError) -> Self {
        Self {
            response: Err(error),
            calls: AtomicUsize::new(0),
            last_query: Mutex::new(None),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_query(&self) -> Option<ForecastQuery> {
        self.last_query.lock().unwrap().clone()
    }
}

#[async_trait]
impl ForecastFetcher for MockFetcher {
    async fn fetch(&self, query: &ForecastQuery) -> Result<ForecastResponse, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_query.lock().unwrap() = Some(query.clone());
        self.response.clone()
    }
}

pub struct FixedTimezoneLookup(pub Option<String>);

impl TimezoneLookup for FixedTimezoneLookup {
    fn timezone_at(&self, _lat: f64, _lon: f64) -> Option<String> {
        self.0.clone()
    }
}

pub struct MockWeatherProvider {
    result: Result<Vec<ForecastPoint>, DomainError>,
    calls: AtomicUsize,
}

impl MockWeatherProvider {
    pub fn returning(points: Vec<ForecastPoint>) -> Self {
        Self {
            result: Ok(points),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(error: DomainError) -> Self {
        Self {
            result: Err(error),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WeatherProvider for MockWeatherProvider {
    async fn fetch_timeseries(
        &self,
        _lat: f64,
        _lon: f64,
    ) -> Result<Vec<ForecastPoint>, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }
}

pub struct MockRateLimiter {
    reject_with: Option<u64>,
    calls: AtomicUsize,
}

impl MockRateLimiter {
    pub fn allowing() -> Self {
        Self {
            reject_with: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn rejecting(retry_after_secs: u64) -> Self {
        Self {
            reject_with: Some(retry_after_secs),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RateLimiter for MockRateLimiter {
    async fn admit(&self) -> Result<(), DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.reject_with {
            None => Ok(()),
            Some(retry_after_secs) => Err(DomainError::RateLimited { retry_after_secs }),
        }
    }
}

pub fn sample_response(lat: f64, lon: f64) -> ForecastResponse {
    ForecastResponse {
        location: Location::new(lat, lon).unwrap(),
        timezone: "UTC".to_string(),
        forecast: vec![DailyForecastEntry {
            date: chrono::NaiveDate::from_ymd_opt(2025, 12, 3).unwrap(),
            time: "14:00".to_string(),
            temperature_c: 9.2,
        }],
    }
}

pub fn arc<T>(value: T) -> Arc<T> {
    Arc::new(value)
}
