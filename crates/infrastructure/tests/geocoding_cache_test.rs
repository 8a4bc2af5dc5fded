mod helpers;

use async_trait::async_trait;
use daycast_application::ports::{GeocodedPlace, Geocoder};
use daycast_domain::DomainError;
use daycast_infrastructure::geocoding::CachedGeocoder;
use helpers::CountingGeocoder;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

const TTL: Duration = Duration::from_secs(60);

/// Geocoder with one fixed answer per city, counting lookups per city.
struct DirectoryGeocoder {
    places: HashMap<String, GeocodedPlace>,
    calls: Mutex<HashMap<String, usize>>,
}

impl DirectoryGeocoder {
    fn new(cities: &[(&str, f64, f64)]) -> Self {
        let places = cities
            .iter()
            .map(|(name, lat, lon)| {
                (
                    name.to_string(),
                    GeocodedPlace {
                        lat: *lat,
                        lon: *lon,
                        display_name: Some(name.to_string()),
                    },
                )
            })
            .collect();
        Self {
            places,
            calls: Mutex::new(HashMap::new()),
        }
    }

    fn calls_for(&self, city: &str) -> usize {
        *self.calls.lock().unwrap().get(city).unwrap_or(&0)
    }
}

#[async_trait]
impl Geocoder for DirectoryGeocoder {
    async fn geocode(&self, city: &str) -> Result<GeocodedPlace, DomainError> {
        *self.calls.lock().unwrap().entry(city.to_string()).or_insert(0) += 1;
        self.places
            .get(city)
            .cloned()
            .ok_or_else(|| DomainError::CityNotFound(city.to_string()))
    }

    async fn reverse(&self, _lat: f64, _lon: f64) -> Result<Option<String>, DomainError> {
        Ok(None)
    }
}

#[tokio::test]
async fn fresh_hit_skips_the_upstream() {
    let inner = Arc::new(CountingGeocoder::found(59.9139, 10.7522));
    let cached = CachedGeocoder::new(Arc::clone(&inner) as Arc<dyn Geocoder>, 10, TTL);

    let first = cached.geocode("Oslo").await.unwrap();
    let second = cached.geocode("Oslo").await.unwrap();

    assert_eq!(first, second);
    assert_eq!(inner.call_count(), 1);
}

#[tokio::test]
async fn key_normalization_collapses_case_and_whitespace() {
    let inner = Arc::new(CountingGeocoder::found(59.9139, 10.7522));
    let cached = CachedGeocoder::new(Arc::clone(&inner) as Arc<dyn Geocoder>, 10, TTL);

    cached.geocode("Oslo").await.unwrap();
    cached.geocode("  oslo ").await.unwrap();
    cached.geocode("OSLO").await.unwrap();

    assert_eq!(inner.call_count(), 1);
}

#[tokio::test]
async fn capacity_evicts_the_least_recently_used_entry() {
    let inner = Arc::new(DirectoryGeocoder::new(&[
        ("oslo", 59.9139, 10.7522),
        ("bergen", 60.3913, 5.3221),
        ("tromso", 69.6492, 18.9553),
    ]));
    let cached = CachedGeocoder::new(Arc::clone(&inner) as Arc<dyn Geocoder>, 2, TTL);

    cached.geocode("oslo").await.unwrap();
    cached.geocode("bergen").await.unwrap();
    // Touch oslo so bergen becomes the LRU entry.
    cached.geocode("oslo").await.unwrap();
    cached.geocode("tromso").await.unwrap();

    cached.geocode("oslo").await.unwrap();
    cached.geocode("bergen").await.unwrap();

    assert_eq!(inner.calls_for("oslo"), 1, "oslo survived the eviction");
    assert_eq!(inner.calls_for("bergen"), 2, "bergen was evicted");
    assert_eq!(inner.calls_for("tromso"), 1);
}

#[tokio::test]
async fn reverse_hits_are_served_from_cache() {
    let inner = Arc::new(
        CountingGeocoder::found(0.0, 0.0).with_reverse(Ok(Some("Oslo".to_string()))),
    );
    let cached = CachedGeocoder::new(Arc::clone(&inner) as Arc<dyn Geocoder>, 10, TTL);

    let first = cached.reverse(59.9127, 10.7461).await.unwrap();
    let second = cached.reverse(59.9127, 10.7461).await.unwrap();

    assert_eq!(first.as_deref(), Some("Oslo"));
    assert_eq!(first, second);
    assert_eq!(inner.reverse_call_count(), 1);
}

#[tokio::test]
async fn unlabelled_reverse_results_are_not_cached() {
    let inner = Arc::new(CountingGeocoder::found(0.0, 0.0));
    let cached = CachedGeocoder::new(Arc::clone(&inner) as Arc<dyn Geocoder>, 10, TTL);

    assert_eq!(cached.reverse(0.0, -30.0).await.unwrap(), None);
    assert_eq!(cached.reverse(0.0, -30.0).await.unwrap(), None);
    assert_eq!(inner.reverse_call_count(), 2);
}

#[tokio::test]
async fn expired_entry_is_refetched() {
    let inner = Arc::new(CountingGeocoder::found(59.9139, 10.7522));
    let cached = CachedGeocoder::new(
        Arc::clone(&inner) as Arc<dyn Geocoder>,
        10,
        Duration::from_millis(40),
    );

    cached.geocode("Oslo").await.unwrap();
    tokio::time::sleep(Duration::from_millis(60)).await;
    cached.geocode("Oslo").await.unwrap();

    assert_eq!(inner.call_count(), 2);
}

#[tokio::test]
async fn not_found_is_never_cached() {
    let inner = Arc::new(CountingGeocoder::failing(DomainError::CityNotFound(
        "atlantis".to_string(),
    )));
    let cached = CachedGeocoder::new(Arc::clone(&inner) as Arc<dyn Geocoder>, 10, TTL);

    assert!(matches!(
        cached.geocode("atlantis").await,
        Err(DomainError::CityNotFound(_))
    ));
    assert!(matches!(
        cached.geocode("atlantis").await,
        Err(DomainError::CityNotFound(_))
    ));
    assert_eq!(inner.call_count(), 2);
}

#[tokio::test]
async fn upstream_outage_is_never_cached() {
    let inner = Arc::new(CountingGeocoder::failing(DomainError::UpstreamUnavailable(
        "timeout".to_string(),
    )));
    let cached = CachedGeocoder::new(Arc::clone(&inner) as Arc<dyn Geocoder>, 10, TTL);

    assert!(cached.geocode("Oslo").await.is_err());
    assert!(cached.geocode("Oslo").await.is_err());
    assert_eq!(inner.call_count(), 2);
}

#[tokio::test]
async fn zero_capacity_is_clamped_rather_than_panicking() {
    let inner = Arc::new(CountingGeocoder::found(59.9139, 10.7522));
    let cached = CachedGeocoder::new(Arc::clone(&inner) as Arc<dyn Geocoder>, 0, TTL);

    assert!(cached.geocode("Oslo").await.is_ok());
    assert!(cached.geocode("Oslo").await.is_ok());
    // A single-slot cache still serves the repeat from memory.
    assert_eq!(inner.call_count(), 1);
}

#[tokio::test]
async fn concurrent_lookups_share_one_cache() {
    let inner = Arc::new(CountingGeocoder::found(59.9139, 10.7522));
    let cached = Arc::new(CachedGeocoder::new(
        Arc::clone(&inner) as Arc<dyn Geocoder>,
        10,
        TTL,
    ));

    cached.geocode("Oslo").await.unwrap();

    let tasks: Vec<_> = (0..16)
        .map(|_| {
            let cached = Arc::clone(&cached);
            tokio::spawn(async move { cached.geocode("Oslo").await })
        })
        .collect();
    for result in futures::future::join_all(tasks).await {
        assert!(result.unwrap().is_ok());
    }

    assert_eq!(inner.call_count(), 1);
}
