use async_trait::async_trait;
use daycast_application::ports::{GeocodedPlace, Geocoder};
use daycast_domain::DomainError;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use tracing::debug;

struct CacheEntry {
    place: GeocodedPlace,
    inserted_at: Instant,
}

/// Bounded LRU+TTL cache in front of the geocoding collaborator.
///
/// A fresh hit short-circuits the upstream call. Neither a miss at the
/// provider (`CityNotFound`) nor a provider outage is cached, so failed
/// lookups are retried on the next request. At capacity, inserting
/// displaces the least-recently-used entry. Forward and reverse lookups
/// share one cache under distinct key prefixes.
pub struct CachedGeocoder {
    inner: Arc<dyn Geocoder>,
    entries: Mutex<LruCache<String, CacheEntry>>,
    ttl: Duration,
}

impl CachedGeocoder {
    pub fn new(inner: Arc<dyn Geocoder>, capacity: usize, ttl: Duration) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            inner,
            entries: Mutex::new(LruCache::new(capacity)),
            ttl,
        }
    }

    fn cache_key(city: &str) -> String {
        city.trim().to_lowercase()
    }

    fn reverse_key(lat: f64, lon: f64) -> String {
        format!("reverse:{lat:.4}:{lon:.4}")
    }

    fn lookup(&self, key: &str) -> Option<GeocodedPlace> {
        let mut entries = match self.entries.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Some(entry) = entries.get(key) {
            if entry.inserted_at.elapsed() < self.ttl {
                return Some(entry.place.clone());
            }
            entries.pop(key);
        }
        None
    }

    fn insert(&self, key: String, place: GeocodedPlace) {
        let mut entries = match self.entries.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        entries.put(
            key,
            CacheEntry {
                place,
                inserted_at: Instant::now(),
            },
        );
    }
}

#[async_trait]
impl Geocoder for CachedGeocoder {
    async fn geocode(&self, city: &str) -> Result<GeocodedPlace, DomainError> {
        let key = Self::cache_key(city);

        if let Some(place) = self.lookup(&key) {
            debug!(city = %city, "Geocoding cache HIT");
            return Ok(place);
        }

        let place = self.inner.geocode(city).await?;
        self.insert(key, place.clone());
        Ok(place)
    }

    async fn reverse(&self, lat: f64, lon: f64) -> Result<Option<String>, DomainError> {
        let key = Self::reverse_key(lat, lon);

        if let Some(place) = self.lookup(&key) {
            debug!(lat, lon, "Reverse geocoding cache HIT");
            return Ok(place.display_name);
        }

        let city = self.inner.reverse(lat, lon).await?;
        // Unlabelled points are not cached, mirroring failed forward lookups.
        if let Some(city) = &city {
            self.insert(
                key,
                GeocodedPlace {
                    lat,
                    lon,
                    display_name: Some(city.clone()),
                },
            );
        }
        Ok(city)
    }
}
