use async_trait::async_trait;
use dashmap::DashMap;
use daycast_application::ports::SharedStore;
use daycast_domain::DomainError;
use rustc_hash::FxBuildHasher;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Mutations between full expired-entry sweeps.
const SWEEP_INTERVAL: u64 = 64;

#[derive(Debug, Clone)]
struct Entry {
    value: String,
    expires_at: Instant,
}

impl Entry {
    fn expired(&self, now: Instant) -> bool {
        self.expires_at <= now
    }
}

/// In-memory SharedStore for single-process deployments.
///
/// Entries expire lazily: an expired entry behaves as absent on every
/// operation and is replaced or dropped on next touch. Atomicity comes
/// from holding the DashMap shard entry lock for the whole
/// read-modify-write, so increments never race.
///
/// Lazy expiry alone is not enough: rate-limit counters are keyed by
/// window start and never touched once their window passes, which would
/// leave one dead entry behind per window. Every `SWEEP_INTERVAL`th
/// mutation therefore runs a full expired-entry sweep.
pub struct MemoryStore {
    entries: DashMap<String, Entry, FxBuildHasher>,
    mutations: AtomicU64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            entries: DashMap::with_hasher(FxBuildHasher),
            mutations: AtomicU64::new(0),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn maybe_sweep(&self, now: Instant) {
        if self.mutations.fetch_add(1, Ordering::Relaxed) % SWEEP_INTERVAL == SWEEP_INTERVAL - 1 {
            self.entries.retain(|_, entry| !entry.expired(now));
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SharedStore for MemoryStore {
    async fn increment(&self, key: &str, ttl: Duration) -> Result<i64, DomainError> {
        let now = Instant::now();
        self.maybe_sweep(now);
        match self.entries.entry(key.to_string()) {
            dashmap::Entry::Occupied(mut occupied) => {
                if occupied.get().expired(now) {
                    // First increment of a new window: fresh counter, fresh TTL.
                    occupied.insert(Entry {
                        value: "1".to_string(),
                        expires_at: now + ttl,
                    });
                    return Ok(1);
                }
                let current: i64 = occupied.get().value.parse().map_err(|_| {
                    DomainError::Store(format!("value at '{key}' is not a counter"))
                })?;
                let next = current + 1;
                // TTL set on creation only; later increments keep the expiry.
                occupied.get_mut().value = next.to_string();
                Ok(next)
            }
            dashmap::Entry::Vacant(vacant) => {
                vacant.insert(Entry {
                    value: "1".to_string(),
                    expires_at: now + ttl,
                });
                Ok(1)
            }
        }
    }

    async fn set_if_absent(
        &self,
        key: &str,
        value: &str,
        ttl: Duration,
    ) -> Result<bool, DomainError> {
        let now = Instant::now();
        self.maybe_sweep(now);
        match self.entries.entry(key.to_string()) {
            dashmap::Entry::Occupied(mut occupied) => {
                if occupied.get().expired(now) {
                    occupied.insert(Entry {
                        value: value.to_string(),
                        expires_at: now + ttl,
                    });
                    Ok(true)
                } else {
                    Ok(false)
                }
            }
            dashmap::Entry::Vacant(vacant) => {
                vacant.insert(Entry {
                    value: value.to_string(),
                    expires_at: now + ttl,
                });
                Ok(true)
            }
        }
    }

    async fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        let now = Instant::now();
        let value = match self.entries.get(key) {
            Some(entry) if !entry.expired(now) => Some(entry.value.clone()),
            Some(_) => None,
            None => None,
        };
        if value.is_none() {
            self.entries.remove_if(key, |_, entry| entry.expired(now));
        }
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), DomainError> {
        let now = Instant::now();
        self.maybe_sweep(now);
        self.entries.insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                expires_at: now + ttl,
            },
        );
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), DomainError> {
        self.entries.remove(key);
        Ok(())
    }
}
