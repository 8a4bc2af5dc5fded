use async_trait::async_trait;
use dashmap::DashMap;
use daycast_application::ports::{ForecastFetcher, SharedStore};
use daycast_domain::{DomainError, ForecastQuery, ForecastResponse};
use rustc_hash::FxBuildHasher;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tracing::{debug, warn};

const REMOTE_POLL_INTERVAL: Duration = Duration::from_millis(25);

type InflightResult = Result<ForecastResponse, DomainError>;
type InflightSender = Arc<watch::Sender<Option<InflightResult>>>;
type InflightMap = Arc<DashMap<String, InflightSender, FxBuildHasher>>;

/// Removes the in-flight entry if the leader unwinds without broadcasting,
/// waking followers so they can retry instead of hanging.
struct InflightLeaderGuard {
    inflight: InflightMap,
    key: String,
}

impl Drop for InflightLeaderGuard {
    fn drop(&mut self) {
        if let Some((_, tx)) = self.inflight.remove(&self.key) {
            let _ = tx.send(None);
        }
    }
}

/// Caching/coalescing decorator around the upstream forecast fetcher.
///
/// Within one process, concurrent misses on a key elect a leader through
/// the in-flight map; followers wait on a watch channel and observe the
/// leader's exact result, success or failure. Across processes, the leader
/// additionally claims a set-if-absent marker in the shared store; a
/// process that loses the claim polls the store for the winner's value.
/// The marker carries a bounded TTL so a crashed leader cannot block a key
/// forever. Coalescing is an optimization: when the store is unavailable
/// the fetch proceeds uncoalesced rather than failing the request.
pub struct CachedForecastFetcher {
    inner: Arc<dyn ForecastFetcher>,
    store: Arc<dyn SharedStore>,
    ttl: Duration,
    claim_ttl: Duration,
    inflight: InflightMap,
}

impl CachedForecastFetcher {
    pub fn new(
        inner: Arc<dyn ForecastFetcher>,
        store: Arc<dyn SharedStore>,
        ttl: Duration,
        claim_ttl: Duration,
    ) -> Self {
        Self {
            inner,
            store,
            ttl,
            claim_ttl,
            inflight: Arc::new(DashMap::with_hasher(FxBuildHasher)),
        }
    }

    fn claim_key(key: &str) -> String {
        format!("{key}:inflight")
    }

    /// Cache lookup only, no upstream interaction. Store failures and
    /// undecodable payloads count as misses.
    pub async fn cached(&self, query: &ForecastQuery) -> Option<ForecastResponse> {
        let key = query.cache_key();
        match self.store.get(&key).await {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(response) => {
                    debug!(key = %key, "Cache HIT");
                    Some(response)
                }
                Err(e) => {
                    warn!(key = %key, error = %e, "Discarding undecodable cache entry");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                warn!(key = %key, error = %e, "Shared store unavailable on cache lookup");
                None
            }
        }
    }

    fn register_or_join_inflight(
        &self,
        key: &str,
    ) -> (bool, watch::Receiver<Option<InflightResult>>) {
        match self.inflight.entry(key.to_string()) {
            dashmap::Entry::Occupied(e) => {
                let rx = e.get().subscribe();
                drop(e);
                (false, rx)
            }
            dashmap::Entry::Vacant(e) => {
                let (tx, rx) = watch::channel(None::<InflightResult>);
                e.insert(Arc::new(tx));
                (true, rx)
            }
        }
    }

    fn broadcast(&self, key: &str, result: &InflightResult) {
        if let Some((_, tx)) = self.inflight.remove(key) {
            let _ = tx.send(Some(result.clone()));
        }
    }

    async fn store_response(&self, key: &str, response: &ForecastResponse) {
        match serde_json::to_string(response) {
            Ok(raw) => {
                if let Err(e) = self.store.set(key, &raw, self.ttl).await {
                    warn!(key = %key, error = %e, "Failed to write cache entry");
                }
            }
            Err(e) => warn!(key = %key, error = %e, "Failed to serialize cache entry"),
        }
    }

    async fn release_claim(&self, key: &str) {
        if let Err(e) = self.store.remove(&Self::claim_key(key)).await {
            debug!(key = %key, error = %e, "Failed to release in-flight claim");
        }
    }

    /// Run the inner fetch, publish the result to the cache and to every
    /// local waiter, and release the cross-process claim.
    async fn compute_and_publish(&self, query: &ForecastQuery, key: &str, claimed: bool) -> InflightResult {
        let result = self.inner.fetch(query).await;

        match &result {
            Ok(response) => {
                self.store_response(key, response).await;
                if claimed {
                    self.release_claim(key).await;
                }
            }
            Err(_) => {
                // Release immediately so the next caller can retry instead
                // of waiting out the claim TTL. Failures are never cached.
                if claimed {
                    self.release_claim(key).await;
                }
            }
        }

        self.broadcast(key, &result);
        result
    }

    async fn fetch_as_follower(
        &self,
        query: &ForecastQuery,
        mut rx: watch::Receiver<Option<InflightResult>>,
    ) -> InflightResult {
        if rx.changed().await.is_ok() {
            if let Some(result) = rx.borrow().clone() {
                return result;
            }
        }

        // Leader unwound without a result (e.g. cancelled). Re-check the
        // cache, then take our own turn.
        if let Some(cached) = self.cached(query).await {
            return Ok(cached);
        }
        self.fetch(query).await
    }

    /// Another process holds the claim: poll for its published value until
    /// the claim window lapses, then fetch uncoalesced.
    async fn await_remote_leader(&self, query: &ForecastQuery, key: &str) -> InflightResult {
        let deadline = tokio::time::Instant::now() + self.claim_ttl;

        while tokio::time::Instant::now() < deadline {
            tokio::time::sleep(REMOTE_POLL_INTERVAL).await;
            if let Some(cached) = self.cached(query).await {
                self.broadcast(key, &Ok(cached.clone()));
                return Ok(cached);
            }
            match self.store.get(&Self::claim_key(key)).await {
                Ok(Some(_)) => continue,
                // Claim released without a value: the remote compute failed.
                _ => break,
            }
        }

        debug!(key = %key, "Remote in-flight claim lapsed, fetching uncoalesced");
        self.compute_and_publish(query, key, false).await
    }

    async fn fetch_as_leader(&self, query: &ForecastQuery, key: String) -> InflightResult {
        debug!(key = %key, "Cache MISS");

        let guard = InflightLeaderGuard {
            inflight: Arc::clone(&self.inflight),
            key: key.clone(),
        };

        let result = match self
            .store
            .set_if_absent(&Self::claim_key(&key), "1", self.claim_ttl)
            .await
        {
            Ok(true) => self.compute_and_publish(query, &key, true).await,
            Ok(false) => self.await_remote_leader(query, &key).await,
            Err(e) => {
                warn!(key = %key, error = %e, "Shared store unavailable, fetching uncoalesced");
                self.compute_and_publish(query, &key, false).await
            }
        };

        drop(guard);
        result
    }
}

#[async_trait]
impl ForecastFetcher for CachedForecastFetcher {
    async fn fetch(&self, query: &ForecastQuery) -> Result<ForecastResponse, DomainError> {
        if let Some(cached) = self.cached(query).await {
            return Ok(cached);
        }

        let key = query.cache_key();
        let (is_leader, rx) = self.register_or_join_inflight(&key);

        if !is_leader {
            return self.fetch_as_follower(query, rx).await;
        }

        self.fetch_as_leader(query, key).await
    }
}
