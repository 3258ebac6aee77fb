use std::time::Duration;

use moka::future::Cache;
use vmeta_types::ChainId;

/// Memoizing gate around an expensive asynchronous computation.
///
/// A fetcher owns one cache entry, keyed by its operation id and chain id.
/// [`CachedFetcher::fetch`] only probes: on a miss the caller runs the
/// computation itself and hands the assembled value to
/// [`CachedFetcher::store`]. A cache probe never fails the caller; the
/// worst outcome is recomputation.
///
/// Concurrent identical requests during a miss may each recompute and
/// redundantly store the same key. The values are identical, so no
/// single-flight de-duplication is done here.
pub struct CachedFetcher<T: Clone + Send + Sync + 'static> {
    cache: Cache<String, T>,
    key: String,
}

impl<T: Clone + Send + Sync + 'static> CachedFetcher<T> {
    pub fn new(operation: &str, chain: ChainId, ttl: Duration) -> Self {
        let cache = Cache::builder().max_capacity(1).time_to_live(ttl).build();
        Self {
            cache,
            key: format!("{operation}:{chain}"),
        }
    }

    /// Returns the cached value if present and not expired.
    pub async fn fetch(&self) -> Option<T> {
        let hit = self.cache.get(&self.key).await;
        if hit.is_some() {
            tracing::debug!(key = %self.key, "serving from cache");
        }
        hit
    }

    /// Stores a freshly computed value under this fetcher's key.
    pub async fn store(&self, value: T) {
        self.cache.insert(self.key.clone(), value).await;
    }

    /// Drops the cached value, forcing the next `fetch` to miss.
    pub async fn invalidate(&self) {
        self.cache.invalidate(&self.key).await;
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}
