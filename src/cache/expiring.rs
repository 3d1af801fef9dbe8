//! Expiring Cache Module
//!
//! Public handle over a single mutex-guarded store plus the reaper task that
//! owns its background sweeps.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{oneshot, Mutex};
use tokio::task::{JoinError, JoinHandle};

use crate::cache::{CacheStats, CacheStore};
use crate::tasks::spawn_reaper_task;

// == Reaper Handle ==
/// Stop signal and join handle for a running reaper.
#[derive(Debug)]
struct ReaperHandle {
    stop: oneshot::Sender<()>,
    task: JoinHandle<()>,
}

// == Expiring Cache ==
/// Concurrency-safe byte cache whose entries expire after a fixed TTL.
///
/// Every operation, including each reaper sweep, goes through one lock over
/// the whole mapping. Share it between callers with `Arc<ExpiringCache>`.
/// Dropping the cache stops its reaper.
///
/// # Example
/// ```no_run
/// # async fn demo() {
/// use std::time::Duration;
/// use pokecache::ExpiringCache;
///
/// let cache = ExpiringCache::new(Duration::from_secs(5));
/// cache.store("https://pokeapi.co/api/v2/location-area", b"{}".to_vec()).await;
/// assert!(cache.retrieve("https://pokeapi.co/api/v2/location-area").await.is_some());
/// cache.shutdown().await.expect("reaper panicked");
/// # }
/// ```
#[derive(Debug)]
pub struct ExpiringCache {
    inner: Arc<Mutex<CacheStore>>,
    ttl: Duration,
    reaper: Option<ReaperHandle>,
}

impl ExpiringCache {
    // == Constructor ==
    /// Creates an empty cache and starts its reaper, which sweeps once per `ttl`.
    ///
    /// # Panics
    /// Panics if called outside a tokio runtime.
    pub fn new(ttl: Duration) -> Self {
        let inner = Arc::new(Mutex::new(CacheStore::new(ttl)));
        let (stop, stop_rx) = oneshot::channel();
        let task = spawn_reaper_task(inner.clone(), ttl, stop_rx);

        Self {
            inner,
            ttl,
            reaper: Some(ReaperHandle { stop, task }),
        }
    }

    /// Returns the time-to-live shared by every entry.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    // == Store ==
    /// Inserts or replaces the payload for `key`, resetting its age.
    pub async fn store(&self, key: impl Into<String>, value: impl Into<Vec<u8>>) {
        self.inner.lock().await.set(key.into(), value.into());
    }

    // == Retrieve ==
    /// Returns a copy of the payload for `key` if it is present and fresh.
    ///
    /// A stale entry is deleted as a side effect.
    pub async fn retrieve(&self, key: &str) -> Option<Vec<u8>> {
        self.inner.lock().await.get(key)
    }

    // == Read Through ==
    /// Returns the cached payload for `key`, calling `fetch` on a miss.
    ///
    /// The lock is released while `fetch` runs. A successful fetch is stored
    /// under `key`; a failed one leaves the cache untouched and its error is
    /// returned as is.
    pub async fn get_or_fetch<F, Fut, E>(&self, key: &str, fetch: F) -> Result<Vec<u8>, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<u8>, E>>,
    {
        if let Some(cached) = self.retrieve(key).await {
            return Ok(cached);
        }

        let fetched = fetch().await?;
        self.store(key, fetched.clone()).await;
        Ok(fetched)
    }

    // == Reap ==
    /// Runs one sweep now and returns how many entries it removed.
    pub async fn reap(&self) -> usize {
        self.inner.lock().await.cleanup_expired()
    }

    pub async fn stats(&self) -> CacheStats {
        self.inner.lock().await.stats()
    }

    /// Number of entries held, including stale ones not yet removed.
    pub async fn len(&self) -> usize {
        self.inner.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.lock().await.is_empty()
    }

    // == Shutdown ==
    /// Stops the reaper and waits for it to finish.
    ///
    /// Returns the join error if the reaper panicked earlier.
    pub async fn shutdown(mut self) -> Result<(), JoinError> {
        match self.reaper.take() {
            Some(reaper) => {
                let _ = reaper.stop.send(());
                reaper.task.await
            }
            None => Ok(()),
        }
    }
}

impl Drop for ExpiringCache {
    fn drop(&mut self) {
        // The reaper exits on its next poll; nothing waits for it here.
        if let Some(reaper) = self.reaper.take() {
            let _ = reaper.stop.send(());
        }
    }
}
