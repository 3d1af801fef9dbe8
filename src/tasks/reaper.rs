//! Reaper Task
//!
//! Background sweep that removes stale cache entries even when nobody looks
//! them up.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{oneshot, Mutex};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::cache::CacheStore;

/// Shortest period the reaper will tick at. A zero TTL is clamped to this.
const MIN_REAP_PERIOD: Duration = Duration::from_millis(1);

/// Spawns a task that sweeps `store` every `period` until `shutdown` fires.
///
/// The first sweep happens one full period after spawning. Each sweep takes
/// the store's lock only for the in-memory pass. The task also exits when the
/// sender half of `shutdown` is dropped without sending.
///
/// A period too long to schedule on the clock (such as `Duration::MAX`) means
/// no entry can go stale within the process lifetime, so the task only waits
/// for `shutdown`.
///
/// # Arguments
/// * `store` - Mapping shared with the owning cache
/// * `period` - Interval between sweeps, normally equal to the TTL
/// * `shutdown` - Stop signal held by the owning cache
///
/// # Panics
/// Panics if called outside a tokio runtime.
///
/// # Example
/// ```ignore
/// let store = Arc::new(Mutex::new(CacheStore::new(ttl)));
/// let (stop_tx, stop_rx) = oneshot::channel();
/// let handle = spawn_reaper_task(store.clone(), ttl, stop_rx);
/// // Later:
/// let _ = stop_tx.send(());
/// handle.await?;
/// ```
pub fn spawn_reaper_task(
    store: Arc<Mutex<CacheStore>>,
    period: Duration,
    mut shutdown: oneshot::Receiver<()>,
) -> JoinHandle<()> {
    let period = period.max(MIN_REAP_PERIOD);

    tokio::spawn(async move {
        let Some(first_tick) = Instant::now().checked_add(period) else {
            info!(?period, "reaper period exceeds the clock range, sweeps disabled");
            let _ = shutdown.await;
            info!("cache reaper stopped");
            return;
        };

        info!(?period, "starting cache reaper");

        let mut ticker = interval_at(first_tick, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = &mut shutdown => break,
                _ = ticker.tick() => {
                    let removed = store.lock().await.cleanup_expired();

                    if removed > 0 {
                        info!(removed, "reaper swept expired entries");
                    } else {
                        debug!("reaper found no expired entries");
                    }
                }
            }
        }

        info!("cache reaper stopped");
    })
}
