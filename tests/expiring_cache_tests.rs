//! Integration Tests for the Expiring Cache
//!
//! Exercises the public library API the way a fetch loop would use it.

use std::sync::Arc;
use std::time::Duration;

use pokecache::ExpiringCache;
use tokio::time::sleep;

const TTL: Duration = Duration::from_millis(100);

#[tokio::test(start_paused = true)]
async fn test_fetch_loop_reuses_cached_body() {
    let cache = ExpiringCache::new(TTL);
    let url = "https://pokeapi.co/api/v2/location-area?offset=0&limit=20";
    let mut fetches = 0;

    for _ in 0..3 {
        let body = match cache.retrieve(url).await {
            Some(body) => body,
            None => {
                fetches += 1;
                let body = b"{\"results\":[]}".to_vec();
                cache.store(url, body.clone()).await;
                body
            }
        };
        assert_eq!(body, b"{\"results\":[]}");
    }
    assert_eq!(fetches, 1);

    sleep(TTL + Duration::from_millis(1)).await;
    assert_eq!(cache.retrieve(url).await, None);

    cache.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_restore_resets_age() {
    let cache = ExpiringCache::new(TTL);

    cache.store("k", "old").await;
    sleep(Duration::from_millis(90)).await;
    cache.store("k", "new").await;
    sleep(Duration::from_millis(90)).await;

    assert_eq!(cache.retrieve("k").await, Some(b"new".to_vec()));
}

#[tokio::test(start_paused = true)]
async fn test_unread_entries_are_swept_within_two_ttls() {
    let cache = ExpiringCache::new(TTL);

    for i in 0..10 {
        cache.store(format!("area-{i}"), vec![i as u8; 16]).await;
    }
    assert_eq!(cache.len().await, 10);

    sleep(TTL * 2 + Duration::from_millis(1)).await;

    let stats = cache.stats().await;
    assert_eq!(stats.total_entries, 0);
    assert_eq!(stats.reaped, 10);
    assert_eq!(stats.hits + stats.misses, 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_store_and_retrieve_with_reaper_running() {
    // Short TTL so sweeps interleave with the workers; the payloads are
    // written and read well within one TTL.
    let cache = Arc::new(ExpiringCache::new(Duration::from_millis(500)));

    let workers: Vec<_> = (0..32u32)
        .map(|i| {
            let cache = cache.clone();
            tokio::spawn(async move {
                let key = format!("https://pokeapi.co/api/v2/pokemon/{i}");
                let value = i.to_be_bytes().to_vec();
                cache.store(key.as_str(), value.clone()).await;
                for _ in 0..50 {
                    assert_eq!(cache.retrieve(&key).await, Some(value.clone()));
                    tokio::task::yield_now().await;
                }
            })
        })
        .collect();

    for worker in workers {
        worker.await.unwrap();
    }

    assert_eq!(cache.len().await, 32);
}
