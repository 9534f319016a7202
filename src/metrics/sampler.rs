//! Background CPU-sampler warm loop.

use crate::metrics::collector::MetricsCollector;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::debug;

/// Spawn the warm loop: every `interval`, refresh the shared collector's
/// CPU and process samplers so request-time reads return non-stale
/// percentages without blocking on a sample window.
///
/// Only this task and the request handlers touch the collector, through
/// the same mutex; the loop holds the lock only for the refresh itself.
pub fn spawn_sampler(
    collector: Arc<Mutex<MetricsCollector>>,
    interval: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        debug!("background CPU sampler started ({:?} cycle)", interval);
        let mut ticker = tokio::time::interval(interval);
        loop {
            ticker.tick().await;
            collector.lock().await.warm();
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libre::{SensorCache, TempResolver};

    #[tokio::test]
    async fn test_sampler_keeps_collector_usable() {
        let resolver = Arc::new(TempResolver::new(SensorCache::new(
            "http://127.0.0.1:9/data.json",
        )));
        let collector = Arc::new(Mutex::new(MetricsCollector::new(resolver)));

        let handle = spawn_sampler(collector.clone(), Duration::from_millis(10));
        tokio::time::sleep(Duration::from_millis(30)).await;

        // The lock must still be obtainable between ticks.
        let guard = tokio::time::timeout(Duration::from_secs(1), collector.lock()).await;
        assert!(guard.is_ok());

        handle.abort();
    }
}
