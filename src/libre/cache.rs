//! Time-windowed cache around the LibreHardwareMonitor fetch.

use crate::libre::sensor::SensorNode;
use crate::{LIBRE_CACHE_WINDOW, PROBE_TIMEOUT};
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing::debug;

struct CacheEntry {
    doc: SensorNode,
    fetched_at: Instant,
}

/// Caching client for the remote hardware-monitor endpoint.
///
/// A successfully fetched sensor document stays authoritative for the
/// freshness window (2 s), bounding the remote request rate regardless of
/// how often the local API is polled. After a failure the previous
/// document keeps being served, however stale; for a dashboard, old
/// temperatures beat no temperatures.
///
/// The lock guards only the document/timestamp pair and is never held
/// across the network call. Two requests racing on an expired entry may
/// both fetch; both store equivalent results, so the duplicate is wasted
/// I/O, not a correctness problem.
pub struct SensorCache {
    url: String,
    client: reqwest::Client,
    window: Duration,
    state: Mutex<Option<CacheEntry>>,
}

impl SensorCache {
    /// Create a cache for the given endpoint URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::new(),
            window: LIBRE_CACHE_WINDOW,
            state: Mutex::new(None),
        }
    }

    /// The configured remote endpoint URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Return the current sensor document, fetching if the cache is stale.
    ///
    /// `None` only when no fetch has ever succeeded.
    pub async fn fetch(&self) -> Option<SensorNode> {
        if let Some(doc) = self.fresh() {
            return Some(doc);
        }

        match self.fetch_remote().await {
            Ok(doc) => {
                self.store(doc.clone());
                Some(doc)
            }
            Err(err) => {
                debug!("LibreHardwareMonitor fetch failed: {err}");
                // Keep the old entry untouched and serve it if present.
                self.stale()
            }
        }
    }

    async fn fetch_remote(&self) -> Result<SensorNode, Box<dyn std::error::Error + Send + Sync>> {
        let payload: serde_json::Value = self
            .client
            .get(&self.url)
            .timeout(PROBE_TIMEOUT)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        // The monitor wraps the tree under a "data" key; tolerate both.
        let tree = match payload.get("data").cloned() {
            Some(data) => data,
            None => payload,
        };

        Ok(serde_json::from_value(tree)?)
    }

    fn fresh(&self) -> Option<SensorNode> {
        let state = self.state.lock().ok()?;
        state
            .as_ref()
            .filter(|entry| entry.fetched_at.elapsed() < self.window)
            .map(|entry| entry.doc.clone())
    }

    fn stale(&self) -> Option<SensorNode> {
        let state = self.state.lock().ok()?;
        state.as_ref().map(|entry| entry.doc.clone())
    }

    fn store(&self, doc: SensorNode) {
        if let Ok(mut state) = self.state.lock() {
            *state = Some(CacheEntry {
                doc,
                fetched_at: Instant::now(),
            });
        }
    }
}
