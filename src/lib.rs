//! # Frutiger Monitor
//!
//! A local hardware telemetry server for a dashboard client. Merges two
//! temperature sources, a LibreHardwareMonitor HTTP endpoint and the
//! local OS sensor facility, with live usage statistics (CPU, RAM, disk,
//! processes, network identity) and serves the result as JSON.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use frutiger_monitor::{MetricsCollector, SensorCache, TempResolver, WebConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = WebConfig::default();
//!     let resolver = Arc::new(TempResolver::new(SensorCache::new(&config.libre_url)));
//!     let collector = MetricsCollector::new(resolver.clone());
//!     frutiger_monitor::start_web_server(config, collector, resolver).await?;
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod libre;
pub mod metrics;
pub mod web;

// Re-export public API
pub use error::{Result, SystemError};
pub use libre::{
    cache::SensorCache,
    resolver::TempResolver,
    sensor::{find_sensor, SensorNode},
};
pub use metrics::{collector::MetricsCollector, data::MetricsSnapshot};
pub use web::{start_web_server, WebConfig};

use std::time::Duration;

/// The default web server port
pub const DEFAULT_PORT: u16 = 5000;

/// Default LibreHardwareMonitor remote web server endpoint
pub const DEFAULT_LIBRE_URL: &str = "http://192.168.0.43:8085/data.json";

/// How long a fetched LibreHardwareMonitor document stays authoritative
pub const LIBRE_CACHE_WINDOW: Duration = Duration::from_secs(2);

/// Timeout for any single remote fetch or GPU tool invocation
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(2);

/// Interval of the background CPU-sampler warm loop
pub const SAMPLER_INTERVAL: Duration = Duration::from_secs(1);

/// Maximum number of processes reported per snapshot
pub const TOP_PROCESS_COUNT: usize = 12;
