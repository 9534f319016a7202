//! LibreHardwareMonitor integration.
//!
//! This module covers the remote half of temperature resolution: the wire
//! model of the monitor's sensor tree, a freshness-windowed fetch cache,
//! and the resolver that walks the remote/local fallback chain.

pub mod cache;
pub mod resolver;
pub mod sensor;

// Re-export commonly used items
pub use cache::SensorCache;
pub use resolver::TempResolver;
pub use sensor::{find_sensor, SensorNode};
