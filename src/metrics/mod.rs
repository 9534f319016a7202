//! System metrics collection and the dashboard wire model.

pub mod collector;
pub mod data;
pub mod processes;
pub mod sampler;

// Re-export commonly used items
pub use collector::MetricsCollector;
pub use data::MetricsSnapshot;
pub use sampler::spawn_sampler;
