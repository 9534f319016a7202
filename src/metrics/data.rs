//! Wire-model data structures for the dashboard API.
//!
//! Field names match what the dashboard client already consumes, so they
//! stay short and lowercase rather than following the usual `_percent`
//! style. All numeric values are rounded to one decimal.

use serde::{Deserialize, Serialize};

/// A complete metrics response, built fresh per request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub cpu: CpuMetrics,
    pub gpu: GpuMetrics,
    pub ram: RamMetrics,
    pub disk: DiskMetrics,
    pub network: NetworkIdentity,
    pub processes: Vec<ProcessEntry>,
}

/// CPU usage and temperature.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CpuMetrics {
    /// Usage percentage (0.0 to 100.0)
    pub usage: f64,
    /// Temperature in °C; 0.0 when unavailable
    pub temperature: f64,
}

/// GPU usage and temperature; both 0.0 when no query tool is present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GpuMetrics {
    pub usage: f64,
    pub temperature: f64,
}

/// RAM usage.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RamMetrics {
    /// Usage percentage (0.0 to 100.0)
    pub usage: f64,
    pub used_gb: f64,
    pub total_gb: f64,
}

/// Root/system volume usage and temperature.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiskMetrics {
    pub usage: f64,
    pub used_gb: f64,
    pub total_gb: f64,
    /// Temperature in °C; 0.0 when unavailable
    pub temperature: f64,
}

/// Host identity as seen from the local network.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NetworkIdentity {
    pub hostname: String,
    pub ip: String,
}

/// One row of the top-process table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProcessEntry {
    pub name: String,
    /// CPU percentage, normalized to a single core's scale
    pub cpu: f64,
    /// RAM percentage of total memory
    pub ram: f64,
    /// Per-process GPU usage is not tracked; always 0
    pub gpu: f64,
}

/// Round to one decimal place, matching the original wire format.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round1() {
        assert_eq!(round1(42.55), 42.6);
        assert_eq!(round1(42.54), 42.5);
        assert_eq!(round1(0.0), 0.0);
    }

    #[test]
    fn test_snapshot_wire_keys() {
        let snapshot = MetricsSnapshot::default();
        let json = serde_json::to_value(&snapshot).unwrap();

        assert!(json["cpu"]["usage"].is_number());
        assert!(json["cpu"]["temperature"].is_number());
        assert!(json["ram"]["used_gb"].is_number());
        assert!(json["disk"]["total_gb"].is_number());
        assert!(json["network"]["hostname"].is_string());
        assert!(json["processes"].is_array());
    }
}
