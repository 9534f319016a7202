//! CPU and disk temperature resolution.
//!
//! Resolution order: remote hardware-monitor sensors (primary path, then a
//! named fallback path for the CPU), then the local OS sensor components,
//! then 0. Every failure mode degrades to the next step; callers never see
//! an error, only a zero reading.

use crate::libre::cache::SensorCache;
use crate::libre::sensor::{find_sensor, SensorNode};
use sysinfo::Components;

/// AMD CPU die temperature (Core Tctl/Tdie)
pub const CPU_TEMP_SENSOR: &str = "/amdcpu/0/temperature/2";

/// Motherboard chipset CPU sensor, used when the die sensor is absent
pub const CPU_TEMP_FALLBACK_SENSOR: &str = "/lpc/nct6687d/0/temperature/0";

/// NVMe composite temperature
pub const DISK_TEMP_SENSOR: &str = "/nvme/0/temperature/0";

// Local sensor groups tried in order when the remote yields nothing.
const CPU_LOCAL_GROUPS: &[&str] = &["coretemp", "cpu_thermal", "k10temp"];
const DISK_LOCAL_GROUPS: &[&str] = &["nvme", "drivetemp"];

/// Snapshot of remote connectivity for the debug endpoint.
#[derive(Debug, Clone, Copy)]
pub struct LibreStatus {
    pub connected: bool,
    pub cpu_temp: f64,
    pub disk_temp: f64,
}

/// Resolves temperatures across the remote monitor and local sensors.
pub struct TempResolver {
    cache: SensorCache,
}

impl TempResolver {
    pub fn new(cache: SensorCache) -> Self {
        Self { cache }
    }

    /// The remote endpoint this resolver reads from.
    pub fn url(&self) -> &str {
        self.cache.url()
    }

    /// CPU temperature in °C; 0.0 when no source has a usable reading.
    pub async fn resolve_cpu_temp(&self) -> f64 {
        let remote = self
            .cache
            .fetch()
            .await
            .and_then(|doc| cpu_temp_from_tree(&doc));

        remote
            .or_else(|| local_temp(CPU_LOCAL_GROUPS, true))
            .unwrap_or(0.0)
            .max(0.0)
    }

    /// Disk temperature in °C; 0.0 when no source has a usable reading.
    pub async fn resolve_disk_temp(&self) -> f64 {
        let remote = self
            .cache
            .fetch()
            .await
            .and_then(|doc| disk_temp_from_tree(&doc));

        remote
            .or_else(|| local_temp(DISK_LOCAL_GROUPS, false))
            .unwrap_or(0.0)
            .max(0.0)
    }

    /// Probe the remote and report its connectivity plus the remote-only
    /// temperatures (no local fallback, so the debug view reflects what
    /// the monitor itself delivers).
    pub async fn status(&self) -> LibreStatus {
        match self.cache.fetch().await {
            Some(doc) => LibreStatus {
                connected: true,
                cpu_temp: cpu_temp_from_tree(&doc).unwrap_or(0.0),
                disk_temp: disk_temp_from_tree(&doc).unwrap_or(0.0),
            },
            None => LibreStatus {
                connected: false,
                cpu_temp: 0.0,
                disk_temp: 0.0,
            },
        }
    }
}

fn cpu_temp_from_tree(doc: &SensorNode) -> Option<f64> {
    find_sensor(doc, CPU_TEMP_SENSOR)
        .filter(|t| *t > 0.0)
        .or_else(|| find_sensor(doc, CPU_TEMP_FALLBACK_SENSOR).filter(|t| *t > 0.0))
}

fn disk_temp_from_tree(doc: &SensorNode) -> Option<f64> {
    find_sensor(doc, DISK_TEMP_SENSOR).filter(|t| *t > 0.0)
}

/// First reading from the preferred local sensor groups, matched against
/// component labels case-insensitively. With `any_group` set, any
/// component at all serves as a last resort (psutil-style behavior for
/// the CPU chain).
fn local_temp(groups: &[&str], any_group: bool) -> Option<f64> {
    let components = Components::new_with_refreshed_list();

    for group in groups {
        if let Some(component) = components
            .iter()
            .find(|c| c.label().to_lowercase().starts_with(group))
        {
            return Some(component.temperature() as f64);
        }
    }

    if any_group {
        return components.iter().next().map(|c| c.temperature() as f64);
    }

    None
}
