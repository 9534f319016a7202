//! Top-process selection rules.
//!
//! Kept as pure functions over raw samples so the filtering, clamping and
//! backfill behavior is testable without a live process table.

use crate::metrics::data::{round1, ProcessEntry};
use crate::TOP_PROCESS_COUNT;
use std::cmp::Ordering;

const NAME_MAX_LEN: usize = 30;

/// A raw per-process reading before normalization.
#[derive(Debug, Clone)]
pub struct ProcessSample {
    pub name: String,
    /// CPU percentage as reported, possibly > 100 on multi-core hosts
    pub cpu: f64,
    /// RAM percentage of total memory
    pub ram: f64,
}

/// Build the ≤12-row process table from raw samples.
///
/// Idle pseudo-processes are dropped. CPU readings above 100% are divided
/// by the logical core count (multi-core attribution artifact), then both
/// percentages are clamped to [0, 100]. Rows with CPU > 0.1% or
/// RAM > 0.5% qualify and are ranked by CPU; if fewer than 12 qualify,
/// the remainder is appended ranked by RAM. An empty table collapses to a
/// single "No processes" sentinel row.
pub fn build_process_list(samples: Vec<ProcessSample>, logical_cores: usize) -> Vec<ProcessEntry> {
    let mut qualified = Vec::new();
    let mut remainder = Vec::new();

    for sample in samples {
        let lowered = sample.name.to_lowercase();
        if lowered == "system idle process" || lowered == "idle" {
            continue;
        }

        let mut cpu = sample.cpu;
        if cpu > 100.0 && logical_cores > 0 {
            cpu /= logical_cores as f64;
        }
        let cpu = cpu.clamp(0.0, 100.0);
        let ram = sample.ram.clamp(0.0, 100.0);

        let entry = ProcessEntry {
            name: truncate_name(&sample.name),
            cpu: round1(cpu),
            ram: round1(ram),
            gpu: 0.0,
        };

        if cpu > 0.1 || ram > 0.5 {
            qualified.push(entry);
        } else {
            remainder.push(entry);
        }
    }

    qualified.sort_by(|a, b| b.cpu.partial_cmp(&a.cpu).unwrap_or(Ordering::Equal));
    qualified.truncate(TOP_PROCESS_COUNT);

    if qualified.len() < TOP_PROCESS_COUNT {
        remainder.sort_by(|a, b| b.ram.partial_cmp(&a.ram).unwrap_or(Ordering::Equal));
        let missing = TOP_PROCESS_COUNT - qualified.len();
        qualified.extend(remainder.into_iter().take(missing));
    }

    if qualified.is_empty() {
        qualified.push(ProcessEntry {
            name: "No processes".to_string(),
            cpu: 0.0,
            ram: 0.0,
            gpu: 0.0,
        });
    }

    qualified
}

fn truncate_name(name: &str) -> String {
    name.chars().take(NAME_MAX_LEN).collect()
}
