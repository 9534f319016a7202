//! Metrics aggregation over sysinfo, the temperature resolver and the
//! GPU query tool.

use crate::libre::TempResolver;
use crate::metrics::data::*;
use crate::metrics::processes::{build_process_list, ProcessSample};
use crate::PROBE_TIMEOUT;
use std::net::UdpSocket;
use std::sync::Arc;
use std::time::Duration;
use sysinfo::{Disks, System};
use tokio::process::Command;

const GIB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Aggregates local usage statistics and resolved temperatures into one
/// dashboard snapshot. Shared behind a mutex between request handlers and
/// the background sampler; every read is live, only the remote sensor
/// document is cached (inside the resolver).
pub struct MetricsCollector {
    system: System,
    disks: Disks,
    resolver: Arc<TempResolver>,
}

impl MetricsCollector {
    /// Create a collector with a primed sysinfo state.
    pub fn new(resolver: Arc<TempResolver>) -> Self {
        let mut system = System::new_all();
        system.refresh_all();
        let disks = Disks::new_with_refreshed_list();

        Self {
            system,
            disks,
            resolver,
        }
    }

    /// Re-prime the CPU and process samplers.
    ///
    /// Called by the background sampler so that request-time usage reads
    /// have a sample window behind them.
    pub fn warm(&mut self) {
        self.system.refresh_all();
    }

    /// Collect a full metrics snapshot.
    pub async fn collect(&mut self) -> MetricsSnapshot {
        self.system.refresh_all();
        self.disks.refresh();

        MetricsSnapshot {
            cpu: self.collect_cpu().await,
            gpu: collect_gpu().await,
            ram: self.collect_ram(),
            disk: self.collect_disk().await,
            network: collect_network(),
            processes: self.collect_processes(),
        }
    }

    async fn collect_cpu(&mut self) -> CpuMetrics {
        let mut usage = self.average_cpu_usage();

        // Exactly 0.0 is ambiguous: idle host, or no sample window yet.
        // Force a short blocking re-sample to disambiguate.
        if usage == 0.0 {
            tokio::time::sleep(Duration::from_millis(100)).await;
            self.system.refresh_cpu_usage();
            usage = self.average_cpu_usage();
        }

        CpuMetrics {
            usage: round1(usage),
            temperature: round1(self.resolver.resolve_cpu_temp().await),
        }
    }

    fn average_cpu_usage(&self) -> f64 {
        let cpus = self.system.cpus();
        if cpus.is_empty() {
            return 0.0;
        }
        cpus.iter().map(|cpu| cpu.cpu_usage() as f64).sum::<f64>() / cpus.len() as f64
    }

    fn collect_ram(&self) -> RamMetrics {
        let total = self.system.total_memory();
        let used = self.system.used_memory();

        let usage = if total > 0 {
            used as f64 / total as f64 * 100.0
        } else {
            0.0
        };

        RamMetrics {
            usage: round1(usage),
            used_gb: round1(used as f64 / GIB),
            total_gb: round1(total as f64 / GIB),
        }
    }

    async fn collect_disk(&self) -> DiskMetrics {
        // The system volume: the root mount, or the largest disk when no
        // mount is literally "/" (e.g. Windows).
        let disk = self
            .disks
            .iter()
            .find(|d| d.mount_point() == std::path::Path::new("/"))
            .or_else(|| self.disks.iter().max_by_key(|d| d.total_space()));

        let (total, available) = match disk {
            Some(disk) => (disk.total_space(), disk.available_space()),
            None => (0, 0),
        };
        let used = total.saturating_sub(available);

        let usage = if total > 0 {
            used as f64 / total as f64 * 100.0
        } else {
            0.0
        };

        DiskMetrics {
            usage: round1(usage),
            used_gb: round1(used as f64 / GIB),
            total_gb: round1(total as f64 / GIB),
            temperature: round1(self.resolver.resolve_disk_temp().await),
        }
    }

    fn collect_processes(&self) -> Vec<ProcessEntry> {
        let total_memory = self.system.total_memory();

        let samples = self
            .system
            .processes()
            .values()
            .map(|process| {
                let ram = if total_memory > 0 {
                    process.memory() as f64 / total_memory as f64 * 100.0
                } else {
                    0.0
                };
                ProcessSample {
                    name: process.name().to_string_lossy().to_string(),
                    cpu: process.cpu_usage() as f64,
                    ram,
                }
            })
            .collect();

        build_process_list(samples, self.system.cpus().len())
    }
}

/// Best-effort GPU stats via nvidia-smi; 0/0 on any failure.
async fn collect_gpu() -> GpuMetrics {
    let output = tokio::time::timeout(
        PROBE_TIMEOUT,
        Command::new("nvidia-smi")
            .args([
                "--query-gpu=utilization.gpu,temperature.gpu",
                "--format=csv,noheader,nounits",
            ])
            .output(),
    )
    .await;

    let output = match output {
        Ok(Ok(output)) if output.status.success() => output,
        _ => return GpuMetrics::default(),
    };

    parse_gpu_query(&String::from_utf8_lossy(&output.stdout)).unwrap_or_default()
}

fn parse_gpu_query(stdout: &str) -> Option<GpuMetrics> {
    let line = stdout.lines().next()?;
    let (usage, temperature) = line.split_once(',')?;

    Some(GpuMetrics {
        usage: round1(usage.trim().parse().ok()?),
        temperature: round1(temperature.trim().parse().ok()?),
    })
}

/// Hostname plus the outward-facing local IP.
fn collect_network() -> NetworkIdentity {
    NetworkIdentity {
        hostname: System::host_name().unwrap_or_else(|| "Unknown".to_string()),
        ip: local_ip().unwrap_or_else(|| "0.0.0.0".to_string()),
    }
}

/// Determine the local IP the OS would route outward traffic through by
/// connecting a throwaway UDP socket toward a public address. Nothing is
/// sent; connect only binds the local endpoint via route selection.
fn local_ip() -> Option<String> {
    let socket = UdpSocket::bind("0.0.0.0:0").ok()?;
    socket.connect("8.8.8.8:80").ok()?;
    Some(socket.local_addr().ok()?.ip().to_string())
}
