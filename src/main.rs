//! frutiger-monitor binary: hardware telemetry server for the dashboard.

use clap::Parser;
use frutiger_monitor::{
    MetricsCollector, SensorCache, TempResolver, WebConfig, DEFAULT_LIBRE_URL, DEFAULT_PORT,
};
use std::sync::Arc;
use tracing::{info, warn, Level};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "frutiger-monitor")]
#[command(about = "Frutiger Hardware Monitor - local telemetry server")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(
    long_about = "Serves live host telemetry (CPU/GPU/RAM/disk usage and temperature, \
                  top processes, network identity) over a local HTTP API, merging \
                  LibreHardwareMonitor sensors with OS statistics"
)]
struct Cli {
    /// Web server bind address
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Web server port
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// LibreHardwareMonitor data endpoint
    #[arg(long, default_value = DEFAULT_LIBRE_URL)]
    libre_url: String,

    /// Background CPU sampler cycle in milliseconds
    #[arg(short, long, default_value_t = 1000)]
    interval: u64,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    init_logging(&cli)?;
    print_banner(&cli);

    let config = WebConfig::new(&cli.host, cli.port)
        .with_libre_url(&cli.libre_url)
        .with_sampler_interval_ms(cli.interval);

    let resolver = Arc::new(TempResolver::new(SensorCache::new(&config.libre_url)));
    let collector = MetricsCollector::new(resolver.clone());
    info!("System collector initialized");

    probe_libre(&resolver).await;

    frutiger_monitor::start_web_server(config, collector, resolver).await?;

    Ok(())
}

fn init_logging(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let level = if cli.debug {
        Level::DEBUG
    } else if cli.verbose {
        Level::INFO
    } else {
        Level::WARN
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}

fn print_banner(cli: &Cli) {
    println!("Frutiger Hardware Monitor - Server");
    println!("  Version: {}", env!("CARGO_PKG_VERSION"));
    println!("  Server:  http://localhost:{}", cli.port);
    println!("  API:     http://localhost:{}/api/metrics", cli.port);
    println!("  LibreHW: {}", cli.libre_url);
    println!("  Debug:   http://localhost:{}/api/libre-debug", cli.port);
    println!();
}

/// One resolver round at boot so a misconfigured monitor URL shows up
/// immediately instead of as silent zero temperatures.
async fn probe_libre(resolver: &TempResolver) {
    let status = resolver.status().await;

    if status.connected {
        info!(
            "LibreHardwareMonitor connected (CPU {:.1}°C, disk {:.1}°C)",
            status.cpu_temp, status.disk_temp
        );
        if status.cpu_temp <= 0.0 || status.disk_temp <= 0.0 {
            warn!("LibreHardwareMonitor answered but some sensors read 0°C; check sensor paths");
        }
    } else {
        warn!(
            "Cannot reach LibreHardwareMonitor at {}; temperatures will fall back to local sensors or 0°C",
            resolver.url()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from(["frutiger-monitor", "--port", "9090"]).unwrap();
        assert_eq!(cli.port, 9090);
    }

    #[test]
    fn test_default_values() {
        let cli = Cli::try_parse_from(["frutiger-monitor"]).unwrap();
        assert_eq!(cli.port, DEFAULT_PORT);
        assert_eq!(cli.host, "0.0.0.0");
        assert_eq!(cli.libre_url, DEFAULT_LIBRE_URL);
        assert_eq!(cli.interval, 1000);
    }
}
