//! Web server and API endpoints for the dashboard client.

pub mod config;
pub mod handlers;
pub mod router;

// Re-export commonly used items
pub use config::WebConfig;
pub use handlers::AppState;
pub use router::create_app;

use crate::error::{Result, SystemError};
use crate::libre::TempResolver;
use crate::metrics::{spawn_sampler, MetricsCollector};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::info;

/// Start the web server and the background CPU sampler.
pub async fn start_web_server(
    config: WebConfig,
    collector: MetricsCollector,
    resolver: Arc<TempResolver>,
) -> Result<()> {
    let addr = config
        .bind_address()
        .parse::<SocketAddr>()
        .map_err(|e| SystemError::config_error(format!("Invalid bind address: {}", e)))?;

    let collector = Arc::new(Mutex::new(collector));
    let state = AppState {
        collector: collector.clone(),
        resolver,
        port: config.port,
    };

    let app = create_app(&config, state);

    info!("Starting frutiger-monitor web server on http://{}", addr);
    info!("Metrics endpoint: http://{}/api/metrics", addr);
    info!("Debug endpoint: http://{}/api/libre-debug", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| SystemError::web_server_error(format!("Failed to bind to address: {}", e)))?;

    // Keep the CPU usage samplers warm while requests are served.
    let _sampler_task = spawn_sampler(
        collector,
        Duration::from_millis(config.sampler_interval_ms),
    );

    axum::serve(listener, app)
        .await
        .map_err(|e| SystemError::web_server_error(format!("Server error: {}", e)))?;

    Ok(())
}
