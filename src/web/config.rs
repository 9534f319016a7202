//! Web server configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the web server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebConfig {
    /// Host to bind the server to
    pub host: String,
    /// Port to bind the server to
    pub port: u16,
    /// Whether to enable CORS (the dashboard is served from elsewhere)
    pub enable_cors: bool,
    /// LibreHardwareMonitor endpoint URL
    pub libre_url: String,
    /// Background CPU-sampler cycle in milliseconds
    pub sampler_interval_ms: u64,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: crate::DEFAULT_PORT,
            enable_cors: true,
            libre_url: crate::DEFAULT_LIBRE_URL.to_string(),
            sampler_interval_ms: crate::SAMPLER_INTERVAL.as_millis() as u64,
        }
    }
}

impl WebConfig {
    /// Create a new web configuration with custom host and port.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Set the LibreHardwareMonitor endpoint URL.
    pub fn with_libre_url(mut self, url: impl Into<String>) -> Self {
        self.libre_url = url.into();
        self
    }

    /// Enable or disable CORS.
    pub fn with_cors(mut self, enable_cors: bool) -> Self {
        self.enable_cors = enable_cors;
        self
    }

    /// Set the background sampler cycle.
    pub fn with_sampler_interval_ms(mut self, interval_ms: u64) -> Self {
        self.sampler_interval_ms = interval_ms;
        self
    }

    /// Get the full bind address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = WebConfig::default();
        assert_eq!(config.port, crate::DEFAULT_PORT);
        assert_eq!(config.bind_address(), "0.0.0.0:5000");
        assert!(config.enable_cors);
    }

    #[test]
    fn test_builder() {
        let config = WebConfig::new("127.0.0.1", 8123)
            .with_libre_url("http://10.0.0.2:8085/data.json")
            .with_cors(false);
        assert_eq!(config.bind_address(), "127.0.0.1:8123");
        assert_eq!(config.libre_url, "http://10.0.0.2:8085/data.json");
        assert!(!config.enable_cors);
    }
}
