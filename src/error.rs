//! Error handling for the frutiger-monitor crate.

/// A specialized `Result` type for frutiger-monitor operations.
pub type Result<T> = std::result::Result<T, SystemError>;

/// The main error type for monitor operations.
///
/// The telemetry path itself never surfaces these to HTTP clients;
/// metric collection degrades to zeroed values instead. This type covers
/// startup and serving failures.
#[derive(Debug, thiserror::Error)]
pub enum SystemError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Web server error
    #[error("Web server error: {0}")]
    WebServer(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl SystemError {
    /// Create a new web server error
    pub fn web_server_error(msg: impl Into<String>) -> Self {
        Self::WebServer(msg.into())
    }

    /// Create a new configuration error
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
