//! Error types for portaldex
//!
//! Centralized error handling using thiserror. Nothing here is fatal to
//! the process; callers degrade locally on every variant.

use thiserror::Error;

/// Main error type for portaldex
#[derive(Error, Debug)]
pub enum AppError {
    /// Connectivity is known to be absent; the operation was refused
    /// before any request was issued.
    #[error("No connection: {0}")]
    Offline(String),

    #[error("{}", friendly_network_error(.0))]
    Network(#[from] reqwest::Error),

    #[error("Malformed payload: {0}")]
    Malformed(String),

    #[error("Storage read error: {0}")]
    StorageRead(String),

    #[error("Storage write error: {0}")]
    StorageWrite(String),
}

/// Result type alias for portaldex
pub type Result<T> = std::result::Result<T, AppError>;

fn friendly_network_error(e: &reqwest::Error) -> String {
    if e.is_builder() {
        if let Some(url) = e.url() {
            return format!("Invalid URL: {url}");
        }
        return "Invalid URL".to_string();
    }
    if e.is_connect() {
        if let Some(url) = e.url() {
            return format!("Could not connect to {}", url.host_str().unwrap_or("server"));
        }
        return "Could not connect to server".to_string();
    }
    if e.is_timeout() {
        return "Connection timed out".to_string();
    }
    if e.is_decode() {
        return "Invalid response from server".to_string();
    }
    format!("Network error: {e}")
}
