//! Network operations
//!
//! HTTP client and the connectivity signal.

pub mod client;
pub mod connectivity;

// Re-export commonly used types
pub use client::HttpClient;
pub use connectivity::{AlwaysOnline, Connectivity, SharedConnectivity};
