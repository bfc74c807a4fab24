//! Portaldex
//!
//! Browsing support for a public character catalog: a paginated catalog
//! client with a de-duplicating page cache, locally persisted favorites,
//! and a light/dark theme preference.

pub mod catalog;
pub mod config;
pub mod data;
pub mod error;
pub mod network;
pub mod telemetry;
