//! Remote character catalog
//!
//! Client for the public character REST API and the pagination controller
//! that accumulates its pages into a de-duplicated cache.

pub mod client;
pub mod pagination;
pub mod types;

// Re-exports
pub use client::{CatalogSource, RickAndMortyClient};
pub use pagination::{CatalogPager, STATUS_ALL};
pub use types::{Character, CharacterPage, Episode, LocationRef, PageInfo};
