//! Paginated catalog loading
//!
//! Accumulates pages from a `CatalogSource` into an ordered cache, unique
//! by id with first-seen order across pages. Page 1 replaces the cache;
//! later pages merge into it. A failed fetch never leaves a partial merge
//! behind.

use std::collections::HashSet;

use serde_json::json;

use crate::config::api::FIRST_PAGE;
use crate::error::{AppError, Result};
use crate::network::Connectivity;
use crate::telemetry::TelemetrySink;

use super::client::CatalogSource;
use super::types::Character;

/// Filter value that selects the whole cache
pub const STATUS_ALL: &str = "All";

/// Pagination controller over a catalog source
pub struct CatalogPager {
    source: Box<dyn CatalogSource>,
    connectivity: Box<dyn Connectivity>,
    telemetry: Box<dyn TelemetrySink>,
    cache: Vec<Character>,
    current_page: u32,
}

impl CatalogPager {
    pub fn new(
        source: Box<dyn CatalogSource>,
        connectivity: Box<dyn Connectivity>,
        telemetry: Box<dyn TelemetrySink>,
    ) -> Self {
        Self {
            source,
            connectivity,
            telemetry,
            cache: Vec::new(),
            current_page: FIRST_PAGE,
        }
    }

    /// The accumulated cache, in first-seen order
    pub fn cache(&self) -> &[Character] {
        &self.cache
    }

    /// The page counter (the last page requested)
    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    /// Load a page from the source and fold it into the cache.
    ///
    /// Page 1 requires connectivity (refused up front, without touching the
    /// source) and replaces the entire cache. Later pages merge: ids that
    /// are already cached are dropped, the rest appended in page order.
    /// Returns the number of entries added.
    pub fn load_page(&mut self, page: u32) -> Result<usize> {
        if page == FIRST_PAGE && !self.connectivity.is_connected() {
            self.telemetry
                .log_event("Error", json!({ "type": "No connection" }));
            return Err(AppError::Offline(
                "cannot load the catalog without a connection".to_string(),
            ));
        }

        let fetched = match self.source.character_page(page) {
            Ok(fetched) => fetched,
            Err(e) => {
                self.telemetry.log_event(
                    "Error",
                    json!({ "type": "API Fetch", "page": page, "error": e.to_string() }),
                );
                return Err(e);
            }
        };

        if page == FIRST_PAGE {
            self.cache.clear();
        }
        let fetched_count = fetched.results.len();
        let added = self.merge(fetched.results);
        self.current_page = page;

        // The event reports what the page carried, not what survived the merge
        self.telemetry
            .log_event("Data Loaded", json!({ "page": page, "count": fetched_count }));
        Ok(added)
    }

    /// Advance to the next page and load it.
    ///
    /// Refused without incrementing the counter when connectivity is
    /// absent. On a fetch failure the counter stays incremented (the retry
    /// targets the same page via `load_page`).
    pub fn advance_page(&mut self) -> Result<usize> {
        if !self.connectivity.is_connected() {
            self.telemetry
                .log_event("Error", json!({ "type": "Load more without connection" }));
            return Err(AppError::Offline(
                "cannot load more without a connection".to_string(),
            ));
        }
        self.current_page += 1;
        self.load_page(self.current_page)
    }

    /// Pure read-side projection over the cache.
    ///
    /// `"All"` returns the whole cache; any other value matches the status
    /// field exactly (case-sensitive).
    pub fn filter_by_status(&self, status: &str) -> Vec<&Character> {
        if status == STATUS_ALL {
            self.cache.iter().collect()
        } else {
            self.cache.iter().filter(|c| c.status == status).collect()
        }
    }

    /// Filtered projection destined for display.
    ///
    /// Same result as `filter_by_status`, with the render reported to the
    /// telemetry sink as a `Data Rendered` event.
    pub fn render_by_status(&self, status: &str) -> Vec<&Character> {
        let filtered = self.filter_by_status(status);
        self.telemetry.log_event(
            "Data Rendered",
            json!({ "status": status, "count": filtered.len() }),
        );
        filtered
    }

    /// Append entries whose id is not yet cached, preserving page order
    fn merge(&mut self, results: Vec<Character>) -> usize {
        let mut seen: HashSet<u64> = self.cache.iter().map(|c| c.id).collect();
        let mut added = 0;
        for character in results {
            if seen.insert(character.id) {
                self.cache.push(character);
                added += 1;
            }
        }
        added
    }
}
