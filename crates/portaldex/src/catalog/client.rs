//! Rick and Morty API client
//!
//! Implementation of `CatalogSource` for the public character API
//! (<https://rickandmortyapi.com/>).

use crate::config::api::DEFAULT_BASE_URL;
use crate::error::Result;
use crate::network::HttpClient;

use super::types::{Character, CharacterPage, Episode};

/// A source of paginated catalog entries and single-entity lookups
///
/// The trait is the seam for testing the pagination controller against
/// canned pages without touching the network.
pub trait CatalogSource: Send + Sync {
    /// Fetch one page of characters
    fn character_page(&self, page: u32) -> Result<CharacterPage>;

    /// Look up a single character by id
    fn character(&self, id: u64) -> Result<Character>;

    /// Fetch an episode by its absolute URL (as listed in `Character::episode`)
    fn episode(&self, url: &str) -> Result<Episode>;
}

/// HTTP client for the character catalog API
pub struct RickAndMortyClient {
    client: HttpClient,
    base_url: String,
}

impl RickAndMortyClient {
    /// Create a client against the default server
    pub fn new() -> Result<Self> {
        Ok(Self {
            client: HttpClient::new()?,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Create a client with a custom base URL (for testing or mirrors)
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client: HttpClient::new()?,
            base_url: base_url.into(),
        })
    }

    /// Build a full API URL from an endpoint path
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl CatalogSource for RickAndMortyClient {
    fn character_page(&self, page: u32) -> Result<CharacterPage> {
        self.client
            .get_json(&self.url(&format!("/character?page={page}")))
    }

    fn character(&self, id: u64) -> Result<Character> {
        self.client.get_json(&self.url(&format!("/character/{id}")))
    }

    fn episode(&self, url: &str) -> Result<Episode> {
        // Episode references arrive as absolute URLs; fetch them as-is
        self.client.get_json(url)
    }
}
