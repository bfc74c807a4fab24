//! Catalog entity types
//!
//! Wire and cache types for the character catalog. Unknown fields from the
//! API are ignored; missing descriptive fields default to empty.

use serde::{Deserialize, Serialize};

/// A reference to a named location resource
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LocationRef {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// A single catalog character
///
/// `id` is the stable identity key; everything else is descriptive payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Character {
    pub id: u64,
    pub name: String,
    /// "Alive" | "Dead" | "unknown" — kept as reported, filtered exactly
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub species: String,
    #[serde(default)]
    pub gender: String,
    /// Portrait image URL
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub origin: LocationRef,
    /// Last known location
    #[serde(default)]
    pub location: LocationRef,
    /// Absolute URLs of the episodes this character appears in
    #[serde(default)]
    pub episode: Vec<String>,
}

impl Character {
    /// Create a character with minimal info
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            status: "unknown".to_string(),
            species: String::new(),
            gender: String::new(),
            image: String::new(),
            origin: LocationRef::default(),
            location: LocationRef::default(),
            episode: Vec::new(),
        }
    }

    /// Set the status
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }
}

/// Pagination metadata returned with each page
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PageInfo {
    /// Total number of entities in the catalog
    #[serde(default)]
    pub count: u64,
    /// Total number of pages
    #[serde(default)]
    pub pages: u32,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub prev: Option<String>,
}

/// One page of catalog results
#[derive(Debug, Clone, Deserialize)]
pub struct CharacterPage {
    #[serde(default)]
    pub info: PageInfo,
    #[serde(default)]
    pub results: Vec<Character>,
}

/// A single episode, fetched via the absolute URLs in `Character::episode`
#[derive(Debug, Clone, Deserialize)]
pub struct Episode {
    pub id: u64,
    pub name: String,
    /// Episode code such as "S01E05"
    #[serde(default)]
    pub episode: String,
    #[serde(default)]
    pub air_date: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_creation() {
        let character = Character::new(1, "Rick Sanchez");
        assert_eq!(character.id, 1);
        assert_eq!(character.name, "Rick Sanchez");
        assert_eq!(character.status, "unknown");
        assert!(character.episode.is_empty());
    }

    #[test]
    fn test_character_with_status() {
        let character = Character::new(2, "Morty Smith").with_status("Alive");
        assert_eq!(character.status, "Alive");
    }

    #[test]
    fn test_character_deserialize_full() {
        let json = r#"{
            "id": 1,
            "name": "Rick Sanchez",
            "status": "Alive",
            "species": "Human",
            "gender": "Male",
            "image": "https://example.com/1.jpeg",
            "origin": { "name": "Earth (C-137)", "url": "https://example.com/location/1" },
            "location": { "name": "Citadel of Ricks", "url": "https://example.com/location/3" },
            "episode": ["https://example.com/episode/1", "https://example.com/episode/2"]
        }"#;
        let character: Character = serde_json::from_str(json).unwrap();
        assert_eq!(character.id, 1);
        assert_eq!(character.status, "Alive");
        assert_eq!(character.origin.name, "Earth (C-137)");
        assert_eq!(character.location.name, "Citadel of Ricks");
        assert_eq!(character.episode.len(), 2);
    }

    #[test]
    fn test_character_deserialize_missing_optional_fields() {
        // Only id and name are required
        let json = r#"{ "id": 42, "name": "Mystery" }"#;
        let character: Character = serde_json::from_str(json).unwrap();
        assert_eq!(character.id, 42);
        assert_eq!(character.status, "");
        assert_eq!(character.origin, LocationRef::default());
        assert!(character.episode.is_empty());
    }

    #[test]
    fn test_character_deserialize_extra_fields_ignored() {
        let json = r#"{
            "id": 3,
            "name": "Summer Smith",
            "type": "",
            "url": "https://example.com/character/3",
            "created": "2017-11-04T19:09:56.428Z"
        }"#;
        let character: Character = serde_json::from_str(json).unwrap();
        assert_eq!(character.name, "Summer Smith");
    }

    #[test]
    fn test_character_roundtrip_preserves_fields() {
        let mut character = Character::new(7, "Abradolf Lincler").with_status("unknown");
        character.species = "Human".to_string();
        character.image = "https://example.com/7.jpeg".to_string();
        character.episode = vec!["https://example.com/episode/10".to_string()];

        let json = serde_json::to_string(&character).unwrap();
        let back: Character = serde_json::from_str(&json).unwrap();
        assert_eq!(back, character);
    }

    #[test]
    fn test_page_deserialize() {
        let json = r#"{
            "info": { "count": 826, "pages": 42, "next": "https://example.com/character?page=2", "prev": null },
            "results": [
                { "id": 1, "name": "Rick Sanchez", "status": "Alive" },
                { "id": 2, "name": "Morty Smith", "status": "Alive" }
            ]
        }"#;
        let page: CharacterPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.info.count, 826);
        assert_eq!(page.info.pages, 42);
        assert!(page.info.next.is_some());
        assert!(page.info.prev.is_none());
        assert_eq!(page.results.len(), 2);
    }

    #[test]
    fn test_page_deserialize_empty_body() {
        let page: CharacterPage = serde_json::from_str("{}").unwrap();
        assert!(page.results.is_empty());
        assert_eq!(page.info, PageInfo::default());
    }

    #[test]
    fn test_episode_deserialize() {
        let json = r#"{
            "id": 28,
            "name": "The Ricklantis Mixup",
            "episode": "S03E07",
            "air_date": "September 10, 2017"
        }"#;
        let episode: Episode = serde_json::from_str(json).unwrap();
        assert_eq!(episode.id, 28);
        assert_eq!(episode.episode, "S03E07");
        assert_eq!(episode.air_date, "September 10, 2017");
    }
}
