//! Local data persistence
//!
//! String-keyed storage and the stores built on top of it: favorites and
//! the theme preference.

pub mod favorites;
pub mod store;
pub mod theme;

// Re-export common types
pub use favorites::{FavoritesCommand, FavoritesStore};
pub use store::{config_dir, FileStore, KvStore, MemoryStore};
pub use theme::{ThemeMode, ThemeStore};
