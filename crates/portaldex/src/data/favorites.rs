//! Favorites store
//!
//! The in-memory favorites set with command-based mutation and persistence
//! through a `KvStore`. The set loads once at startup; after that every
//! mutation serializes the full set and hands it to a background writer
//! thread, so writes never block the caller and the last issued write is
//! the one that sticks.

use crate::catalog::Character;
use crate::config::storage::FAVORITES_KEY;
use crate::data::store::KvStore;
use crate::error::Result;
use crossbeam_channel::{bounded, unbounded, Sender};
use serde_json::Value;
use std::collections::HashSet;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

/// A mutation of the favorites set
#[derive(Debug, Clone)]
pub enum FavoritesCommand {
    /// Replace the whole set with a decoded payload
    ///
    /// Anything that is not a JSON array of characters resolves to the
    /// empty set.
    Set(Value),
    /// Add a character (ignored if its id is already present)
    Add(Character),
    /// Remove a character by its id
    Remove(Character),
}

// =============================================================================
// SaveQueue
// =============================================================================

enum SaveJob {
    Write(String),
    Flush(Sender<()>),
}

/// Single background writer for favorites persistence
///
/// Jobs are applied in submission order on one thread, so the last write
/// issued is the last one applied. Write failures are reported on stderr
/// and do not disturb the in-memory set.
struct SaveQueue {
    tx: Option<Sender<SaveJob>>,
    handle: Option<JoinHandle<()>>,
}

impl SaveQueue {
    fn start(store: Arc<dyn KvStore>) -> Self {
        let (tx, rx) = unbounded::<SaveJob>();
        let handle = thread::spawn(move || {
            for job in rx {
                match job {
                    SaveJob::Write(payload) => {
                        if let Err(e) = store.set(FAVORITES_KEY, &payload) {
                            eprintln!("Warning: could not save favorites: {e}");
                        }
                    }
                    SaveJob::Flush(ack) => {
                        let _ = ack.send(());
                    }
                }
            }
        });
        Self {
            tx: Some(tx),
            handle: Some(handle),
        }
    }

    fn submit(&self, payload: String) {
        if let Some(tx) = &self.tx {
            let _ = tx.send(SaveJob::Write(payload));
        }
    }

    /// Block until every previously submitted write has been applied
    fn flush(&self) {
        if let Some(tx) = &self.tx {
            let (ack_tx, ack_rx) = bounded(1);
            if tx.send(SaveJob::Flush(ack_tx)).is_ok() {
                let _ = ack_rx.recv();
            }
        }
    }
}

impl Drop for SaveQueue {
    fn drop(&mut self) {
        // Closing the channel lets the writer drain and exit
        self.tx.take();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

// =============================================================================
// FavoritesStore
// =============================================================================

/// The favorites set, loaded once and persisted on every mutation
pub struct FavoritesStore {
    store: Arc<dyn KvStore>,
    favorites: Vec<Character>,
    loaded: bool,
    queue: SaveQueue,
}

impl FavoritesStore {
    /// Load the persisted favorites from `store`
    ///
    /// A missing key, unreadable store or malformed payload all resolve to
    /// an empty set; the failure is reported on stderr and the app keeps
    /// going.
    pub fn load(store: Arc<dyn KvStore>) -> Self {
        let mut favorites = Self {
            queue: SaveQueue::start(store.clone()),
            store,
            favorites: Vec::new(),
            loaded: false,
        };

        match favorites.read_persisted() {
            Ok(Some(value)) => favorites.dispatch(FavoritesCommand::Set(value)),
            Ok(None) => {}
            Err(e) => eprintln!("Warning: could not load favorites: {e}"),
        }

        // Mutations from here on are persisted
        favorites.loaded = true;
        favorites
    }

    fn read_persisted(&self) -> Result<Option<Value>> {
        let Some(raw) = self.store.get(FAVORITES_KEY)? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                eprintln!("Warning: stored favorites are malformed, starting empty: {e}");
                Ok(None)
            }
        }
    }

    /// Apply a command to the set, then persist the result
    pub fn dispatch(&mut self, command: FavoritesCommand) {
        match command {
            FavoritesCommand::Set(value) => {
                let decoded: Vec<Character> = serde_json::from_value(value).unwrap_or_default();
                self.favorites = dedup_by_id(decoded);
            }
            FavoritesCommand::Add(character) => {
                if self.contains(character.id) {
                    return;
                }
                self.favorites.push(character);
            }
            FavoritesCommand::Remove(character) => {
                self.favorites.retain(|c| c.id != character.id);
            }
        }
        self.save();
    }

    /// The current favorites, in insertion order
    pub fn favorites(&self) -> &[Character] {
        &self.favorites
    }

    /// Whether a character id is in the set
    pub fn contains(&self, id: u64) -> bool {
        self.favorites.iter().any(|c| c.id == id)
    }

    pub fn len(&self) -> usize {
        self.favorites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.favorites.is_empty()
    }

    /// Remove a favorite by id, returning it if it was present
    pub fn remove_by_id(&mut self, id: u64) -> Option<Character> {
        let position = self.favorites.iter().position(|c| c.id == id)?;
        let removed = self.favorites.remove(position);
        self.save();
        Some(removed)
    }

    /// Wipe all persisted data and reset the set to empty
    pub fn clear_all(&mut self) {
        if let Err(e) = self.store.clear() {
            eprintln!("Warning: could not clear stored data: {e}");
        }
        self.dispatch(FavoritesCommand::Set(Value::Array(Vec::new())));
    }

    /// Block until every pending write has reached the store
    pub fn flush(&self) {
        self.queue.flush();
    }

    fn save(&self) {
        // The initial Set during load is replay, not a new write
        if !self.loaded {
            return;
        }
        match serde_json::to_string(&self.favorites) {
            Ok(payload) => self.queue.submit(payload),
            Err(e) => eprintln!("Warning: could not serialize favorites: {e}"),
        }
    }
}

fn dedup_by_id(characters: Vec<Character>) -> Vec<Character> {
    let mut seen = HashSet::new();
    characters
        .into_iter()
        .filter(|c| seen.insert(c.id))
        .collect()
}
