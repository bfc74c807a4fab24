//! Key-value storage layer
//!
//! String-keyed get/set/clear persistence backing the favorites and theme
//! stores. The file-backed implementation keeps one file per key in the
//! application config directory.

use crate::config::app::NAME;
use crate::error::{AppError, Result};
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

/// Asynchronous-looking storage facade: string keys, string values
pub trait KvStore: Send + Sync {
    /// Read the value stored under `key`, `None` if absent
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove the value stored under `key` (absent keys are fine)
    fn remove(&self, key: &str) -> Result<()>;

    /// Remove every stored value
    fn clear(&self) -> Result<()>;
}

/// Get the application config directory path
pub fn config_dir() -> Result<PathBuf> {
    dirs::config_dir().map(|p| p.join(NAME)).ok_or_else(|| {
        AppError::StorageRead(
            "Could not determine config directory. HOME environment variable may not be set."
                .to_string(),
        )
    })
}

// =============================================================================
// FileStore
// =============================================================================

/// File-backed store: one `<key>.json` file per key
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at the default config directory
    pub fn new() -> Result<Self> {
        Ok(Self { dir: config_dir()? })
    }

    /// Create a store rooted at a specific directory (for testing)
    pub fn with_dir(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// The directory this store writes into
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    fn ensure_dir(&self) -> Result<()> {
        match fs::create_dir_all(&self.dir) {
            Ok(()) => Ok(()),
            Err(e) => {
                let msg = match e.kind() {
                    ErrorKind::PermissionDenied => {
                        format!("Permission denied: cannot create directory {:?}", self.dir)
                    }
                    _ => format!("Failed to create directory {:?}: {}", self.dir, e),
                };
                Err(AppError::StorageWrite(msg))
            }
        }
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);
        match fs::read_to_string(&path) {
            Ok(content) => {
                // An empty file is treated as an absent key
                if content.trim().is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(content))
                }
            }
            Err(e) => match e.kind() {
                ErrorKind::NotFound => Ok(None),
                ErrorKind::PermissionDenied => Err(AppError::StorageRead(format!(
                    "Permission denied: cannot read {path:?}"
                ))),
                _ => Err(AppError::StorageRead(format!(
                    "Failed to read {path:?}: {e}"
                ))),
            },
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.ensure_dir()?;
        let path = self.key_path(key);
        match fs::write(&path, value) {
            Ok(()) => Ok(()),
            Err(e) => {
                let msg = match e.kind() {
                    ErrorKind::PermissionDenied => {
                        format!("Permission denied: cannot write to {path:?}")
                    }
                    ErrorKind::ReadOnlyFilesystem => {
                        format!("Cannot write to {path:?}: filesystem is read-only")
                    }
                    _ => format!("Failed to write to {path:?}: {e}"),
                };
                Err(AppError::StorageWrite(msg))
            }
        }
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.key_path(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) => match e.kind() {
                ErrorKind::NotFound => Ok(()), // Already gone, that's fine
                _ => Err(AppError::StorageWrite(format!(
                    "Failed to delete {path:?}: {e}"
                ))),
            },
        }
    }

    fn clear(&self) -> Result<()> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(()),
            Err(e) => {
                return Err(AppError::StorageWrite(format!(
                    "Failed to read directory {:?}: {}",
                    self.dir, e
                )))
            }
        };
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) == Some("json") {
                fs::remove_file(&path).map_err(|e| {
                    AppError::StorageWrite(format!("Failed to delete {path:?}: {e}"))
                })?;
            }
        }
        Ok(())
    }
}

// =============================================================================
// MemoryStore
// =============================================================================

/// In-memory store with failure injection, for tests
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent `get` fail
    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Make every subsequent `set`/`remove`/`clear` fail
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(AppError::StorageRead("injected read failure".to_string()));
        }
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(AppError::StorageWrite("injected write failure".to_string()));
        }
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(AppError::StorageWrite("injected write failure".to_string()));
        }
        self.entries.lock().unwrap().remove(key);
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(AppError::StorageWrite("injected write failure".to_string()));
        }
        self.entries.lock().unwrap().clear();
        Ok(())
    }
}
