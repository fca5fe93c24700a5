//! Favorites store: the set of product ids the user has marked, persisted
//! across sessions.
//!
//! The in-memory [`FavoriteSet`] is the source of truth for the current
//! session. Persistence goes through the [`KeyValueStore`] seam under a single
//! fixed key, [`FAVORITES_KEY`], holding a JSON array of integers. Every
//! failure on that path degrades quietly:
//!
//! - a missing or malformed stored value loads as the empty set
//! - a failed write is logged and otherwise ignored, the toggle still shows
//!
//! # Examples
//!
//! ```rust
//! use catalog_widgets::favorites::{FavoriteSet, FavoritesStore, MemoryStore};
//!
//! let mut store = FavoritesStore::new(Box::new(MemoryStore::new()));
//! let favorites = store.load(); // empty on first run
//! assert!(favorites.is_empty());
//!
//! let favorites = favorites.toggle(7);
//! store.save(&favorites);
//! assert!(store.load().contains(7));
//! ```

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Key under which the favorites are persisted.
pub const FAVORITES_KEY: &str = "product_favorites";

/// A scoped, durable key-value store.
///
/// Implementations report failures through [`Result`]; the favorites store
/// decides what to do with them (it never lets them reach the view).
pub trait KeyValueStore: Send + fmt::Debug {
    /// Returns the stored value, or `None` if the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replaces the value stored under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Removes `key`. Removing an absent key is not an error.
    fn delete(&mut self, key: &str) -> Result<()>;
}

/// A set of favorited product ids.
///
/// Membership tests are O(1). The set is a value: [`toggle`](Self::toggle)
/// returns a new set and leaves the receiver untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoriteSet {
    ids: HashSet<i64>,
}

impl FavoriteSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a new set with `id` removed if present, inserted otherwise.
    ///
    /// Toggling the same id twice yields a set equal to the original.
    ///
    /// ```rust
    /// use catalog_widgets::favorites::FavoriteSet;
    ///
    /// let original = FavoriteSet::from_ids([1, 2]);
    /// let toggled = original.toggle(3);
    /// assert!(toggled.contains(3));
    /// assert_eq!(toggled.toggle(3), original);
    /// ```
    pub fn toggle(&self, id: i64) -> Self {
        let mut ids = self.ids.clone();
        if !ids.remove(&id) {
            ids.insert(id);
        }
        Self { ids }
    }

    /// Returns true if `id` is a favorite.
    pub fn contains(&self, id: i64) -> bool {
        self.ids.contains(&id)
    }

    /// Number of favorites.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns true if nothing is favorited.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Iterates over the ids in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = i64> + '_ {
        self.ids.iter().copied()
    }

    /// Builds a set from ids; duplicates collapse.
    pub fn from_ids(ids: impl IntoIterator<Item = i64>) -> Self {
        Self {
            ids: ids.into_iter().collect(),
        }
    }

    /// Encodes the set as a JSON array of integers.
    ///
    /// Ids are written in ascending order so the stored value is stable
    /// across runs.
    pub fn to_json(&self) -> String {
        let mut ids: Vec<i64> = self.iter().collect();
        ids.sort_unstable();
        // A Vec<i64> always serializes.
        serde_json::to_string(&ids).unwrap_or_else(|_| "[]".to_string())
    }

    /// Decodes a JSON array of integers.
    pub fn from_json(raw: &str) -> Result<Self> {
        let ids: Vec<i64> = serde_json::from_str(raw)?;
        Ok(Self::from_ids(ids))
    }
}

/// Loads and saves a [`FavoriteSet`] through a [`KeyValueStore`].
#[derive(Debug)]
pub struct FavoritesStore {
    backend: Box<dyn KeyValueStore>,
}

impl FavoritesStore {
    /// Wraps a key-value backend.
    pub fn new(backend: Box<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    /// A store that only lives as long as the process.
    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryStore::new()))
    }

    /// Reads the persisted favorites.
    ///
    /// Never fails: an absent value, a backend error or a value that is not a
    /// JSON array of integers all produce the empty set.
    pub fn load(&self) -> FavoriteSet {
        let raw = match self.backend.get(FAVORITES_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return FavoriteSet::new(),
            Err(err) => {
                tracing::warn!("Error loading favorites: {}", err);
                return FavoriteSet::new();
            }
        };

        match FavoriteSet::from_json(&raw) {
            Ok(set) => {
                tracing::debug!("Loaded {} favorites", set.len());
                set
            }
            Err(err) => {
                tracing::warn!("Ignoring malformed favorites value: {}", err);
                FavoriteSet::new()
            }
        }
    }

    /// Persists the full set, best effort.
    ///
    /// Returns whether the write succeeded so callers can surface a hint if
    /// they want to; the set itself is never affected.
    pub fn save(&mut self, set: &FavoriteSet) -> bool {
        match self.backend.set(FAVORITES_KEY, &set.to_json()) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!("Error saving favorites: {}", err);
                false
            }
        }
    }

    /// Drops the persisted value; the next [`load`](Self::load) is empty.
    pub fn clear(&mut self) -> bool {
        match self.backend.delete(FAVORITES_KEY) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!("Error clearing favorites: {}", err);
                false
            }
        }
    }
}

/// A [`KeyValueStore`] that keeps one `<key>.json` file per key in a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Creates a store rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory holding the values.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(key);
        // Write-then-rename so a crash never leaves a truncated value behind.
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        if let Err(err) = fs::rename(&tmp, &path) {
            let _ = fs::remove_file(&tmp);
            return Err(err.into());
        }
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

/// A session-only [`KeyValueStore`].
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with one value.
    pub fn with_value(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.values.insert(key.to_string(), value.to_string());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<()> {
        self.values.remove(key);
        Ok(())
    }
}
