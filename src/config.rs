//! Configuration for a catalog application.
//!
//! Settings live in `<config-dir>/catalog-widgets/config.toml`:
//!
//! ```toml
//! title = "ShopHub"
//! catalog_path = "/srv/shop/products.json"
//! data_dir = "/home/me/.local/share/catalog-widgets"
//! ```
//!
//! Every key is optional. Page size and the rating thresholds are fixed and
//! cannot be configured.

use crate::error::{Error, Result};
use crate::favorites::{FavoritesStore, FileStore};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Directory name used under the platform config/data directories.
pub const APP_DIR_NAME: &str = "catalog-widgets";

/// Name of the configuration file.
pub const CONFIG_FILENAME: &str = "config.toml";

/// Name of the products document looked up when `catalog_path` is unset.
pub const DEFAULT_CATALOG_FILENAME: &str = "products.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Brand shown in the navbar.
    #[serde(default = "default_title")]
    pub title: String,

    /// Products document; defaults to `products.json` in the data directory.
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,

    /// Where favorites are persisted; defaults to the platform data directory.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

fn default_title() -> String {
    "ShopHub".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: default_title(),
            catalog_path: None,
            data_dir: None,
        }
    }
}

impl Config {
    /// Parses a configuration file. A missing file yields the defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No config file at {:?}, using defaults", path);
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        if config.title.trim().is_empty() {
            return Err(Error::config("title must not be empty"));
        }
        Ok(config)
    }

    /// Resolved data directory, if the platform has one.
    pub fn data_dir(&self) -> Option<PathBuf> {
        self.data_dir
            .clone()
            .or_else(|| dirs::data_local_dir().map(|d| d.join(APP_DIR_NAME)))
    }

    /// Resolved products document path.
    pub fn catalog_path(&self) -> Option<PathBuf> {
        self.catalog_path
            .clone()
            .or_else(|| self.data_dir().map(|d| d.join(DEFAULT_CATALOG_FILENAME)))
    }

    /// A favorites store in the data directory.
    ///
    /// Without a data directory favorites are kept for the session only.
    pub fn favorites_store(&self) -> FavoritesStore {
        match self.data_dir() {
            Some(dir) => FavoritesStore::new(Box::new(FileStore::new(dir))),
            None => {
                warn!("No data directory available, favorites will not persist");
                FavoritesStore::in_memory()
            }
        }
    }
}

/// Path of the user configuration file, if the platform has a config directory.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_DIR_NAME).join(CONFIG_FILENAME))
}

/// Loads configuration from `path`.
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_config(path: &Path) -> Config {
    match Config::from_file(path) {
        Ok(config) => config,
        Err(e) => {
            warn!("Failed to load {:?}: {}", path, e);
            Config::default()
        }
    }
}

/// Loads the user configuration from the platform config directory.
pub fn load_default_config() -> Config {
    match default_config_path() {
        Some(path) => load_config(&path),
        None => Config::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_default() {
        let tmp = tempfile::tempdir().unwrap();
        let config = Config::from_file(&tmp.path().join(CONFIG_FILENAME)).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.title, "ShopHub");
    }

    #[test]
    fn test_parses_all_fields() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join(CONFIG_FILENAME);
        std::fs::write(
            &path,
            "title = \"Corner Store\"\ncatalog_path = \"/srv/p.json\"\ndata_dir = \"/var/lib/cat\"\n",
        )
        .unwrap();
        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.title, "Corner Store");
        assert_eq!(config.catalog_path(), Some(PathBuf::from("/srv/p.json")));
        assert_eq!(config.data_dir(), Some(PathBuf::from("/var/lib/cat")));
    }

    #[test]
    fn test_catalog_defaults_into_data_dir() {
        let config = Config {
            data_dir: Some(PathBuf::from("/data")),
            ..Config::default()
        };
        assert_eq!(config.catalog_path(), Some(PathBuf::from("/data/products.json")));
    }

    #[test]
    fn test_invalid_toml_is_error_but_lenient_load_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "title = [unterminated").unwrap();
        assert!(matches!(Config::from_file(&path), Err(Error::Toml(_))));
        assert_eq!(load_config(&path), Config::default());
    }

    #[test]
    fn test_empty_title_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "title = \"  \"").unwrap();
        assert!(matches!(Config::from_file(&path), Err(Error::Config { .. })));
    }

    #[test]
    fn test_favorites_store_uses_data_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let config = Config {
            data_dir: Some(tmp.path().to_path_buf()),
            ..Config::default()
        };
        let mut store = config.favorites_store();
        store.save(&crate::favorites::FavoriteSet::from_ids([9]));
        assert!(tmp.path().join("product_favorites.json").exists());
    }
}
