#![doc(html_root_url = "https://docs.rs/catalog-widgets/")]

//! # catalog-widgets
//!
//! A product catalog component for [bubbletea-rs](https://github.com/joshka/bubbletea-rs)
//! applications, together with the pure view-derivation core behind it.
//!
//! ## Overview
//!
//! The catalog presents a collection of products and lets the user narrow it
//! by category and minimum rating, order it by price, mark favorites and page
//! through the result. Favorites survive across sessions.
//!
//! - **Derivation**: [`catalog::derive`] filters and stable-sorts the
//!   collection; [`paginator::paginate`] slices it into pages of
//!   [`paginator::PAGE_SIZE`]
//! - **State**: [`catalog::Model`] owns the criteria and the current page and
//!   sends the user back to page 1 whenever a criterion changes
//! - **Snapshot**: [`catalog::Model::recompute`] returns an owned
//!   [`catalog::ViewModel`] after every change
//! - **Persistence**: [`favorites::FavoritesStore`] reads and writes the
//!   favorite ids through any [`favorites::KeyValueStore`]
//!
//! ## Deriving a page
//!
//! ```rust
//! use catalog_widgets::catalog::{derive, Criteria, Product, RatingThreshold};
//! use catalog_widgets::favorites::FavoriteSet;
//! use catalog_widgets::paginator::{page_count, paginate, PAGE_SIZE};
//!
//! let products: Vec<Product> = (1..=20)
//!     .map(|i| Product::new(i, format!("Item {i}"), "Home", 100.0, 4.0))
//!     .collect();
//!
//! let criteria = Criteria::new().with_min_rating(RatingThreshold::Four);
//! let filtered = derive(&products, &criteria, &FavoriteSet::new());
//!
//! assert_eq!(page_count(filtered.len(), PAGE_SIZE), 3);
//! assert_eq!(paginate(&filtered, PAGE_SIZE, 3).len(), 4);
//! ```
//!
//! ## Integration with bubbletea-rs
//!
//! The catalog is a regular bubbletea-rs model and can be embedded in an
//! application model:
//!
//! ```rust
//! use catalog_widgets::prelude::*;
//! use bubbletea_rs::{Cmd, Model, Msg};
//!
//! struct App {
//!     catalog: Catalog,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         // Reads the user config and starts loading the products document.
//!         let (catalog, cmd) = Catalog::init();
//!         (Self { catalog }, cmd)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         self.catalog.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.catalog.view()
//!     }
//! }
//! ```
//!
//! ## Logging
//!
//! Call [`logging::init`] once at startup. Logs go to a daily rolling file so
//! they never interfere with the terminal UI; set `CATALOG_LOG` to change the
//! filter.

pub mod catalog;
pub mod config;
pub mod error;
pub mod favorites;
pub mod help;
pub mod key;
pub mod loader;
pub mod logging;
pub mod paginator;

pub use catalog::Model as Catalog;
pub use catalog::{
    CatalogKeyMap, CatalogStatus, CatalogStyles, Criteria, Item, Product, RatingThreshold,
    SortOrder, ViewModel,
};
pub use config::Config;
pub use error::{Error, Result};
pub use favorites::{FavoriteSet, FavoritesStore, FileStore, KeyValueStore, MemoryStore};
pub use help::Model as HelpModel;
pub use key::{Binding, Help as KeyHelp, KeyMap, KeyPress};
pub use loader::{CatalogLoadedMsg, CatalogSource};
pub use paginator::{Model as Paginator, PageNumber, PAGE_SIZE};

/// Prelude module for convenient imports.
///
/// ```rust
/// use catalog_widgets::prelude::*;
///
/// let catalog = Catalog::new(CatalogSource::Loading, FavoritesStore::in_memory());
/// assert_eq!(catalog.recompute().status, CatalogStatus::Loading);
/// ```
pub mod prelude {
    pub use crate::catalog::{derive, distinct_categories, format_price, render_stars};
    pub use crate::{
        Binding, Catalog, CatalogKeyMap, CatalogLoadedMsg, CatalogSource, CatalogStatus,
        CatalogStyles, Config, Criteria, FavoriteSet, FavoritesStore, HelpModel, Item, KeyMap,
        Paginator, PageNumber, Product, RatingThreshold, SortOrder, ViewModel, PAGE_SIZE,
    };
}
