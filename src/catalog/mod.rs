//! Product catalog component for bubbletea-rs applications.
//!
//! The catalog narrows a product collection by category and minimum rating,
//! orders it by price, lets the user mark favorites and pages through the
//! result eight products at a time.
//!
//! ## Layout
//!
//! - [`derive`] and [`distinct_categories`] are the pure derivation pipeline
//! - [`Model`] owns the criteria, the favorites and the current page, and
//!   resets the page whenever a filter, the sort order or the favorites view
//!   changes
//! - [`Model::recompute`] produces a [`ViewModel`] snapshot which the
//!   rendering reads from
//!
//! ## Usage
//!
//! ```
//! use catalog_widgets::catalog::{Model, Product, SortOrder};
//! use catalog_widgets::favorites::FavoritesStore;
//! use catalog_widgets::loader::CatalogSource;
//!
//! let products = vec![
//!     Product::new(1, "Kettle", "Kitchen", 1899.0, 4.4),
//!     Product::new(2, "Toaster", "Kitchen", 2499.0, 3.9),
//!     Product::new(3, "Novel", "Books", 399.0, 4.7),
//! ];
//! let mut catalog = Model::new(CatalogSource::Ready(products), FavoritesStore::in_memory());
//!
//! catalog.toggle_sort(SortOrder::Descending);
//! catalog.toggle_favorite(3);
//!
//! let view = catalog.recompute();
//! assert_eq!(view.visible[0].name, "Toaster");
//! assert_eq!(view.favorite_count(), 1);
//! ```
//!
//! The model implements `key::KeyMap`, so the help line under the catalog
//! always lists its current bindings.

pub mod keys;
pub mod style;

mod api;
mod filtering;
mod model;
mod rendering;
mod types;


pub use api::{CatalogStatus, ViewModel};
pub use filtering::{derive, distinct_categories};
pub use keys::CatalogKeyMap;
pub use model::Model;
pub use rendering::{format_price, render_stars};
pub use style::CatalogStyles;
pub use types::{Criteria, Item, Product, RatingThreshold, SortOrder};

use crate::config;
use crate::key::{self, KeyMap};
use crate::loader::{self, CatalogLoadedMsg, CatalogSource};
use bubbletea_rs::{Cmd, KeyMsg, Model as BubbleTeaModel, Msg, WindowSizeMsg};

impl KeyMap for Model {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![
            &self.keymap.cursor_up,
            &self.keymap.cursor_down,
            &self.keymap.toggle_favorite,
            &self.paginator.keymap.prev_page,
            &self.paginator.keymap.next_page,
            &self.keymap.toggle_favorites_view,
            &self.keymap.quit,
            &self.keymap.show_full_help,
        ]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![
            // Browsing
            vec![
                &self.keymap.cursor_up,
                &self.keymap.cursor_down,
                &self.paginator.keymap.prev_page,
                &self.paginator.keymap.next_page,
                &self.paginator.keymap.first_page,
                &self.paginator.keymap.last_page,
            ],
            // Criteria
            vec![
                &self.keymap.cycle_category,
                &self.keymap.cycle_rating,
                &self.keymap.sort_ascending,
                &self.keymap.sort_descending,
            ],
            // Favorites, help and quit
            vec![
                &self.keymap.toggle_favorite,
                &self.keymap.toggle_favorites_view,
                &self.keymap.show_full_help,
                &self.keymap.quit,
            ],
        ]
    }
}

impl BubbleTeaModel for Model {
    /// Builds the catalog from the user configuration and starts loading the
    /// products document.
    fn init() -> (Self, Option<Cmd>) {
        let config = config::load_default_config();
        let mut model = Self::from_config(&config);
        match config.catalog_path() {
            Some(path) => (model, Some(loader::load_catalog_cmd(path))),
            None => {
                tracing::warn!("No catalog path could be resolved");
                model.set_source(CatalogSource::Unavailable(
                    loader::UNAVAILABLE_MESSAGE.to_string(),
                ));
                (model, None)
            }
        }
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(loaded) = msg.downcast_ref::<CatalogLoadedMsg>() {
            self.set_source(loaded.source.clone());
            return None;
        }

        if let Some(size) = msg.downcast_ref::<WindowSizeMsg>() {
            self.set_width(size.width as usize);
            return None;
        }

        let Some(key_msg) = msg.downcast_ref::<KeyMsg>() else {
            return None;
        };

        if self.keymap.quit.matches(key_msg) {
            return Some(bubbletea_rs::quit());
        } else if self.keymap.show_full_help.matches(key_msg) {
            self.help.show_all = !self.help.show_all;
        } else if self.keymap.cursor_up.matches(key_msg) {
            self.cursor_up();
        } else if self.keymap.cursor_down.matches(key_msg) {
            self.cursor_down();
        } else if self.keymap.toggle_favorite.matches(key_msg) {
            self.toggle_selected_favorite();
        } else if self.keymap.cycle_category.matches(key_msg) {
            self.cycle_category();
        } else if self.keymap.cycle_rating.matches(key_msg) {
            self.cycle_min_rating();
        } else if self.keymap.sort_ascending.matches(key_msg) {
            self.toggle_sort(SortOrder::Ascending);
        } else if self.keymap.sort_descending.matches(key_msg) {
            self.toggle_sort(SortOrder::Descending);
        } else if self.keymap.toggle_favorites_view.matches(key_msg) {
            self.toggle_favorites_view();
        } else if self.paginator.update(&msg) {
            self.cursor = 0;
        }
        None
    }

    fn view(&self) -> String {
        self.view_catalog()
    }
}
