//! The catalog model: criteria state, favorites and the current page.
//!
//! Every mutation goes through a method on [`Model`]. Methods that change a
//! watched criterion (category, minimum rating, sort order, favorites view)
//! send the user back to page 1; toggling a single favorite never does.
//! [`Model::recompute`] turns the current state into a [`ViewModel`].

use super::api::{CatalogStatus, ViewModel};
use super::filtering::{derive, distinct_categories};
use super::keys::CatalogKeyMap;
use super::style::CatalogStyles;
use super::types::{Criteria, Product, RatingThreshold, SortOrder};
use crate::config::Config;
use crate::favorites::{FavoriteSet, FavoritesStore};
use crate::loader::CatalogSource;
use crate::{help, paginator};
use tracing::debug;

/// An interactive product catalog.
///
/// # Examples
///
/// ```
/// use catalog_widgets::catalog::{Model, Product, RatingThreshold};
/// use catalog_widgets::favorites::FavoritesStore;
/// use catalog_widgets::loader::CatalogSource;
///
/// let products: Vec<Product> = (1..=20)
///     .map(|i| Product::new(i, format!("Item {i}"), "Home", i as f64 * 10.0, 3.0 + (i % 3) as f64 * 0.5))
///     .collect();
/// let mut catalog = Model::new(CatalogSource::Ready(products), FavoritesStore::in_memory());
///
/// catalog.set_page(3);
/// assert_eq!(catalog.current_page(), 3);
///
/// catalog.set_min_rating(RatingThreshold::Four);
/// assert_eq!(catalog.current_page(), 1);
///
/// let view = catalog.recompute();
/// assert!(view.visible.iter().all(|p| p.rating >= 4.0));
/// ```
#[derive(Debug)]
pub struct Model {
    pub(super) title: String,
    pub(super) source: CatalogSource,
    pub(super) categories: Vec<String>,
    pub(super) criteria: Criteria,
    pub(super) favorites: FavoriteSet,
    pub(super) store: FavoritesStore,

    // Pagination
    pub(super) paginator: paginator::Model,
    /// Selected row within the visible page.
    pub(super) cursor: usize,

    // UI State
    pub(super) width: usize,
    pub(super) styles: CatalogStyles,
    pub(super) help: help::Model,
    pub(super) keymap: CatalogKeyMap,
}

impl Model {
    /// Creates a catalog over `source`, restoring favorites from `store`.
    pub fn new(source: CatalogSource, store: FavoritesStore) -> Self {
        let favorites = store.load();
        let categories = distinct_categories(source.products());
        let mut model = Self {
            title: "ShopHub".to_string(),
            source,
            categories,
            criteria: Criteria::new(),
            favorites,
            store,
            paginator: paginator::Model::new().with_per_page(paginator::PAGE_SIZE),
            cursor: 0,
            width: 0,
            styles: CatalogStyles::default(),
            help: help::Model::new(),
            keymap: CatalogKeyMap::default(),
        };
        model.sync();
        model
    }

    /// A catalog that is still loading, set up from `config`.
    pub fn from_config(config: &Config) -> Self {
        Self::new(CatalogSource::Loading, config.favorites_store()).with_title(&config.title)
    }

    /// Sets the navbar brand (builder pattern).
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the render width (builder pattern).
    pub fn with_width(mut self, width: usize) -> Self {
        self.set_width(width);
        self
    }

    pub fn set_width(&mut self, width: usize) {
        self.width = width;
        self.help.width = width;
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn source(&self) -> &CatalogSource {
        &self.source
    }

    /// Replaces the catalog, typically when a load finishes.
    ///
    /// A selected category that no longer exists is cleared. The page goes
    /// back to 1.
    pub fn set_source(&mut self, source: CatalogSource) {
        self.source = source;
        self.categories = distinct_categories(self.source.products());
        if let Some(category) = self.criteria.category.as_deref() {
            if !self.categories.iter().any(|c| c == category) {
                debug!("Category {:?} is gone, clearing it", category);
                self.criteria.category = None;
            }
        }
        self.paginator.reset();
        self.sync();
    }

    pub fn criteria(&self) -> &Criteria {
        &self.criteria
    }

    pub fn favorites(&self) -> &FavoriteSet {
        &self.favorites
    }

    /// Distinct categories of the whole catalog, sorted.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn current_page(&self) -> usize {
        self.paginator.page
    }

    pub fn total_pages(&self) -> usize {
        self.paginator.total_pages
    }

    /// Index of the selected row on the current page.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Selects a category, or all categories with `None`.
    ///
    /// Only categories present in the catalog are accepted. Returns whether
    /// the criteria changed.
    pub fn set_category(&mut self, category: Option<String>) -> bool {
        if let Some(name) = category.as_deref() {
            if !self.categories.iter().any(|c| c == name) {
                debug!("Ignoring unknown category {:?}", name);
                return false;
            }
        }
        if self.criteria.category == category {
            return false;
        }
        debug!("Category: {:?} -> {:?}", self.criteria.category, category);
        self.criteria.category = category;
        self.criteria_changed();
        true
    }

    /// Returns whether the criteria changed.
    pub fn set_min_rating(&mut self, min_rating: RatingThreshold) -> bool {
        if self.criteria.min_rating == min_rating {
            return false;
        }
        debug!(
            "Minimum rating: {} -> {}",
            self.criteria.min_rating.label(),
            min_rating.label()
        );
        self.criteria.min_rating = min_rating;
        self.criteria_changed();
        true
    }

    /// Returns whether the criteria changed.
    pub fn set_sort_order(&mut self, sort_order: SortOrder) -> bool {
        if self.criteria.sort_order == sort_order {
            return false;
        }
        debug!("Sort: {:?} -> {:?}", self.criteria.sort_order, sort_order);
        self.criteria.sort_order = sort_order;
        self.criteria_changed();
        true
    }

    /// Presses a sort button: the active direction turns sorting off, the
    /// other direction switches to it. Returns the new order.
    pub fn toggle_sort(&mut self, requested: SortOrder) -> SortOrder {
        let next = self.criteria.sort_order.toggled(requested);
        self.set_sort_order(next);
        next
    }

    /// Returns whether the criteria changed.
    pub fn set_show_favorites_only(&mut self, show: bool) -> bool {
        if self.criteria.show_favorites_only == show {
            return false;
        }
        debug!("Favorites view: {}", show);
        self.criteria.show_favorites_only = show;
        self.criteria_changed();
        true
    }

    /// Flips the favorites view. Returns whether it is now active.
    pub fn toggle_favorites_view(&mut self) -> bool {
        let show = !self.criteria.show_favorites_only;
        self.set_show_favorites_only(show);
        show
    }

    /// Steps to the next category: all, then each category in order, then
    /// back to all.
    pub fn cycle_category(&mut self) {
        let next = match self.criteria.category.as_deref() {
            None => self.categories.first().cloned(),
            Some(current) => self
                .categories
                .iter()
                .position(|c| c == current)
                .and_then(|idx| self.categories.get(idx + 1))
                .cloned(),
        };
        self.set_category(next);
    }

    /// Steps to the next minimum-rating threshold, wrapping to no filter.
    pub fn cycle_min_rating(&mut self) {
        self.set_min_rating(self.criteria.min_rating.next());
    }

    /// Adds or removes `id` from the favorites and persists the set.
    ///
    /// The page is kept even when the favorites view shrinks under it.
    /// Returns whether `id` is now a favorite.
    pub fn toggle_favorite(&mut self, id: i64) -> bool {
        self.favorites = self.favorites.toggle(id);
        self.store.save(&self.favorites);
        let liked = self.favorites.contains(id);
        debug!("Product {} favorite: {}", id, liked);
        self.sync();
        liked
    }

    /// Toggles the favorite on the selected row. Returns the product id.
    pub fn toggle_selected_favorite(&mut self) -> Option<i64> {
        let id = self.selected()?.id;
        self.toggle_favorite(id);
        Some(id)
    }

    /// Jumps to `page` if it exists. Returns whether the page changed.
    pub fn set_page(&mut self, page: usize) -> bool {
        let changed = self.paginator.go_to(page);
        if changed {
            self.cursor = 0;
        }
        changed
    }

    pub fn next_page(&mut self) {
        if !self.paginator.on_last_page() {
            self.paginator.next_page();
            self.cursor = 0;
        }
    }

    pub fn prev_page(&mut self) {
        if !self.paginator.on_first_page() {
            self.paginator.prev_page();
            self.cursor = 0;
        }
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_down(&mut self) {
        let len = self.visible_products().len();
        if self.cursor + 1 < len {
            self.cursor += 1;
        }
    }

    /// The product under the cursor.
    pub fn selected(&self) -> Option<Product> {
        self.visible_products().into_iter().nth(self.cursor)
    }

    /// The products on the current page.
    pub fn visible_products(&self) -> Vec<Product> {
        let derived = self.derived();
        paginator::paginate(&derived, self.paginator.per_page, self.paginator.page).to_vec()
    }

    /// Derives the snapshot the view renders from.
    pub fn recompute(&self) -> ViewModel {
        let derived = self.derived();
        let visible =
            paginator::paginate(&derived, self.paginator.per_page, self.paginator.page).to_vec();
        let status = match &self.source {
            CatalogSource::Loading => CatalogStatus::Loading,
            CatalogSource::Ready(_) => CatalogStatus::Ready,
            CatalogSource::Unavailable(message) => CatalogStatus::Unavailable(message.clone()),
        };

        ViewModel {
            status,
            visible,
            total_count: self.source.products().len(),
            filtered_count: derived.len(),
            categories: self.categories.clone(),
            criteria: self.criteria.clone(),
            current_page: self.paginator.page,
            total_pages: self.paginator.total_pages,
            page_numbers: self.paginator.page_numbers(),
            favorites: self.favorites.clone(),
        }
    }

    fn derived(&self) -> Vec<Product> {
        derive(self.source.products(), &self.criteria, &self.favorites)
    }

    fn criteria_changed(&mut self) {
        self.paginator.reset();
        self.cursor = 0;
        self.sync();
    }

    /// Refreshes the page count and keeps the cursor on the page.
    pub(super) fn sync(&mut self) {
        let derived = self.derived();
        self.paginator.set_total_items(derived.len());
        let on_page = self.paginator.items_on_page(derived.len());
        self.cursor = self.cursor.min(on_page.saturating_sub(1));
    }
}
