//! The display snapshot produced by every recomputation.
//!
//! A [`ViewModel`] is an owned value: it does not borrow the catalog model and
//! does not change when the model does. Rendering reads only from it.

use super::types::{Criteria, Product};
use crate::favorites::FavoriteSet;
use crate::paginator::PageNumber;

/// Load status of the catalog as seen by the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogStatus {
    /// Still waiting for the products document.
    Loading,
    /// Products are available (possibly zero of them).
    Ready,
    /// Loading failed; the catalog renders empty with this message.
    Unavailable(String),
}

/// Everything needed to draw one frame of the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewModel {
    pub status: CatalogStatus,
    /// The products on the current page, in display order.
    pub visible: Vec<Product>,
    /// Size of the unfiltered catalog.
    pub total_count: usize,
    /// Size of the derived collection across all pages.
    pub filtered_count: usize,
    /// Every category in the catalog, sorted.
    pub categories: Vec<String>,
    pub criteria: Criteria,
    pub current_page: usize,
    pub total_pages: usize,
    pub page_numbers: Vec<PageNumber>,
    pub favorites: FavoriteSet,
}

impl ViewModel {
    /// Whether a product is favorited.
    pub fn is_favorite(&self, id: i64) -> bool {
        self.favorites.contains(id)
    }

    /// Number of favorites, shown as the navbar badge.
    pub fn favorite_count(&self) -> usize {
        self.favorites.len()
    }

    /// The `Showing N of M products` status line.
    pub fn results_summary(&self) -> String {
        format!(
            "Showing {} of {} products",
            self.filtered_count, self.total_count
        )
    }

    /// True when the pagination bar should be drawn.
    pub fn has_pagination(&self) -> bool {
        self.total_pages > 1
    }
}
