//! The derivation pipeline: turning the full catalog plus the user's criteria
//! into the ordered collection to paginate.
//!
//! Both functions here are pure. They read the unfiltered collection and
//! return owned results; nothing is cached between calls, the catalog model
//! simply calls them again after every change.

use super::types::{Criteria, Item, SortOrder};
use crate::favorites::FavoriteSet;
use std::cmp::Ordering;

/// Applies the criteria to `items` and returns the filtered, sorted sequence.
///
/// # Pipeline
///
/// The steps run in a fixed order:
///
/// 1. **Favorites view**: when `show_favorites_only` is set, keep only items
///    whose id is in `favorites`
/// 2. **Category**: when a category is selected, keep exact
///    (case-sensitive) matches
/// 3. **Rating**: when the threshold is above zero, keep items rated at or
///    above it
/// 4. **Sort**: when a sort order is set, stable-sort by price
///
/// The sort is stable in both directions: products with equal prices keep
/// the relative order they had after filtering. Descending order is not a
/// reversed ascending sort, which would flip ties.
///
/// # Examples
///
/// ```rust
/// use catalog_widgets::catalog::{derive, Criteria, Product, RatingThreshold, SortOrder};
/// use catalog_widgets::favorites::FavoriteSet;
///
/// let items = vec![
///     Product::new(1, "Kettle", "Kitchen", 900.0, 4.5),
///     Product::new(2, "Novel", "Books", 300.0, 3.9),
///     Product::new(3, "Toaster", "Kitchen", 1200.0, 3.2),
/// ];
/// let criteria = Criteria::new()
///     .with_category("Kitchen")
///     .with_sort_order(SortOrder::Descending);
///
/// let result = derive(&items, &criteria, &FavoriteSet::new());
/// let ids: Vec<i64> = result.iter().map(|p| p.id).collect();
/// assert_eq!(ids, vec![3, 1]);
///
/// let rated = derive(&items, &Criteria::new().with_min_rating(RatingThreshold::Four), &FavoriteSet::new());
/// assert_eq!(rated.len(), 1);
/// ```
pub fn derive<I: Item>(items: &[I], criteria: &Criteria, favorites: &FavoriteSet) -> Vec<I> {
    let min_rating = criteria.min_rating.value();

    let mut result: Vec<I> = items
        .iter()
        .filter(|item| !criteria.show_favorites_only || favorites.contains(item.id()))
        .filter(|item| match criteria.category.as_deref() {
            Some(category) => item.category() == category,
            None => true,
        })
        .filter(|item| min_rating <= 0.0 || item.rating() >= min_rating)
        .cloned()
        .collect();

    match criteria.sort_order {
        SortOrder::None => {}
        SortOrder::Ascending => result.sort_by(|a, b| compare_price(a, b)),
        SortOrder::Descending => result.sort_by(|a, b| compare_price(b, a)),
    }

    result
}

/// Orders by price; a NaN price compares equal to everything.
fn compare_price<I: Item>(a: &I, b: &I) -> Ordering {
    a.price().partial_cmp(&b.price()).unwrap_or(Ordering::Equal)
}

/// Returns the distinct categories of the unfiltered collection in
/// lexicographic order.
///
/// This always reads the full catalog so the category selector offers every
/// category regardless of which filters are active.
///
/// ```rust
/// use catalog_widgets::catalog::{distinct_categories, Product};
///
/// let items = vec![
///     Product::new(1, "A", "Toys", 10.0, 4.0),
///     Product::new(2, "B", "Books", 10.0, 4.0),
///     Product::new(3, "C", "Toys", 10.0, 4.0),
/// ];
/// assert_eq!(distinct_categories(&items), vec!["Books", "Toys"]);
/// ```
pub fn distinct_categories<I: Item>(items: &[I]) -> Vec<String> {
    let mut categories: Vec<String> = items.iter().map(|i| i.category().to_string()).collect();
    categories.sort();
    categories.dedup();
    categories
}
