//! Core types for the catalog: products, the criteria a user picks, and the
//! enumerated domains those criteria draw from.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Trait for items the derivation pipeline can filter and sort.
///
/// [`Product`] is the implementation the catalog component uses; the pipeline
/// functions in [`filtering`](super::filtering) are generic so they can run
/// over any record that exposes these four fields.
pub trait Item: Clone {
    /// Stable unique identifier, used for favorites membership.
    fn id(&self) -> i64;
    /// Category name, matched exactly and case-sensitively.
    fn category(&self) -> &str;
    /// Rating in `[0, 5]`.
    fn rating(&self) -> f64;
    /// Non-negative price.
    fn price(&self) -> f64;
}

/// A catalog entry as decoded from the products document.
///
/// # Examples
///
/// ```rust
/// use catalog_widgets::catalog::Product;
///
/// let json = r#"{"id":1,"name":"Desk Lamp","image":"/img/lamp.jpg",
///                "price":1499,"category":"Home","rating":4.2}"#;
/// let product: Product = serde_json::from_str(json).unwrap();
/// assert_eq!(product.name, "Desk Lamp");
/// assert_eq!(product.price, 1499.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub image: String,
    pub price: f64,
    pub category: String,
    pub rating: f64,
}

impl Product {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        category: impl Into<String>,
        price: f64,
        rating: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            image: String::new(),
            price,
            category: category.into(),
            rating,
        }
    }

    /// Sets the image reference (builder pattern).
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl Item for Product {
    fn id(&self) -> i64 {
        self.id
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn rating(&self) -> f64 {
        self.rating
    }

    fn price(&self) -> f64 {
        self.price
    }
}

/// Price ordering of the derived collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Keep the catalog order.
    #[default]
    None,
    /// Cheapest first.
    Ascending,
    /// Most expensive first.
    Descending,
}

impl SortOrder {
    /// Applies the sort button policy: requesting the active direction turns
    /// sorting off, requesting anything else switches to it.
    ///
    /// ```rust
    /// use catalog_widgets::catalog::SortOrder;
    ///
    /// let order = SortOrder::None.toggled(SortOrder::Ascending);
    /// assert_eq!(order, SortOrder::Ascending);
    /// assert_eq!(order.toggled(SortOrder::Ascending), SortOrder::None);
    /// assert_eq!(order.toggled(SortOrder::Descending), SortOrder::Descending);
    /// ```
    pub fn toggled(self, requested: SortOrder) -> SortOrder {
        if self == requested {
            SortOrder::None
        } else {
            requested
        }
    }
}

/// The minimum-rating choices offered by the filter bar.
///
/// Only these five thresholds exist; there is no way to filter by an
/// arbitrary rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RatingThreshold {
    /// No rating filter.
    #[default]
    Any,
    Three,
    ThreeAndHalf,
    Four,
    FourAndHalf,
}

impl RatingThreshold {
    /// All thresholds in the order the filter bar lists them.
    pub const ALL: [RatingThreshold; 5] = [
        RatingThreshold::Any,
        RatingThreshold::Three,
        RatingThreshold::ThreeAndHalf,
        RatingThreshold::Four,
        RatingThreshold::FourAndHalf,
    ];

    /// Numeric threshold; `0.0` means no filter.
    pub fn value(self) -> f64 {
        match self {
            RatingThreshold::Any => 0.0,
            RatingThreshold::Three => 3.0,
            RatingThreshold::ThreeAndHalf => 3.5,
            RatingThreshold::Four => 4.0,
            RatingThreshold::FourAndHalf => 4.5,
        }
    }

    /// Looks up the threshold for a numeric value, if it is one of the five.
    pub fn from_value(value: f64) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.value() == value)
    }

    /// Human label, e.g. `"3.5+ Stars"`.
    pub fn label(self) -> &'static str {
        match self {
            RatingThreshold::Any => "All Ratings",
            RatingThreshold::Three => "3+ Stars",
            RatingThreshold::ThreeAndHalf => "3.5+ Stars",
            RatingThreshold::Four => "4+ Stars",
            RatingThreshold::FourAndHalf => "4.5+ Stars",
        }
    }

    /// The next threshold, wrapping from 4.5 back to Any.
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

/// The user's current filter, sort and view selections.
///
/// `Criteria` is a plain value. Inside the catalog [`Model`](super::Model) it
/// changes only through the model's setters, which is where the page-reset
/// rule lives; the `with_*` builders exist for constructing criteria directly
/// when calling [`derive`](super::derive).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Criteria {
    pub(crate) category: Option<String>,
    pub(crate) min_rating: RatingThreshold,
    pub(crate) sort_order: SortOrder,
    pub(crate) show_favorites_only: bool,
}

impl Criteria {
    /// Criteria that keep everything in catalog order.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_min_rating(mut self, min_rating: RatingThreshold) -> Self {
        self.min_rating = min_rating;
        self
    }

    pub fn with_sort_order(mut self, sort_order: SortOrder) -> Self {
        self.sort_order = sort_order;
        self
    }

    pub fn with_show_favorites_only(mut self, show: bool) -> Self {
        self.show_favorites_only = show;
        self
    }

    /// Selected category, `None` for all categories.
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn min_rating(&self) -> RatingThreshold {
        self.min_rating
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    pub fn show_favorites_only(&self) -> bool {
        self.show_favorites_only
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_threshold_values() {
        let values: Vec<f64> = RatingThreshold::ALL.iter().map(|t| t.value()).collect();
        assert_eq!(values, vec![0.0, 3.0, 3.5, 4.0, 4.5]);
    }

    #[test]
    fn test_rating_threshold_from_value() {
        assert_eq!(RatingThreshold::from_value(3.5), Some(RatingThreshold::ThreeAndHalf));
        assert_eq!(RatingThreshold::from_value(0.0), Some(RatingThreshold::Any));
        assert_eq!(RatingThreshold::from_value(2.0), None);
        assert_eq!(RatingThreshold::from_value(4.2), None);
    }

    #[test]
    fn test_rating_threshold_cycles() {
        let mut t = RatingThreshold::Any;
        let mut seen = vec![t];
        for _ in 0..5 {
            t = t.next();
            seen.push(t);
        }
        assert_eq!(seen.first(), seen.last());
        assert_eq!(seen[1], RatingThreshold::Three);
        assert_eq!(seen[4], RatingThreshold::FourAndHalf);
    }

    #[test]
    fn test_sort_toggle_is_tri_state() {
        use SortOrder::*;
        assert_eq!(None.toggled(Ascending), Ascending);
        assert_eq!(Ascending.toggled(Ascending), None);
        assert_eq!(Ascending.toggled(Descending), Descending);
        assert_eq!(Descending.toggled(Descending), None);
        assert_eq!(Descending.toggled(Ascending), Ascending);
    }

    #[test]
    fn test_product_decodes_integer_price() {
        let p: Product = serde_json::from_str(
            r#"{"id":3,"name":"Mug","image":"m.png","price":250,"category":"Kitchen","rating":4}"#,
        )
        .unwrap();
        assert_eq!(p, Product::new(3, "Mug", "Kitchen", 250.0, 4.0).with_image("m.png"));
        assert_eq!(p.to_string(), "Mug");
    }

    #[test]
    fn test_criteria_builders() {
        let c = Criteria::new()
            .with_category("Books")
            .with_min_rating(RatingThreshold::Four)
            .with_sort_order(SortOrder::Descending)
            .with_show_favorites_only(true);
        assert_eq!(c.category(), Some("Books"));
        assert_eq!(c.min_rating(), RatingThreshold::Four);
        assert_eq!(c.sort_order(), SortOrder::Descending);
        assert!(c.show_favorites_only());
        assert_eq!(Criteria::default().category(), Option::None);
    }
}
