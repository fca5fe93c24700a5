//! Styles for the catalog component.
//!
//! All colors are adaptive so the catalog reads well on light and dark
//! terminals.

use lipgloss_extras::prelude::*;

/// Filled rating star.
pub const STAR_FILLED: &str = "★";
/// Empty rating star.
pub const STAR_EMPTY: &str = "☆";
/// Favorite marker.
pub const HEART: &str = "♥";
/// Marker for a product that is not a favorite.
pub const HEART_EMPTY: &str = "♡";

#[derive(Debug, Clone)]
pub struct CatalogStyles {
    /// Brand in the navbar.
    pub title: Style,
    /// Navbar favorites button.
    pub favorites_button: Style,
    /// Navbar favorites button while the favorites view is active.
    pub favorites_button_active: Style,
    /// Count badge next to the favorites button.
    pub favorites_badge: Style,
    /// Filter bar labels.
    pub filter_label: Style,
    /// Filter bar values.
    pub filter_value: Style,
    /// Active sort direction.
    pub sort_active: Style,
    /// Inactive sort direction.
    pub sort_inactive: Style,
    /// `Showing N of M products`.
    pub results: Style,
    /// Product name of the selected card.
    pub selected_name: Style,
    /// Product name.
    pub name: Style,
    /// Category tag on a card.
    pub category: Style,
    /// Rating stars.
    pub stars: Style,
    /// Price.
    pub price: Style,
    /// Favorite heart.
    pub heart: Style,
    /// Heading of the empty/loading/error panels.
    pub notice_title: Style,
    /// Body of the empty/loading/error panels.
    pub notice_body: Style,
    /// Pagination bar container.
    pub pagination: Style,
    /// Help line container.
    pub help: Style,
}

impl Default for CatalogStyles {
    fn default() -> Self {
        let subdued = AdaptiveColor {
            Light: "#9B9B9B",
            Dark: "#5C5C5C",
        };
        let accent = AdaptiveColor {
            Light: "#E11D48",
            Dark: "#FB7185",
        };

        Self {
            title: Style::new()
                .background(Color::from("62"))
                .foreground(Color::from("230"))
                .bold(true)
                .padding(0, 1, 0, 1),
            favorites_button: Style::new().foreground(subdued.clone()),
            favorites_button_active: Style::new().foreground(accent.clone()).bold(true),
            favorites_badge: Style::new()
                .background(accent.clone())
                .foreground(Color::from("230"))
                .padding(0, 1, 0, 1),
            filter_label: Style::new().foreground(subdued.clone()),
            filter_value: Style::new().foreground(AdaptiveColor {
                Light: "#1a1a1a",
                Dark: "#dddddd",
            }),
            sort_active: Style::new()
                .foreground(AdaptiveColor {
                    Light: "#04B575",
                    Dark: "#ECFD65",
                })
                .bold(true),
            sort_inactive: Style::new().foreground(subdued.clone()),
            results: Style::new().foreground(AdaptiveColor {
                Light: "#A49FA5",
                Dark: "#777777",
            }),
            selected_name: Style::new()
                .foreground(AdaptiveColor {
                    Light: "#EE6FF8",
                    Dark: "#EE6FF8",
                })
                .bold(true),
            name: Style::new().foreground(AdaptiveColor {
                Light: "#1a1a1a",
                Dark: "#dddddd",
            }),
            category: Style::new().foreground(subdued.clone()),
            stars: Style::new().foreground(AdaptiveColor {
                Light: "#D97706",
                Dark: "#FBBF24",
            }),
            price: Style::new().bold(true),
            heart: Style::new().foreground(accent),
            notice_title: Style::new().bold(true),
            notice_body: Style::new().foreground(subdued),
            pagination: Style::new().padding(0, 0, 0, 2),
            help: Style::new().padding(1, 0, 0, 2),
        }
    }
}
