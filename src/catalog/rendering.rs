//! View rendering for the catalog component.
//!
//! Every frame is drawn from a single [`ViewModel`] snapshot:
//! - navbar with the brand and the `Liked` button with its count badge
//! - filter bar and the `Showing N of M products` line
//! - one row per visible product, or a notice when there is nothing to show
//! - pagination bar and help line

use super::api::{CatalogStatus, ViewModel};
use super::style::{HEART, HEART_EMPTY, STAR_EMPTY, STAR_FILLED};
use super::types::{Product, SortOrder};
use super::Model;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const NAME_WIDTH: usize = 28;
const CATEGORY_WIDTH: usize = 14;

/// Formats a price with Indian digit grouping.
///
/// The last three integer digits form one group and the rest are grouped in
/// pairs. At most three fraction digits are kept and trailing zeros dropped.
///
/// ```rust
/// use catalog_widgets::catalog::format_price;
///
/// assert_eq!(format_price(899.0), "899");
/// assert_eq!(format_price(123456.0), "1,23,456");
/// assert_eq!(format_price(1250.5), "1,250.5");
/// ```
pub fn format_price(price: f64) -> String {
    if !price.is_finite() {
        return price.to_string();
    }
    let fixed = format!("{:.3}", price.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::new();
    if price < 0.0 && (int_part != "0" || !frac_part.is_empty()) {
        out.push('-');
    }
    out.push_str(&group_digits(int_part));
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

fn group_digits(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (mut rest, last_three) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    while rest.len() > 2 {
        let (head, pair) = rest.split_at(rest.len() - 2);
        groups.push(pair);
        rest = head;
    }
    if !rest.is_empty() {
        groups.push(rest);
    }
    groups.reverse();
    format!("{},{}", groups.join(","), last_three)
}

/// Five stars for a rating: the whole part filled, plus one more when the
/// fractional part is at least one half.
///
/// ```rust
/// use catalog_widgets::catalog::render_stars;
///
/// assert_eq!(render_stars(3.5), "★★★★☆");
/// assert_eq!(render_stars(4.2), "★★★★☆");
/// assert_eq!(render_stars(0.0), "☆☆☆☆☆");
/// ```
pub fn render_stars(rating: f64) -> String {
    let rating = rating.clamp(0.0, 5.0);
    let whole = rating.floor();
    let mut filled = whole as usize;
    if rating - whole >= 0.5 {
        filled += 1;
    }
    let filled = filled.min(5);
    format!("{}{}", STAR_FILLED.repeat(filled), STAR_EMPTY.repeat(5 - filled))
}

/// Pads or truncates `s` to exactly `width` terminal columns.
fn fit(s: &str, width: usize) -> String {
    if s.width() <= width {
        return format!("{}{}", s, " ".repeat(width - s.width()));
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    used += 1;
    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}

impl Model {
    pub(super) fn view_navbar(&self, vm: &ViewModel) -> String {
        let title = self.styles.title.clone().render(&self.title);
        let button_style = if vm.criteria.show_favorites_only() {
            &self.styles.favorites_button_active
        } else {
            &self.styles.favorites_button
        };
        let mut button = button_style.clone().render(&format!("{HEART} Liked"));
        if vm.favorite_count() > 0 {
            button.push(' ');
            button.push_str(
                &self
                    .styles
                    .favorites_badge
                    .clone()
                    .render(&vm.favorite_count().to_string()),
            );
        }
        format!("{title}  {button}")
    }

    pub(super) fn view_filter_bar(&self, vm: &ViewModel) -> String {
        let label = |s: &str| self.styles.filter_label.clone().render(s);
        let value = |s: &str| self.styles.filter_value.clone().render(s);
        let sort = |text: &str, order: SortOrder| {
            if vm.criteria.sort_order() == order {
                self.styles.sort_active.clone().render(text)
            } else {
                self.styles.sort_inactive.clone().render(text)
            }
        };

        let filters = format!(
            "{} {}   {} {}   {} {} {}",
            label("Category:"),
            value(vm.criteria.category().unwrap_or("All Categories")),
            label("Min Rating:"),
            value(vm.criteria.min_rating().label()),
            label("Sort by Price:"),
            sort("Low ↑", SortOrder::Ascending),
            sort("High ↓", SortOrder::Descending),
        );
        let results = self.styles.results.clone().render(&vm.results_summary());
        format!("{filters}\n{results}")
    }

    fn view_product(&self, product: &Product, selected: bool, liked: bool) -> String {
        let cursor = if selected { "›" } else { " " };
        let heart = if liked {
            self.styles.heart.clone().render(HEART)
        } else {
            self.styles.category.clone().render(HEART_EMPTY)
        };
        let name_style = if selected {
            &self.styles.selected_name
        } else {
            &self.styles.name
        };
        format!(
            "{cursor} {heart} {}  {}  {} ({})  {}",
            name_style.clone().render(&fit(&product.name, NAME_WIDTH)),
            self.styles
                .category
                .clone()
                .render(&fit(&product.category, CATEGORY_WIDTH)),
            self.styles.stars.clone().render(&render_stars(product.rating)),
            product.rating,
            self.styles.price.clone().render(&format_price(product.price)),
        )
    }

    pub(super) fn view_products(&self, vm: &ViewModel) -> String {
        if vm.visible.is_empty() {
            return self.view_notice(
                "No products found",
                "Try adjusting your filters to find what you're looking for.",
            );
        }
        vm.visible
            .iter()
            .enumerate()
            .map(|(i, product)| {
                self.view_product(product, i == self.cursor, vm.is_favorite(product.id))
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub(super) fn view_notice(&self, heading: &str, body: &str) -> String {
        format!(
            "{}\n{}",
            self.styles.notice_title.clone().render(heading),
            self.styles.notice_body.clone().render(body)
        )
    }

    pub(super) fn view_footer(&self, vm: &ViewModel) -> String {
        let mut footer = String::new();
        if vm.has_pagination() {
            footer.push_str(&self.styles.pagination.clone().render(&self.paginator.view()));
        }
        let help = self.help.view(self);
        if !help.is_empty() {
            if !footer.is_empty() {
                footer.push('\n');
            }
            footer.push_str(&self.styles.help.clone().render(&help));
        }
        footer
    }

    /// Composes the whole frame.
    pub(super) fn view_catalog(&self) -> String {
        let vm = self.recompute();
        let mut sections = vec![self.view_navbar(&vm)];
        match &vm.status {
            CatalogStatus::Loading => sections.push(self.view_notice(
                "Loading products...",
                "Please wait while we fetch the latest products for you.",
            )),
            CatalogStatus::Unavailable(message) => {
                sections.push(self.view_notice("Oops! Something went wrong", message))
            }
            CatalogStatus::Ready => {
                sections.push(self.view_filter_bar(&vm));
                sections.push(self.view_products(&vm));
            }
        }
        let footer = self.view_footer(&vm);
        if !footer.is_empty() {
            sections.push(footer);
        }
        sections.join("\n\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price_grouping() {
        assert_eq!(format_price(0.0), "0");
        assert_eq!(format_price(999.0), "999");
        assert_eq!(format_price(1499.0), "1,499");
        assert_eq!(format_price(99999.0), "99,999");
        assert_eq!(format_price(123456.0), "1,23,456");
        assert_eq!(format_price(10000000.0), "1,00,00,000");
    }

    #[test]
    fn test_format_price_fraction() {
        assert_eq!(format_price(1250.5), "1,250.5");
        assert_eq!(format_price(19.99), "19.99");
        assert_eq!(format_price(2.125), "2.125");
        assert_eq!(format_price(7.10), "7.1");
    }

    #[test]
    fn test_render_stars() {
        assert_eq!(render_stars(5.0), "★★★★★");
        assert_eq!(render_stars(4.5), "★★★★★");
        assert_eq!(render_stars(4.49), "★★★★☆");
        assert_eq!(render_stars(1.0), "★☆☆☆☆");
        assert_eq!(render_stars(0.5), "★☆☆☆☆");
    }

    #[test]
    fn test_fit_pads_and_truncates() {
        assert_eq!(fit("Mug", 6), "Mug   ");
        assert_eq!(fit("Notebook", 5), "Note…");
        assert_eq!(fit("カメラ", 4), "カ… ");
        assert_eq!(fit("exact", 5), "exact");
    }
}
