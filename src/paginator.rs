//! Pagination math and the page-number bar.
//!
//! This module does two things:
//!
//! - the free functions [`paginate`], [`page_count`] and [`page_numbers`]
//!   are the pure pagination contract: slicing a derived collection into
//!   pages and compacting the list of page numbers for display
//! - [`Model`] is the stateful pagination control used by the catalog
//!   component: it tracks the current page, handles prev/next keys and renders
//!   the `‹ Prev  1 2 3 4 … 10  Next ›` bar
//!
//! Pages are 1-based throughout. Page `0` and pages past the end are never
//! an error; they simply select nothing.

use crate::key::{self, KeyMap as KeyMapTrait};
use bubbletea_rs::{KeyMsg, Msg};
use crossterm::event::KeyCode;
use lipgloss_extras::prelude::*;
use std::fmt;

/// Number of products shown per page.
pub const PAGE_SIZE: usize = 8;

/// How many page numbers fit in the bar before it collapses with ellipses.
const MAX_VISIBLE_PAGES: usize = 5;

/// An entry in the compacted page-number sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageNumber {
    /// A clickable page number.
    Page(usize),
    /// A run of elided page numbers.
    Ellipsis,
}

impl fmt::Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageNumber::Page(n) => write!(f, "{n}"),
            PageNumber::Ellipsis => f.write_str("…"),
        }
    }
}

/// Returns the items on `current_page` (1-based).
///
/// The slice is `[(current_page - 1) * page_size, current_page * page_size)`
/// clipped to the collection. An out-of-range page, including page 0, yields
/// an empty slice.
///
/// # Examples
///
/// ```rust
/// use catalog_widgets::paginator::paginate;
///
/// let items: Vec<u32> = (1..=10).collect();
/// assert_eq!(paginate(&items, 8, 1), &[1, 2, 3, 4, 5, 6, 7, 8]);
/// assert_eq!(paginate(&items, 8, 2), &[9, 10]);
/// assert!(paginate(&items, 8, 5).is_empty());
/// ```
pub fn paginate<T>(filtered: &[T], page_size: usize, current_page: usize) -> &[T] {
    if current_page == 0 || page_size == 0 {
        return &[];
    }
    let start = (current_page - 1).saturating_mul(page_size);
    if start >= filtered.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(filtered.len());
    &filtered[start..end]
}

/// Number of pages needed for `filtered_len` items; zero items is zero pages.
///
/// ```rust
/// use catalog_widgets::paginator::page_count;
///
/// assert_eq!(page_count(0, 8), 0);
/// assert_eq!(page_count(8, 8), 1);
/// assert_eq!(page_count(9, 8), 2);
/// ```
pub fn page_count(filtered_len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    filtered_len.div_ceil(page_size)
}

/// Compacts the page numbers for display.
///
/// With five or fewer pages every number is listed. Beyond that the first
/// and last page are always shown and ellipses stand in for the elided runs:
///
/// | current page            | sequence                         |
/// |-------------------------|----------------------------------|
/// | `<= 3`                  | `1 2 3 4 … last`                 |
/// | `>= last - 2`           | `1 … last-3 last-2 last-1 last`  |
/// | otherwise               | `1 … cur-1 cur cur+1 … last`     |
///
/// ```rust
/// use catalog_widgets::paginator::{page_numbers, PageNumber::{Ellipsis, Page}};
///
/// assert_eq!(
///     page_numbers(5, 10),
///     vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
/// );
/// ```
pub fn page_numbers(current_page: usize, total_pages: usize) -> Vec<PageNumber> {
    use PageNumber::{Ellipsis, Page};

    if total_pages <= MAX_VISIBLE_PAGES {
        return (1..=total_pages).map(Page).collect();
    }

    let mut pages = Vec::with_capacity(7);
    if current_page <= 3 {
        pages.extend((1..=4).map(Page));
        pages.push(Ellipsis);
        pages.push(Page(total_pages));
    } else if current_page >= total_pages - 2 {
        pages.push(Page(1));
        pages.push(Ellipsis);
        pages.extend((total_pages - 3..=total_pages).map(Page));
    } else {
        pages.push(Page(1));
        pages.push(Ellipsis);
        pages.extend((current_page - 1..=current_page + 1).map(Page));
        pages.push(Ellipsis);
        pages.push(Page(total_pages));
    }
    pages
}

/// Key bindings for moving between pages.
#[derive(Debug, Clone)]
pub struct PaginatorKeyMap {
    /// Default keys: PageUp, Left Arrow, 'h'
    pub prev_page: key::Binding,
    /// Default keys: PageDown, Right Arrow, 'l'
    pub next_page: key::Binding,
    /// Default keys: Home
    pub first_page: key::Binding,
    /// Default keys: End
    pub last_page: key::Binding,
}

impl Default for PaginatorKeyMap {
    fn default() -> Self {
        Self {
            prev_page: key::Binding::new(vec![KeyCode::PageUp, KeyCode::Left, KeyCode::Char('h')])
                .with_help("←/h", "prev page"),
            next_page: key::Binding::new(vec![
                KeyCode::PageDown,
                KeyCode::Right,
                KeyCode::Char('l'),
            ])
            .with_help("→/l", "next page"),
            first_page: key::Binding::new(vec![KeyCode::Home]).with_help("home", "first page"),
            last_page: key::Binding::new(vec![KeyCode::End]).with_help("end", "last page"),
        }
    }
}

impl KeyMapTrait for PaginatorKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![&self.prev_page, &self.next_page]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![vec![
            &self.prev_page,
            &self.next_page,
            &self.first_page,
            &self.last_page,
        ]]
    }
}

/// Styles for the pagination bar.
#[derive(Debug, Clone)]
pub struct PaginatorStyles {
    /// The `‹ Prev` / `Next ›` buttons when they can be used.
    pub button: Style,
    /// The buttons on the first/last page.
    pub button_disabled: Style,
    /// The current page number.
    pub active_page: Style,
    /// Every other page number.
    pub page: Style,
    /// The `…` marker.
    pub ellipsis: Style,
}

impl Default for PaginatorStyles {
    fn default() -> Self {
        let subdued = AdaptiveColor {
            Light: "#9B9B9B",
            Dark: "#5C5C5C",
        };
        Self {
            button: Style::new().foreground(AdaptiveColor {
                Light: "#1a1a1a",
                Dark: "#dddddd",
            }),
            button_disabled: Style::new().foreground(subdued.clone()),
            active_page: Style::new()
                .background(Color::from("62"))
                .foreground(Color::from("230"))
                .bold(true),
            page: Style::new().foreground(AdaptiveColor {
                Light: "#847A85",
                Dark: "#979797",
            }),
            ellipsis: Style::new().foreground(subdued),
        }
    }
}

/// Pagination state for a derived collection.
///
/// `page` is 1-based. With zero items there are zero pages and `page` stays
/// at 1; slicing then yields nothing.
///
/// # Examples
///
/// ```rust
/// use catalog_widgets::paginator::Model;
///
/// let mut paginator = Model::new().with_total_items(20); // 8 per page
/// assert_eq!(paginator.total_pages, 3);
///
/// paginator.next_page();
/// assert_eq!(paginator.page, 2);
/// assert_eq!(paginator.get_slice_bounds(20), (8, 16));
///
/// paginator.go_to(7); // out of range, ignored
/// assert_eq!(paginator.page, 2);
/// ```
#[derive(Debug, Clone)]
pub struct Model {
    /// The current page, starting at 1.
    pub page: usize,
    /// The number of items per page.
    pub per_page: usize,
    /// The total number of pages; 0 when there is nothing to show.
    pub total_pages: usize,
    /// Key bindings.
    pub keymap: PaginatorKeyMap,
    /// Bar styles.
    pub styles: PaginatorStyles,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: PAGE_SIZE,
            total_pages: 0,
            keymap: PaginatorKeyMap::default(),
            styles: PaginatorStyles::default(),
        }
    }
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of items per page (builder pattern); clamped to at least 1.
    pub fn with_per_page(mut self, per_page: usize) -> Self {
        self.per_page = per_page.max(1);
        self
    }

    /// Sets the total number of items (builder pattern).
    pub fn with_total_items(mut self, items: usize) -> Self {
        self.set_total_items(items);
        self
    }

    /// Recomputes `total_pages` for `items`.
    ///
    /// The current page is left alone even if it is now past the end; the
    /// catalog resets it explicitly when criteria change, and an out-of-range
    /// page just renders an empty slice.
    pub fn set_total_items(&mut self, items: usize) {
        self.total_pages = page_count(items, self.per_page);
    }

    /// Jumps to `page` if it exists. Returns whether the page changed.
    pub fn go_to(&mut self, page: usize) -> bool {
        if page == 0 || page > self.total_pages || page == self.page {
            return false;
        }
        self.page = page;
        true
    }

    /// Back to page 1.
    pub fn reset(&mut self) {
        self.page = 1;
    }

    pub fn prev_page(&mut self) {
        if !self.on_first_page() {
            self.page -= 1;
        }
    }

    pub fn next_page(&mut self) {
        if !self.on_last_page() {
            self.page += 1;
        }
    }

    /// True on page 1, where the Prev button is disabled.
    pub fn on_first_page(&self) -> bool {
        self.page <= 1
    }

    /// True on the last page (or when there are no pages), where Next is disabled.
    pub fn on_last_page(&self) -> bool {
        self.page >= self.total_pages
    }

    /// Half-open `(start, end)` indices of the current page within `length`
    /// items; `(length, length)` when the page is out of range.
    pub fn get_slice_bounds(&self, length: usize) -> (usize, usize) {
        if self.page == 0 {
            return (length, length);
        }
        let start = ((self.page - 1) * self.per_page).min(length);
        let end = (start + self.per_page).min(length);
        (start, end)
    }

    /// Number of items visible on the current page.
    pub fn items_on_page(&self, total_items: usize) -> usize {
        let (start, end) = self.get_slice_bounds(total_items);
        end - start
    }

    /// The compacted page numbers for the current state.
    pub fn page_numbers(&self) -> Vec<PageNumber> {
        page_numbers(self.page, self.total_pages)
    }

    /// Handles prev/next/first/last key presses. Returns whether the page changed.
    pub fn update(&mut self, msg: &Msg) -> bool {
        let Some(key_msg) = msg.downcast_ref::<KeyMsg>() else {
            return false;
        };
        let before = self.page;
        if self.keymap.next_page.matches(key_msg) {
            self.next_page();
        } else if self.keymap.prev_page.matches(key_msg) {
            self.prev_page();
        } else if self.keymap.first_page.matches(key_msg) {
            self.go_to(1);
        } else if self.keymap.last_page.matches(key_msg) {
            self.go_to(self.total_pages);
        }
        before != self.page
    }

    /// Renders the pagination bar.
    ///
    /// Nothing is rendered when there is at most one page.
    pub fn view(&self) -> String {
        if self.total_pages <= 1 {
            return String::new();
        }

        let prev_style = if self.on_first_page() {
            &self.styles.button_disabled
        } else {
            &self.styles.button
        };
        let next_style = if self.on_last_page() {
            &self.styles.button_disabled
        } else {
            &self.styles.button
        };

        let numbers: Vec<String> = self
            .page_numbers()
            .into_iter()
            .map(|entry| match entry {
                PageNumber::Page(n) if n == self.page => {
                    self.styles.active_page.clone().render(&format!(" {n} "))
                }
                PageNumber::Page(n) => self.styles.page.clone().render(&format!(" {n} ")),
                PageNumber::Ellipsis => self.styles.ellipsis.clone().render(" … "),
            })
            .collect();

        format!(
            "{}  {}  {}",
            prev_style.clone().render("‹ Prev"),
            numbers.join(""),
            next_style.clone().render("Next ›")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::PageNumber::{Ellipsis, Page};
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key_msg(code: KeyCode) -> Msg {
        Box::new(KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        }) as Msg
    }

    fn plain(s: &str) -> String {
        lipgloss_extras::lipgloss::strip_ansi(s)
    }

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, 8), 0);
        assert_eq!(page_count(1, 8), 1);
        assert_eq!(page_count(8, 8), 1);
        assert_eq!(page_count(9, 8), 2);
        assert_eq!(page_count(16, 8), 2);
        assert_eq!(page_count(17, 8), 3);
        assert_eq!(page_count(5, 0), 0);
    }

    #[test]
    fn test_paginate_slices_and_clips() {
        let items: Vec<usize> = (0..19).collect();
        assert_eq!(paginate(&items, 8, 1), &items[0..8]);
        assert_eq!(paginate(&items, 8, 2), &items[8..16]);
        assert_eq!(paginate(&items, 8, 3), &items[16..19]);
    }

    #[test]
    fn test_paginate_out_of_range_is_empty() {
        let items: Vec<usize> = (0..12).collect();
        assert_eq!(page_count(items.len(), 8), 2);
        assert!(paginate(&items, 8, 5).is_empty());
        assert!(paginate(&items, 8, 3).is_empty());
        assert!(paginate(&items, 8, 0).is_empty());
        assert!(paginate::<usize>(&[], 8, 1).is_empty());
        assert!(paginate(&items, 8, usize::MAX).is_empty());
    }

    #[test]
    fn test_page_numbers_small_totals_are_complete() {
        assert!(page_numbers(1, 0).is_empty());
        assert_eq!(page_numbers(1, 1), vec![Page(1)]);
        assert_eq!(
            page_numbers(3, 5),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5)]
        );
    }

    #[test]
    fn test_page_numbers_near_start() {
        let expected = vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(10)];
        assert_eq!(page_numbers(1, 10), expected);
        assert_eq!(page_numbers(2, 10), expected);
        assert_eq!(page_numbers(3, 10), expected);
    }

    #[test]
    fn test_page_numbers_near_end() {
        let expected = vec![Page(1), Ellipsis, Page(7), Page(8), Page(9), Page(10)];
        assert_eq!(page_numbers(8, 10), expected);
        assert_eq!(page_numbers(9, 10), expected);
        assert_eq!(page_numbers(10, 10), expected);
    }

    #[test]
    fn test_page_numbers_middle() {
        assert_eq!(
            page_numbers(5, 10),
            vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
        );
        assert_eq!(
            page_numbers(4, 6),
            vec![Page(1), Ellipsis, Page(3), Page(4), Page(5), Page(6)]
        );
    }

    #[test]
    fn test_page_numbers_six_pages() {
        assert_eq!(
            page_numbers(3, 6),
            vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(6)]
        );
    }

    #[test]
    fn test_page_number_display() {
        let rendered: Vec<String> = page_numbers(1, 10).iter().map(|p| p.to_string()).collect();
        assert_eq!(rendered, vec!["1", "2", "3", "4", "…", "10"]);
    }

    #[test]
    fn test_model_defaults() {
        let m = Model::new();
        assert_eq!(m.page, 1);
        assert_eq!(m.per_page, PAGE_SIZE);
        assert_eq!(m.total_pages, 0);
        assert!(m.on_first_page());
        assert!(m.on_last_page());
    }

    #[test]
    fn test_model_navigation_stops_at_bounds() {
        let mut m = Model::new().with_total_items(17);
        assert_eq!(m.total_pages, 3);
        m.prev_page();
        assert_eq!(m.page, 1);
        m.next_page();
        m.next_page();
        m.next_page();
        assert_eq!(m.page, 3);
        assert!(m.on_last_page());
    }

    #[test]
    fn test_model_go_to_is_bounds_checked() {
        let mut m = Model::new().with_total_items(40);
        assert!(m.go_to(5));
        assert_eq!(m.page, 5);
        assert!(!m.go_to(6));
        assert!(!m.go_to(0));
        assert!(!m.go_to(5));
        assert_eq!(m.page, 5);
    }

    #[test]
    fn test_model_slice_bounds() {
        let mut m = Model::new().with_per_page(8).with_total_items(20);
        assert_eq!(m.get_slice_bounds(20), (0, 8));
        m.page = 3;
        assert_eq!(m.get_slice_bounds(20), (16, 20));
        assert_eq!(m.items_on_page(20), 4);
        m.page = 4;
        assert_eq!(m.get_slice_bounds(20), (20, 20));
        assert_eq!(m.items_on_page(20), 0);
    }

    #[test]
    fn test_shrinking_total_keeps_page() {
        let mut m = Model::new().with_total_items(40);
        m.go_to(4);
        m.set_total_items(9);
        assert_eq!(m.total_pages, 2);
        assert_eq!(m.page, 4);
        assert_eq!(m.items_on_page(9), 0);
    }

    #[test]
    fn test_model_key_updates() {
        let mut m = Model::new().with_total_items(30);
        assert!(m.update(&key_msg(KeyCode::Right)));
        assert_eq!(m.page, 2);
        assert!(m.update(&key_msg(KeyCode::End)));
        assert_eq!(m.page, 4);
        assert!(!m.update(&key_msg(KeyCode::Char('l'))));
        assert!(m.update(&key_msg(KeyCode::Home)));
        assert_eq!(m.page, 1);
        assert!(!m.update(&key_msg(KeyCode::Char('x'))));
        assert!(!m.update(&(Box::new(42u32) as Msg)));
    }

    #[test]
    fn test_view_hidden_for_single_page() {
        assert_eq!(Model::new().with_total_items(0).view(), "");
        assert_eq!(Model::new().with_total_items(8).view(), "");
    }

    #[test]
    fn test_view_lists_compacted_numbers() {
        let m = Model::new().with_total_items(80);
        let view = plain(&m.view());
        assert!(view.starts_with("‹ Prev"));
        assert!(view.ends_with("Next ›"));
        assert!(view.contains(" 1  2  3  4  …  10 "));
    }
}
