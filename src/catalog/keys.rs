//! Key bindings for the catalog component.
//!
//! ## Browsing
//!
//! - **Selection**: `↑/k` (up), `↓/j` (down)
//! - **Pages**: `←/h/pgup`, `→/l/pgdn`, `home`, `end` (see [`PaginatorKeyMap`](crate::paginator::PaginatorKeyMap))
//! - **Favorite**: `space` toggles the selected product
//!
//! ## Criteria
//!
//! - `c` next category, `r` next minimum rating
//! - `a` sort price low to high, `d` high to low (press again to clear)
//! - `f` show only favorites
//!
//! ## Help and Quit
//!
//! - `?` toggles the full help, `q`/`ctrl+c` quits

use crate::key;
use crossterm::event::{KeyCode, KeyModifiers};

/// Key bindings for browsing the catalog and changing criteria.
#[derive(Debug, Clone)]
pub struct CatalogKeyMap {
    pub cursor_up: key::Binding,
    pub cursor_down: key::Binding,
    pub toggle_favorite: key::Binding,
    pub cycle_category: key::Binding,
    pub cycle_rating: key::Binding,
    pub sort_ascending: key::Binding,
    pub sort_descending: key::Binding,
    pub toggle_favorites_view: key::Binding,
    pub show_full_help: key::Binding,
    pub quit: key::Binding,
}

impl Default for CatalogKeyMap {
    fn default() -> Self {
        Self {
            cursor_up: key::Binding::new(vec![KeyCode::Up, KeyCode::Char('k')])
                .with_help("↑/k", "up"),
            cursor_down: key::Binding::new(vec![KeyCode::Down, KeyCode::Char('j')])
                .with_help("↓/j", "down"),
            toggle_favorite: key::Binding::new(vec![KeyCode::Char(' '), KeyCode::Enter])
                .with_help("space", "like"),
            cycle_category: key::Binding::new(vec![KeyCode::Char('c')])
                .with_help("c", "category"),
            cycle_rating: key::Binding::new(vec![KeyCode::Char('r')])
                .with_help("r", "min rating"),
            sort_ascending: key::Binding::new(vec![KeyCode::Char('a')])
                .with_help("a", "price low ↑"),
            sort_descending: key::Binding::new(vec![KeyCode::Char('d')])
                .with_help("d", "price high ↓"),
            toggle_favorites_view: key::Binding::new(vec![KeyCode::Char('f')])
                .with_help("f", "liked only"),
            show_full_help: key::Binding::new(vec![KeyCode::Char('?')]).with_help("?", "more"),
            quit: key::Binding::new(vec![
                (KeyCode::Char('q'), KeyModifiers::NONE),
                (KeyCode::Char('c'), KeyModifiers::CONTROL),
            ])
            .with_help("q", "quit"),
        }
    }
}
