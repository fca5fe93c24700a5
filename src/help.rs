//! The help line shown under the catalog.
//!
//! Content comes from a [`KeyMap`]. By default it is one line of
//! `key desc • key desc`; with [`show_all`](Model::show_all) set each binding
//! group becomes a column. When a width is set, entries that would overflow
//! it are dropped and replaced by an ellipsis if one still fits. Separators
//! and column gaps count toward the width.

use crate::key::{Binding, KeyMap};
use lipgloss_extras::lipgloss;
use lipgloss_extras::prelude::*;
use unicode_width::UnicodeWidthStr;

/// Styles for the help view.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Key label, e.g. `space`.
    pub key: Style,
    /// What the key does.
    pub desc: Style,
    /// Separators, column gaps and the ellipsis.
    pub separator: Style,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            key: Style::new().foreground(AdaptiveColor {
                Light: "#6B6B6B",
                Dark: "#8A8A8A",
            }),
            desc: Style::new().foreground(AdaptiveColor {
                Light: "#A3A3A3",
                Dark: "#575757",
            }),
            separator: Style::new().foreground(AdaptiveColor {
                Light: "#D4D4D4",
                Dark: "#404040",
            }),
        }
    }
}

/// Help view state.
#[derive(Debug, Clone)]
pub struct Model {
    /// Show one column per binding group instead of the single line.
    pub show_all: bool,
    /// Maximum width; 0 means unlimited.
    pub width: usize,
    /// Between entries of the single line.
    pub separator: String,
    /// Between columns of the full help.
    pub column_gap: String,
    pub ellipsis: String,
    pub styles: Styles,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            show_all: false,
            width: 0,
            separator: " • ".to_string(),
            column_gap: "    ".to_string(),
            ellipsis: "…".to_string(),
            styles: Styles::default(),
        }
    }
}

/// How many leading blocks fit and the width they take up.
struct Fit {
    count: usize,
    used: usize,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum width (builder pattern).
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Renders help for `keymap` in the current mode.
    pub fn view<K: KeyMap>(&self, keymap: &K) -> String {
        if self.show_all {
            self.full_help_view(keymap.full_help())
        } else {
            self.short_help_view(keymap.short_help())
        }
    }

    /// Renders the enabled bindings on one line.
    pub fn short_help_view(&self, bindings: Vec<&Binding>) -> String {
        let entries: Vec<String> = bindings
            .into_iter()
            .filter(|b| b.enabled())
            .map(|b| self.entry(b))
            .collect();
        let widths: Vec<usize> = entries.iter().map(|e| lipgloss::width_visible(e)).collect();
        let fit = self.fit(&widths, self.separator.width());

        let separator = self.styled(&self.separator);
        let mut line = entries[..fit.count].join(&separator);
        if fit.count < entries.len() {
            line.push_str(&self.ellipsis_tail(fit.used));
        }
        line
    }

    /// Renders each group of enabled bindings as a column.
    pub fn full_help_view(&self, groups: Vec<Vec<&Binding>>) -> String {
        let columns: Vec<Vec<String>> = groups
            .into_iter()
            .map(|group| {
                group
                    .into_iter()
                    .filter(|b| b.enabled())
                    .map(|b| self.entry(b))
                    .collect::<Vec<_>>()
            })
            .filter(|rows| !rows.is_empty())
            .collect();
        let widths: Vec<usize> = columns
            .iter()
            .map(|rows| {
                rows.iter()
                    .map(|r| lipgloss::width_visible(r))
                    .max()
                    .unwrap_or(0)
            })
            .collect();
        let fit = self.fit(&widths, self.column_gap.width());

        let gap = self.styled(&self.column_gap);
        let rendered: Vec<String> = columns[..fit.count]
            .iter()
            .map(|rows| rows.join("\n"))
            .collect();
        let mut parts: Vec<&str> = Vec::with_capacity(rendered.len() * 2 + 1);
        for (i, column) in rendered.iter().enumerate() {
            if i > 0 {
                parts.push(gap.as_str());
            }
            parts.push(column.as_str());
        }
        let tail = if fit.count < columns.len() {
            self.ellipsis_tail(fit.used)
        } else {
            String::new()
        };
        if !tail.is_empty() {
            parts.push(tail.as_str());
        }
        if parts.is_empty() {
            return String::new();
        }
        lipgloss::join_horizontal(lipgloss::TOP, &parts)
    }

    fn entry(&self, binding: &Binding) -> String {
        let help = binding.help();
        format!(
            "{} {}",
            self.styles.key.clone().inline(true).render(&help.key),
            self.styles.desc.clone().inline(true).render(&help.desc)
        )
    }

    fn styled(&self, s: &str) -> String {
        self.styles.separator.clone().inline(true).render(s)
    }

    /// Takes blocks from the front while they fit, counting `gap` columns
    /// between neighbours.
    fn fit(&self, widths: &[usize], gap: usize) -> Fit {
        let mut used = 0;
        for (count, &w) in widths.iter().enumerate() {
            let needed = if count == 0 { w } else { gap + w };
            if self.width > 0 && used + needed > self.width {
                return Fit { count, used };
            }
            used += needed;
        }
        Fit {
            count: widths.len(),
            used,
        }
    }

    /// ` …` if it fits after `used` columns, otherwise nothing.
    fn ellipsis_tail(&self, used: usize) -> String {
        let tail = format!(" {}", self.ellipsis);
        if used + tail.width() <= self.width {
            self.styled(&tail)
        } else {
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;

    struct Keys {
        like: Binding,
        quit: Binding,
        hidden: Binding,
    }

    impl Keys {
        fn new() -> Self {
            let mut hidden = Binding::new(vec![KeyCode::Char('x')]).with_help("x", "hidden");
            hidden.set_enabled(false);
            Self {
                like: Binding::new(vec![KeyCode::Char(' ')]).with_help("space", "like"),
                quit: Binding::new(vec![KeyCode::Char('q')]).with_help("q", "quit"),
                hidden,
            }
        }
    }

    impl KeyMap for Keys {
        fn short_help(&self) -> Vec<&Binding> {
            vec![&self.like, &self.hidden, &self.quit]
        }
        fn full_help(&self) -> Vec<Vec<&Binding>> {
            vec![vec![&self.like], vec![&self.quit, &self.hidden]]
        }
    }

    /// Two one-row columns of width 10.
    struct Columns {
        a: Binding,
        b: Binding,
    }

    impl Columns {
        fn new() -> Self {
            Self {
                a: Binding::new(vec![KeyCode::Char('a')]).with_help("a", "aaaaaaaa"),
                b: Binding::new(vec![KeyCode::Char('b')]).with_help("b", "bbbbbbbb"),
            }
        }
    }

    impl KeyMap for Columns {
        fn short_help(&self) -> Vec<&Binding> {
            vec![&self.a, &self.b]
        }
        fn full_help(&self) -> Vec<Vec<&Binding>> {
            vec![vec![&self.a], vec![&self.b]]
        }
    }

    fn plain(s: &str) -> String {
        lipgloss::strip_ansi(s)
    }

    fn widest_line(s: &str) -> usize {
        s.lines().map(|l| l.width()).max().unwrap_or(0)
    }

    #[test]
    fn test_short_help_skips_disabled() {
        let view = plain(&Model::new().view(&Keys::new()));
        assert_eq!(view, "space like • q quit");
    }

    #[test]
    fn test_short_help_truncates() {
        let view = plain(&Model::new().with_width(14).view(&Keys::new()));
        assert_eq!(view, "space like …");
    }

    #[test]
    fn test_short_help_counts_separator() {
        // 10 + 3 + 10 = 23 columns needed for both entries.
        let help = Model::new().with_width(22);
        let view = plain(&help.view(&Columns::new()));
        assert_eq!(view, "a aaaaaaaa …");
        assert!(widest_line(&view) <= 22);

        let view = plain(&Model::new().with_width(23).view(&Columns::new()));
        assert_eq!(view, "a aaaaaaaa • b bbbbbbbb");
    }

    #[test]
    fn test_full_help_lists_columns() {
        let mut help = Model::new();
        help.show_all = true;
        let view = plain(&help.view(&Keys::new()));
        assert!(view.contains("space like"));
        assert!(view.contains("q quit"));
        assert!(!view.contains("hidden"));
    }

    #[test]
    fn test_full_help_counts_column_gap() {
        let mut help = Model::new().with_width(21);
        help.show_all = true;
        let view = plain(&help.view(&Columns::new()));
        assert!(widest_line(&view) <= 21, "{view:?} is wider than 21");
        assert!(view.contains("a aaaaaaaa"));
        assert!(!view.contains("b bbbbbbbb"));

        help.width = 24;
        let view = plain(&help.view(&Columns::new()));
        assert!(view.contains("a aaaaaaaa"));
        assert!(view.contains("b bbbbbbbb"));
    }

    #[test]
    fn test_no_room_for_ellipsis() {
        let view = plain(&Model::new().with_width(11).view(&Columns::new()));
        assert_eq!(view, "a aaaaaaaa");
    }
}
