//! Key bindings for the catalog component.
//!
//! A [`Binding`] pairs one or more key presses with the short help text shown
//! in the help line. Components group their bindings in a struct and implement
//! [`KeyMap`] so the [`help`](crate::help) view can list them.
//!
//! ```rust
//! use catalog_widgets::key::Binding;
//! use bubbletea_rs::KeyMsg;
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let toggle = Binding::new(vec![KeyCode::Char(' ')]).with_help("space", "favorite");
//! let msg = KeyMsg { key: KeyCode::Char(' '), modifiers: KeyModifiers::NONE };
//! assert!(toggle.matches(&msg));
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single key press: a key code plus the modifiers that must be held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, modifiers): (KeyCode, KeyModifiers)) -> Self {
        Self { code, modifiers }
    }
}

/// Help text for a binding: the key label and what it does.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    pub key: String,
    pub desc: String,
}

/// A set of key presses that trigger one action.
#[derive(Debug, Clone)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    disabled: bool,
}

impl Binding {
    pub fn new<K: Into<KeyPress>>(keys: Vec<K>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            help: Help::default(),
            disabled: false,
        }
    }

    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    pub fn help(&self) -> &Help {
        &self.help
    }

    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// Disabled bindings never match and are left out of the help line.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// Returns true if `msg` is one of this binding's key presses.
    ///
    /// Shift is ignored for character keys because terminals report `G` as
    /// `Char('G')` with or without the shift modifier.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        if !self.enabled() {
            return false;
        }
        self.keys.iter().any(|press| {
            if press.code != msg.key {
                return false;
            }
            match press.code {
                KeyCode::Char(_) => {
                    press.modifiers.difference(KeyModifiers::SHIFT)
                        == msg.modifiers.difference(KeyModifiers::SHIFT)
                }
                _ => press.modifiers == msg.modifiers,
            }
        })
    }
}

/// Trait for components that expose their key bindings to the help view.
pub trait KeyMap {
    /// Bindings for the single-line help.
    fn short_help(&self) -> Vec<&Binding>;
    /// Bindings grouped into columns for the expanded help.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}
