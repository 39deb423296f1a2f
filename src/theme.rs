use std::collections::HashMap;

use thiserror::Error;

pub const THEME_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn toggle_label(self) -> String {
        let next = self.toggled().as_str();
        format!("Switch to {next} theme")
    }

    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Light => "fa-moon",
            Self::Dark => "fa-sun",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("preference storage is unavailable")]
    Unavailable,
    #[error("preference write was rejected: {0}")]
    Rejected(String),
}

/// Durable origin-scoped key/value storage for user preferences.
pub trait PreferenceStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.to_string(), value.to_string());
        Self { entries }
    }
}

impl PreferenceStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Stored theme, falling back to dark when absent or unrecognised.
pub fn resolve_theme(store: &impl PreferenceStore) -> Theme {
    store
        .read(THEME_KEY)
        .and_then(|value| Theme::parse(&value))
        .unwrap_or_default()
}

pub fn persist_theme(store: &mut impl PreferenceStore, theme: Theme) -> Result<(), StoreError> {
    store.write(THEME_KEY, theme.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_preference_defaults_to_dark() {
        assert_eq!(resolve_theme(&MemoryStore::default()), Theme::Dark);
    }

    #[test]
    fn unrecognised_preference_defaults_to_dark() {
        let store = MemoryStore::with_entry(THEME_KEY, "sepia");
        assert_eq!(resolve_theme(&store), Theme::Dark);
    }

    #[test]
    fn persisted_theme_is_read_back() {
        let mut store = MemoryStore::default();
        persist_theme(&mut store, Theme::Light).expect("memory store accepts writes");

        assert_eq!(store.read(THEME_KEY).as_deref(), Some("light"));
        assert_eq!(resolve_theme(&store), Theme::Light);
    }

    #[test]
    fn toggle_label_names_the_other_theme() {
        assert_eq!(Theme::Dark.toggle_label(), "Switch to light theme");
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
    }
}
