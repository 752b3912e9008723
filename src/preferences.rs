use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use serde_json::json;

use crate::log::{log_event, LogLevel};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
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

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Glyph shown on the toggle: the theme a click switches to.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Self::Light => "☾",
            Self::Dark => "☀",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    En,
    Id,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Id];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Id => "id",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "en" => Some(Self::En),
            "id" => Some(Self::Id),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::En => Self::Id,
            Self::Id => Self::En,
        }
    }

    pub fn badge(self) -> &'static str {
        match self {
            Self::En => "EN",
            Self::Id => "ID",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PreferenceKey {
    Theme,
    Language,
}

impl PreferenceKey {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Theme => "theme",
            Self::Language => "language",
        }
    }
}

/// Persistent key-value boundary for the two page preferences.
///
/// `load` never fails: an unavailable backend reads as "nothing stored".
/// `save` is best effort and swallows backend errors.
pub trait PreferenceStore {
    fn load(&self, key: PreferenceKey) -> Option<String>;
    fn save(&self, key: PreferenceKey, value: &str);
}

/// Shared handle passed through component props.
#[derive(Clone)]
pub struct SharedStore(Rc<dyn PreferenceStore>);

impl SharedStore {
    pub fn new(store: impl PreferenceStore + 'static) -> Self {
        Self(Rc::new(store))
    }
}

impl std::ops::Deref for SharedStore {
    type Target = dyn PreferenceStore;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

impl PartialEq for SharedStore {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for SharedStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SharedStore")
    }
}

/// In-memory store used for headless rendering and tests. Every accepted
/// write is recorded in order.
#[derive(Clone, Default)]
pub struct MemoryStore {
    values: Rc<RefCell<HashMap<PreferenceKey, String>>>,
    writes: Rc<RefCell<Vec<(PreferenceKey, String)>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded(entries: &[(PreferenceKey, &str)]) -> Self {
        let store = Self::new();
        {
            let mut values = store.values.borrow_mut();
            for (key, value) in entries {
                values.insert(*key, (*value).to_string());
            }
        }
        store
    }

    pub fn writes(&self) -> Vec<(PreferenceKey, String)> {
        self.writes.borrow().clone()
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: PreferenceKey) -> Option<String> {
        self.values.borrow().get(&key).cloned()
    }

    fn save(&self, key: PreferenceKey, value: &str) {
        self.values.borrow_mut().insert(key, value.to_string());
        self.writes.borrow_mut().push((key, value.to_string()));
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Preferences {
    pub theme: Theme,
    pub language: Language,
}

impl Preferences {
    /// Reads both preferences once. Missing or unrecognised values fall back
    /// to the defaults.
    pub fn load(store: &dyn PreferenceStore) -> Self {
        Self {
            theme: load_value(store, PreferenceKey::Theme, Theme::parse).unwrap_or_default(),
            language: load_value(store, PreferenceKey::Language, Language::parse)
                .unwrap_or_default(),
        }
    }

    pub fn toggle_theme(self, store: &dyn PreferenceStore) -> Self {
        let next = Self {
            theme: self.theme.toggled(),
            ..self
        };
        store.save(PreferenceKey::Theme, next.theme.as_str());
        next
    }

    pub fn toggle_language(self, store: &dyn PreferenceStore) -> Self {
        let next = Self {
            language: self.language.toggled(),
            ..self
        };
        store.save(PreferenceKey::Language, next.language.as_str());
        next
    }
}

fn load_value<T>(
    store: &dyn PreferenceStore,
    key: PreferenceKey,
    parse: fn(&str) -> Option<T>,
) -> Option<T> {
    let raw = store.load(key)?;
    let parsed = parse(&raw);

    if parsed.is_none() {
        log_event(
            LogLevel::Debug,
            "preference_value_ignored",
            json!({ "key": key.as_str(), "value": raw }),
        );
    }

    parsed
}

#[cfg(test)]
mod tests {
    use super::*;

    struct UnavailableStore;

    impl PreferenceStore for UnavailableStore {
        fn load(&self, _key: PreferenceKey) -> Option<String> {
            None
        }

        fn save(&self, _key: PreferenceKey, _value: &str) {}
    }

    #[test]
    fn load_returns_previously_saved_value() {
        let store = MemoryStore::new();

        for (key, value) in [(PreferenceKey::Theme, "dark"), (PreferenceKey::Language, "id")] {
            store.save(key, value);
            assert_eq!(store.load(key).as_deref(), Some(value));
        }
    }

    #[test]
    fn empty_store_yields_defaults() {
        let prefs = Preferences::load(&MemoryStore::new());

        assert_eq!(prefs.theme, Theme::Light);
        assert_eq!(prefs.language, Language::En);
    }

    #[test]
    fn unavailable_storage_yields_defaults_and_swallows_writes() {
        let store = UnavailableStore;
        let prefs = Preferences::load(&store).toggle_theme(&store);

        assert_eq!(prefs.theme, Theme::Dark);
        assert_eq!(Preferences::load(&store), Preferences::default());
    }

    #[test]
    fn stored_values_are_restored() {
        let store = MemoryStore::seeded(&[
            (PreferenceKey::Theme, "dark"),
            (PreferenceKey::Language, "id"),
        ]);

        let prefs = Preferences::load(&store);
        assert_eq!(prefs.theme, Theme::Dark);
        assert_eq!(prefs.language, Language::Id);
    }

    #[test]
    fn unknown_stored_values_are_treated_as_absent() {
        let store = MemoryStore::seeded(&[
            (PreferenceKey::Theme, "solarized"),
            (PreferenceKey::Language, "EN"),
        ]);

        assert_eq!(Preferences::load(&store), Preferences::default());
        assert!(store.writes().is_empty());
    }

    #[test]
    fn theme_toggle_is_an_involution_with_one_write_per_toggle() {
        let store = MemoryStore::new();
        let start = Preferences::load(&store);

        let once = start.toggle_theme(&store);
        assert_eq!(once.theme, Theme::Dark);
        assert_eq!(store.writes(), vec![(PreferenceKey::Theme, "dark".to_string())]);

        let twice = once.toggle_theme(&store);
        assert_eq!(twice, start);
        assert_eq!(
            store.writes(),
            vec![
                (PreferenceKey::Theme, "dark".to_string()),
                (PreferenceKey::Theme, "light".to_string()),
            ]
        );
    }

    #[test]
    fn language_toggle_leaves_theme_untouched() {
        let store = MemoryStore::seeded(&[(PreferenceKey::Theme, "dark")]);
        let prefs = Preferences::load(&store).toggle_language(&store);

        assert_eq!(prefs.theme, Theme::Dark);
        assert_eq!(prefs.language, Language::Id);
        assert_eq!(store.writes(), vec![(PreferenceKey::Language, "id".to_string())]);
        assert_eq!(prefs.toggle_language(&store).language, Language::En);
    }

    #[test]
    fn shared_store_equality_is_identity() {
        let first = SharedStore::new(MemoryStore::new());
        let second = SharedStore::new(MemoryStore::new());

        assert_eq!(first, first.clone());
        assert_ne!(first, second);
    }
}
