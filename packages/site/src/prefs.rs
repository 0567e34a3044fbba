//! Resolution of the persisted theme and language.

use crate::storage::{PreferenceStore, LANGUAGE_KEY, THEME_KEY};
use crate::types::{Language, Preference, SystemSignals, Theme};

/// Stored value for `key`, else whatever `system_fallback` computes.
pub fn get_preference<F>(store: &dyn PreferenceStore, key: &str, system_fallback: F) -> String
where
    F: FnOnce() -> String,
{
    store.get(key).unwrap_or_else(system_fallback)
}

pub fn set_preference(store: &dyn PreferenceStore, key: &str, value: &str) {
    store.set(key, value);
}

/// Stored theme, else the system colour-scheme signal.
pub fn resolve_theme(store: &dyn PreferenceStore, signals: &SystemSignals) -> Theme {
    let system = Theme::from_system(signals.prefers_dark);
    let raw = get_preference(store, THEME_KEY, || system.as_str().to_string());
    Theme::parse(&raw).unwrap_or_else(|| {
        tracing::warn!("prefs: ignoring stored theme {raw:?}");
        system
    })
}

/// Stored language, else the browser language mapped to a supported code.
pub fn resolve_language(store: &dyn PreferenceStore, signals: &SystemSignals) -> Language {
    let detected = Language::detect(&signals.browser_language);
    let raw = get_preference(store, LANGUAGE_KEY, || detected.code().to_string());
    Language::new(&raw).unwrap_or(detected)
}

/// Resolve both preferences and write them back so later loads find them stored.
pub fn resolve_preferences(store: &dyn PreferenceStore, signals: &SystemSignals) -> Preference {
    let pref = Preference {
        theme: resolve_theme(store, signals),
        language: resolve_language(store, signals),
    };
    set_preference(store, THEME_KEY, pref.theme.as_str());
    set_preference(store, LANGUAGE_KEY, pref.language.code());
    tracing::info!(
        "prefs: theme={} language={}",
        pref.theme.as_str(),
        pref.language
    );
    pref
}
