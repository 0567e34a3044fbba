//! Translation documents fetched as `<language>.json`.

use crate::config::SiteConfig;
use crate::context::Site;
use crate::http::{get_json, HttpClient};
use crate::page::Page;
use crate::prefs::{get_preference, set_preference};
use crate::storage::LANGUAGE_KEY;
use crate::types::Language;
use serde_json::Value;

/// A language's nested key → string mapping.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TranslationDocument(Value);

impl TranslationDocument {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Walk `key` split on `.`, indexing arrays by numeric segments.
    ///
    /// Non-empty strings render as-is, non-zero numbers and `true` render
    /// their text. Anything else (missing, empty, zero, `false`, `null`,
    /// objects, arrays) yields the key itself.
    pub fn lookup(&self, key: &str) -> String {
        let mut node = &self.0;
        for segment in key.split('.') {
            let next = match node {
                Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
                _ => node.get(segment),
            };
            match next {
                Some(next) => node = next,
                None => return key.to_string(),
            }
        }
        match node {
            Value::String(text) if !text.is_empty() => text.clone(),
            Value::Number(n) if n.as_f64() != Some(0.0) => n.to_string(),
            Value::Bool(true) => "true".to_string(),
            _ => key.to_string(),
        }
    }
}

/// One fetch, no caching. Failures are logged and yield `None`.
pub async fn load_translations(
    http: &dyn HttpClient,
    config: &SiteConfig,
    language: &Language,
) -> Option<TranslationDocument> {
    let url = config.translations_url(language.code());
    match get_json::<Value>(http, &url).await {
        Ok(value) => Some(TranslationDocument::new(value)),
        Err(e) => {
            tracing::error!("Error loading translations: {e}");
            None
        }
    }
}

/// Fetch and hand the document to the page. On failure the page keeps the
/// text it already shows.
pub async fn apply_language(site: &Site, page: &dyn Page, language: &Language) -> bool {
    match load_translations(site.http(), &site.config, language).await {
        Some(document) => {
            page.set_translations(document);
            true
        }
        None => false,
    }
}

/// Persist `language`, update the controls and reload the text.
pub async fn set_language(site: &Site, page: &dyn Page, language: Language) -> bool {
    set_preference(site.store(), LANGUAGE_KEY, language.code());
    page.set_language(&language);
    apply_language(site, page, &language).await
}

/// Two-state EN/PT toggle driven by the language the page shows, falling
/// back to the stored one (default `en`) before any has been set.
pub async fn toggle_language(site: &Site, page: &dyn Page) -> Language {
    let current = page.current_language().unwrap_or_else(|| {
        let stored = get_preference(site.store(), LANGUAGE_KEY, || "en".to_string());
        Language::new(&stored).unwrap_or_else(Language::english)
    });
    let next = current.toggled();
    set_language(site, page, next.clone()).await;
    next
}
