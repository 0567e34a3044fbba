//! Browser-backed implementations of the `site` services.
//!
//! Everything here degrades to in-memory or default behaviour off wasm so the
//! components still render under SSR or in tests.

use async_trait::async_trait;
use dioxus::prelude::*;
use site::http::{AssetProbe, ReqwestClient};
use site::storage::PreferenceStore;
use site::{Site, SiteConfig, SystemSignals};
use std::rc::Rc;

/// `window.localStorage`; write failures are logged and dropped.
#[cfg(target_arch = "wasm32")]
pub struct BrowserStorage;

#[cfg(target_arch = "wasm32")]
impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

#[cfg(target_arch = "wasm32")]
impl PreferenceStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = Self::storage() else {
            dioxus::logger::tracing::warn!("storage: localStorage unavailable, dropping {key}");
            return;
        };
        if storage.set_item(key, value).is_err() {
            dioxus::logger::tracing::warn!("storage: failed to persist {key}");
        }
    }
}

pub fn preference_store() -> Rc<dyn PreferenceStore> {
    #[cfg(target_arch = "wasm32")]
    {
        Rc::new(BrowserStorage)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Rc::new(site::storage::MemoryStore::new())
    }
}

/// `prefers-color-scheme` and `navigator.language`.
pub fn system_signals() -> SystemSignals {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return SystemSignals::default();
        };
        let prefers_dark = window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .map_or(false, |mq| mq.matches());
        let browser_language = window.navigator().language().unwrap_or_default();
        SystemSignals {
            prefers_dark,
            browser_language,
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        SystemSignals::default()
    }
}

fn page_url() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()?.location().href().ok()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// Loads the image off-screen with `new Image()` and reports whether it decoded.
pub struct EvalProbe;

#[async_trait(?Send)]
impl AssetProbe for EvalProbe {
    async fn probe(&self, src: &str) -> bool {
        let js = format!(
            r#"return await new Promise((resolve) => {{
                const img = new Image();
                img.onload = () => resolve(true);
                img.onerror = () => resolve(false);
                img.src = "{}";
            }});"#,
            js_escape(src)
        );
        document::eval(&js)
            .await
            .ok()
            .and_then(|v| v.as_bool())
            .unwrap_or(false)
    }
}

/// Assemble the [`Site`] context for the current browser window.
pub fn browser_site(config: SiteConfig) -> Site {
    let http = match page_url() {
        Some(base) => ReqwestClient::with_base(&base),
        None => ReqwestClient::new(),
    };
    Site::new(config, system_signals(), preference_store(), Rc::new(http))
        .with_probe(Rc::new(EvalProbe))
}

pub(crate) fn js_escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
