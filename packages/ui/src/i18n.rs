use dioxus::prelude::*;
use site::Language;

use crate::page::{use_page, use_site};

/// Text bound to a translation key.
///
/// Shows `fallback` until a document has loaded, then the looked-up value
/// (which is the key path itself when missing).
#[component]
pub fn Tr(path: String, fallback: String) -> Element {
    let page = use_page();
    let text = match page.translations.read().as_ref() {
        Some(document) => document.lookup(&path),
        None => fallback,
    };
    rsx! { span { "data-i18n": "{path}", "{text}" } }
}

/// Two-state EN/PT toggle in the navbar.
#[component]
pub fn LanguageToggle() -> Element {
    let page = use_page();
    let ctx = use_site();
    let label = page.language.read().toggle_label();

    rsx! {
        button {
            id: "toggle-language",
            class: "btn btn-outline-secondary",
            onclick: move |_| {
                let ctx = ctx.clone();
                spawn(async move {
                    site::toggle_language(&ctx, &page).await;
                });
            },
            "{label}"
        }
    }
}

/// One button per supported language; the current one is marked active.
#[component]
pub fn LanguageButtons() -> Element {
    let page = use_page();
    let ctx = use_site();
    let current = page.language.read().code().to_string();

    rsx! {
        div { class: "language-buttons",
            for code in Language::SUPPORTED {
                button {
                    key: "{code}",
                    id: "lang-{code}",
                    class: if current == code { "language-button active" } else { "language-button" },
                    onclick: {
                        let ctx = ctx.clone();
                        move |_| {
                            let ctx = ctx.clone();
                            spawn(async move {
                                if let Some(lang) = Language::new(code) {
                                    site::set_language(&ctx, &page, lang).await;
                                }
                            });
                        }
                    },
                    {code.to_uppercase()}
                }
            }
        }
    }
}
