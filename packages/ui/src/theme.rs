use dioxus::prelude::*;
use site::Theme;

use crate::page::{use_page, use_site};

const THEME_CSS: Asset = asset!("/assets/styling/theme.css");

/// Stylesheet plus the `<body>` classes for mode and modal scroll lock.
#[component]
pub fn SiteTheme() -> Element {
    let page = use_page();

    use_effect(move || {
        let theme = (page.theme)();
        let modal_open = page.modal.read().scroll_locked();
        let js = body_classes_js(theme, modal_open);
        spawn(async move {
            let _ = document::eval(&js).await;
        });
    });

    rsx! { document::Link { rel: "stylesheet", href: THEME_CSS } }
}

fn body_classes_js(theme: Theme, modal_open: bool) -> String {
    format!(
        r#"(function(){{
            const b = document.body;
            b.classList.remove("{light}", "{dark}");
            b.classList.add("{current}");
            b.classList.toggle("modal-open", {modal_open});
            return "";
        }})()"#,
        light = Theme::Light.body_class(),
        dark = Theme::Dark.body_class(),
        current = theme.body_class(),
    )
}

#[component]
pub fn ThemeToggle() -> Element {
    let page = use_page();
    let ctx = use_site();
    let dark = (page.theme)() == Theme::Dark;

    rsx! {
        button {
            id: "toggle-mode",
            class: "btn btn-outline-secondary",
            "aria-pressed": "{dark}",
            onclick: move |_| {
                let ctx = ctx.clone();
                spawn(async move {
                    site::toggle_theme(&ctx, &page).await;
                });
            },
            if dark { "☀" } else { "☾" }
        }
    }
}

/// Checkbox variant of the toggle; checked means dark.
#[component]
pub fn ThemeSwitch() -> Element {
    let page = use_page();
    let ctx = use_site();

    rsx! {
        label { class: "mode-switch",
            input {
                id: "mode-toggle",
                r#type: "checkbox",
                checked: (page.theme)() == Theme::Dark,
                onchange: move |evt: FormEvent| {
                    let ctx = ctx.clone();
                    let checked = evt.checked();
                    spawn(async move {
                        site::set_theme_from_switch(&ctx, &page, checked).await;
                    });
                },
            }
            span { class: "mode-switch-slider" }
        }
    }
}
