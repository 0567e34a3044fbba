use dioxus::prelude::*;

use crate::i18n::{LanguageToggle, Tr};
use crate::page::use_page;
use crate::theme::ThemeToggle;

/// Top navigation: logo, section anchors and the preference toggles.
#[component]
pub fn Navbar() -> Element {
    let page = use_page();
    let navbar_class = format!("navbar fixed-top {}", (page.theme)().navbar_class());
    let logo = (page.logo)();

    rsx! {
        nav { class: "{navbar_class}",
            a { class: "navbar-brand", href: "#hero",
                img { src: "{logo}", alt: "Logo", height: "40" }
            }
            div { class: "nav_links",
                a { class: "nav-link", href: "#about", Tr { path: "nav.about", fallback: "About" } }
                a { class: "nav-link", href: "#projects", Tr { path: "nav.projects", fallback: "Projects" } }
                a { class: "nav-link", href: "#articles-section", Tr { path: "nav.articles", fallback: "Articles" } }
                a { class: "nav-link", href: "#photography", Tr { path: "nav.photography", fallback: "Photography" } }
            }
            div { class: "nav_controls",
                ThemeToggle {}
                LanguageToggle {}
            }
        }
    }
}
