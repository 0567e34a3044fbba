use dioxus::prelude::*;

use crate::i18n::{LanguageButtons, Tr};
use crate::theme::ThemeSwitch;

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "site_footer",
            div { class: "footer_prefs",
                span { class: "hint", Tr { path: "footer.preferences", fallback: "Preferences" } }
                ThemeSwitch {}
                LanguageButtons {}
            }
        }
    }
}
