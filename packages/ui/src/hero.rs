use dioxus::prelude::*;

use crate::i18n::Tr;

const HERO_CSS: Asset = asset!("/assets/styling/hero.css");

#[component]
pub fn Hero() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: HERO_CSS }

        section { id: "hero",
            h1 { Tr { path: "hero.title", fallback: "Hi, I'm Rui" } }
            p { class: "lead", Tr { path: "hero.subtitle", fallback: "Software engineer and photographer." } }
        }
        section { id: "about",
            h2 { Tr { path: "about.title", fallback: "About me" } }
            p { Tr { path: "about.body", fallback: "I build backend systems and cloud infrastructure." } }
        }
    }
}
