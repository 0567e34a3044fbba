use dioxus::prelude::*;

use crate::page::use_page;

/// Full-page overlay shown while preferences are applied.
#[component]
pub fn Loader() -> Element {
    let page = use_page();
    let class = if (page.loader)() { "loader" } else { "loader hidden" };

    rsx! {
        div { id: "loader", class: "{class}",
            div { class: "spinner-border", role: "status" }
        }
    }
}
