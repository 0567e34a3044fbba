use dioxus::prelude::*;

use crate::page::use_page;

#[component]
pub fn ImageModal() -> Element {
    let page = use_page();
    let modal = (page.modal)();

    let display = if modal.is_open() { "display: flex;" } else { "display: none;" };
    let src = modal.src().unwrap_or_default().to_string();
    let description = modal.description().map(str::to_string);

    rsx! {
        div { id: "image-modal", class: "modal", style: "{display}",
            span {
                id: "close-modal",
                class: "close",
                onclick: move |_| site::close_modal(&page),
                "×"
            }
            img { id: "modal-image", class: "modal-content", src: "{src}" }
            p {
                id: "modal-description",
                class: if description.is_some() { "modal-description" } else { "modal-description hidden" },
                {description.clone().unwrap_or_default()}
            }
        }
    }
}
