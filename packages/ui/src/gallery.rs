use dioxus::prelude::*;
use site::ListingState;

use crate::i18n::Tr;
use crate::page::use_page;

const GALLERY_CSS: Asset = asset!("/assets/styling/gallery.css");

/// Sampled photos; clicking one opens the modal.
#[component]
pub fn PhotoGallery() -> Element {
    let page = use_page();
    let photos = (page.photos)();

    rsx! {
        document::Link { rel: "stylesheet", href: GALLERY_CSS }

        section { id: "photography",
            h2 { Tr { path: "photography.title", fallback: "Photography" } }
            if photos.is_loading() {
                div { id: "loading-spinner", class: "spinner-border", role: "status" }
            }
            div { id: "photo-gallery", class: "row",
                match photos {
                    ListingState::Loading => rsx! {},
                    ListingState::Failed(msg) | ListingState::Empty(msg) => rsx! { p { "{msg}" } },
                    ListingState::Loaded(items) => rsx! {
                        for (idx, photo) in items.into_iter().enumerate() {
                            div { key: "{idx}-{photo.src}", class: "col-md-4",
                                div { class: "gallery-card",
                                    img {
                                        src: "{photo.src}",
                                        alt: "Photography Image",
                                        class: "card-img-top",
                                        onclick: move |_| site::open_modal(&page, &photo),
                                    }
                                }
                            }
                        }
                    },
                }
            }
        }
    }
}
