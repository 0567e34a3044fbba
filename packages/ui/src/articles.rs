use dioxus::prelude::*;
use site::ListingState;

use crate::i18n::Tr;
use crate::page::use_page;

#[component]
pub fn ArticleList() -> Element {
    let page = use_page();
    let articles = (page.articles)();

    rsx! {
        section { id: "articles-section",
            h2 { Tr { path: "articles.title", fallback: "Articles" } }
            div { id: "articles", class: "row",
                match articles {
                    ListingState::Loading => rsx! {},
                    ListingState::Failed(msg) | ListingState::Empty(msg) => rsx! { p { "{msg}" } },
                    ListingState::Loaded(items) => rsx! {
                        for post in items {
                            div { key: "{post.link}", class: "col-md-4",
                                div { class: "card mb-4 shadow-sm",
                                    div { class: "card-body",
                                        h5 { class: "card-title", "{post.title}" }
                                        p { class: "card-text", {post.excerpt()} }
                                        a { href: "{post.link}", class: "btn btn-dark", target: "_blank", "Continue Reading" }
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
