use dioxus::prelude::*;
use site::ListingState;

use crate::i18n::Tr;
use crate::page::use_page;

#[component]
pub fn RepoList() -> Element {
    let page = use_page();
    let repos = (page.repos)();

    rsx! {
        section { id: "projects",
            h2 { Tr { path: "projects.title", fallback: "Projects" } }
            div { id: "repo-list", class: "row",
                match repos {
                    ListingState::Loading => rsx! {},
                    ListingState::Failed(msg) | ListingState::Empty(msg) => rsx! { p { "{msg}" } },
                    ListingState::Loaded(items) => rsx! {
                        for repo in items {
                            div { key: "{repo.html_url}", class: "col-md-4 mb-4",
                                div { class: "card h-100 shadow-sm",
                                    div { class: "card-body",
                                        h5 { class: "card-title", "{repo.name}" }
                                        p { class: "card-text", {repo.description_or_default().to_string()} }
                                    }
                                    div { class: "card-footer",
                                        a { href: "{repo.html_url}", class: "btn btn-dark", target: "_blank", "View on GitHub" }
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
