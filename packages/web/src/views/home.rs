use dioxus::prelude::*;
use site::Section;
use ui::{ArticleList, Hero, PhotoGallery, RepoList};

/// Hero followed by the configured listings, in bootstrap order.
#[component]
pub fn Home() -> Element {
    let sections = ui::use_site().config.sections;

    rsx! {
        Hero {}
        for section in sections {
            match section {
                Section::Repos => {
                    let key = "repos";
                    rsx! { RepoList { key: "{key}" } }
                },
                Section::Articles => {
                    let key = "articles";
                    rsx! { ArticleList { key: "{key}" } }
                },
                Section::Photos => {
                    let key = "photos";
                    rsx! { PhotoGallery { key: "{key}" } }
                },
            }
        }
    }
}
