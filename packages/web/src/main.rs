use dioxus::logger::tracing;
use dioxus::prelude::*;
use site::SiteConfig;

use views::Home;

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(SiteLayout)]
    #[route("/")]
    Home {},
}

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::initialize_default();
    install_panic_hook();
    log_runtime_config(&SiteConfig::from_build_env());
    dioxus::launch(App);
}

fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        tracing::error!("panic: {info}");
    }));
}

fn log_runtime_config(config: &SiteConfig) {
    tracing::info!("startup: github_user={}", config.github_user);
    tracing::info!("startup: feed_url={}", config.feed_url);
    tracing::info!("startup: photos_url={}", config.photos_url);
    tracing::info!(
        "startup: translations_base={}",
        if config.translations_base.is_empty() { "<page-relative>" } else { config.translations_base.as_str() }
    );
    tracing::info!(
        "startup: sample_size={} sections={}",
        config.sample_size,
        section_list(config)
    );
    if config.sections.is_empty() {
        tracing::warn!("startup: WARNING no listing sections configured");
    }
}

fn section_list(config: &SiteConfig) -> String {
    config
        .sections
        .iter()
        .map(|s| s.as_str())
        .collect::<Vec<_>>()
        .join(",")
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ui::PageProvider { config: SiteConfig::from_build_env(),
            ui::SiteTheme {}
            ui::SiteBootstrap {}
            Router::<Route> {}
        }
    }
}

/// Navbar, loader and modal around the routed content.
#[component]
fn SiteLayout() -> Element {
    rsx! {
        ui::Loader {}
        ui::Navbar {}
        main { class: "site_container", Outlet::<Route> {} }
        ui::ImageModal {}
        ui::Footer {}
    }
}
