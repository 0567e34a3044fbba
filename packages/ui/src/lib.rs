//! Dioxus components for the portfolio page and the browser-backed services
//! they hand to the `site` crate.

mod browser;
pub use browser::{browser_site, preference_store, system_signals, EvalProbe};

mod page;
pub use page::{use_page, use_site, PageProvider, PageSignals, SiteBootstrap};

mod theme;
pub use theme::{SiteTheme, ThemeSwitch, ThemeToggle};

mod i18n;
pub use i18n::{LanguageButtons, LanguageToggle, Tr};

mod navbar;
pub use navbar::Navbar;

mod hero;
pub use hero::Hero;

mod loader;
pub use loader::Loader;

mod repos;
pub use repos::RepoList;

mod articles;
pub use articles::ArticleList;

mod gallery;
pub use gallery::PhotoGallery;

mod modal;
pub use modal::ImageModal;

mod footer;
pub use footer::Footer;
