//! Platform-agnostic logic behind the portfolio site: preferences, theme,
//! translations, remote listings and the page-load sequence.
//!
//! Rendering and browser access are injected through [`page::Page`],
//! [`storage::PreferenceStore`], [`http::HttpClient`] and [`http::AssetProbe`].

pub mod bootstrap;
pub mod config;
pub mod context;
pub mod error;
pub mod http;
pub mod i18n;
pub mod listings;
pub mod modal;
pub mod page;
pub mod prefs;
pub mod storage;
pub mod theme;
pub mod types;

#[cfg(test)]
pub mod test_utils;

#[cfg(test)]
mod types_tests;


pub use bootstrap::{bootstrap, load_section, BootstrapReport, Step};
pub use config::SiteConfig;
pub use context::Site;
pub use error::FetchError;
pub use i18n::{set_language, toggle_language, TranslationDocument};
pub use listings::{ListingOutcome, ListingState};
pub use modal::ModalState;
pub use page::{close_modal, open_modal, Page};
pub use theme::{set_theme_from_switch, toggle_theme, ThemeView};
pub use types::{Article, Language, Photo, Preference, Repo, Section, SystemSignals, Theme};
