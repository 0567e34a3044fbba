//! Light/dark mode: body and navbar classes plus the matching logo.

use crate::config::SiteConfig;
use crate::context::Site;
use crate::http::AssetProbe;
use crate::page::Page;
use crate::prefs::{resolve_theme, set_preference};
use crate::storage::{PreferenceStore, THEME_KEY};
use crate::types::Theme;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeView {
    pub theme: Theme,
    pub body_class: &'static str,
    pub navbar_class: &'static str,
    /// `None` keeps whatever logo is currently displayed.
    pub logo: Option<String>,
}

impl ThemeView {
    pub fn new(theme: Theme, logo: Option<String>) -> Self {
        Self {
            theme,
            body_class: theme.body_class(),
            navbar_class: theme.navbar_class(),
            logo,
        }
    }
}

/// Apply `theme` to the page and persist it.
///
/// With a probe the classes switch immediately and the logo only follows once
/// the asset has loaded; a failed probe leaves the old logo in place. The theme
/// is persisted either way.
pub async fn apply_theme(
    page: &dyn Page,
    store: &dyn PreferenceStore,
    config: &SiteConfig,
    theme: Theme,
    probe: Option<&dyn AssetProbe>,
) -> ThemeView {
    let src = config.logo_for(theme).to_string();

    let view = match probe {
        None => {
            let view = ThemeView::new(theme, Some(src));
            page.apply_theme(&view);
            view
        }
        Some(probe) => {
            let classes_only = ThemeView::new(theme, None);
            page.apply_theme(&classes_only);
            if probe.probe(&src).await {
                let view = ThemeView::new(theme, Some(src));
                page.apply_theme(&view);
                view
            } else {
                tracing::warn!("Failed to load image: {src}");
                classes_only
            }
        }
    };

    set_preference(store, THEME_KEY, theme.as_str());
    view
}

/// Flip the theme the page is showing. Storage is only consulted before the
/// first apply, so a store that drops writes cannot pin the toggle.
pub async fn toggle_theme(site: &Site, page: &dyn Page) -> Theme {
    let current = page
        .current_theme()
        .unwrap_or_else(|| resolve_theme(site.store(), &site.signals));
    let next = current.toggled();
    switch_theme(site, page, next).await
}

/// Checkbox-style control: checked means dark.
pub async fn set_theme_from_switch(site: &Site, page: &dyn Page, checked: bool) -> Theme {
    let theme = if checked { Theme::Dark } else { Theme::Light };
    switch_theme(site, page, theme).await
}

async fn switch_theme(site: &Site, page: &dyn Page, theme: Theme) -> Theme {
    page.set_loader(true);
    apply_theme(page, site.store(), &site.config, theme, site.probe()).await;
    page.set_loader(false);
    theme
}
