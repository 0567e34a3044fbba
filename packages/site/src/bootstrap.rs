//! Page-load sequence: preferences first, then the remote listings.

use crate::context::Site;
use crate::i18n::apply_language;
use crate::listings::{load_articles, load_photos, load_repos, ListingOutcome, ListingState};
use crate::page::Page;
use crate::prefs::resolve_preferences;
use crate::theme::apply_theme;
use crate::types::{Preference, Section};
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Preferences,
    Translations,
    Listing(Section),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapReport {
    pub preference: Preference,
    pub translations_loaded: bool,
    /// Steps in completion order.
    pub steps: Vec<Step>,
    pub listings: Vec<(Section, ListingOutcome)>,
}

/// Run the whole sequence. Each step is awaited before the next starts and
/// none of them can fail the sequence.
pub async fn bootstrap<R: Rng + ?Sized>(site: &Site, page: &dyn Page, rng: &mut R) -> BootstrapReport {
    let mut steps = Vec::new();

    page.set_loader(true);
    let preference = resolve_preferences(site.store(), &site.signals);
    apply_theme(
        page,
        site.store(),
        &site.config,
        preference.theme,
        site.probe(),
    )
    .await;
    steps.push(Step::Preferences);

    let translations_loaded = apply_language(site, page, &preference.language).await;
    page.set_language(&preference.language);
    steps.push(Step::Translations);
    page.set_loader(false);

    let mut listings = Vec::with_capacity(site.config.sections.len());
    for section in &site.config.sections {
        let outcome = load_section(site, page, *section, rng).await;
        steps.push(Step::Listing(*section));
        listings.push((*section, outcome));
    }

    tracing::info!(
        "bootstrap: complete translations_loaded={translations_loaded} listings={listings:?}"
    );

    BootstrapReport {
        preference,
        translations_loaded,
        steps,
        listings,
    }
}

/// Fetch one listing into its container.
pub async fn load_section<R: Rng + ?Sized>(
    site: &Site,
    page: &dyn Page,
    section: Section,
    rng: &mut R,
) -> ListingOutcome {
    match section {
        Section::Repos => {
            page.set_repos(ListingState::Loading);
            let state = load_repos(site.http(), &site.config, rng).await;
            let outcome = state.outcome();
            page.set_repos(state);
            outcome
        }
        Section::Articles => {
            page.set_articles(ListingState::Loading);
            let state = load_articles(site.http(), &site.config).await;
            let outcome = state.outcome();
            page.set_articles(state);
            outcome
        }
        Section::Photos => {
            page.set_photos(ListingState::Loading);
            let state = load_photos(site.http(), &site.config, rng).await;
            let outcome = state.outcome();
            page.set_photos(state);
            outcome
        }
    }
}
