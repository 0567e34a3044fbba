use dioxus::prelude::*;
use site::{
    Article, Language, ListingState, ModalState, Page, Photo, Repo, Site, SiteConfig, Theme,
    ThemeView, TranslationDocument,
};

/// Page state as signals; writing through [`Page`] re-renders the subscribers.
#[derive(Clone, Copy, PartialEq)]
pub struct PageSignals {
    pub loader: Signal<bool>,
    pub theme: Signal<Theme>,
    pub logo: Signal<String>,
    pub translations: Signal<Option<TranslationDocument>>,
    pub language: Signal<Language>,
    pub repos: Signal<ListingState<Repo>>,
    pub articles: Signal<ListingState<Article>>,
    pub photos: Signal<ListingState<Photo>>,
    pub modal: Signal<ModalState>,
}

impl Page for PageSignals {
    fn set_loader(&self, visible: bool) {
        let mut loader = self.loader;
        loader.set(visible);
    }

    fn apply_theme(&self, view: &ThemeView) {
        let mut theme = self.theme;
        theme.set(view.theme);
        if let Some(src) = &view.logo {
            let mut logo = self.logo;
            logo.set(src.clone());
        }
    }

    fn set_translations(&self, document: TranslationDocument) {
        let mut translations = self.translations;
        translations.set(Some(document));
    }

    fn set_language(&self, language: &Language) {
        let mut current = self.language;
        current.set(language.clone());
    }

    fn set_repos(&self, state: ListingState<Repo>) {
        let mut repos = self.repos;
        repos.set(state);
    }

    fn set_articles(&self, state: ListingState<Article>) {
        let mut articles = self.articles;
        articles.set(state);
    }

    fn set_photos(&self, state: ListingState<Photo>) {
        let mut photos = self.photos;
        photos.set(state);
    }

    fn set_modal(&self, state: ModalState) {
        let mut modal = self.modal;
        modal.set(state);
    }

    fn current_theme(&self) -> Option<Theme> {
        Some(*self.theme.peek())
    }

    fn current_language(&self) -> Option<Language> {
        Some(self.language.peek().clone())
    }
}

pub fn use_page() -> PageSignals {
    use_context::<PageSignals>()
}

pub fn use_site() -> Site {
    use_context::<Site>()
}

/// Provide [`PageSignals`] and the browser [`Site`] to the tree.
#[component]
pub fn PageProvider(config: SiteConfig, children: Element) -> Element {
    let initial_logo = config.logo_for(Theme::Light).to_string();
    let page = PageSignals {
        loader: use_signal(|| true),
        theme: use_signal(|| Theme::Light),
        logo: use_signal(|| initial_logo),
        translations: use_signal(|| None),
        language: use_signal(Language::english),
        repos: use_signal(|| ListingState::Loading),
        articles: use_signal(|| ListingState::Loading),
        photos: use_signal(|| ListingState::Loading),
        modal: use_signal(ModalState::default),
    };
    use_context_provider(|| page);
    use_context_provider(|| crate::browser::browser_site(config));

    rsx! { {children} }
}

/// Runs the page-load sequence once after mount.
#[component]
pub fn SiteBootstrap() -> Element {
    let page = use_page();
    let ctx = use_site();

    use_effect(move || {
        let ctx = ctx.clone();
        spawn(async move {
            let mut rng = rand::thread_rng();
            let report = site::bootstrap(&ctx, &page, &mut rng).await;
            dioxus::logger::tracing::debug!("bootstrap: steps={:?}", report.steps);
        });
    });

    rsx! {}
}
