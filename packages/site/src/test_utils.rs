//! Stub collaborators for exercising the site logic without a browser.

use crate::error::FetchError;
use crate::http::{AssetProbe, HttpClient};
use crate::i18n::TranslationDocument;
use crate::listings::ListingState;
use crate::modal::ModalState;
use crate::page::Page;
use crate::storage::PreferenceStore;
use crate::theme::ThemeView;
use crate::types::{Article, Language, Photo, Repo, Theme};
use async_trait::async_trait;
use std::cell::RefCell;
use std::collections::HashMap;

#[derive(Debug, Clone)]
enum StubResponse {
    Body(String),
    Status(u16),
}

/// Canned responses keyed by URL. Unknown URLs fail at the transport level.
#[derive(Debug, Default)]
pub struct StubHttp {
    responses: HashMap<String, StubResponse>,
    requests: RefCell<Vec<String>>,
}

impl StubHttp {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ok(mut self, url: &str, body: &str) -> Self {
        self.responses
            .insert(url.to_string(), StubResponse::Body(body.to_string()));
        self
    }

    pub fn status(mut self, url: &str, status: u16) -> Self {
        self.responses
            .insert(url.to_string(), StubResponse::Status(status));
        self
    }

    /// URLs requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

#[async_trait(?Send)]
impl HttpClient for StubHttp {
    async fn get_text(&self, url: &str) -> Result<String, FetchError> {
        self.requests.borrow_mut().push(url.to_string());
        match self.responses.get(url) {
            Some(StubResponse::Body(body)) => Ok(body.clone()),
            Some(StubResponse::Status(code)) => Err(FetchError::Status(*code)),
            None => Err(FetchError::Transport(format!("connection refused: {url}"))),
        }
    }
}

#[derive(Debug, Default)]
pub struct StubProbe {
    accept: bool,
    probed: RefCell<Vec<String>>,
}

impl StubProbe {
    pub fn accepting() -> Self {
        Self {
            accept: true,
            probed: RefCell::default(),
        }
    }

    pub fn rejecting() -> Self {
        Self::default()
    }

    pub fn probed(&self) -> Vec<String> {
        self.probed.borrow().clone()
    }
}

#[async_trait(?Send)]
impl AssetProbe for StubProbe {
    async fn probe(&self, src: &str) -> bool {
        self.probed.borrow_mut().push(src.to_string());
        self.accept
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    Loader(bool),
    Theme(ThemeView),
    Translations(TranslationDocument),
    Language(String),
    Repos(ListingState<Repo>),
    Articles(ListingState<Article>),
    Photos(ListingState<Photo>),
    Modal(ModalState),
}

/// Page that records every call in order.
#[derive(Debug, Default)]
pub struct RecordingPage {
    events: RefCell<Vec<PageEvent>>,
}

impl RecordingPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<PageEvent> {
        self.events.borrow().clone()
    }

    pub fn last_theme(&self) -> Option<ThemeView> {
        self.events.borrow().iter().rev().find_map(|e| match e {
            PageEvent::Theme(view) => Some(view.clone()),
            _ => None,
        })
    }

    /// Text a `data-i18n` element would show with the latest document.
    pub fn text(&self, key: &str) -> Option<String> {
        self.events.borrow().iter().rev().find_map(|e| match e {
            PageEvent::Translations(doc) => Some(doc.lookup(key)),
            _ => None,
        })
    }

    pub fn language_label(&self) -> Option<String> {
        self.events.borrow().iter().rev().find_map(|e| match e {
            PageEvent::Language(code) => {
                Language::new(code).map(|l| l.toggle_label().to_string())
            }
            _ => None,
        })
    }

    pub fn repos(&self) -> Option<ListingState<Repo>> {
        self.events.borrow().iter().rev().find_map(|e| match e {
            PageEvent::Repos(state) => Some(state.clone()),
            _ => None,
        })
    }

    pub fn articles(&self) -> Option<ListingState<Article>> {
        self.events.borrow().iter().rev().find_map(|e| match e {
            PageEvent::Articles(state) => Some(state.clone()),
            _ => None,
        })
    }

    pub fn photos(&self) -> Option<ListingState<Photo>> {
        self.events.borrow().iter().rev().find_map(|e| match e {
            PageEvent::Photos(state) => Some(state.clone()),
            _ => None,
        })
    }

    pub fn modal(&self) -> ModalState {
        self.events
            .borrow()
            .iter()
            .rev()
            .find_map(|e| match e {
                PageEvent::Modal(state) => Some(state.clone()),
                _ => None,
            })
            .unwrap_or_default()
    }

    fn push(&self, event: PageEvent) {
        self.events.borrow_mut().push(event);
    }
}

impl Page for RecordingPage {
    fn set_loader(&self, visible: bool) {
        self.push(PageEvent::Loader(visible));
    }

    fn apply_theme(&self, view: &ThemeView) {
        self.push(PageEvent::Theme(view.clone()));
    }

    fn set_translations(&self, document: TranslationDocument) {
        self.push(PageEvent::Translations(document));
    }

    fn set_language(&self, language: &Language) {
        self.push(PageEvent::Language(language.code().to_string()));
    }

    fn set_repos(&self, state: ListingState<Repo>) {
        self.push(PageEvent::Repos(state));
    }

    fn set_articles(&self, state: ListingState<Article>) {
        self.push(PageEvent::Articles(state));
    }

    fn set_photos(&self, state: ListingState<Photo>) {
        self.push(PageEvent::Photos(state));
    }

    fn set_modal(&self, state: ModalState) {
        self.push(PageEvent::Modal(state));
    }

    fn current_theme(&self) -> Option<Theme> {
        self.last_theme().map(|view| view.theme)
    }

    fn current_language(&self) -> Option<Language> {
        self.events.borrow().iter().rev().find_map(|e| match e {
            PageEvent::Language(code) => Language::new(code),
            _ => None,
        })
    }
}

/// Storage that is never available: reads miss and writes vanish.
#[derive(Debug, Default)]
pub struct UnavailableStore {
    writes: RefCell<usize>,
}

impl UnavailableStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of writes attempted and dropped.
    pub fn dropped_writes(&self) -> usize {
        *self.writes.borrow()
    }
}

impl PreferenceStore for UnavailableStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, _key: &str, _value: &str) {
        *self.writes.borrow_mut() += 1;
    }
}
