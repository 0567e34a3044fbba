use crate::i18n::TranslationDocument;
use crate::listings::ListingState;
use crate::modal::ModalState;
use crate::theme::ThemeView;
use crate::types::{Article, Language, Photo, Repo, Theme};

/// Rendering collaborator the site logic writes into.
///
/// Implementations keep their own interior mutability (Dioxus signals in the
/// browser, a `RefCell` log in tests).
pub trait Page {
    fn set_loader(&self, visible: bool);
    fn apply_theme(&self, view: &ThemeView);
    fn set_translations(&self, document: TranslationDocument);
    fn set_language(&self, language: &Language);
    fn set_repos(&self, state: ListingState<Repo>);
    fn set_articles(&self, state: ListingState<Article>);
    fn set_photos(&self, state: ListingState<Photo>);
    fn set_modal(&self, state: ModalState);

    /// Theme the page is showing; `None` before the first apply.
    fn current_theme(&self) -> Option<Theme>;
    fn current_language(&self) -> Option<Language>;
}

/// Show `photo` in the modal.
pub fn open_modal(page: &dyn Page, photo: &Photo) {
    page.set_modal(ModalState::open(photo));
}

pub fn close_modal(page: &dyn Page) {
    page.set_modal(ModalState::close());
}
