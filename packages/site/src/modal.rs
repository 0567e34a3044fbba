use crate::types::Photo;

/// Photo viewer. Opening while already open replaces the content in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Open {
        src: String,
        description: Option<String>,
    },
}

impl ModalState {
    pub fn open(photo: &Photo) -> Self {
        ModalState::Open {
            src: photo.src.clone(),
            description: photo.description.clone(),
        }
    }

    pub fn close() -> Self {
        ModalState::Closed
    }

    pub fn is_open(&self) -> bool {
        matches!(self, ModalState::Open { .. })
    }

    pub fn src(&self) -> Option<&str> {
        match self {
            ModalState::Open { src, .. } => Some(src),
            ModalState::Closed => None,
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            ModalState::Open { description, .. } => description.as_deref(),
            ModalState::Closed => None,
        }
    }

    pub fn description_visible(&self) -> bool {
        self.description().is_some()
    }

    /// Background scrolling is suppressed while open.
    pub fn scroll_locked(&self) -> bool {
        self.is_open()
    }
}
