use std::rc::Rc;

use tracing::warn;

use super::{ContentError, PhotoWork};

/// Status of the one-time photo-works read.
///
/// The variants are exclusive, so the gallery shows exactly one of a loading
/// indicator, an error line, or the grid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FetchState {
    #[default]
    Loading,
    Loaded(Rc<[PhotoWork]>),
    Failed(String),
}

impl FetchState {
    /// Whether the read has settled either way.
    #[must_use]
    pub const fn is_settled(&self) -> bool {
        !matches!(self, Self::Loading)
    }

    /// Fetched works, empty unless loaded.
    #[must_use]
    pub fn photo_works(&self) -> &[PhotoWork] {
        match self {
            Self::Loaded(works) => works,
            Self::Loading | Self::Failed(_) => &[],
        }
    }

    /// Error message, if the read failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            Self::Loading | Self::Loaded(_) => None,
        }
    }

    /// Moves out of `Loading` with the outcome of the read.
    ///
    /// A settled state never changes again; a second outcome is logged and
    /// dropped.
    #[must_use]
    pub fn settle(self, outcome: Result<Vec<PhotoWork>, ContentError>) -> Self {
        if self.is_settled() {
            warn!("photo works already settled, ignoring late outcome");
            return self;
        }
        Self::from(outcome)
    }
}

impl From<Result<Vec<PhotoWork>, ContentError>> for FetchState {
    fn from(outcome: Result<Vec<PhotoWork>, ContentError>) -> Self {
        match outcome {
            Ok(works) => Self::Loaded(works.into()),
            Err(error) => Self::Failed(error.to_string()),
        }
    }
}
