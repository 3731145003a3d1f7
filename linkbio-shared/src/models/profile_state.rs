use std::rc::Rc;

use tracing::{debug, info};
use yew::Reducible;

use super::{ContentError, ContentTable, FetchState, Locale, PhotoWork, content_for};

/// Local state of the profile page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileState {
    pub locale: Locale,
    pub photo_works: FetchState,
}

/// Events the profile page reacts to.
#[derive(Debug)]
pub enum ProfileAction {
    /// The language button was pressed.
    ToggleLocale,
    /// The photo-works read finished.
    PhotoWorksSettled(Result<Vec<PhotoWork>, ContentError>),
}

impl ProfileState {
    /// Content table of the active locale.
    #[must_use]
    pub fn content(&self) -> &'static ContentTable {
        content_for(self.locale)
    }

    /// Applies one action. Toggling only touches the locale; settling only
    /// touches the fetch state.
    #[must_use]
    pub fn apply(self, action: ProfileAction) -> Self {
        match action {
            ProfileAction::ToggleLocale => {
                let locale = self.locale.toggled();
                debug!(locale = %locale, "locale toggled");
                Self { locale, ..self }
            }
            ProfileAction::PhotoWorksSettled(outcome) => {
                let photo_works = self.photo_works.settle(outcome);
                info!(
                    count = photo_works.photo_works().len(),
                    failed = photo_works.error().is_some(),
                    "photo works settled"
                );
                Self {
                    photo_works,
                    ..self
                }
            }
        }
    }
}

impl Reducible for ProfileState {
    type Action = ProfileAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new((*self).clone().apply(action))
    }
}
