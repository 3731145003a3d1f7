//! Domain models for the profile page.

pub mod content;
pub mod errors;
pub mod fetch_state;
pub mod locale;
pub mod photo_work;
pub mod profile_state;

pub use content::{ContentTable, IconRef, LinkEntry, SOCIAL_LINKS, SocialLink, content_for};
pub use errors::{ConfigKey, ContentError};
pub use fetch_state::FetchState;
pub use locale::Locale;
pub use photo_work::{Photo, PhotoWork, PhotoWorkId, PhotoWorksResponse};
pub use profile_state::{ProfileAction, ProfileState};
