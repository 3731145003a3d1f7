use shared::models::IconRef;
use yew_icons::IconId;

/// Glyph drawn for a content icon reference.
pub fn icon_id(icon: IconRef) -> IconId {
    match icon {
        IconRef::Twitter => IconId::LucideTwitter,
        IconRef::Instagram => IconId::LucideInstagram,
        IconRef::GitHub => IconId::LucideGithub,
        IconRef::Mail => IconId::LucideMail,
        IconRef::ExternalLink => IconId::LucideExternalLink,
    }
}
