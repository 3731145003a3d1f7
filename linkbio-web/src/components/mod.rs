pub(crate) mod footer;
pub(crate) mod icons;
pub(crate) mod link_cards;
pub(crate) mod loading;
pub(crate) mod locale_toggle;
pub(crate) mod photo_card;
pub(crate) mod photo_gallery;
pub(crate) mod profile_header;
pub(crate) mod social_links;

// Re-export components for convenience
pub use footer::Footer;
pub use link_cards::LinkCards;
pub use locale_toggle::LocaleToggle;
pub use photo_gallery::PhotoGallery;
pub use profile_header::ProfileHeader;
pub use social_links::SocialLinks;
