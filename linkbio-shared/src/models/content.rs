//! Static bilingual content of the profile page.
//!
//! Everything here is compiled in. The only runtime choice is which
//! [`ContentTable`] is active, selected by [`Locale`].

use super::Locale;

/// Symbolic reference to a static icon. The web crate maps each variant onto
/// a concrete glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconRef {
    Twitter,
    Instagram,
    GitHub,
    Mail,
    ExternalLink,
}

/// A card in the link list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkEntry {
    pub title: &'static str,
    pub url: &'static str,
    pub icon: IconRef,
    pub description: &'static str,
}

/// A round icon button in the social row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub icon: IconRef,
    pub url: &'static str,
    /// Accessible label, rendered as `aria-label`.
    pub label: &'static str,
}

/// Per-locale text of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentTable {
    pub name: &'static str,
    /// Biography paragraph, one entry per rendered line.
    pub bio: &'static [&'static str],
    pub links: &'static [LinkEntry],
    pub copyright: &'static str,
    /// Label of the locale toggle. Names the language the button switches to.
    pub toggle_label: &'static str,
    pub gallery_title: Option<&'static str>,
    pub gallery_description: Option<&'static str>,
}

/// Path of the profile photo, served next to the wasm bundle.
pub const PROFILE_IMAGE: &str = "/profile.jpg";
/// Alt text of the profile photo.
pub const PROFILE_IMAGE_ALT: &str = "プロフィール画像";
/// Shown in place of the profile photo when it fails to load.
pub const AVATAR_FALLBACK: &str = "なかい";
/// Gallery heading used when the active table has no title of its own.
pub const DEFAULT_GALLERY_TITLE: &str = "photoworks";

/// Social row, identical for both locales.
pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        icon: IconRef::Twitter,
        url: "https://x.com/bell_veil_496",
        label: "Twitter",
    },
    SocialLink {
        icon: IconRef::Instagram,
        url: "https://instagram.com/374s.z/",
        label: "Instagram",
    },
    SocialLink {
        icon: IconRef::GitHub,
        url: "https://github.com/ryokcha",
        label: "GitHub",
    },
];

const COPYRIGHT: &str = "© 2025 Ryoka Nakai. All rights reserved.";

static JAPANESE: ContentTable = ContentTable {
    name: "中井　涼日",
    bio: &[
        "高校生。ダンスのインストラクター。",
        "英語とコード（情報技術・プログラミング）を勉強中。趣味はカメラ。",
        "興味があればSNSからご連絡ください。",
    ],
    links: &[
        LinkEntry {
            title: "note",
            url: "https://note.com/0rchid3",
            icon: IconRef::ExternalLink,
            description: "日々の活動を不定期で更新",
        },
        LinkEntry {
            title: "お問い合わせ（メール）",
            url: "mailto:orchid38okashii@gmail.com",
            icon: IconRef::Mail,
            description: "24時間以内に返信します。お急ぎの場合は各種SNSのDMにてお願いします。",
        },
    ],
    copyright: COPYRIGHT,
    toggle_label: "English",
    gallery_title: None,
    gallery_description: None,
};

static ENGLISH: ContentTable = ContentTable {
    name: "Ryoka Nakai",
    bio: &[
        "Japanese high school student. Instructor of dance.",
        "Learning English deeply and code a bit and photography.",
        "If you have any interest, please contact me with SNS.",
    ],
    links: &[
        LinkEntry {
            title: "note",
            url: "https://note.com/0rchid3",
            icon: IconRef::ExternalLink,
            description: "Irregularly updating my daily activities.",
        },
        LinkEntry {
            title: "Contact",
            url: "mailto:ryouka6922@icloud.com",
            icon: IconRef::Mail,
            description: "I will reply within 24 hours. If urgent, please DM me on SNS.",
        },
    ],
    copyright: COPYRIGHT,
    toggle_label: "日本語",
    gallery_title: Some("Photo Works"),
    gallery_description: Some("Some of my photography works as a hobby."),
};

/// The content table for `locale`.
#[must_use]
pub fn content_for(locale: Locale) -> &'static ContentTable {
    match locale {
        Locale::Japanese => &JAPANESE,
        Locale::English => &ENGLISH,
    }
}

impl ContentTable {
    /// Gallery heading, falling back to [`DEFAULT_GALLERY_TITLE`].
    #[must_use]
    pub fn gallery_heading(&self) -> &'static str {
        self.gallery_title.unwrap_or(DEFAULT_GALLERY_TITLE)
    }
}
