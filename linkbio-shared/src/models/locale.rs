use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// Display language of the page.
///
/// Japanese is the primary locale and the one the page opens in; English is
/// the secondary one. The value is never persisted, so every reload starts in
/// Japanese again.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr,
)]
pub enum Locale {
    /// Primary locale.
    #[default]
    #[strum(serialize = "ja")]
    Japanese,
    /// Secondary locale.
    #[strum(serialize = "en")]
    English,
}

impl Locale {
    /// The complementary locale.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Japanese => Self::English,
            Self::English => Self::Japanese,
        }
    }

    /// BCP 47 code, used for the `<html lang>` attribute.
    #[must_use]
    pub fn code(self) -> &'static str {
        self.into()
    }
}
