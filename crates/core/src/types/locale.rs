//! Display locales supported by the storefront.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A display language.
///
/// The set is closed: every table keyed by locale is an exhaustive `match`,
/// so adding a variant is a compile error until every table handles it.
///
/// The persisted form is the upper-case code (`"KR"`, `"EN"`, `"CN"`, `"JP"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Locale {
    /// Korean (default).
    #[default]
    KR,
    /// English.
    EN,
    /// Simplified Chinese.
    CN,
    /// Japanese.
    JP,
}

impl Locale {
    /// All supported locales in selector order.
    pub const ALL: [Self; 4] = [Self::KR, Self::EN, Self::CN, Self::JP];

    /// Returns the persisted code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::KR => "KR",
            Self::EN => "EN",
            Self::CN => "CN",
            Self::JP => "JP",
        }
    }

    /// Returns the BCP 47 language tag used for the `<html lang>` attribute.
    #[must_use]
    pub const fn html_lang(self) -> &'static str {
        match self {
            Self::KR => "ko",
            Self::EN => "en",
            Self::CN => "zh",
            Self::JP => "ja",
        }
    }

    /// Returns the name of the language written in that language.
    #[must_use]
    pub const fn native_name(self) -> &'static str {
        match self {
            Self::KR => "한국어",
            Self::EN => "English",
            Self::CN => "中文",
            Self::JP => "日本語",
        }
    }

    /// Parses a persisted code.
    ///
    /// Only the four exact codes are accepted; anything else is `None`.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "KR" => Some(Self::KR),
            "EN" => Some(Self::EN),
            "CN" => Some(Self::CN),
            "JP" => Some(Self::JP),
            _ => None,
        }
    }

    /// Maps a browser language tag (`ko-KR`, `zh_CN`, `ja`, ...) by its
    /// primary subtag.
    #[must_use]
    pub fn from_browser_language(tag: &str) -> Option<Self> {
        let primary = tag.trim().split(['-', '_']).next()?.to_ascii_lowercase();
        match primary.as_str() {
            "ko" => Some(Self::KR),
            "zh" => Some(Self::CN),
            "ja" => Some(Self::JP),
            "en" => Some(Self::EN),
            _ => None,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for locale in Locale::ALL {
            assert_eq!(Locale::from_code(locale.code()), Some(locale));
        }
    }

    #[test]
    fn test_from_code_is_exact() {
        assert_eq!(Locale::from_code("kr"), None);
        assert_eq!(Locale::from_code(" KR"), None);
        assert_eq!(Locale::from_code("FR"), None);
        assert_eq!(Locale::from_code(""), None);
    }

    #[test]
    fn test_from_browser_language() {
        assert_eq!(Locale::from_browser_language("ko-KR"), Some(Locale::KR));
        assert_eq!(Locale::from_browser_language("zh_TW"), Some(Locale::CN));
        assert_eq!(Locale::from_browser_language("ja-JP"), Some(Locale::JP));
        assert_eq!(Locale::from_browser_language("EN-us"), Some(Locale::EN));
        assert_eq!(Locale::from_browser_language("fr-FR"), None);
        assert_eq!(Locale::from_browser_language(""), None);
    }

    #[test]
    fn test_html_lang() {
        assert_eq!(Locale::KR.html_lang(), "ko");
        assert_eq!(Locale::CN.html_lang(), "zh");
        assert_eq!(Locale::JP.html_lang(), "ja");
        assert_eq!(Locale::EN.html_lang(), "en");
    }

    #[test]
    fn test_default_is_korean() {
        assert_eq!(Locale::default(), Locale::KR);
    }
}
