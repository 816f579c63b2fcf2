//! Script-based language detection for chat messages.

use crate::Locale;

fn is_hangul(c: char) -> bool {
    matches!(c,
        '\u{AC00}'..='\u{D7AF}' // syllables
        | '\u{1100}'..='\u{11FF}' // jamo
        | '\u{3130}'..='\u{318F}' // compatibility jamo
    )
}

fn is_cjk_ideograph(c: char) -> bool {
    matches!(c, '\u{4E00}'..='\u{9FFF}' | '\u{3400}'..='\u{4DBF}')
}

fn is_kana(c: char) -> bool {
    matches!(c, '\u{3040}'..='\u{309F}' | '\u{30A0}'..='\u{30FF}')
}

/// Guess the locale of free text from the Unicode scripts it contains.
///
/// Checks run in a fixed order and the first match wins: Hangul → KR, CJK
/// ideographs → CN, kana → JP, anything else → EN. Because ideographs are
/// checked before kana, Japanese text that contains kanji reports CN.
///
/// ```
/// use tradehub_core::{Locale, detect_language};
///
/// assert_eq!(detect_language("안녕하세요"), Locale::KR);
/// assert_eq!(detect_language("你好"), Locale::CN);
/// assert_eq!(detect_language("hello"), Locale::EN);
/// ```
#[must_use]
pub fn detect_language(text: &str) -> Locale {
    if text.chars().any(is_hangul) {
        Locale::KR
    } else if text.chars().any(is_cjk_ideograph) {
        Locale::CN
    } else if text.chars().any(is_kana) {
        Locale::JP
    } else {
        Locale::EN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_each_script() {
        assert_eq!(detect_language("안녕하세요"), Locale::KR);
        assert_eq!(detect_language("你好"), Locale::CN);
        assert_eq!(detect_language("こんにちは"), Locale::JP);
        assert_eq!(detect_language("カタカナ"), Locale::JP);
        assert_eq!(detect_language("hello"), Locale::EN);
    }

    #[test]
    fn test_empty_and_symbols_default_to_english() {
        assert_eq!(detect_language(""), Locale::EN);
        assert_eq!(detect_language("123 !?"), Locale::EN);
    }

    #[test]
    fn test_priority_order() {
        // Hangul wins over everything else in the same message.
        assert_eq!(detect_language("hello 你好 안녕"), Locale::KR);
        // Ideographs win over kana.
        assert_eq!(detect_language("日本語です"), Locale::CN);
    }

    #[test]
    fn test_compatibility_jamo() {
        assert_eq!(detect_language("ㅋㅋㅋ"), Locale::KR);
    }
}
