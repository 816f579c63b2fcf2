//! Locale store: the visitor's display language.
//!
//! Resolution order on read:
//! 1. the code persisted in the session, if it is one of the four known codes
//! 2. the primary language of the `Accept-Language` header
//! 3. Korean

use tower_sessions::Session;
use tradehub_core::Locale;

use crate::models::session_keys;

/// Session-backed locale store for one visitor.
pub struct LocaleStore<'a> {
    session: &'a Session,
}

impl<'a> LocaleStore<'a> {
    /// Create a store over the visitor's session.
    #[must_use]
    pub const fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Current locale. Never fails: unreadable or unknown values fall
    /// through to the next source.
    pub async fn get(&self, accept_language: Option<&str>) -> Locale {
        if let Some(locale) = self.persisted().await {
            return locale;
        }

        browser_locale(accept_language)
    }

    /// Persist a new locale given its code.
    ///
    /// Unknown codes are ignored and return `Ok(None)`; nothing is written.
    ///
    /// # Errors
    ///
    /// Returns an error if the session store rejects the write.
    pub async fn set(&self, code: &str) -> Result<Option<Locale>, tower_sessions::session::Error> {
        let Some(locale) = Locale::from_code(code) else {
            tracing::debug!(code, "Ignoring unsupported locale code");
            return Ok(None);
        };

        self.session
            .insert(session_keys::LANGUAGE, locale.code())
            .await?;
        tracing::info!(locale = %locale, "Locale changed");
        Ok(Some(locale))
    }

    async fn persisted(&self) -> Option<Locale> {
        match self.session.get::<String>(session_keys::LANGUAGE).await {
            Ok(code) => code.as_deref().and_then(Locale::from_code),
            Err(e) => {
                tracing::debug!(error = %e, "Unreadable persisted locale");
                None
            }
        }
    }
}

/// Locale implied by an `Accept-Language` header alone.
#[must_use]
pub fn browser_locale(accept_language: Option<&str>) -> Locale {
    accept_language
        .and_then(primary_language)
        .and_then(Locale::from_browser_language)
        .unwrap_or_default()
}

/// The highest-priority language tag of an `Accept-Language` header.
///
/// Entries are ranked by their `q` weight (default 1); the first entry wins
/// ties. Wildcards and `q=0` entries are skipped.
#[must_use]
pub fn primary_language(header: &str) -> Option<&str> {
    let mut best: Option<(&str, f32)> = None;

    for entry in header.split(',') {
        let mut parts = entry.split(';');
        let tag = parts.next().unwrap_or("").trim();
        if tag.is_empty() || tag == "*" {
            continue;
        }

        let weight = parts
            .filter_map(|param| param.trim().strip_prefix("q="))
            .find_map(|q| q.trim().parse::<f32>().ok())
            .unwrap_or(1.0);
        if weight <= 0.0 {
            continue;
        }

        if best.is_none_or(|(_, best_weight)| weight > best_weight) {
            best = Some((tag, weight));
        }
    }

    best.map(|(tag, _)| tag)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use tower_sessions::MemoryStore;

    use super::*;

    fn session() -> Session {
        Session::new(None, Arc::new(MemoryStore::default()), None)
    }

    #[test]
    fn test_primary_language() {
        assert_eq!(primary_language("ja-JP"), Some("ja-JP"));
        assert_eq!(
            primary_language("ja-JP,ja;q=0.9,en-US;q=0.8"),
            Some("ja-JP")
        );
        assert_eq!(primary_language("en;q=0.5, zh-CN;q=0.9"), Some("zh-CN"));
        assert_eq!(primary_language("ko, en"), Some("ko"));
        assert_eq!(primary_language("*, fr;q=0"), None);
        assert_eq!(primary_language(""), None);
    }

    #[tokio::test]
    async fn test_get_defaults_to_korean() {
        let session = session();
        let store = LocaleStore::new(&session);
        assert_eq!(store.get(None).await, Locale::KR);
        assert_eq!(store.get(Some("fr-FR,de;q=0.5")).await, Locale::KR);
    }

    #[tokio::test]
    async fn test_get_uses_browser_language_when_unset() {
        let session = session();
        let store = LocaleStore::new(&session);
        assert_eq!(store.get(Some("ja-JP")).await, Locale::JP);
        assert_eq!(store.get(Some("zh-TW,zh;q=0.9")).await, Locale::CN);
    }

    #[tokio::test]
    async fn test_set_then_get() {
        let session = session();
        let store = LocaleStore::new(&session);
        for locale in Locale::ALL {
            assert_eq!(store.set(locale.code()).await.unwrap(), Some(locale));
            // Persisted value outranks the browser language.
            assert_eq!(store.get(Some("ja-JP")).await, locale);
        }
    }

    #[tokio::test]
    async fn test_set_invalid_code_is_noop() {
        let session = session();
        let store = LocaleStore::new(&session);
        store.set("EN").await.unwrap();
        assert_eq!(store.set("FR").await.unwrap(), None);
        assert_eq!(store.set("en").await.unwrap(), None);
        assert_eq!(store.get(None).await, Locale::EN);
    }

    #[tokio::test]
    async fn test_malformed_persisted_value_is_ignored() {
        let session = session();
        session.insert(session_keys::LANGUAGE, "XX").await.unwrap();
        assert_eq!(LocaleStore::new(&session).get(Some("en-GB")).await, Locale::EN);

        session.insert(session_keys::LANGUAGE, 42).await.unwrap();
        assert_eq!(LocaleStore::new(&session).get(None).await, Locale::KR);
    }
}
