//! Locale extractor.
//!
//! Resolves the visitor's locale once per request and caches it in the
//! request extensions, so several extractors can ask for it cheaply.

use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::{header::ACCEPT_LANGUAGE, request::Parts},
};
use tower_sessions::Session;
use tradehub_core::Locale;

use crate::services::LocaleStore;
use crate::services::locale::browser_locale;

/// The active locale for this request.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(CurrentLocale(locale): CurrentLocale) -> impl IntoResponse {
///     locale.html_lang()
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentLocale(pub Locale);

impl<S> FromRequestParts<S> for CurrentLocale
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if let Some(cached) = parts.extensions.get::<Self>() {
            return Ok(*cached);
        }

        let accept_language = parts
            .headers
            .get(ACCEPT_LANGUAGE)
            .and_then(|v| v.to_str().ok());

        let locale = match parts.extensions.get::<Session>() {
            Some(session) => LocaleStore::new(session).get(accept_language).await,
            None => browser_locale(accept_language),
        };

        parts.extensions.insert(Self(locale));
        Ok(Self(locale))
    }
}
