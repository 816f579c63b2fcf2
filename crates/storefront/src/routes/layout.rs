//! Shared page context for every full-page template.
//!
//! `base.html` reads the locale, translated strings, language selector and
//! chat widget state from [`PageContext`]; page templates embed it as
//! their `page` field.

use std::convert::Infallible;

use axum::{
    extract::{FromRequestParts, OriginalUri},
    http::request::Parts,
};
use tower_sessions::Session;
use tradehub_core::{ConversationId, Locale};

use crate::i18n::{Messages, messages};
use crate::middleware::CurrentLocale;
use crate::models::session_keys;
use crate::state::AppState;

/// One entry of the language selector.
#[derive(Debug, Clone)]
pub struct LocaleOption {
    pub code: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

/// Chat widget state for this render.
#[derive(Debug, Clone)]
pub struct ChatWidgetView {
    pub open: bool,
    /// Fresh for every render; the transcript does not outlive the page.
    pub conversation_id: String,
}

/// Everything the layout needs.
#[derive(Debug, Clone)]
pub struct PageContext {
    pub locale: Locale,
    pub html_lang: &'static str,
    pub t: &'static Messages,
    /// Path and query of the current request, used as `return_to`.
    pub current_path: String,
    pub locale_options: Vec<LocaleOption>,
    pub chat: ChatWidgetView,
    pub mock_controls: bool,
}

impl PageContext {
    #[must_use]
    pub fn new(locale: Locale, current_path: String, chat_open: bool, mock_controls: bool) -> Self {
        let locale_options = Locale::ALL
            .into_iter()
            .map(|option| LocaleOption {
                code: option.code(),
                label: option.native_name(),
                selected: option == locale,
            })
            .collect();

        Self {
            locale,
            html_lang: locale.html_lang(),
            t: messages(locale),
            current_path,
            locale_options,
            chat: ChatWidgetView {
                open: chat_open,
                conversation_id: ConversationId::generate().to_string(),
            },
            mock_controls,
        }
    }
}

impl FromRequestParts<AppState> for PageContext {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let CurrentLocale(locale) = CurrentLocale::from_request_parts(parts, state).await?;

        let chat_open = match parts.extensions.get::<Session>() {
            Some(session) => session
                .get::<bool>(session_keys::CHAT_OPEN)
                .await
                .ok()
                .flatten()
                .unwrap_or(false),
            None => false,
        };

        // Nested routers see a stripped URI
        let uri = parts
            .extensions
            .get::<OriginalUri>()
            .map_or(&parts.uri, |original| &original.0);
        let current_path = uri
            .path_and_query()
            .map_or("/", |pq| pq.as_str())
            .to_string();

        Ok(Self::new(
            locale,
            current_path,
            chat_open,
            state.config().mock_controls,
        ))
    }
}

/// Accept `return_to` only when it is a local absolute path.
///
/// Rejects scheme-relative (`//host`) and backslash tricks so a redirect
/// never leaves the site.
#[must_use]
pub fn safe_return_path(return_to: Option<&str>) -> &str {
    match return_to {
        Some(path)
            if path.starts_with('/')
                && !path.starts_with("//")
                && !path.contains('\\')
                && !path.contains("://") =>
        {
            path
        }
        _ => "/",
    }
}
