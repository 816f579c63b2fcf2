//! Language selector routes.

use axum::{
    Form, Json,
    response::{IntoResponse, Redirect},
};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::instrument;

use crate::error::Result;
use crate::middleware::CurrentLocale;
use crate::routes::layout::safe_return_path;
use crate::services::LocaleStore;

/// Language selector form data.
#[derive(Debug, Deserialize)]
pub struct LanguageForm {
    #[serde(default)]
    pub locale: String,
    pub return_to: Option<String>,
}

/// Current locale as JSON.
#[derive(Debug, Serialize)]
pub struct LocaleResponse {
    pub locale: &'static str,
    pub lang: &'static str,
}

/// Persist the selected language and go back where the visitor was.
///
/// POST /language
#[instrument(skip(session))]
pub async fn set_language(
    session: Session,
    Form(form): Form<LanguageForm>,
) -> Result<impl IntoResponse> {
    LocaleStore::new(&session).set(&form.locale).await?;
    Ok(Redirect::to(safe_return_path(form.return_to.as_deref())))
}

/// Report the active locale.
///
/// GET /api/locale
pub async fn current_locale(CurrentLocale(locale): CurrentLocale) -> Json<LocaleResponse> {
    Json(LocaleResponse {
        locale: locale.code(),
        lang: locale.html_lang(),
    })
}
