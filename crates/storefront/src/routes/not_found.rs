//! Localized not-found view.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::filters;
use crate::routes::layout::PageContext;

/// Not-found page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/not_found.html")]
pub struct NotFoundTemplate {
    pub page: PageContext,
}

/// 404 response rendered in the visitor's locale.
#[must_use]
pub fn not_found(page: PageContext) -> Response {
    (StatusCode::NOT_FOUND, NotFoundTemplate { page }).into_response()
}

/// Router fallback for unmatched paths.
pub async fn fallback(page: PageContext) -> Response {
    tracing::debug!(path = %page.current_path, "No route matched");
    not_found(page)
}
