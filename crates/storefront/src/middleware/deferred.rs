//! Deferred route boundary.
//!
//! Route groups behind this boundary are not rendered on the first
//! navigation. A plain `GET` gets a lightweight interstitial whose script
//! fetches the same URL again with [`DEFERRED_HEADER`] set and swaps the
//! real content in. Requests carrying the header, and non-`GET` requests,
//! pass straight through.

use axum::{
    extract::Request,
    http::Method,
    middleware::Next,
    response::Response,
};

use crate::routes::gate;
use crate::routes::layout::PageContext;

/// Header marking a request as the follow-up content fetch.
pub const DEFERRED_HEADER: &str = "x-deferred-load";

/// Middleware rendering the interstitial for first navigations.
///
/// Install with `middleware::from_fn_with_state` so [`PageContext`] can
/// read the application state.
pub async fn deferred_boundary(
    page: PageContext,
    request: Request,
    next: Next,
) -> Response {
    if request.method() != Method::GET || request.headers().contains_key(DEFERRED_HEADER) {
        return next.run(request).await;
    }

    tracing::debug!(path = %request.uri().path(), "Rendering deferred placeholder");
    gate::deferred_response(page)
}
