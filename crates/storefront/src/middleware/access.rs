//! Capability guard extractor.
//!
//! Handlers declare the capability they need in their signature:
//!
//! ```rust,ignore
//! async fn wholesale(
//!     access: RequireCapability<Wholesale>,
//!     page: PageContext,
//! ) -> impl IntoResponse {
//!     let state = access.state();
//!     ...
//! }
//! ```
//!
//! The extractor resolves the access gate under the configured timeout. A
//! gate still loading renders the loading view; a denied capability renders
//! the access-denied view. The handler only runs once access is granted.

use std::marker::PhantomData;

use axum::{
    extract::FromRequestParts,
    http::request::Parts,
    response::{IntoResponse, Response},
};
use tower_sessions::Session;
use tradehub_core::{AccessState, Capability};

use crate::routes::gate;
use crate::routes::layout::PageContext;
use crate::services::{AccessGate, GateDecision};
use crate::state::AppState;

/// A capability named at the type level.
pub trait GatedArea: Send + Sync + 'static {
    const CAPABILITY: Capability;
}

/// Retail flows (open to everyone once the gate resolves).
pub struct Retail;

/// Wholesale listing and quotes.
pub struct Wholesale;

/// Seller center pages.
pub struct SellerCenter;

impl GatedArea for Retail {
    const CAPABILITY: Capability = Capability::Retail;
}

impl GatedArea for Wholesale {
    const CAPABILITY: Capability = Capability::Wholesale;
}

impl GatedArea for SellerCenter {
    const CAPABILITY: Capability = Capability::SellerCenter;
}

/// Extractor granting access to `A`, carrying the resolved state.
pub struct RequireCapability<A: GatedArea>(pub AccessState, PhantomData<A>);

impl<A: GatedArea> RequireCapability<A> {
    #[must_use]
    pub const fn state(&self) -> AccessState {
        self.0
    }
}

/// Response when access is not (yet) granted.
pub enum AccessRejection {
    /// The gate has not resolved.
    Loading(Box<PageContext>),
    /// The resolved state does not allow the capability.
    Denied(Box<PageContext>, Capability),
}

impl IntoResponse for AccessRejection {
    fn into_response(self) -> Response {
        match self {
            Self::Loading(page) => gate::loading_response(*page),
            Self::Denied(page, capability) => gate::denied_response(*page, capability),
        }
    }
}

impl<A: GatedArea> FromRequestParts<AppState> for RequireCapability<A> {
    type Rejection = AccessRejection;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let page = PageContext::from_request_parts(parts, state)
            .await
            .unwrap_or_else(|never| match never {});

        // Without a session layer nothing is persisted, so nothing is granted
        // beyond the default state.
        let decision = match parts.extensions.get::<Session>() {
            Some(session) => {
                AccessGate::resolve(
                    state.access(),
                    session,
                    state.config().mock.access_load_timeout,
                )
                .await
                .decide(A::CAPABILITY)
            }
            None => AccessGate::Ready(AccessState::default()).decide(A::CAPABILITY),
        };

        match decision {
            GateDecision::Granted(access) => Ok(Self(access, PhantomData)),
            GateDecision::Pending => {
                tracing::debug!(capability = ?A::CAPABILITY, "Access gate still loading");
                Err(AccessRejection::Loading(Box::new(page)))
            }
            GateDecision::Denied(capability) => {
                tracing::info!(?capability, path = %parts.uri.path(), "Access denied");
                Err(AccessRejection::Denied(Box::new(page), capability))
            }
        }
    }
}
