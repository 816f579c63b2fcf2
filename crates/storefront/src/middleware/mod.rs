//! HTTP middleware stack for storefront.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. Sentry layers (hub per request, HTTP transaction)
//! 2. `TraceLayer` (request tracing)
//! 3. Request ID (add unique ID to each request)
//! 4. Session layer (tower-sessions with in-memory store)
//! 5. Security headers (CSP, frame and referrer policy)
//! 6. Rate limiting (governor) on form and chat posts
//! 7. Deferred boundary on lazily loaded route groups
//!
//! Extractors `CurrentLocale` and `RequireCapability` live here as well.

pub mod access;
pub mod deferred;
pub mod locale;
pub mod rate_limit;
pub mod request_id;
pub mod security_headers;
pub mod session;

pub use access::{AccessRejection, GatedArea, RequireCapability, Retail, SellerCenter, Wholesale};
pub use deferred::{DEFERRED_HEADER, deferred_boundary};
pub use locale::CurrentLocale;
pub use rate_limit::{chat_rate_limiter, form_rate_limiter};
pub use request_id::request_id_middleware;
pub use security_headers::security_headers_middleware;
pub use session::create_session_layer;
