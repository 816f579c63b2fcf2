//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                           - Home page
//! GET  /about                      - About page
//! GET  /contact, POST /contact     - Contact form
//! GET  /health                     - Health check
//!
//! # Catalog
//! GET  /products                   - Retail listing
//! GET  /products/{id}              - Product detail
//! GET  /products/{id}/purchase     - Retail purchase form (POST submits)
//! GET  /products/{id}/quote        - Wholesale quote form (gated, deferred; POST submits)
//! GET  /category/{slug}            - Retail listing for one category
//! GET  /wholesale                  - Wholesale listing (gated)
//!
//! # Accounts (mock)
//! GET  /login, POST /login         - Login form
//! GET  /register                   - Registration chooser
//! GET  /register/personal, POST    - Personal registration
//! GET  /register/business, POST    - Business registration
//! GET  /register/business/status   - Verification status
//!
//! # Seller center (gated, deferred)
//! GET  /seller-center              - Overview
//! GET  /seller-center/products     - Product table
//! GET  /seller-center/orders       - Order table
//!
//! # Locale and chat
//! POST /language                   - Set display language
//! GET  /api/locale                 - Current locale (JSON)
//! POST /chat/toggle                - Open/close widget (fragment)
//! POST /chat/messages              - Send message (fragment)
//! POST /chat/transcript            - Email transcript (fragment)
//!
//! # Demo
//! GET  /mock/access, POST          - Mock access controls (config-gated)
//! ```

pub mod auth;
pub mod chat;
pub mod gate;
pub mod home;
pub mod language;
pub mod layout;
pub mod mock;
pub mod not_found;
pub mod pages;
pub mod products;
pub mod seller_center;
pub mod wholesale;

use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::middleware::{chat_rate_limiter, deferred_boundary, form_rate_limiter};
use crate::state::AppState;

/// Form submissions, rate limited when enabled.
fn form_posts() -> Router<AppState> {
    Router::new()
        .route("/contact", post(pages::contact))
        .route("/login", post(auth::login))
        .route("/register/personal", post(auth::register_personal))
        .route("/register/business", post(auth::register_business))
        .route("/products/{id}/purchase", post(products::purchase))
        .route("/products/{id}/quote", post(wholesale::quote))
}

/// Chat fragment posts, rate limited when enabled.
fn chat_posts() -> Router<AppState> {
    Router::new()
        .route("/chat/messages", post(chat::send_message))
        .route("/chat/transcript", post(chat::email_transcript))
}

/// Create the seller center router.
fn seller_center_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(seller_center::dashboard))
        .route("/products", get(seller_center::products))
        .route("/orders", get(seller_center::orders))
}

/// Create all routes for the storefront.
pub fn routes(state: &AppState) -> Router<AppState> {
    let deferred = middleware::from_fn_with_state(state.clone(), deferred_boundary);

    let (forms, chat_posts) = if state.config().rate_limit {
        (
            form_posts().route_layer(form_rate_limiter()),
            chat_posts().route_layer(chat_rate_limiter()),
        )
    } else {
        (form_posts(), chat_posts())
    };

    let mut router = Router::new()
        .route("/", get(home::home))
        .route("/about", get(pages::about))
        .route("/contact", get(pages::contact_page))
        // Catalog
        .route("/products", get(products::index))
        .route("/products/{id}", get(products::show))
        .route("/products/{id}/purchase", get(products::purchase_page))
        .route(
            "/products/{id}/quote",
            get(wholesale::quote_page).route_layer(deferred.clone()),
        )
        .route("/category/{slug}", get(products::category))
        .route("/wholesale", get(wholesale::index))
        // Accounts
        .route("/login", get(auth::login_page))
        .route("/register", get(auth::register_page))
        .route("/register/personal", get(auth::register_personal_page))
        .route("/register/business", get(auth::register_business_page))
        .route("/register/business/status", get(auth::business_status))
        // Seller center
        .nest(
            "/seller-center",
            seller_center_routes().route_layer(deferred),
        )
        // Locale and chat
        .route("/language", post(language::set_language))
        .route("/api/locale", get(language::current_locale))
        .route("/chat/toggle", post(chat::toggle))
        .merge(forms)
        .merge(chat_posts);

    if state.config().mock_controls {
        router = router.route("/mock/access", get(mock::show).post(mock::update));
    }

    router.fallback(not_found::fallback)
}
