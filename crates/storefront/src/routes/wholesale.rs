//! Wholesale route handlers.
//!
//! The wholesale listing and quote flow require a verified business account.
//! The quote flow also sits behind the deferred boundary.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::instrument;
use tradehub_core::Product;

use crate::error::add_breadcrumb;
use crate::filters;
use crate::middleware::{RequireCapability, Wholesale};
use crate::routes::layout::PageContext;
use crate::routes::not_found::not_found;
use crate::routes::products::ProductCard;
use crate::services::FormErrors;
use crate::services::validation;
use crate::state::AppState;

/// Quote request form data.
#[derive(Debug, Default, Deserialize)]
pub struct QuoteForm {
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub quantity: String,
    #[serde(default)]
    pub message: String,
}

/// Wholesale listing template.
#[derive(Template, WebTemplate)]
#[template(path = "wholesale/index.html")]
pub struct WholesaleIndexTemplate {
    pub page: PageContext,
    pub products: Vec<ProductCard>,
}

/// Quote request form template.
#[derive(Template, WebTemplate)]
#[template(path = "wholesale/quote.html")]
pub struct QuoteTemplate {
    pub page: PageContext,
    pub product: ProductCard,
    pub form: QuoteForm,
    pub errors: FormErrors,
}

/// Quote confirmation template.
#[derive(Template, WebTemplate)]
#[template(path = "wholesale/quote_done.html")]
pub struct QuoteDoneTemplate {
    pub page: PageContext,
    pub product: ProductCard,
    pub quantity: u32,
}

/// Display the wholesale catalog.
#[instrument(skip_all)]
pub async fn index(
    State(state): State<AppState>,
    access: RequireCapability<Wholesale>,
    page: PageContext,
) -> impl IntoResponse {
    tracing::debug!(access = ?access.state(), "Rendering wholesale catalog");
    let locale = page.locale;
    let products = state
        .catalog()
        .wholesale()
        .map(|p| ProductCard::new(p, locale))
        .collect();

    WholesaleIndexTemplate { page, products }
}

fn wholesale_product<'a>(state: &'a AppState, id: &str) -> Option<&'a Product> {
    state.catalog().find_by_path(id).filter(|p| p.is_wholesale)
}

/// Display the quote request form.
#[instrument(skip(state, _access, page))]
pub async fn quote_page(
    State(state): State<AppState>,
    _access: RequireCapability<Wholesale>,
    Path(id): Path<String>,
    page: PageContext,
) -> Response {
    let Some(product) = wholesale_product(&state, &id) else {
        return not_found(page);
    };

    QuoteTemplate {
        product: ProductCard::new(product, page.locale),
        form: QuoteForm {
            quantity: product.moq.to_string(),
            ..QuoteForm::default()
        },
        errors: FormErrors::new(page.t),
        page,
    }
    .into_response()
}

/// Handle a quote request submission.
#[instrument(skip(state, _access, page, form))]
pub async fn quote(
    State(state): State<AppState>,
    _access: RequireCapability<Wholesale>,
    Path(id): Path<String>,
    page: PageContext,
    Form(form): Form<QuoteForm>,
) -> Response {
    let Some(product) = wholesale_product(&state, &id) else {
        return not_found(page);
    };

    let mut errors = FormErrors::new(page.t);
    errors.check("company", validation::required(&form.company));
    let email = errors.check("email", validation::email(&form.email));
    let quantity = errors.check(
        "quantity",
        validation::quantity(&form.quantity, product.moq, product.stock),
    );

    let (Some(email), Some(quantity)) = (email, quantity) else {
        return invalid_quote(product, form, errors, page);
    };
    if !errors.is_empty() {
        return invalid_quote(product, form, errors, page);
    }

    add_breadcrumb(
        "wholesale",
        "Quote requested",
        Some(&[("product_id", id.as_str())]),
    );
    tracing::info!(
        product_id = %product.id,
        quantity,
        buyer_domain = email.domain(),
        "Quote requested (simulated)"
    );

    QuoteDoneTemplate {
        product: ProductCard::new(product, page.locale),
        quantity,
        page,
    }
    .into_response()
}

fn invalid_quote(
    product: &Product,
    form: QuoteForm,
    errors: FormErrors,
    page: PageContext,
) -> Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        QuoteTemplate {
            product: ProductCard::new(product, page.locale),
            form,
            errors,
            page,
        },
    )
        .into_response()
}
