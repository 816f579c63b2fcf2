//! Retail product route handlers.
//!
//! Listing, category filter, product detail and the retail purchase flow.

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
use tradehub_core::{Locale, Product};
use uuid::Uuid;

use crate::error::add_breadcrumb;
use crate::filters;
use crate::middleware::{RequireCapability, Retail};
use crate::routes::layout::PageContext;
use crate::routes::not_found::not_found;
use crate::services::FormErrors;
use crate::services::validation;
use crate::state::AppState;

// =============================================================================
// View Models
// =============================================================================

/// A product as shown in listings.
#[derive(Debug, Clone)]
pub struct ProductCard {
    pub id: u32,
    pub name: &'static str,
    pub price: String,
    pub stock: u32,
    pub moq: u32,
    pub in_stock: bool,
}

impl ProductCard {
    #[must_use]
    pub fn new(product: &Product, locale: Locale) -> Self {
        Self {
            id: product.id.as_u32(),
            name: product.name(locale),
            price: product.display_price(locale).display(),
            stock: product.stock,
            moq: product.moq,
            in_stock: product.in_stock(),
        }
    }
}

/// Link to a category listing.
#[derive(Debug, Clone)]
pub struct CategoryLink {
    pub slug: &'static str,
    pub name: &'static str,
    pub active: bool,
}

/// Full product detail.
#[derive(Debug, Clone)]
pub struct ProductDetail {
    pub card: ProductCard,
    pub description: &'static str,
    pub category: &'static str,
    pub usd_price: String,
    pub size: &'static str,
    pub material: &'static str,
    pub colors: String,
    pub weight_grams: u32,
    pub width_mm: u32,
    pub is_retail: bool,
    pub is_wholesale: bool,
}

impl ProductDetail {
    fn new(product: &Product, category: &'static str, locale: Locale) -> Self {
        let spec = &product.specification;
        Self {
            card: ProductCard::new(product, locale),
            description: product.description(locale),
            category,
            usd_price: product.price_usd.display(),
            size: spec.size,
            material: *spec.material.get(locale),
            colors: spec.colors.join(", "),
            weight_grams: spec.weight_grams,
            width_mm: spec.width_mm,
            is_retail: product.is_retail,
            is_wholesale: product.is_wholesale,
        }
    }
}

pub(crate) fn category_links(
    state: &AppState,
    locale: Locale,
    active: Option<&str>,
) -> Vec<CategoryLink> {
    state
        .catalog()
        .categories()
        .iter()
        .map(|c| CategoryLink {
            slug: c.slug,
            name: *c.name.get(locale),
            active: active == Some(c.slug),
        })
        .collect()
}

// =============================================================================
// Form Types
// =============================================================================

/// Purchase form data.
#[derive(Debug, Deserialize)]
pub struct PurchaseForm {
    #[serde(default)]
    pub quantity: String,
}

// =============================================================================
// Templates
// =============================================================================

/// Product listing template (all retail products or one category).
#[derive(Template, WebTemplate)]
#[template(path = "products/index.html")]
pub struct ProductsIndexTemplate {
    pub page: PageContext,
    pub heading: &'static str,
    pub categories: Vec<CategoryLink>,
    pub products: Vec<ProductCard>,
}

/// Product detail template.
#[derive(Template, WebTemplate)]
#[template(path = "products/show.html")]
pub struct ProductShowTemplate {
    pub page: PageContext,
    pub product: ProductDetail,
}

/// Purchase form template.
#[derive(Template, WebTemplate)]
#[template(path = "products/purchase.html")]
pub struct PurchaseTemplate {
    pub page: PageContext,
    pub product: ProductCard,
    pub quantity: String,
    pub errors: FormErrors,
}

/// Purchase confirmation template.
#[derive(Template, WebTemplate)]
#[template(path = "products/purchase_done.html")]
pub struct PurchaseDoneTemplate {
    pub page: PageContext,
    pub product: ProductCard,
    pub quantity: u32,
    pub total: String,
    pub order_number: String,
}

// =============================================================================
// Listing Routes
// =============================================================================

/// Display the retail product listing.
#[instrument(skip(state, page))]
pub async fn index(State(state): State<AppState>, page: PageContext) -> impl IntoResponse {
    let locale = page.locale;
    let products = state
        .catalog()
        .retail()
        .map(|p| ProductCard::new(p, locale))
        .collect();

    ProductsIndexTemplate {
        heading: page.t.products_title,
        categories: category_links(&state, locale, None),
        products,
        page,
    }
}

/// Display retail products in one category.
#[instrument(skip(state, page))]
pub async fn category(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    page: PageContext,
) -> Response {
    let locale = page.locale;
    let Some(category) = state.catalog().category(&slug) else {
        return not_found(page);
    };

    let products = state
        .catalog()
        .retail_in_category(category.slug)
        .map(|p| ProductCard::new(p, locale))
        .collect();

    ProductsIndexTemplate {
        heading: *category.name.get(locale),
        categories: category_links(&state, locale, Some(category.slug)),
        products,
        page,
    }
    .into_response()
}

/// Display a product detail page.
#[instrument(skip(state, page))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
    page: PageContext,
) -> Response {
    let Some(product) = state.catalog().find_by_path(&id) else {
        return not_found(page);
    };

    let category = state
        .catalog()
        .category(product.category)
        .map_or(product.category, |c| *c.name.get(page.locale));

    ProductShowTemplate {
        product: ProductDetail::new(product, category, page.locale),
        page,
    }
    .into_response()
}

// =============================================================================
// Purchase Routes
// =============================================================================

fn retail_product<'a>(state: &'a AppState, id: &str) -> Option<&'a Product> {
    state.catalog().find_by_path(id).filter(|p| p.is_retail)
}

/// Display the purchase form.
#[instrument(skip(state, _access, page))]
pub async fn purchase_page(
    State(state): State<AppState>,
    _access: RequireCapability<Retail>,
    Path(id): Path<String>,
    page: PageContext,
) -> Response {
    let Some(product) = retail_product(&state, &id) else {
        return not_found(page);
    };

    PurchaseTemplate {
        product: ProductCard::new(product, page.locale),
        quantity: "1".to_string(),
        errors: FormErrors::new(page.t),
        page,
    }
    .into_response()
}

/// Handle the purchase form submission.
#[instrument(skip(state, _access, page, form))]
pub async fn purchase(
    State(state): State<AppState>,
    _access: RequireCapability<Retail>,
    Path(id): Path<String>,
    page: PageContext,
    Form(form): Form<PurchaseForm>,
) -> Response {
    let Some(product) = retail_product(&state, &id) else {
        return not_found(page);
    };

    let mut errors = FormErrors::new(page.t);
    let quantity = errors.check(
        "quantity",
        validation::quantity(&form.quantity, 1, product.stock),
    );

    let Some(quantity) = quantity else {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            PurchaseTemplate {
                product: ProductCard::new(product, page.locale),
                quantity: form.quantity,
                errors,
                page,
            },
        )
            .into_response();
    };

    let order_number = order_number();
    add_breadcrumb(
        "checkout",
        "Purchase submitted",
        Some(&[("product_id", id.as_str()), ("order_number", order_number.as_str())]),
    );
    tracing::info!(
        product_id = %product.id,
        quantity,
        %order_number,
        "Purchase placed (simulated)"
    );

    PurchaseDoneTemplate {
        product: ProductCard::new(product, page.locale),
        quantity,
        total: product.display_price(page.locale).times(quantity).display(),
        order_number,
        page,
    }
    .into_response()
}

/// Short display reference for a simulated order.
fn order_number() -> String {
    let id = Uuid::new_v4().simple().to_string().to_uppercase();
    format!("TH-{}", id.get(..8).unwrap_or(&id))
}
