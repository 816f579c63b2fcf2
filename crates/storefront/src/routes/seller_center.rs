//! Seller center route handlers.
//!
//! Every page requires a business account and sits behind the deferred
//! boundary. The overview figures are computed once, on the first visit.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;
use tradehub_core::VerificationStatus;

use crate::catalog::{LOW_STOCK_THRESHOLD, OrderStatus};
use crate::filters;
use crate::i18n::Messages;
use crate::middleware::{RequireCapability, SellerCenter};
use crate::routes::layout::PageContext;
use crate::state::AppState;

/// Seller center section, for the tab bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Overview,
    Products,
    Orders,
}

/// Shared seller center chrome.
#[derive(Debug, Clone)]
pub struct SellerChrome {
    pub section: Section,
    /// Business accounts that are not yet verified see a notice.
    pub show_unverified_notice: bool,
}

impl SellerChrome {
    fn new(section: Section, status: Option<VerificationStatus>) -> Self {
        Self {
            section,
            show_unverified_notice: status != Some(VerificationStatus::Verified),
        }
    }

    #[must_use]
    pub fn is_overview(&self) -> bool {
        self.section == Section::Overview
    }

    #[must_use]
    pub fn is_products(&self) -> bool {
        self.section == Section::Products
    }

    #[must_use]
    pub fn is_orders(&self) -> bool {
        self.section == Section::Orders
    }
}

/// A row of the seller product table.
#[derive(Debug, Clone)]
pub struct SellerProductRow {
    pub id: u32,
    pub name: &'static str,
    pub stock: u32,
    pub low_stock: bool,
    pub retail: bool,
    pub wholesale: bool,
    pub moq: u32,
}

/// A row of the seller order table.
#[derive(Debug, Clone)]
pub struct SellerOrderRow {
    pub id: u32,
    pub product: &'static str,
    pub quantity: u32,
    pub status: &'static str,
    pub placed_on: String,
}

const fn order_status_label(t: &Messages, status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Paid => t.order_status_paid,
        OrderStatus::Shipped => t.order_status_shipped,
        OrderStatus::Delivered => t.order_status_delivered,
    }
}

/// Dashboard template.
#[derive(Template, WebTemplate)]
#[template(path = "seller/dashboard.html")]
pub struct DashboardTemplate {
    pub page: PageContext,
    pub chrome: SellerChrome,
    pub total_products: usize,
    pub wholesale_products: usize,
    pub low_stock: usize,
    pub open_orders: usize,
}

/// Seller products template.
#[derive(Template, WebTemplate)]
#[template(path = "seller/products.html")]
pub struct SellerProductsTemplate {
    pub page: PageContext,
    pub chrome: SellerChrome,
    pub rows: Vec<SellerProductRow>,
}

/// Seller orders template.
#[derive(Template, WebTemplate)]
#[template(path = "seller/orders.html")]
pub struct SellerOrdersTemplate {
    pub page: PageContext,
    pub chrome: SellerChrome,
    pub rows: Vec<SellerOrderRow>,
}

/// Display the seller center overview.
#[instrument(skip_all)]
pub async fn dashboard(
    State(state): State<AppState>,
    access: RequireCapability<SellerCenter>,
    page: PageContext,
) -> impl IntoResponse {
    let overview = state.seller_overview().await;

    DashboardTemplate {
        chrome: SellerChrome::new(Section::Overview, access.state().verification_status),
        total_products: overview.total_products,
        wholesale_products: overview.wholesale_products,
        low_stock: overview.low_stock.len(),
        open_orders: overview.open_orders,
        page,
    }
}

/// Display the seller product table.
#[instrument(skip_all)]
pub async fn products(
    State(state): State<AppState>,
    access: RequireCapability<SellerCenter>,
    page: PageContext,
) -> impl IntoResponse {
    let locale = page.locale;
    let rows = state
        .catalog()
        .products()
        .iter()
        .map(|p| SellerProductRow {
            id: p.id.as_u32(),
            name: p.name(locale),
            stock: p.stock,
            low_stock: p.stock <= LOW_STOCK_THRESHOLD,
            retail: p.is_retail,
            wholesale: p.is_wholesale,
            moq: p.moq,
        })
        .collect();

    SellerProductsTemplate {
        chrome: SellerChrome::new(Section::Products, access.state().verification_status),
        rows,
        page,
    }
}

/// Display the seller order table.
#[instrument(skip_all)]
pub async fn orders(
    State(state): State<AppState>,
    access: RequireCapability<SellerCenter>,
    page: PageContext,
) -> impl IntoResponse {
    let locale = page.locale;
    let catalog = state.catalog();
    let rows = catalog
        .orders()
        .iter()
        .map(|o| SellerOrderRow {
            id: o.id.as_u32(),
            product: catalog.find(o.product_id).map_or("-", |p| p.name(locale)),
            quantity: o.quantity,
            status: order_status_label(page.t, o.status),
            placed_on: o.placed_on.format("%Y-%m-%d").to_string(),
        })
        .collect();

    SellerOrdersTemplate {
        chrome: SellerChrome::new(Section::Orders, access.state().verification_status),
        rows,
        page,
    }
}

#[cfg(test)]
mod tests {
    use tradehub_core::Locale;

    use super::*;
    use crate::i18n::messages;

    #[test]
    fn test_unverified_notice() {
        let pending = SellerChrome::new(Section::Overview, Some(VerificationStatus::Pending));
        assert!(pending.show_unverified_notice);
        assert!(SellerChrome::new(Section::Overview, None).show_unverified_notice);
        let verified = SellerChrome::new(Section::Overview, Some(VerificationStatus::Verified));
        assert!(!verified.show_unverified_notice);
    }

    #[test]
    fn test_order_status_labels_are_distinct() {
        let t = messages(Locale::EN);
        let labels = [
            order_status_label(t, OrderStatus::Paid),
            order_status_label(t, OrderStatus::Shipped),
            order_status_label(t, OrderStatus::Delivered),
        ];
        assert_ne!(labels[0], labels[1]);
        assert_ne!(labels[1], labels[2]);
    }
}
