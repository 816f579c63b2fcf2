//! In-memory product catalog.
//!
//! The storefront has no product backend; the catalog is built once from
//! static fixture data and shared read-only through [`AppState`].
//!
//! [`AppState`]: crate::state::AppState

mod fixtures;

use chrono::NaiveDate;
use tradehub_core::{Category, OrderId, Product, ProductId};

/// Stock at or below this count is flagged in the seller center.
pub const LOW_STOCK_THRESHOLD: u32 = 20;

/// Fulfilment state of a seller-side order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Paid,
    Shipped,
    Delivered,
}

/// An order shown in the seller center.
#[derive(Debug, Clone)]
pub struct SellerOrder {
    pub id: OrderId,
    pub product_id: ProductId,
    pub quantity: u32,
    pub status: OrderStatus,
    pub placed_on: NaiveDate,
}

/// Aggregate figures for the seller center overview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SellerOverview {
    pub total_products: usize,
    pub wholesale_products: usize,
    pub low_stock: Vec<ProductId>,
    pub open_orders: usize,
}

/// Read-only product, category and order data.
#[derive(Debug)]
pub struct Catalog {
    products: Vec<Product>,
    categories: Vec<Category>,
    orders: Vec<SellerOrder>,
}

impl Catalog {
    /// Build the catalog from the bundled fixtures.
    #[must_use]
    pub fn fixtures() -> Self {
        Self {
            products: fixtures::products(),
            categories: fixtures::categories(),
            orders: fixtures::orders(),
        }
    }

    /// All products, retail and wholesale.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// All categories in display order.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Seller-side orders, newest first.
    #[must_use]
    pub fn orders(&self) -> &[SellerOrder] {
        &self.orders
    }

    /// Look a product up by id.
    #[must_use]
    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Look a product up by a raw path segment; unparsable ids are simply absent.
    #[must_use]
    pub fn find_by_path(&self, raw_id: &str) -> Option<&Product> {
        raw_id.parse().ok().and_then(|id| self.find(id))
    }

    /// Look a category up by slug.
    #[must_use]
    pub fn category(&self, slug: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.slug == slug)
    }

    /// Products on the retail channel.
    pub fn retail(&self) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(|p| p.is_retail)
    }

    /// Products on the wholesale channel.
    pub fn wholesale(&self) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(|p| p.is_wholesale)
    }

    /// Compute the seller center overview.
    #[must_use]
    pub fn seller_overview(&self) -> SellerOverview {
        SellerOverview {
            total_products: self.products.len(),
            wholesale_products: self.wholesale().count(),
            low_stock: self
                .products
                .iter()
                .filter(|p| p.stock <= LOW_STOCK_THRESHOLD)
                .map(|p| p.id)
                .collect(),
            open_orders: self
                .orders
                .iter()
                .filter(|o| o.status != OrderStatus::Delivered)
                .count(),
        }
    }

    /// Retail products in a category.
    pub fn retail_in_category<'a>(&'a self, slug: &'a str) -> impl Iterator<Item = &'a Product> {
        self.retail().filter(move |p| p.category == slug)
    }
}
