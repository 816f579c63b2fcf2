//! Read-only catalog types.

use serde::{Deserialize, Serialize};

use crate::{Locale, Price, ProductId};

/// A value written once per supported locale.
///
/// Every field is required, so a fixture missing a translation does not
/// compile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Localized<T> {
    pub kr: T,
    pub en: T,
    pub cn: T,
    pub jp: T,
}

impl<T> Localized<T> {
    /// The value for `locale`.
    #[must_use]
    pub const fn get(&self, locale: Locale) -> &T {
        match locale {
            Locale::KR => &self.kr,
            Locale::EN => &self.en,
            Locale::CN => &self.cn,
            Locale::JP => &self.jp,
        }
    }
}

impl Localized<&'static str> {
    /// Build from four static strings in `KR, EN, CN, JP` order.
    #[must_use]
    pub const fn text(
        kr: &'static str,
        en: &'static str,
        cn: &'static str,
        jp: &'static str,
    ) -> Self {
        Self { kr, en, cn, jp }
    }
}

/// Physical attributes shown on the detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Specification {
    pub size: &'static str,
    pub material: Localized<&'static str>,
    pub colors: Vec<&'static str>,
    /// Weight in grams.
    pub weight_grams: u32,
    /// Width in millimetres.
    pub width_mm: u32,
}

/// A product listing category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub slug: &'static str,
    pub name: Localized<&'static str>,
}

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    pub id: ProductId,
    pub category: &'static str,
    pub name: Localized<&'static str>,
    pub description: Localized<&'static str>,
    /// Price in the local currency (KRW).
    pub price_local: Price,
    pub price_usd: Price,
    pub stock: u32,
    pub specification: Specification,
    /// Listed on the retail (consumer) channel.
    pub is_retail: bool,
    /// Listed on the wholesale (buyer) channel.
    pub is_wholesale: bool,
    /// Minimum order quantity for wholesale quotes.
    pub moq: u32,
}

impl Product {
    /// Localized product name.
    #[must_use]
    pub fn name(&self, locale: Locale) -> &'static str {
        *self.name.get(locale)
    }

    /// Localized product description.
    #[must_use]
    pub fn description(&self, locale: Locale) -> &'static str {
        *self.description.get(locale)
    }

    /// Price shown to a visitor: won for Korean, dollars otherwise.
    #[must_use]
    pub const fn display_price(&self, locale: Locale) -> Price {
        match locale {
            Locale::KR => self.price_local,
            Locale::EN | Locale::CN | Locale::JP => self.price_usd,
        }
    }

    /// Whether any units are left.
    #[must_use]
    pub const fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Product {
        Product {
            id: ProductId::new(1),
            category: "apparel",
            name: Localized::text("티셔츠", "T-shirt", "T恤", "Tシャツ"),
            description: Localized::text("면", "Cotton", "棉", "綿"),
            price_local: Price::krw(15_000),
            price_usd: Price::usd_cents(1_150),
            stock: 0,
            specification: Specification {
                size: "M",
                material: Localized::text("면", "Cotton", "棉", "綿"),
                colors: vec!["white"],
                weight_grams: 180,
                width_mm: 520,
            },
            is_retail: true,
            is_wholesale: false,
            moq: 1,
        }
    }

    #[test]
    fn test_localized_lookup() {
        let product = sample();
        assert_eq!(product.name(Locale::KR), "티셔츠");
        assert_eq!(product.name(Locale::EN), "T-shirt");
        assert_eq!(product.name(Locale::CN), "T恤");
        assert_eq!(product.name(Locale::JP), "Tシャツ");
    }

    #[test]
    fn test_display_price_currency() {
        let product = sample();
        assert_eq!(product.display_price(Locale::KR).display(), "₩15,000");
        assert_eq!(product.display_price(Locale::JP).display(), "$11.50");
    }

    #[test]
    fn test_in_stock() {
        assert!(!sample().in_stock());
    }
}
