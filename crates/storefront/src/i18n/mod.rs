//! Translated interface text.
//!
//! Each locale has one fully-populated [`Messages`] table. Lookups go
//! through [`messages`], an exhaustive `match` over [`Locale`], so a new
//! locale or a missing string fails to compile instead of falling back at
//! runtime.

mod en;
mod ja;
mod ko;
mod zh;

use tradehub_core::{Locale, UserType, VerificationStatus};

/// Interface strings for one locale.
#[derive(Debug)]
pub struct Messages {
    // Layout
    pub site_name: &'static str,
    pub nav_home: &'static str,
    pub nav_products: &'static str,
    pub nav_wholesale: &'static str,
    pub nav_seller_center: &'static str,
    pub nav_about: &'static str,
    pub nav_contact: &'static str,
    pub nav_login: &'static str,
    pub nav_register: &'static str,
    pub language_label: &'static str,
    pub footer_rights: &'static str,

    // Home & about
    pub home_title: &'static str,
    pub home_subtitle: &'static str,
    pub home_featured: &'static str,
    pub home_categories: &'static str,
    pub home_cta_retail: &'static str,
    pub home_cta_wholesale: &'static str,
    pub about_title: &'static str,
    pub about_body: &'static str,

    // Listings
    pub products_title: &'static str,
    pub wholesale_title: &'static str,
    pub wholesale_subtitle: &'static str,
    pub category_label: &'static str,
    pub empty_listing: &'static str,
    pub out_of_stock: &'static str,
    pub stock_label: &'static str,
    pub moq_label: &'static str,
    pub view_details: &'static str,

    // Product detail
    pub spec_title: &'static str,
    pub spec_size: &'static str,
    pub spec_material: &'static str,
    pub spec_colors: &'static str,
    pub spec_weight: &'static str,
    pub spec_width: &'static str,
    pub price_label: &'static str,
    pub usd_price_label: &'static str,
    pub buy_now: &'static str,
    pub request_quote: &'static str,

    // Purchase & quote
    pub purchase_title: &'static str,
    pub quantity_label: &'static str,
    pub submit_purchase: &'static str,
    pub purchase_done_title: &'static str,
    pub purchase_done_body: &'static str,
    pub order_number_label: &'static str,
    pub total_label: &'static str,
    pub quote_title: &'static str,
    pub company_label: &'static str,
    pub email_label: &'static str,
    pub message_label: &'static str,
    pub submit_quote: &'static str,
    pub quote_done_title: &'static str,
    pub quote_done_body: &'static str,

    // Contact & login
    pub contact_title: &'static str,
    pub name_label: &'static str,
    pub contact_submit: &'static str,
    pub contact_done: &'static str,
    pub login_title: &'static str,
    pub password_label: &'static str,
    pub login_submit: &'static str,

    // Registration
    pub register_title: &'static str,
    pub register_choose: &'static str,
    pub register_personal: &'static str,
    pub register_personal_desc: &'static str,
    pub register_business: &'static str,
    pub register_business_desc: &'static str,
    pub password_confirm_label: &'static str,
    pub business_number_label: &'static str,
    pub register_submit: &'static str,
    pub register_pending_title: &'static str,
    pub register_pending_body: &'static str,
    pub register_personal_done: &'static str,
    pub verification_status_label: &'static str,
    pub user_type_label: &'static str,
    pub status_pending: &'static str,
    pub status_verified: &'static str,
    pub status_rejected: &'static str,
    pub status_unset: &'static str,
    pub user_type_business: &'static str,
    pub user_type_personal: &'static str,

    // Seller center
    pub seller_title: &'static str,
    pub seller_overview: &'static str,
    pub seller_products: &'static str,
    pub seller_orders: &'static str,
    pub seller_total_products: &'static str,
    pub seller_low_stock: &'static str,
    pub seller_wholesale_count: &'static str,
    pub seller_order_status: &'static str,
    pub seller_unverified_notice: &'static str,
    pub order_status_paid: &'static str,
    pub order_status_shipped: &'static str,
    pub order_status_delivered: &'static str,

    // Access gate
    pub denied_title: &'static str,
    pub denied_wholesale_body: &'static str,
    pub denied_seller_body: &'static str,
    pub cta_register_business: &'static str,
    pub cta_go_retail: &'static str,
    pub cta_login: &'static str,
    pub cta_home: &'static str,
    pub loading: &'static str,
    pub deferred_noscript: &'static str,

    // Not found
    pub not_found_title: &'static str,
    pub not_found_body: &'static str,

    // Chat widget
    pub chat_title: &'static str,
    pub chat_open: &'static str,
    pub chat_close: &'static str,
    pub chat_placeholder: &'static str,
    pub chat_send: &'static str,
    pub chat_greeting: &'static str,
    pub chat_reply: &'static str,
    pub chat_email_offer: &'static str,
    pub chat_email_send: &'static str,
    pub chat_email_sent: &'static str,
    pub chat_email_empty: &'static str,

    // Mock controls
    pub mock_title: &'static str,
    pub mock_body: &'static str,
    pub mock_submit: &'static str,

    // Validation
    pub err_required: &'static str,
    pub err_email: &'static str,
    pub err_password_policy: &'static str,
    pub err_password_mismatch: &'static str,
    pub err_business_number: &'static str,
    pub err_quantity_number: &'static str,
    pub err_quantity_min: &'static str,
    pub err_quantity_max: &'static str,
}

/// The table for `locale`.
#[must_use]
pub const fn messages(locale: Locale) -> &'static Messages {
    match locale {
        Locale::KR => &ko::MESSAGES,
        Locale::EN => &en::MESSAGES,
        Locale::CN => &zh::MESSAGES,
        Locale::JP => &ja::MESSAGES,
    }
}

impl Messages {
    /// Label for a verification status (`None` reads as "not registered").
    #[must_use]
    pub const fn verification_status(&self, status: Option<VerificationStatus>) -> &'static str {
        match status {
            Some(VerificationStatus::Pending) => self.status_pending,
            Some(VerificationStatus::Verified) => self.status_verified,
            Some(VerificationStatus::Rejected) => self.status_rejected,
            None => self.status_unset,
        }
    }

    /// Label for a user type (`None` reads as "not registered").
    #[must_use]
    pub const fn user_type(&self, user_type: Option<UserType>) -> &'static str {
        match user_type {
            Some(UserType::Business) => self.user_type_business,
            Some(UserType::Personal) => self.user_type_personal,
            None => self.status_unset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_locale_has_its_own_table() {
        for a in Locale::ALL {
            for b in Locale::ALL {
                if a != b {
                    assert_ne!(messages(a).nav_home, messages(b).nav_home, "{a} vs {b}");
                }
            }
        }
    }

    #[test]
    fn test_site_name_is_shared_brand() {
        for locale in Locale::ALL {
            assert!(messages(locale).site_name.contains("TradeHub"));
        }
    }

    #[test]
    fn test_status_labels() {
        let t = messages(Locale::EN);
        assert_eq!(t.verification_status(Some(VerificationStatus::Verified)), "Verified");
        assert_eq!(t.verification_status(None), t.status_unset);
        assert_eq!(t.user_type(Some(UserType::Business)), "Business");
    }
}
