//! Views rendered in place of gated or deferred content.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    http::{HeaderValue, StatusCode, header::RETRY_AFTER},
    response::{IntoResponse, Response},
};
use tradehub_core::Capability;

use crate::filters;
use crate::i18n::Messages;
use crate::routes::layout::PageContext;

/// Seconds the loading view waits before asking again.
pub const LOADING_RETRY_SECS: u32 = 1;

/// A call-to-action link on the denial view.
#[derive(Debug, Clone)]
pub struct Cta {
    pub href: &'static str,
    pub label: &'static str,
    pub primary: bool,
}

/// Access denied page template.
#[derive(Template, WebTemplate)]
#[template(path = "gate/denied.html")]
pub struct DeniedTemplate {
    pub page: PageContext,
    pub body: &'static str,
    pub ctas: Vec<Cta>,
}

/// Loading page template; refreshes itself until the gate resolves.
#[derive(Template, WebTemplate)]
#[template(path = "gate/loading.html")]
pub struct LoadingTemplate {
    pub page: PageContext,
    pub retry_after: u32,
}

/// Placeholder for a deferred route group.
#[derive(Template, WebTemplate)]
#[template(path = "gate/deferred.html")]
pub struct DeferredTemplate {
    pub page: PageContext,
}

/// Contextual calls-to-action for a denied capability.
#[must_use]
pub fn denial_ctas(t: &'static Messages, capability: Capability) -> Vec<Cta> {
    let register = Cta {
        href: "/register/business",
        label: t.cta_register_business,
        primary: true,
    };
    let login = Cta {
        href: "/login",
        label: t.cta_login,
        primary: false,
    };
    let home = Cta {
        href: "/",
        label: t.cta_home,
        primary: false,
    };

    match capability {
        Capability::Wholesale => vec![
            register,
            Cta {
                href: "/products",
                label: t.cta_go_retail,
                primary: false,
            },
            login,
            home,
        ],
        Capability::SellerCenter => vec![register, login, home],
        // Retail is never denied; offer the way home regardless.
        Capability::Retail => vec![home],
    }
}

/// 403 access-denied view.
#[must_use]
pub fn denied_response(page: PageContext, capability: Capability) -> Response {
    let t = page.t;
    let body = match capability {
        Capability::SellerCenter => t.denied_seller_body,
        Capability::Wholesale | Capability::Retail => t.denied_wholesale_body,
    };

    (
        StatusCode::FORBIDDEN,
        DeniedTemplate {
            page,
            body,
            ctas: denial_ctas(t, capability),
        },
    )
        .into_response()
}

/// 200 loading view with `Retry-After` and a meta refresh.
#[must_use]
pub fn loading_response(page: PageContext) -> Response {
    let mut response = LoadingTemplate {
        page,
        retry_after: LOADING_RETRY_SECS,
    }
    .into_response();
    response
        .headers_mut()
        .insert(RETRY_AFTER, HeaderValue::from(LOADING_RETRY_SECS));
    response
}

/// Interstitial for the first navigation into a deferred group.
#[must_use]
pub fn deferred_response(page: PageContext) -> Response {
    DeferredTemplate { page }.into_response()
}

#[cfg(test)]
mod tests {
    use tradehub_core::Locale;

    use super::*;
    use crate::i18n::messages;

    fn hrefs(capability: Capability) -> Vec<&'static str> {
        denial_ctas(messages(Locale::EN), capability)
            .into_iter()
            .map(|c| c.href)
            .collect()
    }

    #[test]
    fn test_wholesale_ctas() {
        assert_eq!(
            hrefs(Capability::Wholesale),
            ["/register/business", "/products", "/login", "/"]
        );
    }

    #[test]
    fn test_seller_center_ctas() {
        assert_eq!(
            hrefs(Capability::SellerCenter),
            ["/register/business", "/login", "/"]
        );
    }

    #[test]
    fn test_denied_and_loading_statuses() {
        let page = || PageContext::new(Locale::KR, "/wholesale".to_string(), false, false);
        assert_eq!(
            denied_response(page(), Capability::Wholesale).status(),
            StatusCode::FORBIDDEN
        );

        let loading = loading_response(page());
        assert_eq!(loading.status(), StatusCode::OK);
        assert_eq!(loading.headers()[RETRY_AFTER], "1");
    }
}
