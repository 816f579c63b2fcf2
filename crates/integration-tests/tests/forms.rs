//! Form validation and the mock registration flows.

use axum::http::StatusCode;
use tradehub_integration_tests::TestClient;

// ============================================================================
// Registration
// ============================================================================

#[tokio::test]
async fn test_business_registration_validation() {
    let mut client = TestClient::new().accept_language("en");
    let resp = client
        .post_form(
            "/register/business",
            &[
                ("company", "Hanbit Trading"),
                ("business_number", "1234567890"),
                ("email", "ops@hanbit.example"),
                ("password", "short"),
                ("password_confirm", "short"),
            ],
        )
        .await;

    assert_eq!(resp.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(resp.contains("Use the format 000-00-00000."));
    assert!(resp.contains("Use at least 8 characters"));
    assert!(resp.contains("value=\"Hanbit Trading\""));
}

#[tokio::test]
async fn test_business_registration_starts_pending() {
    let mut client = TestClient::new().accept_language("en");
    let resp = client
        .post_form(
            "/register/business",
            &[
                ("company", "Hanbit Trading"),
                ("business_number", "123-45-67890"),
                ("email", "ops@hanbit.example"),
                ("password", "Secret#123"),
                ("password_confirm", "Secret#123"),
            ],
        )
        .await;
    assert_eq!(resp.status, StatusCode::SEE_OTHER);
    assert_eq!(resp.location(), Some("/register/business/status"));

    let resp = client.get("/register/business/status").await;
    assert!(resp.contains("status-badge--pending"));

    // Pending businesses may use the seller center but not wholesale
    let resp = client.get("/wholesale").await;
    assert_eq!(resp.status, StatusCode::FORBIDDEN);
    let resp = client.get_deferred("/seller-center").await;
    assert_eq!(resp.status, StatusCode::OK);
}

#[tokio::test]
async fn test_personal_registration_password_mismatch() {
    let mut client = TestClient::new().accept_language("en");
    let resp = client
        .post_form(
            "/register/personal",
            &[
                ("name", "Mina"),
                ("email", "mina@example.com"),
                ("password", "Secret#123"),
                ("password_confirm", "Secret#124"),
            ],
        )
        .await;

    assert_eq!(resp.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(resp.contains("Passwords do not match."));
}

#[tokio::test]
async fn test_login_requires_fields() {
    let mut client = TestClient::new().accept_language("en");
    let resp = client.post_form("/login", &[("email", ""), ("password", "")]).await;

    assert_eq!(resp.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(resp.contains("This field is required."));
}

// ============================================================================
// Purchase & quote
// ============================================================================

#[tokio::test]
async fn test_purchase_quantity_bounds() {
    let mut client = TestClient::new().accept_language("en");

    let resp = client
        .post_form("/products/1/purchase", &[("quantity", "0")])
        .await;
    assert_eq!(resp.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(resp.contains("Quantity must be at least 1"));

    let resp = client
        .post_form("/products/1/purchase", &[("quantity", "two")])
        .await;
    assert!(resp.contains("Enter a whole number."));

    let resp = client
        .post_form("/products/1/purchase", &[("quantity", "3")])
        .await;
    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.contains("Order placed"));
    assert!(resp.contains("TH-"));
}

#[tokio::test]
async fn test_wholesale_only_product_is_not_purchasable() {
    let mut client = TestClient::new();
    let resp = client.get("/products/4/purchase").await;

    assert_eq!(resp.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_quote_respects_minimum_order() {
    let mut client = TestClient::new().accept_language("en");
    client
        .post_form(
            "/mock/access",
            &[("user_type", "business"), ("verification_status", "verified")],
        )
        .await;

    let resp = client.get("/products/1/quote").await;
    assert!(resp.contains("data-deferred"));

    let resp = client.get_deferred("/products/1/quote").await;
    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.contains("value=\"50\""));

    let resp = client
        .post_form(
            "/products/1/quote",
            &[
                ("company", "Hanbit Trading"),
                ("email", "ops@hanbit.example"),
                ("quantity", "10"),
            ],
        )
        .await;
    assert_eq!(resp.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(resp.contains("Quantity must be at least 50"));

    let resp = client
        .post_form(
            "/products/1/quote",
            &[
                ("company", "Hanbit Trading"),
                ("email", "ops@hanbit.example"),
                ("quantity", "80"),
            ],
        )
        .await;
    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.contains("Quote requested"));
}

#[tokio::test]
async fn test_contact_form() {
    let mut client = TestClient::new().accept_language("en");

    let resp = client
        .post_form(
            "/contact",
            &[("name", "Mina"), ("email", "bad"), ("message", "")],
        )
        .await;
    assert_eq!(resp.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(resp.contains("value=\"Mina\""));

    let resp = client
        .post_form(
            "/contact",
            &[("name", "Mina"), ("email", "mina@example.com"), ("message", "Hello")],
        )
        .await;
    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.contains("notice--success"));
}

// ============================================================================
// Catalog pages
// ============================================================================

#[tokio::test]
async fn test_unknown_pages_are_not_found() {
    let mut client = TestClient::new().accept_language("en");

    for path in ["/nope", "/products/999", "/products/abc", "/category/none"] {
        let resp = client.get(path).await;
        assert_eq!(resp.status, StatusCode::NOT_FOUND, "{path}");
        assert!(resp.contains("Page not found"), "{path}");
    }
}

#[tokio::test]
async fn test_product_detail_shows_specification() {
    let mut client = TestClient::new().accept_language("en");
    let resp = client.get("/products/1").await;

    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.contains("Organic Cotton T-Shirt"));
    assert!(resp.contains("100% organic cotton"));
    assert!(resp.contains("href=\"/products/1/purchase\""));
    assert!(resp.contains("href=\"/products/1/quote\""));
}

#[tokio::test]
async fn test_security_headers_present() {
    let mut client = TestClient::new();
    let resp = client.get("/").await;

    assert!(resp.headers.contains_key("content-security-policy"));
    assert!(resp.headers.contains_key("x-request-id"));
    assert_eq!(
        resp.headers.get("x-frame-options").and_then(|v| v.to_str().ok()),
        Some("DENY")
    );
}
