//! Language selection and persistence.

#![allow(clippy::unwrap_used)]

use axum::http::StatusCode;
use tradehub_integration_tests::TestClient;

#[tokio::test]
async fn test_default_locale_is_korean() {
    let mut client = TestClient::new();
    let resp = client.get("/").await;

    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.contains("<html lang=\"ko\">"));
}

#[tokio::test]
async fn test_browser_language_picks_locale() {
    let mut client = TestClient::new().accept_language("ja-JP,ja;q=0.9,en;q=0.5");
    let resp = client.get("/").await;

    assert!(resp.contains("<html lang=\"ja\">"));
}

#[tokio::test]
async fn test_unsupported_browser_language_falls_back() {
    let mut client = TestClient::new().accept_language("fr-FR");
    let resp = client.get("/").await;

    assert!(resp.contains("<html lang=\"ko\">"));
}

#[tokio::test]
async fn test_selected_language_persists_over_browser_language() {
    let mut client = TestClient::new().accept_language("ja-JP");

    let resp = client
        .post_form("/language", &[("locale", "EN"), ("return_to", "/products")])
        .await;
    assert_eq!(resp.status, StatusCode::SEE_OTHER);
    assert_eq!(resp.location(), Some("/products"));

    let resp = client.get("/about").await;
    assert!(resp.contains("<html lang=\"en\">"));
    assert!(resp.contains("About TradeHub"));

    let resp = client.get("/api/locale").await;
    let json: serde_json::Value = serde_json::from_str(&resp.body).unwrap();
    assert_eq!(json["locale"], "EN");
    assert_eq!(json["lang"], "en");
}

#[tokio::test]
async fn test_invalid_locale_code_is_ignored() {
    let mut client = TestClient::new();

    client.post_form("/language", &[("locale", "CN")]).await;
    let resp = client.post_form("/language", &[("locale", "XX")]).await;
    assert_eq!(resp.status, StatusCode::SEE_OTHER);

    let resp = client.get("/").await;
    assert!(resp.contains("<html lang=\"zh\">"));
}

#[tokio::test]
async fn test_language_redirect_stays_on_site() {
    let mut client = TestClient::new();
    let resp = client
        .post_form(
            "/language",
            &[("locale", "EN"), ("return_to", "//evil.example/phish")],
        )
        .await;

    assert_eq!(resp.location(), Some("/"));
}

#[tokio::test]
async fn test_language_selector_marks_current_locale() {
    let mut client = TestClient::new().accept_language("en");
    let resp = client.get("/").await;

    assert!(resp.contains("<option value=\"EN\" selected>English</option>"));
    assert!(resp.contains("name=\"return_to\" value=\"/\""));
}
