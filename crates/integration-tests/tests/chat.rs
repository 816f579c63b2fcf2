//! The simulated support chat.

#![allow(clippy::unwrap_used)]

use axum::http::StatusCode;
use tradehub_integration_tests::{TestClient, conversation_id};

/// Open the widget and return the conversation id it rendered.
async fn open_chat(client: &mut TestClient) -> String {
    let resp = client.post_form("/chat/toggle", &[]).await;
    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.contains("chat--open"));
    conversation_id(&resp.body).unwrap().to_string()
}

#[tokio::test]
async fn test_widget_is_closed_by_default() {
    let mut client = TestClient::new().accept_language("en");
    let resp = client.get("/").await;

    assert!(resp.contains("Chat with us"));
    assert!(conversation_id(&resp.body).is_none());
}

#[tokio::test]
async fn test_open_state_survives_navigation() {
    let mut client = TestClient::new().accept_language("en");
    open_chat(&mut client).await;

    let resp = client.get("/about").await;
    assert!(resp.contains("chat--open"));
    assert!(resp.contains("Hi! How can we help you today?"));

    let resp = client.post_form("/chat/toggle", &[]).await;
    assert!(!resp.contains("chat--open"));
}

#[tokio::test]
async fn test_reply_follows_message_language() {
    let mut client = TestClient::new().accept_language("en");
    let id = open_chat(&mut client).await;

    let resp = client
        .post_form(
            "/chat/messages",
            &[
                ("conversation_id", id.as_str()),
                ("message", "안녕하세요"),
            ],
        )
        .await;
    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.contains("chat__message--user"));
    assert!(resp.contains("lang=\"ko\""));
    assert!(resp.contains("문의해 주셔서 감사합니다"));

    let resp = client
        .post_form(
            "/chat/messages",
            &[("conversation_id", id.as_str()), ("message", "你好")],
        )
        .await;
    assert!(resp.contains("lang=\"zh\""));
    assert!(resp.contains("感谢您的咨询"));

    let resp = client
        .post_form(
            "/chat/messages",
            &[
                ("conversation_id", id.as_str()),
                ("message", "Hello there"),
            ],
        )
        .await;
    assert!(resp.contains("lang=\"en\""));
    assert!(resp.contains("A TradeHub agent will follow up shortly."));
}

#[tokio::test]
async fn test_user_text_is_escaped() {
    let mut client = TestClient::new();
    let id = open_chat(&mut client).await;

    let resp = client
        .post_form(
            "/chat/messages",
            &[("conversation_id", id.as_str()), ("message", "<script>x</script>")],
        )
        .await;
    assert_eq!(resp.status, StatusCode::OK);
    assert!(!resp.contains("<script>"));
}

#[tokio::test]
async fn test_empty_message_rejected() {
    let mut client = TestClient::new();
    let id = open_chat(&mut client).await;

    let resp = client
        .post_form(
            "/chat/messages",
            &[("conversation_id", id.as_str()), ("message", "   ")],
        )
        .await;
    assert_eq!(resp.status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_unknown_conversation_id_rejected() {
    let mut client = TestClient::new();
    let resp = client
        .post_form(
            "/chat/messages",
            &[("conversation_id", "nope"), ("message", "hi")],
        )
        .await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_transcript_email() {
    let mut client = TestClient::new().accept_language("en");
    let id = open_chat(&mut client).await;

    let resp = client
        .post_form(
            "/chat/transcript",
            &[
                ("conversation_id", id.as_str()),
                ("email", "buyer@example.com"),
            ],
        )
        .await;
    assert_eq!(resp.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(resp.contains("There is nothing to send yet."));

    client
        .post_form(
            "/chat/messages",
            &[("conversation_id", id.as_str()), ("message", "Hello")],
        )
        .await;

    let resp = client
        .post_form(
            "/chat/transcript",
            &[
                ("conversation_id", id.as_str()),
                ("email", "not-an-email"),
            ],
        )
        .await;
    assert_eq!(resp.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(resp.contains("Please enter a valid email address."));

    let resp = client
        .post_form(
            "/chat/transcript",
            &[
                ("conversation_id", id.as_str()),
                ("email", "buyer@example.com"),
            ],
        )
        .await;
    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.contains("Transcript sent to buyer@example.com"));
}
