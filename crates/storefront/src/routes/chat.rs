//! Chat widget fragment endpoints.
//!
//! Called by `storefront.js`; every response is an HTML fragment that the
//! script inserts into the widget.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;
use tradehub_core::{ChatMessage, ConversationId, Sender};

use crate::error::{AppError, Result};
use crate::models::session_keys;
use crate::routes::layout::PageContext;
use crate::services::ChatError;
use crate::state::AppState;

/// A rendered chat bubble.
#[derive(Debug, Clone)]
pub struct MessageView {
    pub text: String,
    pub from_user: bool,
    pub lang: &'static str,
    pub time: String,
}

impl From<&ChatMessage> for MessageView {
    fn from(message: &ChatMessage) -> Self {
        Self {
            text: message.text.clone(),
            from_user: message.sender == Sender::User,
            lang: message.locale.html_lang(),
            time: message.timestamp.format("%H:%M").to_string(),
        }
    }
}

/// Chat message form data.
#[derive(Debug, Deserialize)]
pub struct MessageForm {
    #[serde(default)]
    pub conversation_id: String,
    #[serde(default)]
    pub message: String,
}

/// Transcript email form data.
#[derive(Debug, Deserialize)]
pub struct TranscriptForm {
    #[serde(default)]
    pub conversation_id: String,
    #[serde(default)]
    pub email: String,
}

/// The whole widget (used on toggle).
#[derive(Template, WebTemplate)]
#[template(path = "partials/chat_widget.html")]
pub struct ChatWidgetTemplate {
    pub page: PageContext,
}

/// A visitor message and its reply.
#[derive(Template, WebTemplate)]
#[template(path = "partials/chat_exchange.html")]
pub struct ChatExchangeTemplate {
    pub messages: Vec<MessageView>,
}

/// Outcome of a transcript email request.
#[derive(Template, WebTemplate)]
#[template(path = "partials/chat_transcript.html")]
pub struct TranscriptResultTemplate {
    pub ok: bool,
    pub text: String,
}

fn conversation(raw: &str) -> Result<ConversationId> {
    ConversationId::parse(raw).ok_or_else(|| AppError::BadRequest("invalid conversation".into()))
}

/// Flip the widget's open flag.
///
/// POST /chat/toggle
#[instrument(skip_all)]
pub async fn toggle(session: Session, mut page: PageContext) -> Result<impl IntoResponse> {
    let open = !page.chat.open;
    session.insert(session_keys::CHAT_OPEN, open).await?;
    page.chat.open = open;
    tracing::debug!(open, "Chat widget toggled");

    Ok(ChatWidgetTemplate { page })
}

/// Send a message and wait for the simulated reply.
///
/// POST /chat/messages
#[instrument(skip_all)]
pub async fn send_message(
    State(state): State<AppState>,
    Form(form): Form<MessageForm>,
) -> Result<impl IntoResponse> {
    let conversation = conversation(&form.conversation_id)?;
    let exchange = state.chat().respond(conversation, &form.message).await?;

    Ok(ChatExchangeTemplate {
        messages: vec![
            MessageView::from(&exchange.user),
            MessageView::from(&exchange.reply),
        ],
    })
}

/// Email the conversation transcript (simulated).
///
/// POST /chat/transcript
#[instrument(skip_all)]
pub async fn email_transcript(
    State(state): State<AppState>,
    page: PageContext,
    Form(form): Form<TranscriptForm>,
) -> Result<Response> {
    let conversation = conversation(&form.conversation_id)?;
    let t = page.t;

    let response = match state.chat().email_transcript(conversation, &form.email).await {
        Ok(email) => TranscriptResultTemplate {
            ok: true,
            text: format!("{} {email}", t.chat_email_sent),
        }
        .into_response(),
        Err(e) => {
            let text = match e {
                ChatError::InvalidEmail(_) => t.err_email,
                ChatError::EmptyTranscript
                | ChatError::EmptyMessage
                | ChatError::MessageTooLong { .. } => t.chat_email_empty,
            };
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                TranscriptResultTemplate {
                    ok: false,
                    text: text.to_string(),
                },
            )
                .into_response()
        }
    };

    Ok(response)
}

#[cfg(test)]
mod tests {
    use tradehub_core::Locale;

    use super::*;

    #[test]
    fn test_message_view() {
        let view = MessageView::from(&ChatMessage::new("こんにちは", Sender::User, Locale::JP));
        assert!(view.from_user);
        assert_eq!(view.lang, "ja");
        assert_eq!(view.time.len(), 5);
    }

    #[test]
    fn test_conversation_id_must_parse() {
        assert!(conversation("not-a-uuid").is_err());
        assert!(conversation(&ConversationId::generate().to_string()).is_ok());
    }
}
