//! Live-support chat with simulated translation and replies.
//!
//! Each widget render gets a fresh [`ConversationId`]; transcripts are kept
//! in a bounded in-memory cache keyed by that id. A reply goes through two
//! simulated phases (translating, then typing) before both the visitor's
//! message and the canned reply are appended together. Nothing is written
//! until both phases have finished, so a request dropped mid-reply leaves the
//! transcript untouched.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use thiserror::Error;
use tracing::instrument;
use tradehub_core::{ChatMessage, ConversationId, Email, EmailError, Sender, detect_language};

use crate::config::MockBackendConfig;
use crate::i18n::messages;

/// Longest accepted message, in characters.
pub const MAX_MESSAGE_CHARS: usize = 1000;

/// Errors from chat operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChatError {
    #[error("message is empty")]
    EmptyMessage,

    #[error("message exceeds {max} characters")]
    MessageTooLong { max: usize },

    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error("conversation has no messages")]
    EmptyTranscript,
}

/// Where a reply is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatPhase {
    Idle,
    Translating,
    Typing,
}

/// A visitor message and the reply appended with it.
#[derive(Debug, Clone)]
pub struct ChatExchange {
    pub user: ChatMessage,
    pub reply: ChatMessage,
}

#[derive(Debug, Clone, Copy)]
struct ChatDelays {
    translate: Duration,
    typing: Duration,
    email: Duration,
}

struct ChatServiceInner {
    transcripts: Cache<ConversationId, Vec<ChatMessage>>,
    delays: ChatDelays,
}

/// Chat service handle. Cheap to clone.
#[derive(Clone)]
pub struct ChatService {
    inner: Arc<ChatServiceInner>,
}

impl std::fmt::Debug for ChatService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatService")
            .field("conversations", &self.inner.transcripts.entry_count())
            .finish_non_exhaustive()
    }
}

impl ChatService {
    /// Create a service using the configured latencies.
    #[must_use]
    pub fn new(config: &MockBackendConfig) -> Self {
        let transcripts = Cache::builder()
            .max_capacity(10_000)
            .time_to_idle(Duration::from_secs(60 * 60))
            .build();

        Self {
            inner: Arc::new(ChatServiceInner {
                transcripts,
                delays: ChatDelays {
                    translate: config.chat_translate_delay,
                    typing: config.chat_typing_delay,
                    email: config.chat_email_delay,
                },
            }),
        }
    }

    /// Accept a visitor message and produce the agent reply.
    ///
    /// The reply is written in the language detected from `text`.
    ///
    /// # Errors
    ///
    /// Returns an error if the trimmed message is empty or too long.
    #[instrument(skip(self, text), fields(conversation = %conversation))]
    pub async fn respond(
        &self,
        conversation: ConversationId,
        text: &str,
    ) -> Result<ChatExchange, ChatError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ChatError::EmptyMessage);
        }
        if text.chars().count() > MAX_MESSAGE_CHARS {
            return Err(ChatError::MessageTooLong {
                max: MAX_MESSAGE_CHARS,
            });
        }

        let locale = detect_language(text);
        let user = ChatMessage::new(text, Sender::User, locale);

        tracing::debug!(phase = ?ChatPhase::Translating, %locale);
        pause(self.inner.delays.translate).await;
        tracing::debug!(phase = ?ChatPhase::Typing);
        pause(self.inner.delays.typing).await;

        let reply = ChatMessage::new(messages(locale).chat_reply, Sender::Agent, locale);

        // Concurrent replies on one conversation must not overwrite each other
        self.inner
            .transcripts
            .entry(conversation)
            .and_upsert_with(|existing| {
                let mut transcript = existing.map(moka::Entry::into_value).unwrap_or_default();
                transcript.push(user.clone());
                transcript.push(reply.clone());
                std::future::ready(transcript)
            })
            .await;

        tracing::debug!(phase = ?ChatPhase::Idle, "Reply appended");
        Ok(ChatExchange { user, reply })
    }

    /// Messages exchanged so far, oldest first.
    pub async fn transcript(&self, conversation: ConversationId) -> Vec<ChatMessage> {
        self.inner
            .transcripts
            .get(&conversation)
            .await
            .unwrap_or_default()
    }

    /// Simulate emailing the transcript to `email`.
    ///
    /// # Errors
    ///
    /// Returns an error if the address is invalid or nothing has been said yet.
    #[instrument(skip(self, email), fields(conversation = %conversation))]
    pub async fn email_transcript(
        &self,
        conversation: ConversationId,
        email: &str,
    ) -> Result<Email, ChatError> {
        let email = Email::parse(email)?;
        let transcript = self.transcript(conversation).await;
        if transcript.is_empty() {
            return Err(ChatError::EmptyTranscript);
        }

        pause(self.inner.delays.email).await;
        tracing::info!(
            recipient_domain = email.domain(),
            messages = transcript.len(),
            "Transcript email sent (simulated)"
        );
        Ok(email)
    }
}

async fn pause(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use tradehub_core::Locale;

    use super::*;

    fn service() -> ChatService {
        ChatService::new(&MockBackendConfig::instant())
    }

    #[tokio::test]
    async fn test_reply_matches_detected_language() {
        let chat = service();
        let id = ConversationId::generate();

        let exchange = chat.respond(id, "배송은 언제 되나요?").await.unwrap();
        assert_eq!(exchange.user.locale, Locale::KR);
        assert_eq!(exchange.reply.locale, Locale::KR);
        assert_eq!(exchange.reply.text, messages(Locale::KR).chat_reply);
        assert_eq!(exchange.reply.sender, Sender::Agent);

        let exchange = chat.respond(id, "你好").await.unwrap();
        assert_eq!(exchange.reply.text, messages(Locale::CN).chat_reply);

        let exchange = chat.respond(id, "Hello there").await.unwrap();
        assert_eq!(exchange.reply.text, messages(Locale::EN).chat_reply);
    }

    #[tokio::test]
    async fn test_transcript_appends_in_order() {
        let chat = service();
        let id = ConversationId::generate();
        chat.respond(id, "first").await.unwrap();
        chat.respond(id, "second").await.unwrap();

        let transcript = chat.transcript(id).await;
        let senders: Vec<_> = transcript.iter().map(|m| m.sender).collect();
        assert_eq!(
            senders,
            [Sender::User, Sender::Agent, Sender::User, Sender::Agent]
        );
        assert_eq!(transcript[0].text, "first");
        assert_eq!(transcript[2].text, "second");
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_replies_keep_every_message() {
        let chat = service();
        let id = ConversationId::generate();

        let handles: Vec<_> = (0..400)
            .map(|i| {
                let chat = chat.clone();
                tokio::spawn(async move { chat.respond(id, &format!("message {i}")).await })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(chat.transcript(id).await.len(), 800);
    }

    #[tokio::test]
    async fn test_conversations_are_isolated() {
        let chat = service();
        let a = ConversationId::generate();
        chat.respond(a, "hi").await.unwrap();
        assert!(chat.transcript(ConversationId::generate()).await.is_empty());
    }

    #[tokio::test]
    async fn test_rejects_blank_and_oversized_messages() {
        let chat = service();
        let id = ConversationId::generate();
        assert_eq!(
            chat.respond(id, "   ").await.unwrap_err(),
            ChatError::EmptyMessage
        );
        let long = "a".repeat(MAX_MESSAGE_CHARS + 1);
        assert!(matches!(
            chat.respond(id, &long).await.unwrap_err(),
            ChatError::MessageTooLong { .. }
        ));
        assert!(chat.transcript(id).await.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_reply_leaves_transcript_untouched() {
        let config = MockBackendConfig {
            chat_translate_delay: Duration::from_secs(1),
            chat_typing_delay: Duration::from_secs(1),
            ..MockBackendConfig::instant()
        };
        let chat = ChatService::new(&config);
        let id = ConversationId::generate();

        let timed_out =
            tokio::time::timeout(Duration::from_millis(1500), chat.respond(id, "hello")).await;
        assert!(timed_out.is_err());
        assert!(chat.transcript(id).await.is_empty());
    }

    #[tokio::test]
    async fn test_email_transcript() {
        let chat = service();
        let id = ConversationId::generate();

        assert_eq!(
            chat.email_transcript(id, "buyer@example.com")
                .await
                .unwrap_err(),
            ChatError::EmptyTranscript
        );

        chat.respond(id, "hello").await.unwrap();
        assert!(matches!(
            chat.email_transcript(id, "not-an-email").await.unwrap_err(),
            ChatError::InvalidEmail(_)
        ));
        let email = chat
            .email_transcript(id, " Buyer@Example.COM ")
            .await
            .unwrap();
        assert_eq!(email.domain(), "example.com");
    }
}
