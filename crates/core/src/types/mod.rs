//! Core types for TradeHub.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod access;
pub mod chat;
pub mod email;
pub mod id;
pub mod language;
pub mod locale;
pub mod price;
pub mod product;

pub use access::{AccessState, Capability, UserType, VerificationStatus};
pub use chat::{ChatMessage, ConversationId, Sender};
pub use email::{Email, EmailError};
pub use id::*;
pub use language::detect_language;
pub use locale::Locale;
pub use price::{CurrencyCode, Price};
pub use product::{Category, Localized, Product, Specification};
