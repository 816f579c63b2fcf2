//! Business logic services for the storefront.
//!
//! # Services
//!
//! - `locale` - Display language persistence and browser detection
//! - `access` - Access state lookup and capability gating
//! - `chat` - Live-support chat with simulated replies
//! - `validation` - Form field rules

pub mod access;
pub mod chat;
pub mod locale;
pub mod validation;

pub use access::{AccessGate, AccessSource, GateDecision};
pub use chat::{ChatError, ChatExchange, ChatPhase, ChatService};
pub use locale::LocaleStore;
pub use validation::{FieldError, FormErrors};
