//! TradeHub Core - Shared domain types.
//!
//! This crate provides the types shared by the storefront binary and its
//! integration tests:
//! - [`Locale`] and the browser-language mapping used by the locale store
//! - [`AccessState`] and the capability rules of the access control gate
//! - [`detect_language`] for the chat widget
//! - Catalog value types ([`Product`], [`Price`], [`Localized`])
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no
//! sessions, no HTTP. Everything here can be tested without a runtime.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
