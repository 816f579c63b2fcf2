//! Session-related types.
//!
//! The session stands in for the browser storage of a client-only
//! storefront: every per-visitor preference and the mocked account state
//! live under these keys.

/// Session keys for per-visitor state.
pub mod keys {
    /// Selected display language (`"KR"`, `"EN"`, `"CN"`, `"JP"`).
    pub const LANGUAGE: &str = "language";

    /// Mocked account type (`"business"` / `"personal"`).
    pub const USER_TYPE: &str = "user_type";

    /// Mocked verification status (`"pending"` / `"verified"` / `"rejected"`).
    pub const VERIFICATION_STATUS: &str = "verification_status";

    /// Whether the chat widget is expanded.
    pub const CHAT_OPEN: &str = "chat_open";
}
