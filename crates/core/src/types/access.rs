//! Mocked account state and the capability rules derived from it.
//!
//! Capabilities are pure functions of [`AccessState`]:
//!
//! | capability    | rule                                      |
//! |---------------|-------------------------------------------|
//! | retail        | always                                    |
//! | wholesale     | `business` user type and `verified` status |
//! | seller center | `business` user type                      |

use serde::{Deserialize, Serialize};

/// Kind of account a visitor registered as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserType {
    Business,
    Personal,
}

impl UserType {
    /// Parses the persisted value (`"business"` / `"personal"`).
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "business" => Some(Self::Business),
            "personal" => Some(Self::Personal),
            _ => None,
        }
    }

    /// Returns the persisted value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Business => "business",
            Self::Personal => "personal",
        }
    }
}

/// Review state of a registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationStatus {
    Pending,
    Verified,
    Rejected,
}

impl VerificationStatus {
    /// Parses the persisted value (`"pending"` / `"verified"` / `"rejected"`).
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(Self::Pending),
            "verified" => Some(Self::Verified),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    /// Returns the persisted value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Verified => "verified",
            Self::Rejected => "rejected",
        }
    }
}

/// A gated area of the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    Retail,
    Wholesale,
    SellerCenter,
}

/// The `(user type, verification status)` pair that gates wholesale and
/// seller-center functionality.
///
/// `None` in either position means "unset".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccessState {
    pub user_type: Option<UserType>,
    pub verification_status: Option<VerificationStatus>,
}

impl Default for AccessState {
    /// No user type and a pending verification: retail only.
    fn default() -> Self {
        Self {
            user_type: None,
            verification_status: Some(VerificationStatus::Pending),
        }
    }
}

impl AccessState {
    /// Create a state from explicit values.
    #[must_use]
    pub const fn new(
        user_type: Option<UserType>,
        verification_status: Option<VerificationStatus>,
    ) -> Self {
        Self {
            user_type,
            verification_status,
        }
    }

    /// Build a state from raw persisted strings.
    ///
    /// An absent or unrecognised user type becomes `None`; an absent or
    /// unrecognised verification status becomes `Pending`. The result never
    /// grants more than a well-formed state would.
    #[must_use]
    pub fn from_persisted(user_type: Option<&str>, verification_status: Option<&str>) -> Self {
        Self {
            user_type: user_type.and_then(UserType::parse),
            verification_status: Some(
                verification_status
                    .and_then(VerificationStatus::parse)
                    .unwrap_or(VerificationStatus::Pending),
            ),
        }
    }

    /// Retail listing and purchase flows are open to everyone.
    #[must_use]
    pub const fn can_access_retail(&self) -> bool {
        true
    }

    /// Wholesale requires a verified business account.
    #[must_use]
    pub const fn can_access_wholesale(&self) -> bool {
        matches!(self.user_type, Some(UserType::Business))
            && matches!(self.verification_status, Some(VerificationStatus::Verified))
    }

    /// Seller center requires a business account; verification is not checked.
    #[must_use]
    pub const fn can_access_seller_center(&self) -> bool {
        matches!(self.user_type, Some(UserType::Business))
    }

    /// Dispatch on a [`Capability`].
    #[must_use]
    pub const fn allows(&self, capability: Capability) -> bool {
        match capability {
            Capability::Retail => self.can_access_retail(),
            Capability::Wholesale => self.can_access_wholesale(),
            Capability::SellerCenter => self.can_access_seller_center(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const USER_TYPES: [Option<UserType>; 3] =
        [None, Some(UserType::Business), Some(UserType::Personal)];
    const STATUSES: [Option<VerificationStatus>; 4] = [
        None,
        Some(VerificationStatus::Pending),
        Some(VerificationStatus::Verified),
        Some(VerificationStatus::Rejected),
    ];

    fn all_states() -> impl Iterator<Item = AccessState> {
        USER_TYPES.into_iter().flat_map(|user_type| {
            STATUSES
                .into_iter()
                .map(move |status| AccessState::new(user_type, status))
        })
    }

    #[test]
    fn test_wholesale_requires_verified_business() {
        for state in all_states() {
            let expected = state.user_type == Some(UserType::Business)
                && state.verification_status == Some(VerificationStatus::Verified);
            assert_eq!(state.can_access_wholesale(), expected, "{state:?}");
        }
    }

    #[test]
    fn test_seller_center_ignores_verification() {
        for state in all_states() {
            assert_eq!(
                state.can_access_seller_center(),
                state.user_type == Some(UserType::Business),
                "{state:?}"
            );
        }
    }

    #[test]
    fn test_retail_always_allowed() {
        assert!(AccessState::default().can_access_retail());
        assert!(all_states().all(|state| state.can_access_retail()));
    }

    #[test]
    fn test_allows_matches_named_checks() {
        for state in all_states() {
            assert_eq!(state.allows(Capability::Retail), state.can_access_retail());
            assert_eq!(
                state.allows(Capability::Wholesale),
                state.can_access_wholesale()
            );
            assert_eq!(
                state.allows(Capability::SellerCenter),
                state.can_access_seller_center()
            );
        }
    }

    #[test]
    fn test_default_denies_gated_areas() {
        let state = AccessState::default();
        assert_eq!(state.user_type, None);
        assert_eq!(state.verification_status, Some(VerificationStatus::Pending));
        assert!(!state.can_access_wholesale());
        assert!(!state.can_access_seller_center());
    }

    #[test]
    fn test_from_persisted_malformed_values() {
        assert_eq!(AccessState::from_persisted(None, None), AccessState::default());
        assert_eq!(
            AccessState::from_persisted(Some("Business"), Some("VERIFIED")),
            AccessState::default()
        );
        let state = AccessState::from_persisted(Some("business"), Some("bogus"));
        assert_eq!(state.user_type, Some(UserType::Business));
        assert_eq!(state.verification_status, Some(VerificationStatus::Pending));
    }

    #[test]
    fn test_from_persisted_round_trip() {
        for user_type in [UserType::Business, UserType::Personal] {
            for status in [
                VerificationStatus::Pending,
                VerificationStatus::Verified,
                VerificationStatus::Rejected,
            ] {
                let state =
                    AccessState::from_persisted(Some(user_type.as_str()), Some(status.as_str()));
                assert_eq!(state, AccessState::new(Some(user_type), Some(status)));
            }
        }
    }
}
