//! Access gate: who may see wholesale and the seller center.
//!
//! The visitor's [`AccessState`] lives in the session under two keys. It is
//! read through [`AccessSource`], which stands in for a slow account backend
//! by sleeping for the configured delay before reading. Consumers wrap the
//! lookup in an [`AccessGate`]: while the lookup has not finished the gate is
//! `Loading` and every capability decision is `Pending`, so nothing gated is
//! rendered before the real answer is known.

use std::time::Duration;

use tower_sessions::Session;
use tracing::instrument;
use tradehub_core::{AccessState, Capability};

use crate::models::session_keys;

/// Reads and writes the persisted access state.
#[derive(Debug, Clone, Copy)]
pub struct AccessSource {
    delay: Duration,
}

impl AccessSource {
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Load the visitor's access state.
    ///
    /// Missing or malformed values never widen access: see
    /// [`AccessState::from_persisted`].
    #[instrument(skip_all)]
    pub async fn load(&self, session: &Session) -> AccessState {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let user_type = read_string(session, session_keys::USER_TYPE).await;
        let status = read_string(session, session_keys::VERIFICATION_STATUS).await;
        AccessState::from_persisted(user_type.as_deref(), status.as_deref())
    }

    /// Persist a new access state. `None` fields remove the stored key.
    ///
    /// # Errors
    ///
    /// Returns an error if the session store rejects the write.
    #[instrument(skip(self, session))]
    pub async fn store(
        &self,
        session: &Session,
        state: AccessState,
    ) -> Result<(), tower_sessions::session::Error> {
        match state.user_type {
            Some(user_type) => {
                session
                    .insert(session_keys::USER_TYPE, user_type.as_str())
                    .await?;
            }
            None => {
                session.remove_value(session_keys::USER_TYPE).await?;
            }
        }

        match state.verification_status {
            Some(status) => {
                session
                    .insert(session_keys::VERIFICATION_STATUS, status.as_str())
                    .await?;
            }
            None => {
                session
                    .remove_value(session_keys::VERIFICATION_STATUS)
                    .await?;
            }
        }

        tracing::info!("Access state updated");
        Ok(())
    }
}

async fn read_string(session: &Session, key: &str) -> Option<String> {
    match session.get::<String>(key).await {
        Ok(value) => value,
        Err(e) => {
            tracing::debug!(key, error = %e, "Unreadable access value");
            None
        }
    }
}

/// Lifecycle of one access lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessGate {
    /// The lookup has not completed.
    Loading,
    /// The lookup completed with this state.
    Ready(AccessState),
}

/// Outcome of asking the gate about one capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// Show a loading placeholder; neither grant nor deny yet.
    Pending,
    Granted(AccessState),
    Denied(Capability),
}

impl AccessGate {
    /// Run the lookup, giving up after `timeout`.
    ///
    /// A lookup that does not finish in time leaves the gate `Loading`.
    pub async fn resolve(source: &AccessSource, session: &Session, timeout: Duration) -> Self {
        match tokio::time::timeout(timeout, source.load(session)).await {
            Ok(state) => Self::Ready(state),
            Err(_) => {
                tracing::warn!(timeout_ms = timeout.as_millis(), "Access lookup timed out");
                Self::Loading
            }
        }
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub const fn state(&self) -> Option<AccessState> {
        match self {
            Self::Loading => None,
            Self::Ready(state) => Some(*state),
        }
    }

    /// Decide whether `capability` may be rendered.
    #[must_use]
    pub const fn decide(&self, capability: Capability) -> GateDecision {
        match self {
            Self::Loading => GateDecision::Pending,
            Self::Ready(state) if state.allows(capability) => GateDecision::Granted(*state),
            Self::Ready(_) => GateDecision::Denied(capability),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use tower_sessions::MemoryStore;
    use tradehub_core::{UserType, VerificationStatus};

    use super::*;

    fn session() -> Session {
        Session::new(None, Arc::new(MemoryStore::default()), None)
    }

    fn business(status: VerificationStatus) -> AccessState {
        AccessState::new(Some(UserType::Business), Some(status))
    }

    #[tokio::test]
    async fn test_empty_session_loads_default() {
        let source = AccessSource::new(Duration::ZERO);
        assert_eq!(source.load(&session()).await, AccessState::default());
    }

    #[tokio::test]
    async fn test_store_then_load() {
        let session = session();
        let source = AccessSource::new(Duration::ZERO);
        let state = business(VerificationStatus::Verified);

        source.store(&session, state).await.unwrap();
        assert_eq!(source.load(&session).await, state);

        source
            .store(&session, AccessState::new(None, None))
            .await
            .unwrap();
        // Cleared status reads back as pending.
        assert_eq!(source.load(&session).await, AccessState::default());
    }

    #[tokio::test]
    async fn test_malformed_values_do_not_grant_access() {
        let session = session();
        session
            .insert(session_keys::USER_TYPE, "Business")
            .await
            .unwrap();
        session
            .insert(session_keys::VERIFICATION_STATUS, true)
            .await
            .unwrap();

        let state = AccessSource::new(Duration::ZERO).load(&session).await;
        assert_eq!(state.user_type, None);
        assert_eq!(state.verification_status, Some(VerificationStatus::Pending));
        assert!(!state.can_access_wholesale());
    }

    #[test]
    fn test_loading_gate_is_pending_for_every_capability() {
        for capability in [
            Capability::Retail,
            Capability::Wholesale,
            Capability::SellerCenter,
        ] {
            assert_eq!(AccessGate::Loading.decide(capability), GateDecision::Pending);
        }
    }

    #[test]
    fn test_ready_gate_decisions() {
        let pending = AccessGate::Ready(business(VerificationStatus::Pending));
        assert_eq!(
            pending.decide(Capability::Wholesale),
            GateDecision::Denied(Capability::Wholesale)
        );
        assert!(matches!(
            pending.decide(Capability::SellerCenter),
            GateDecision::Granted(_)
        ));

        let verified = AccessGate::Ready(business(VerificationStatus::Verified));
        assert!(matches!(
            verified.decide(Capability::Wholesale),
            GateDecision::Granted(_)
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_resolve_times_out_to_loading() {
        let source = AccessSource::new(Duration::from_secs(10));
        let gate = AccessGate::resolve(&source, &session(), Duration::from_secs(1)).await;
        assert!(gate.is_loading());
        assert_eq!(gate.state(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_resolve_waits_for_delay() {
        let session = session();
        let source = AccessSource::new(Duration::from_millis(300));
        source
            .store(&session, business(VerificationStatus::Verified))
            .await
            .unwrap();

        let gate = AccessGate::resolve(&source, &session, Duration::from_secs(3)).await;
        assert_eq!(gate, AccessGate::Ready(business(VerificationStatus::Verified)));
    }
}
