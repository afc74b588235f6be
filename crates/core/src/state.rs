//! State-capture contract: views that can hand out a snapshot of their
//! condition and later be restored from one.
//!
//! - A [`State`] is any serde-capable value. There is no marker to inherit from;
//!   the serialization capability *is* the contract.
//! - A [`View`] captures with `current_state` and restores with `restore_state`.
//!   There is no implicit restore behavior: views that do not care about
//!   restoring call [`discard_state`] explicitly.
//! - Capture-then-restore only round-trips for views that actually apply the
//!   snapshot. Nothing in this module assumes symmetry.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::error::{DomainError, DomainResult};
use crate::id::SnapshotId;

/// Opaque snapshot of some owner's internal condition.
///
/// Blanket-implemented for every type that can be encoded and decoded by serde.
pub trait State: Serialize + DeserializeOwned + core::fmt::Debug + 'static {}

impl<T> State for T where T: Serialize + DeserializeOwned + core::fmt::Debug + 'static {}

/// Capability of capturing and restoring a component's state.
pub trait View {
    /// Snapshot shape produced and accepted by this view.
    type State: State;

    /// Stable name recorded in snapshot envelopes (e.g. "parties.client_form").
    const OWNER_TYPE: &'static str;

    /// Capture the current condition. Never fails; the caller owns the result.
    fn current_state(&self) -> Self::State;

    /// Apply a previously captured snapshot.
    ///
    /// Views that have nothing to restore delegate to [`discard_state`].
    fn restore_state(&mut self, state: Self::State);

    /// Capture the current state into a [`StateSnapshot`] envelope.
    fn snapshot(&self) -> StateSnapshot<Self::State> {
        let snapshot = StateSnapshot::capture(Self::OWNER_TYPE, self.current_state());
        tracing::debug!(
            owner_type = Self::OWNER_TYPE,
            snapshot_id = %snapshot.snapshot_id(),
            "captured state snapshot"
        );
        snapshot
    }

    /// Restore from an envelope, provided it was captured by this view type.
    ///
    /// A foreign envelope is rejected and the view is left untouched.
    fn restore_snapshot(&mut self, snapshot: StateSnapshot<Self::State>) -> DomainResult<()> {
        if snapshot.owner_type() != Self::OWNER_TYPE {
            tracing::warn!(
                expected = Self::OWNER_TYPE,
                actual = snapshot.owner_type(),
                snapshot_id = %snapshot.snapshot_id(),
                "rejected state snapshot"
            );
            return Err(DomainError::owner_mismatch(
                Self::OWNER_TYPE,
                snapshot.owner_type(),
            ));
        }

        tracing::debug!(
            owner_type = Self::OWNER_TYPE,
            snapshot_id = %snapshot.snapshot_id(),
            "restoring state snapshot"
        );
        self.restore_state(snapshot.into_state());
        Ok(())
    }
}

/// Restore behavior for views that ignore snapshots.
///
/// Accepts any state, including one never produced by the calling view, and
/// drops it. Implementers opt in by calling it from `restore_state`.
pub fn discard_state<S: State>(state: S) {
    tracing::trace!(state = ?state, "discarding state snapshot");
}

/// Serialize a state to its transportable byte form (JSON).
pub fn encode_state<S: State>(state: &S) -> DomainResult<Vec<u8>> {
    serde_json::to_vec(state).map_err(|e| DomainError::encode(e.to_string()))
}

/// Decode a state previously produced by [`encode_state`].
pub fn decode_state<S: State>(bytes: &[u8]) -> DomainResult<S> {
    serde_json::from_slice(bytes).map_err(|e| DomainError::decode(e.to_string()))
}

/// Envelope around a captured state, carrying where and when it was taken.
///
/// This is the unit handed to storage when a snapshot leaves the process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateSnapshot<S> {
    snapshot_id: SnapshotId,
    owner_type: String,
    captured_at: DateTime<Utc>,
    state: S,
}

impl<S> StateSnapshot<S> {
    pub fn new(
        snapshot_id: SnapshotId,
        owner_type: impl Into<String>,
        captured_at: DateTime<Utc>,
        state: S,
    ) -> Self {
        Self {
            snapshot_id,
            owner_type: owner_type.into(),
            captured_at,
            state,
        }
    }

    /// Wrap `state` with a fresh id and the current time.
    pub fn capture(owner_type: impl Into<String>, state: S) -> Self {
        Self::new(SnapshotId::new(), owner_type, Utc::now(), state)
    }

    pub fn snapshot_id(&self) -> SnapshotId {
        self.snapshot_id
    }

    pub fn owner_type(&self) -> &str {
        &self.owner_type
    }

    pub fn captured_at(&self) -> DateTime<Utc> {
        self.captured_at
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn into_state(self) -> S {
        self.state
    }
}

impl<S: State> StateSnapshot<S> {
    pub fn to_bytes(&self) -> DomainResult<Vec<u8>> {
        serde_json::to_vec(self).map_err(|e| DomainError::encode(e.to_string()))
    }

    pub fn from_bytes(bytes: &[u8]) -> DomainResult<Self> {
        serde_json::from_slice(bytes).map_err(|e| DomainError::decode(e.to_string()))
    }
}
