//! # Lifecycle Record Envelope
//!
//! The generic envelope every business record lives in: identity, kind,
//! subject reference, current state, typed payload, timestamps, and the
//! append-only transition history.

use serde::{Deserialize, Serialize};

use eam_core::{ActorId, RecordId, Timestamp};
use eam_state::{
    available_events, next_state, EventKind, RecordKind, RecordState, TransitionError,
    TransitionRecord,
};

use crate::entity::SubjectRef;
use crate::payload::{apply_effect, Event, RecordPayload};

/// A business record tracked through its lifecycle states.
///
/// Created once, transitioned through its kind's table, never deleted:
/// disposal and closure are states, not removals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifecycleRecord {
    /// Unique identifier, immutable, assigned at creation.
    pub id: RecordId,
    /// Record kind; selects the transition table and payload schema.
    pub kind: RecordKind,
    /// Weak reference to the asset/user/location the record concerns.
    pub subject: SubjectRef,
    /// Current lifecycle state.
    pub state: RecordState,
    /// Type-specific attributes.
    pub payload: RecordPayload,
    /// Who created the record.
    pub created_by: ActorId,
    pub created_at: Timestamp,
    /// Refreshed on every accepted transition.
    pub updated_at: Timestamp,
    /// Append-only audit trail, ordered by application sequence.
    pub history: Vec<TransitionRecord>,
}

impl LifecycleRecord {
    /// Events this record currently accepts.
    pub fn available_events(&self) -> Vec<EventKind> {
        available_events(self.kind, self.state)
    }

    /// Whether the record has reached a terminal state.
    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    /// Apply an event to this record.
    ///
    /// Validates against the kind's transition table first; on success
    /// the state change, payload effect, history append, and
    /// `updated_at` refresh happen together. On failure the record is
    /// untouched.
    ///
    /// Crate-internal: the ledger is the only mutation path for stored
    /// records.
    pub(crate) fn apply(
        &mut self,
        event: &Event,
        actor: &ActorId,
        at: Timestamp,
    ) -> Result<(), TransitionError> {
        let from = self.state;
        let to = next_state(self.kind, from, event.kind())?;

        apply_effect(&mut self.payload, event, actor, at);
        self.history.push(TransitionRecord {
            seq: self.history.len() as u64 + 1,
            from_state: from,
            to_state: to,
            event: event.kind(),
            actor: actor.clone(),
            at,
        });
        self.state = to;
        self.updated_at = at;
        Ok(())
    }
}
