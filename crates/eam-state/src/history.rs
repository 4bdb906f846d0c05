//! # Transition History
//!
//! The append-only audit trail entry. Every accepted transition pushes
//! exactly one `TransitionRecord`; entries are never mutated, removed,
//! or reordered.

use serde::{Deserialize, Serialize};

use eam_core::{ActorId, Timestamp};

use crate::kinds::{EventKind, RecordState};

/// Record of a single accepted state transition.
///
/// Ordering is by `seq` (application sequence), not wall-clock: two
/// transitions applied within the same second still order correctly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// 1-based position of this entry in the record's history.
    pub seq: u64,
    /// State before the transition.
    pub from_state: RecordState,
    /// State after the transition (equal to `from_state` for logged
    /// self-loops such as an audit deadline extension).
    pub to_state: RecordState,
    /// The event that caused the transition.
    pub event: EventKind,
    /// Who requested the transition.
    pub actor: ActorId,
    /// When the transition was applied (UTC).
    pub at: Timestamp,
}
