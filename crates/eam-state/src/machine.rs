//! # Transition Tables
//!
//! The per-kind transition tables and the pure lookup functions over
//! them. This module owns the only authority on which `(state, event)`
//! pairs are legal; the ledger delegates every transition here before
//! touching a record.
//!
//! ## Guarantees
//!
//! - No transition is applied unless explicitly listed in a table.
//! - The terminal check runs before the table lookup, so an event
//!   against a closed record always fails with [`TransitionError::
//!   RecordTerminal`], never `InvalidTransition`.
//! - Lookup is pure: callers own atomicity (the ledger applies the
//!   result under a single entry lock).

use thiserror::Error;

use crate::kinds::{EventKind, RecordKind, RecordState};

/// Errors arising from transition table lookups.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransitionError {
    /// The `(state, event)` pair is not in the kind's table.
    #[error("invalid transition: cannot apply {event} in state {state} for {kind} record")]
    InvalidTransition {
        kind: RecordKind,
        state: RecordState,
        event: EventKind,
    },

    /// The record is in a terminal state; no event is accepted.
    #[error("record terminal: {kind} record in state {state} accepts no further events (got {event})")]
    RecordTerminal {
        kind: RecordKind,
        state: RecordState,
        event: EventKind,
    },
}

/// Initial state assigned to a newly created record of the given kind.
pub fn initial_state(kind: RecordKind) -> RecordState {
    match kind {
        // Creating a loan record means the asset is already out.
        RecordKind::Loan => RecordState::Loaned,
        RecordKind::Disposal => RecordState::Pending,
        RecordKind::Compensation => RecordState::Pending,
        RecordKind::WarehouseTransfer => RecordState::Pending,
        RecordKind::WarehouseIntake => RecordState::PendingPrint,
        RecordKind::DepreciationPeriod => RecordState::Draft,
        RecordKind::AuditSession => RecordState::Pending,
        RecordKind::Upgrade => RecordState::Pending,
    }
}

/// Look up the successor state for `(kind, state, event)`.
///
/// Returns the next state on success. The record itself is untouched;
/// the caller applies the result atomically together with the history
/// append and timestamp refresh.
pub fn next_state(
    kind: RecordKind,
    state: RecordState,
    event: EventKind,
) -> Result<RecordState, TransitionError> {
    if state.is_terminal() {
        return Err(TransitionError::RecordTerminal { kind, state, event });
    }

    let next = match kind {
        RecordKind::Loan => match (state, event) {
            // PENDING is accepted for callers that stage loans before
            // handing the asset over.
            (RecordState::Loaned, EventKind::Return) => RecordState::Returned,
            (RecordState::Pending, EventKind::Return) => RecordState::Returned,
            _ => return Err(TransitionError::InvalidTransition { kind, state, event }),
        },

        RecordKind::Disposal => match (state, event) {
            (RecordState::Pending, EventKind::Approve) => RecordState::Approved,
            (RecordState::Pending, EventKind::Reject) => RecordState::Rejected,
            (RecordState::Approved, EventKind::Complete) => RecordState::Completed,
            _ => return Err(TransitionError::InvalidTransition { kind, state, event }),
        },

        RecordKind::Compensation => match (state, event) {
            (RecordState::Pending, EventKind::MarkPaid) => RecordState::Paid,
            _ => return Err(TransitionError::InvalidTransition { kind, state, event }),
        },

        RecordKind::WarehouseTransfer => match (state, event) {
            (RecordState::Pending, EventKind::StartTransit) => RecordState::InTransit,
            (RecordState::InTransit, EventKind::Complete) => RecordState::Completed,
            _ => return Err(TransitionError::InvalidTransition { kind, state, event }),
        },

        RecordKind::WarehouseIntake => match (state, event) {
            (RecordState::PendingPrint, EventKind::Print) => RecordState::Printed,
            (RecordState::Printed, EventKind::Complete) => RecordState::Completed,
            _ => return Err(TransitionError::InvalidTransition { kind, state, event }),
        },

        RecordKind::DepreciationPeriod => match (state, event) {
            (RecordState::Draft, EventKind::Calculate) => RecordState::Calculated,
            (RecordState::Calculated, EventKind::Approve) => RecordState::Approved,
            (RecordState::Approved, EventKind::Post) => RecordState::Posted,
            _ => return Err(TransitionError::InvalidTransition { kind, state, event }),
        },

        RecordKind::AuditSession => match (state, event) {
            (RecordState::Pending, EventKind::Lock) => RecordState::Locked,
            // Self-loop: deadline extension keeps the session locked but
            // is still recorded in history.
            (RecordState::Locked, EventKind::Extend) => RecordState::Locked,
            (RecordState::Locked, EventKind::Close) => RecordState::Completed,
            _ => return Err(TransitionError::InvalidTransition { kind, state, event }),
        },

        RecordKind::Upgrade => match (state, event) {
            (RecordState::Pending, EventKind::Approve) => RecordState::Approved,
            (RecordState::Pending, EventKind::Reject) => RecordState::Rejected,
            (RecordState::Approved, EventKind::Complete) => RecordState::Completed,
            _ => return Err(TransitionError::InvalidTransition { kind, state, event }),
        },
    };

    Ok(next)
}

/// Events accepted by a record of `kind` in `state`.
///
/// Lets callers render only the actions that would succeed, avoiding
/// the `InvalidTransition` class entirely at the presentation layer.
/// Terminal states return an empty slice.
pub fn available_events(kind: RecordKind, state: RecordState) -> Vec<EventKind> {
    EventKind::ALL
        .into_iter()
        .filter(|event| next_state(kind, state, *event).is_ok())
        .collect()
}

/// The set of states reachable by records of the given kind, including
/// the initial state.
pub fn valid_states(kind: RecordKind) -> &'static [RecordState] {
    match kind {
        RecordKind::Loan => &[RecordState::Pending, RecordState::Loaned, RecordState::Returned],
        RecordKind::Disposal => &[
            RecordState::Pending,
            RecordState::Approved,
            RecordState::Rejected,
            RecordState::Completed,
        ],
        RecordKind::Compensation => &[RecordState::Pending, RecordState::Paid],
        RecordKind::WarehouseTransfer => &[
            RecordState::Pending,
            RecordState::InTransit,
            RecordState::Completed,
        ],
        RecordKind::WarehouseIntake => &[
            RecordState::PendingPrint,
            RecordState::Printed,
            RecordState::Completed,
        ],
        RecordKind::DepreciationPeriod => &[
            RecordState::Draft,
            RecordState::Calculated,
            RecordState::Approved,
            RecordState::Posted,
        ],
        RecordKind::AuditSession => &[
            RecordState::Pending,
            RecordState::Locked,
            RecordState::Completed,
        ],
        RecordKind::Upgrade => &[
            RecordState::Pending,
            RecordState::Approved,
            RecordState::Rejected,
            RecordState::Completed,
        ],
    }
}
