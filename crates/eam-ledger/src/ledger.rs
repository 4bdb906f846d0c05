//! # Lifecycle Record Ledger
//!
//! In-memory, append-only ledger of lifecycle records backed by
//! `DashMap`. The ledger is the sole mutation path: reads hand out
//! clones, and each transition is a read-validate-update unit under a
//! single map-entry lock, so no reader ever observes a record
//! mid-transition.

use dashmap::DashMap;

use eam_core::{ActorId, RecordId, Timestamp};
use eam_state::{initial_state, next_state, RecordKind, RecordState, TransitionError};
use thiserror::Error;

use crate::entity::{EntityStore, SubjectRef};
use crate::payload::{effect_violations, Event, RecordPayload};
use crate::record::LifecycleRecord;

/// Errors arising from ledger operations.
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Payload data failed validation, at creation or carried by a
    /// transition; lists the offending fields.
    #[error("invalid {kind} payload: missing or invalid required fields: {}", missing.join(", "))]
    Validation {
        kind: RecordKind,
        missing: Vec<String>,
    },

    /// Payload variant does not match the requested record kind.
    #[error("payload kind {payload} does not match record kind {kind}")]
    KindMismatch {
        kind: RecordKind,
        payload: RecordKind,
    },

    /// Subject reference did not resolve at creation time.
    #[error("unknown subject {subject}")]
    UnknownSubject { subject: SubjectRef },

    /// Record not found.
    #[error("record not found: {0}")]
    NotFound(RecordId),

    /// Transition rejected by the state machine.
    #[error(transparent)]
    Transition(#[from] TransitionError),
}

/// Filter for [`Ledger::query`]. Empty filter matches everything.
#[derive(Debug, Clone, Default)]
pub struct QueryFilter {
    pub kind: Option<RecordKind>,
    pub state: Option<RecordState>,
    /// Case-insensitive substring match over payload text fields and
    /// the subject id.
    pub text: Option<String>,
    /// Inclusive lower bound on `created_at`.
    pub created_from: Option<Timestamp>,
    /// Inclusive upper bound on `created_at`.
    pub created_to: Option<Timestamp>,
}

impl QueryFilter {
    /// Match all records of one kind.
    pub fn kind(kind: RecordKind) -> Self {
        Self {
            kind: Some(kind),
            ..Self::default()
        }
    }

    fn matches(&self, record: &LifecycleRecord) -> bool {
        if let Some(kind) = self.kind {
            if record.kind != kind {
                return false;
            }
        }
        if let Some(state) = self.state {
            if record.state != state {
                return false;
            }
        }
        if let Some(from) = self.created_from {
            if record.created_at < from {
                return false;
            }
        }
        if let Some(to) = self.created_to {
            if record.created_at > to {
                return false;
            }
        }
        if let Some(text) = &self.text {
            let needle = text.to_lowercase();
            let hit = record
                .payload
                .text_fields()
                .iter()
                .any(|f| f.to_lowercase().contains(&needle))
                || record.subject.id.to_lowercase().contains(&needle);
            if !hit {
                return false;
            }
        }
        true
    }
}

/// The authoritative store of all lifecycle records.
///
/// Thread-safe via `DashMap`; `transition` runs read-validate-update
/// under a single entry lock, making each call the atomic unit.
pub struct Ledger {
    records: DashMap<RecordId, LifecycleRecord>,
    entities: EntityStore,
}

impl Ledger {
    /// Create an empty ledger over the given entity store.
    pub fn new(entities: EntityStore) -> Self {
        Self {
            records: DashMap::new(),
            entities,
        }
    }

    /// The entity store backing subject resolution.
    pub fn entities(&self) -> &EntityStore {
        &self.entities
    }

    /// Create a new lifecycle record.
    ///
    /// Validates that the payload variant matches `kind`, that required
    /// payload fields are present, and that the subject resolves in the
    /// entity store. The record starts in the kind's initial state with
    /// an empty history; creation itself is not a transition.
    pub fn create(
        &self,
        kind: RecordKind,
        subject: SubjectRef,
        payload: RecordPayload,
        actor: &ActorId,
    ) -> Result<LifecycleRecord, LedgerError> {
        if payload.kind() != kind {
            return Err(LedgerError::KindMismatch {
                kind,
                payload: payload.kind(),
            });
        }

        let missing = payload.missing_fields();
        if !missing.is_empty() {
            return Err(LedgerError::Validation {
                kind,
                missing: missing.into_iter().map(String::from).collect(),
            });
        }

        if !self.entities.resolves(&subject) {
            return Err(LedgerError::UnknownSubject { subject });
        }

        let now = Timestamp::now();
        let record = LifecycleRecord {
            id: RecordId::new(),
            kind,
            subject,
            state: initial_state(kind),
            payload,
            created_by: actor.clone(),
            created_at: now,
            updated_at: now,
            history: Vec::new(),
        };

        tracing::info!(
            record = %record.id,
            kind = %kind,
            state = %record.state,
            actor = %actor,
            "record created"
        );

        self.records.insert(record.id, record.clone());
        Ok(record)
    }

    /// Fetch a record by id. Returns a clone; the stored record can
    /// only be changed through [`Ledger::transition`].
    pub fn find(&self, id: RecordId) -> Result<LifecycleRecord, LedgerError> {
        self.records
            .get(&id)
            .map(|r| r.value().clone())
            .ok_or(LedgerError::NotFound(id))
    }

    /// Apply an event to a record.
    ///
    /// The whole read-validate-update sequence runs under the record's
    /// entry lock; a rejected event leaves the stored record untouched.
    /// Table legality is checked first, then the bounds on any data the
    /// event carries, then the mutation happens as one unit.
    pub fn transition(
        &self,
        id: RecordId,
        event: &Event,
        actor: &ActorId,
    ) -> Result<LifecycleRecord, LedgerError> {
        let mut entry = self.records.get_mut(&id).ok_or(LedgerError::NotFound(id))?;
        let record = entry.value_mut();

        let from = record.state;
        if let Err(err) = next_state(record.kind, from, event.kind()) {
            tracing::warn!(
                record = %id,
                state = %from,
                event = %event.kind(),
                error = %err,
                "transition rejected"
            );
            return Err(err.into());
        }

        let invalid = effect_violations(&record.payload, event);
        if !invalid.is_empty() {
            let err = LedgerError::Validation {
                kind: record.kind,
                missing: invalid.into_iter().map(String::from).collect(),
            };
            tracing::warn!(
                record = %id,
                state = %from,
                event = %event.kind(),
                error = %err,
                "transition rejected"
            );
            return Err(err);
        }

        match record.apply(event, actor, Timestamp::now()) {
            Ok(()) => {
                tracing::info!(
                    record = %id,
                    from = %from,
                    to = %record.state,
                    event = %event.kind(),
                    actor = %actor,
                    "transition applied"
                );
                Ok(record.clone())
            }
            Err(err) => {
                tracing::warn!(
                    record = %id,
                    state = %from,
                    event = %event.kind(),
                    error = %err,
                    "transition rejected"
                );
                Err(err.into())
            }
        }
    }

    /// Query records matching a filter.
    ///
    /// Results are sorted by `(created_at, id)` so that re-querying with
    /// the same filter and no intervening writes yields identical
    /// results in identical order.
    pub fn query(&self, filter: &QueryFilter) -> Vec<LifecycleRecord> {
        let mut results: Vec<LifecycleRecord> = self
            .records
            .iter()
            .filter(|r| filter.matches(r.value()))
            .map(|r| r.value().clone())
            .collect();
        results.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.id.cmp(&b.id))
        });
        results
    }

    /// All records, in query order.
    pub fn snapshot(&self) -> Vec<LifecycleRecord> {
        self.query(&QueryFilter::default())
    }

    /// Number of records in the ledger.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the ledger holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl std::fmt::Debug for Ledger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ledger")
            .field("records_count", &self.records.len())
            .field("entities_count", &self.entities.len())
            .finish()
    }
}
