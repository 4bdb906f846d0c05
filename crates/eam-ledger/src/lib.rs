//! # eam-ledger — Lifecycle Record Ledger
//!
//! The authoritative, append-only store of business lifecycle records
//! (loans, disposals, compensations, warehouse movements, depreciation
//! periods, audit sessions, upgrades) and the entity store those records
//! reference.
//!
//! ## Control Flow
//!
//! Caller action -> transition table validates `(state, event)` ->
//! ledger applies state + payload effect + history append + timestamp
//! refresh atomically under one entry lock -> reports and exports
//! recompute from read-only snapshots on demand.
//!
//! ## Ownership Rules
//!
//! - The ledger owns all stored records; `find`/`query` return clones,
//!   so external mutation can never bypass the state machine.
//! - Records are never deleted: closure is a state, not a removal.
//! - Entity references are checked at creation and allowed to dangle
//!   afterwards; display falls back to the raw id.

pub mod entity;
pub mod ledger;
pub mod payload;
pub mod record;

// Re-export primary types.
pub use entity::{Entity, EntityStore, SubjectRef};
pub use ledger::{Ledger, LedgerError, QueryFilter};
pub use payload::{
    AuditSessionPayload, CompensationPayload, DepreciationPeriodPayload, DisposalPayload, Event,
    IntakeItem, LoanPayload, RecordPayload, UpgradePayload, WarehouseIntakePayload,
    WarehouseTransferPayload,
};
pub use record::LifecycleRecord;
