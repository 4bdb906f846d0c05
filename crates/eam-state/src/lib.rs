//! # eam-state — Lifecycle State Machines
//!
//! Runtime state machines for every business record kind tracked by the
//! ledger. One transition table per kind, expressed as an exhaustive
//! `match` on `(state, event)`; unknown pairs are rejected, terminal
//! states accept nothing.
//!
//! ## Record Kinds
//!
//! - **Loan**: `LOANED --RETURN--> RETURNED`.
//! - **Disposal**: `PENDING --APPROVE--> APPROVED --COMPLETE--> COMPLETED`,
//!   with a `PENDING --REJECT--> REJECTED` branch.
//! - **Compensation**: `PENDING --MARK_PAID--> PAID`.
//! - **WarehouseTransfer**: `PENDING --START_TRANSIT--> IN_TRANSIT
//!   --COMPLETE--> COMPLETED`.
//! - **WarehouseIntake**: `PENDING_PRINT --PRINT--> PRINTED
//!   --COMPLETE--> COMPLETED`.
//! - **DepreciationPeriod**: `DRAFT --CALCULATE--> CALCULATED
//!   --APPROVE--> APPROVED --POST--> POSTED`.
//! - **AuditSession**: `PENDING --LOCK--> LOCKED --CLOSE--> COMPLETED`,
//!   with a `LOCKED --EXTEND--> LOCKED` self-loop that is still logged.
//! - **Upgrade**: `PENDING --APPROVE--> APPROVED --COMPLETE--> COMPLETED`,
//!   with a `PENDING --REJECT--> REJECTED` branch.
//!
//! ## Design Principle
//!
//! States and events are enums with SCREAMING_SNAKE_CASE wire names.
//! There is no string dispatch anywhere: adding a state or event forces
//! every table to handle it at compile time.

pub mod history;
pub mod kinds;
pub mod machine;

// Re-export primary types.
pub use history::TransitionRecord;
pub use kinds::{EventKind, RecordKind, RecordState};
pub use machine::{available_events, initial_state, next_state, valid_states, TransitionError};
