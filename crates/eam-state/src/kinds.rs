//! # Record Kinds, States, and Events
//!
//! The three closed enums the transition tables are keyed on. Wire names
//! are SCREAMING_SNAKE_CASE, matching the names surfaced in exports and
//! status filters.

use serde::{Deserialize, Serialize};

/// Kind of business record tracked by the ledger.
///
/// The kind is fixed at creation and selects the transition table,
/// the payload schema, and the initial state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecordKind {
    /// Asset lent out to a user.
    Loan,
    /// Asset disposal / write-off.
    Disposal,
    /// Compensation owed for a lost or damaged asset.
    Compensation,
    /// Stock movement between warehouses.
    WarehouseTransfer,
    /// Goods received into a warehouse.
    WarehouseIntake,
    /// One depreciation accounting period.
    DepreciationPeriod,
    /// Physical inventory audit session.
    AuditSession,
    /// Asset upgrade / improvement request.
    Upgrade,
}

impl RecordKind {
    /// All record kinds, in declaration order.
    pub const ALL: [RecordKind; 8] = [
        Self::Loan,
        Self::Disposal,
        Self::Compensation,
        Self::WarehouseTransfer,
        Self::WarehouseIntake,
        Self::DepreciationPeriod,
        Self::AuditSession,
        Self::Upgrade,
    ];

    /// Canonical name of this kind (e.g. `WAREHOUSE_TRANSFER`).
    pub fn name(&self) -> &'static str {
        match self {
            Self::Loan => "LOAN",
            Self::Disposal => "DISPOSAL",
            Self::Compensation => "COMPENSATION",
            Self::WarehouseTransfer => "WAREHOUSE_TRANSFER",
            Self::WarehouseIntake => "WAREHOUSE_INTAKE",
            Self::DepreciationPeriod => "DEPRECIATION_PERIOD",
            Self::AuditSession => "AUDIT_SESSION",
            Self::Upgrade => "UPGRADE",
        }
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Lifecycle state of a record.
///
/// One shared enum across all kinds; which states are reachable for a
/// given kind is defined by that kind's transition table (see
/// [`crate::machine::valid_states`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecordState {
    Pending,
    Loaned,
    Returned,
    Approved,
    Rejected,
    Completed,
    Paid,
    InTransit,
    PendingPrint,
    Printed,
    Locked,
    Draft,
    Calculated,
    Posted,
}

impl RecordState {
    /// Canonical name of this state (e.g. `IN_TRANSIT`).
    pub fn name(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Loaned => "LOANED",
            Self::Returned => "RETURNED",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
            Self::Completed => "COMPLETED",
            Self::Paid => "PAID",
            Self::InTransit => "IN_TRANSIT",
            Self::PendingPrint => "PENDING_PRINT",
            Self::Printed => "PRINTED",
            Self::Locked => "LOCKED",
            Self::Draft => "DRAFT",
            Self::Calculated => "CALCULATED",
            Self::Posted => "POSTED",
        }
    }

    /// Whether this state is terminal (no further transitions allowed).
    ///
    /// Terminal states are shared across kinds: a `COMPLETED` disposal
    /// and a `COMPLETED` transfer are equally closed.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::Returned | Self::Rejected | Self::Completed | Self::Paid | Self::Posted
        )
    }
}

impl std::fmt::Display for RecordState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Named event a caller may request against a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventKind {
    Return,
    Approve,
    Reject,
    Complete,
    MarkPaid,
    StartTransit,
    Print,
    Lock,
    Close,
    Extend,
    Calculate,
    Post,
}

impl EventKind {
    /// All event kinds, in declaration order.
    pub const ALL: [EventKind; 12] = [
        Self::Return,
        Self::Approve,
        Self::Reject,
        Self::Complete,
        Self::MarkPaid,
        Self::StartTransit,
        Self::Print,
        Self::Lock,
        Self::Close,
        Self::Extend,
        Self::Calculate,
        Self::Post,
    ];

    /// Canonical name of this event (e.g. `MARK_PAID`).
    pub fn name(&self) -> &'static str {
        match self {
            Self::Return => "RETURN",
            Self::Approve => "APPROVE",
            Self::Reject => "REJECT",
            Self::Complete => "COMPLETE",
            Self::MarkPaid => "MARK_PAID",
            Self::StartTransit => "START_TRANSIT",
            Self::Print => "PRINT",
            Self::Lock => "LOCK",
            Self::Close => "CLOSE",
            Self::Extend => "EXTEND",
            Self::Calculate => "CALCULATE",
            Self::Post => "POST",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
