//! # Record Payloads and Events
//!
//! Typed per-kind payload structs, the tagged `RecordPayload` envelope,
//! and the payload-bearing `Event` enum.
//!
//! The payload schema is fixed at creation. Fields like `approved_by`,
//! `returned_at`, `paid_at`, or `total_depreciation` start empty and are
//! written exclusively by the transition that owns them; there is no
//! other mutation path.

use serde::{Deserialize, Serialize};

use eam_core::{ActorId, AssetCode, Timestamp};
use eam_state::{EventKind, RecordKind};

// ---------------------------------------------------------------------------
// Per-kind payload structs
// ---------------------------------------------------------------------------

/// Loan of a single asset to a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanPayload {
    pub asset_code: AssetCode,
    /// Borrowing user (display identity, not resolved by the core).
    pub borrower: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_return: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Set by the RETURN transition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub returned_at: Option<Timestamp>,
    /// Condition reported at return, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition_on_return: Option<String>,
}

/// Disposal / write-off of an asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisposalPayload {
    pub asset_code: AssetCode,
    pub reason: String,
    /// Disposal method (liquidation, destruction, donation).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    /// Expected recovery value, if the asset is sold off.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_value: Option<f64>,
    /// Set by the APPROVE transition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_by: Option<ActorId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_at: Option<Timestamp>,
    /// Set by the REJECT transition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejected_reason: Option<String>,
}

/// Compensation owed for a lost or damaged asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompensationPayload {
    pub asset_code: AssetCode,
    /// Party responsible for the loss.
    pub responsible: String,
    pub reason: String,
    /// Amount owed, in the ledger currency.
    pub amount: f64,
    /// Set by the MARK_PAID transition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_at: Option<Timestamp>,
}

/// Stock movement between warehouses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarehouseTransferPayload {
    pub asset_codes: Vec<AssetCode>,
    pub from_location: String,
    pub to_location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier: Option<String>,
    /// Set by the START_TRANSIT transition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_at: Option<Timestamp>,
    /// Set by the COMPLETE transition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivered_at: Option<Timestamp>,
}

/// One line of goods received into a warehouse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntakeItem {
    pub asset_code: AssetCode,
    pub quantity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<f64>,
}

/// Goods received into a warehouse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarehouseIntakePayload {
    pub supplier: String,
    pub invoice_no: String,
    pub items: Vec<IntakeItem>,
    /// Set by the PRINT transition (intake slip printed).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub printed_at: Option<Timestamp>,
}

/// One depreciation accounting period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepreciationPeriodPayload {
    /// Period label, e.g. `2026-03`.
    pub period: String,
    /// Annual straight-line rate; 0.2 for the standard 5-year schedule.
    pub annual_rate: f64,
    /// Set by the CALCULATE transition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_depreciation: Option<f64>,
    /// Set by the APPROVE transition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_by: Option<ActorId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_at: Option<Timestamp>,
    /// Set by the POST transition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub posted_at: Option<Timestamp>,
}

/// Physical inventory audit session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditSessionPayload {
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<Timestamp>,
    /// Assets expected at the location.
    pub total_count: u32,
    /// Assets physically checked so far; finalized by CLOSE.
    pub checked_count: u32,
    /// Checked assets matching the register; finalized by CLOSE.
    pub matched_count: u32,
    /// Set by the EXTEND transition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extended_until: Option<Timestamp>,
}

/// Asset upgrade / improvement request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpgradePayload {
    pub asset_code: AssetCode,
    pub description: String,
    pub cost: f64,
    /// Set by the APPROVE transition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_by: Option<ActorId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_at: Option<Timestamp>,
    /// Set by the REJECT transition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejected_reason: Option<String>,
}

// ---------------------------------------------------------------------------
// Payload envelope
// ---------------------------------------------------------------------------

/// Type-specific payload of a lifecycle record.
///
/// The variant must match the record's [`RecordKind`]; the ledger
/// enforces this at creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecordPayload {
    Loan(LoanPayload),
    Disposal(DisposalPayload),
    Compensation(CompensationPayload),
    WarehouseTransfer(WarehouseTransferPayload),
    WarehouseIntake(WarehouseIntakePayload),
    DepreciationPeriod(DepreciationPeriodPayload),
    AuditSession(AuditSessionPayload),
    Upgrade(UpgradePayload),
}

impl RecordPayload {
    /// The record kind this payload belongs to.
    pub fn kind(&self) -> RecordKind {
        match self {
            Self::Loan(_) => RecordKind::Loan,
            Self::Disposal(_) => RecordKind::Disposal,
            Self::Compensation(_) => RecordKind::Compensation,
            Self::WarehouseTransfer(_) => RecordKind::WarehouseTransfer,
            Self::WarehouseIntake(_) => RecordKind::WarehouseIntake,
            Self::DepreciationPeriod(_) => RecordKind::DepreciationPeriod,
            Self::AuditSession(_) => RecordKind::AuditSession,
            Self::Upgrade(_) => RecordKind::Upgrade,
        }
    }

    /// Names of required fields that are missing or invalid.
    ///
    /// Empty result means the payload is creatable. Text fields must be
    /// non-blank; amounts and rates must be positive; list payloads must
    /// have at least one line.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        let mut require = |ok: bool, field: &'static str| {
            if !ok {
                missing.push(field);
            }
        };

        match self {
            Self::Loan(p) => {
                require(!p.borrower.trim().is_empty(), "borrower");
            }
            Self::Disposal(p) => {
                require(!p.reason.trim().is_empty(), "reason");
                if let Some(v) = p.estimated_value {
                    require(v >= 0.0, "estimated_value");
                }
            }
            Self::Compensation(p) => {
                require(!p.responsible.trim().is_empty(), "responsible");
                require(!p.reason.trim().is_empty(), "reason");
                require(p.amount > 0.0, "amount");
            }
            Self::WarehouseTransfer(p) => {
                require(!p.asset_codes.is_empty(), "asset_codes");
                require(!p.from_location.trim().is_empty(), "from_location");
                require(!p.to_location.trim().is_empty(), "to_location");
            }
            Self::WarehouseIntake(p) => {
                require(!p.supplier.trim().is_empty(), "supplier");
                require(!p.invoice_no.trim().is_empty(), "invoice_no");
                require(!p.items.is_empty(), "items");
                require(p.items.iter().all(|i| i.quantity > 0), "items.quantity");
            }
            Self::DepreciationPeriod(p) => {
                require(!p.period.trim().is_empty(), "period");
                require(p.annual_rate > 0.0, "annual_rate");
            }
            Self::AuditSession(p) => {
                require(!p.location.trim().is_empty(), "location");
                require(p.checked_count <= p.total_count, "checked_count");
                require(p.matched_count <= p.checked_count, "matched_count");
            }
            Self::Upgrade(p) => {
                require(!p.description.trim().is_empty(), "description");
                require(p.cost > 0.0, "cost");
            }
        }

        missing
    }

    /// Numeric payload field by wire name, for report aggregation.
    pub fn numeric_field(&self, name: &str) -> Option<f64> {
        match (self, name) {
            (Self::Disposal(p), "estimated_value") => p.estimated_value,
            (Self::Compensation(p), "amount") => Some(p.amount),
            (Self::WarehouseIntake(p), "total_value") => Some(
                p.items
                    .iter()
                    .map(|i| f64::from(i.quantity) * i.unit_price.unwrap_or(0.0))
                    .sum(),
            ),
            (Self::DepreciationPeriod(p), "annual_rate") => Some(p.annual_rate),
            (Self::DepreciationPeriod(p), "total_depreciation") => p.total_depreciation,
            (Self::AuditSession(p), "total_count") => Some(f64::from(p.total_count)),
            (Self::AuditSession(p), "checked_count") => Some(f64::from(p.checked_count)),
            (Self::AuditSession(p), "matched_count") => Some(f64::from(p.matched_count)),
            (Self::Upgrade(p), "cost") => Some(p.cost),
            _ => None,
        }
    }

    /// Searchable text fields, for free-text query matching.
    pub fn text_fields(&self) -> Vec<&str> {
        match self {
            Self::Loan(p) => {
                let mut fields = vec![p.asset_code.as_str(), p.borrower.as_str()];
                fields.extend(p.note.as_deref());
                fields
            }
            Self::Disposal(p) => {
                let mut fields = vec![p.asset_code.as_str(), p.reason.as_str()];
                fields.extend(p.method.as_deref());
                fields
            }
            Self::Compensation(p) => vec![
                p.asset_code.as_str(),
                p.responsible.as_str(),
                p.reason.as_str(),
            ],
            Self::WarehouseTransfer(p) => {
                let mut fields: Vec<&str> =
                    p.asset_codes.iter().map(|c| c.as_str()).collect();
                fields.push(p.from_location.as_str());
                fields.push(p.to_location.as_str());
                fields.extend(p.carrier.as_deref());
                fields
            }
            Self::WarehouseIntake(p) => {
                let mut fields = vec![p.supplier.as_str(), p.invoice_no.as_str()];
                fields.extend(p.items.iter().map(|i| i.asset_code.as_str()));
                fields
            }
            Self::DepreciationPeriod(p) => vec![p.period.as_str()],
            Self::AuditSession(p) => vec![p.location.as_str()],
            Self::Upgrade(p) => vec![p.asset_code.as_str(), p.description.as_str()],
        }
    }
}

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

/// A requested transition, carrying the data the transition writes into
/// the payload.
///
/// Each variant projects to one [`EventKind`] via [`Event::kind()`];
/// the transition table decides legality, the variant data is applied
/// only after the table accepts the move.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Event {
    /// Return a loaned asset, optionally noting its condition.
    Return {
        #[serde(skip_serializing_if = "Option::is_none")]
        condition: Option<String>,
    },
    /// Approve the record; the acting user is stamped as approver.
    Approve,
    /// Reject the record with a reason.
    Reject { reason: String },
    /// Close out the final step of a multi-step flow.
    Complete,
    /// Mark a compensation as settled.
    MarkPaid,
    /// Dispatch a warehouse transfer.
    StartTransit,
    /// Print the intake slip.
    Print,
    /// Lock an audit session for counting.
    Lock,
    /// Close an audit session with final counters.
    Close {
        checked_count: u32,
        matched_count: u32,
    },
    /// Extend a locked audit session's deadline.
    Extend { until: Timestamp },
    /// Record the computed depreciation total for the period.
    Calculate { total_depreciation: f64 },
    /// Post an approved depreciation period to the books.
    Post,
}

impl Event {
    /// The table-level event this request projects to.
    pub fn kind(&self) -> EventKind {
        match self {
            Self::Return { .. } => EventKind::Return,
            Self::Approve => EventKind::Approve,
            Self::Reject { .. } => EventKind::Reject,
            Self::Complete => EventKind::Complete,
            Self::MarkPaid => EventKind::MarkPaid,
            Self::StartTransit => EventKind::StartTransit,
            Self::Print => EventKind::Print,
            Self::Lock => EventKind::Lock,
            Self::Close { .. } => EventKind::Close,
            Self::Extend { .. } => EventKind::Extend,
            Self::Calculate { .. } => EventKind::Calculate,
            Self::Post => EventKind::Post,
        }
    }
}

/// Bounds checks on the data an event would write into the payload.
///
/// Mirrors the creation-time rules in [`RecordPayload::missing_fields`]:
/// a record that was creatable must still satisfy the same bounds after
/// every accepted transition. Empty result means the event may apply.
pub(crate) fn effect_violations(payload: &RecordPayload, event: &Event) -> Vec<&'static str> {
    let mut invalid = Vec::new();
    if let (
        RecordPayload::AuditSession(p),
        Event::Close {
            checked_count,
            matched_count,
        },
    ) = (payload, event)
    {
        if *checked_count > p.total_count {
            invalid.push("checked_count");
        }
        if *matched_count > *checked_count {
            invalid.push("matched_count");
        }
    }
    invalid
}

/// Apply the payload effect of an accepted event.
///
/// Only called after the transition table has accepted the
/// `(state, event)` pair, so the payload variant is guaranteed to match
/// a kind whose table lists the event; pairs outside that set fall
/// through without effect.
pub(crate) fn apply_effect(
    payload: &mut RecordPayload,
    event: &Event,
    actor: &ActorId,
    at: Timestamp,
) {
    match (payload, event) {
        (RecordPayload::Loan(p), Event::Return { condition }) => {
            p.returned_at = Some(at);
            p.condition_on_return = condition.clone();
        }
        (RecordPayload::Disposal(p), Event::Approve) => {
            p.approved_by = Some(actor.clone());
            p.approved_at = Some(at);
        }
        (RecordPayload::Disposal(p), Event::Reject { reason }) => {
            p.rejected_reason = Some(reason.clone());
        }
        (RecordPayload::Compensation(p), Event::MarkPaid) => {
            p.paid_at = Some(at);
        }
        (RecordPayload::WarehouseTransfer(p), Event::StartTransit) => {
            p.started_at = Some(at);
        }
        (RecordPayload::WarehouseTransfer(p), Event::Complete) => {
            p.delivered_at = Some(at);
        }
        (RecordPayload::WarehouseIntake(p), Event::Print) => {
            p.printed_at = Some(at);
        }
        (RecordPayload::DepreciationPeriod(p), Event::Calculate { total_depreciation }) => {
            p.total_depreciation = Some(*total_depreciation);
        }
        (RecordPayload::DepreciationPeriod(p), Event::Approve) => {
            p.approved_by = Some(actor.clone());
            p.approved_at = Some(at);
        }
        (RecordPayload::DepreciationPeriod(p), Event::Post) => {
            p.posted_at = Some(at);
        }
        (
            RecordPayload::AuditSession(p),
            Event::Close {
                checked_count,
                matched_count,
            },
        ) => {
            p.checked_count = *checked_count;
            p.matched_count = *matched_count;
        }
        (RecordPayload::AuditSession(p), Event::Extend { until }) => {
            p.extended_until = Some(*until);
        }
        (RecordPayload::Upgrade(p), Event::Approve) => {
            p.approved_by = Some(actor.clone());
            p.approved_at = Some(at);
        }
        (RecordPayload::Upgrade(p), Event::Reject { reason }) => {
            p.rejected_reason = Some(reason.clone());
        }
        // Events without a payload effect (Lock, Complete on intake, ...).
        _ => {}
    }
}
