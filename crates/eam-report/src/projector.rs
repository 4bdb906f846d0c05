//! # Snapshot Projections
//!
//! Status aggregation and payload sums for summary cards and exports.

use std::collections::BTreeMap;

use eam_ledger::{AuditSessionPayload, LifecycleRecord};
use eam_state::{valid_states, RecordKind, RecordState};

/// Count records of `kind` per state.
///
/// Every state in the kind's valid set appears in the result, zero
/// included, so summary cards can render a stable row set.
pub fn count_by_state(
    records: &[LifecycleRecord],
    kind: RecordKind,
) -> BTreeMap<RecordState, usize> {
    let mut counts: BTreeMap<RecordState, usize> = valid_states(kind)
        .iter()
        .map(|state| (*state, 0))
        .collect();
    for record in records.iter().filter(|r| r.kind == kind) {
        *counts.entry(record.state).or_insert(0) += 1;
    }
    counts
}

/// Sum a numeric payload field across records of `kind`, optionally
/// restricted to one state.
///
/// Records whose payload does not expose the field contribute nothing.
pub fn sum_payload_field(
    records: &[LifecycleRecord],
    kind: RecordKind,
    field: &str,
    state_filter: Option<RecordState>,
) -> f64 {
    records
        .iter()
        .filter(|r| r.kind == kind)
        .filter(|r| state_filter.map_or(true, |s| r.state == s))
        .filter_map(|r| r.payload.numeric_field(field))
        .sum()
}

/// Share of expected assets checked in an audit session, as a
/// percentage. Zero when nothing was expected.
pub fn completion_rate(session: &AuditSessionPayload) -> f64 {
    if session.total_count == 0 {
        return 0.0;
    }
    f64::from(session.checked_count) / f64::from(session.total_count) * 100.0
}

/// Share of checked assets matching the register, as a percentage.
/// Zero when nothing was checked.
pub fn accuracy_rate(session: &AuditSessionPayload) -> f64 {
    if session.checked_count == 0 {
        return 0.0;
    }
    f64::from(session.matched_count) / f64::from(session.checked_count) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use eam_core::{ActorId, AssetCode, RecordId, Timestamp};
    use eam_ledger::{CompensationPayload, DisposalPayload, RecordPayload, SubjectRef};

    fn record(kind: RecordKind, state: RecordState, payload: RecordPayload) -> LifecycleRecord {
        let at = Timestamp::parse("2026-03-01T08:00:00Z").unwrap();
        LifecycleRecord {
            id: RecordId::new(),
            kind,
            subject: SubjectRef::asset("TS-001"),
            state,
            payload,
            created_by: ActorId::new("admin").unwrap(),
            created_at: at,
            updated_at: at,
            history: Vec::new(),
        }
    }

    fn disposal(state: RecordState) -> LifecycleRecord {
        record(
            RecordKind::Disposal,
            state,
            RecordPayload::Disposal(DisposalPayload {
                asset_code: AssetCode::new("TS-002").unwrap(),
                reason: "worn out".into(),
                method: None,
                estimated_value: None,
                approved_by: None,
                approved_at: None,
                rejected_reason: None,
            }),
        )
    }

    fn compensation(state: RecordState, amount: f64) -> LifecycleRecord {
        record(
            RecordKind::Compensation,
            state,
            RecordPayload::Compensation(CompensationPayload {
                asset_code: AssetCode::new("TS-003").unwrap(),
                responsible: "x".into(),
                reason: "y".into(),
                amount,
                paid_at: None,
            }),
        )
    }

    #[test]
    fn count_by_state_is_exact_and_complete() {
        let records = vec![
            disposal(RecordState::Pending),
            disposal(RecordState::Pending),
            disposal(RecordState::Approved),
            disposal(RecordState::Completed),
            // Different kind, must not be counted.
            compensation(RecordState::Pending, 1.0),
        ];
        let counts = count_by_state(&records, RecordKind::Disposal);

        assert_eq!(counts[&RecordState::Pending], 2);
        assert_eq!(counts[&RecordState::Approved], 1);
        assert_eq!(counts[&RecordState::Completed], 1);
        // Valid-but-unused states are present with zero.
        assert_eq!(counts[&RecordState::Rejected], 0);
        assert_eq!(counts.values().sum::<usize>(), 4);
    }

    #[test]
    fn count_by_state_empty_snapshot() {
        let counts = count_by_state(&[], RecordKind::Loan);
        assert!(counts.values().all(|&c| c == 0));
    }

    #[test]
    fn sum_payload_field_filters_kind_and_state() {
        let records = vec![
            compensation(RecordState::Pending, 1_000_000.0),
            compensation(RecordState::Paid, 2_500_000.0),
            compensation(RecordState::Paid, 500_000.0),
            disposal(RecordState::Pending),
        ];

        let total = sum_payload_field(&records, RecordKind::Compensation, "amount", None);
        assert_eq!(total, 4_000_000.0);

        let paid = sum_payload_field(
            &records,
            RecordKind::Compensation,
            "amount",
            Some(RecordState::Paid),
        );
        assert_eq!(paid, 3_000_000.0);
    }

    #[test]
    fn sum_of_unknown_field_is_zero() {
        let records = vec![compensation(RecordState::Pending, 1.0)];
        assert_eq!(
            sum_payload_field(&records, RecordKind::Compensation, "no_such_field", None),
            0.0
        );
    }

    #[test]
    fn rates_guard_division_by_zero() {
        let empty = AuditSessionPayload {
            location: "Kho A".into(),
            deadline: None,
            total_count: 0,
            checked_count: 0,
            matched_count: 0,
            extended_until: None,
        };
        assert_eq!(completion_rate(&empty), 0.0);
        assert_eq!(accuracy_rate(&empty), 0.0);
    }

    #[test]
    fn rates_compute_percentages() {
        let session = AuditSessionPayload {
            location: "Kho A".into(),
            deadline: None,
            total_count: 200,
            checked_count: 150,
            matched_count: 120,
            extended_until: None,
        };
        assert_eq!(completion_rate(&session), 75.0);
        assert_eq!(accuracy_rate(&session), 80.0);
    }

    #[test]
    fn projector_does_not_mutate_snapshot() {
        let records = vec![disposal(RecordState::Pending)];
        let before = records.clone();
        let _ = count_by_state(&records, RecordKind::Disposal);
        let _ = sum_payload_field(&records, RecordKind::Disposal, "estimated_value", None);
        assert_eq!(records, before);
    }
}
