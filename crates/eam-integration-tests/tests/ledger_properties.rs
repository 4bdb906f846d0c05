//! Property tests driving random event sequences through the ledger.
//!
//! Invariants under test, for every kind and every sequence:
//! the stored state stays within the kind's valid state set, history
//! grows only on accepted transitions, rejected transitions leave the
//! record bit-for-bit unchanged, and terminal states reject everything.

use proptest::prelude::*;

use eam_core::{ActorId, AssetCode, EntityKind, Timestamp};
use eam_ledger::{
    AuditSessionPayload, CompensationPayload, DepreciationPeriodPayload, DisposalPayload, Entity,
    EntityStore, Event, IntakeItem, Ledger, LedgerError, LoanPayload, RecordPayload, SubjectRef,
    UpgradePayload, WarehouseIntakePayload, WarehouseTransferPayload,
};
use eam_state::{valid_states, EventKind, RecordKind, TransitionError};

fn seeded_ledger() -> Ledger {
    let entities = EntityStore::new();
    entities.insert(Entity {
        kind: EntityKind::Asset,
        id: "TS-001".into(),
        name: "Dell Latitude 5440".into(),
    });
    entities.insert(Entity {
        kind: EntityKind::Location,
        id: "KHO-A".into(),
        name: "Kho A".into(),
    });
    Ledger::new(entities)
}

fn subject_for(kind: RecordKind) -> SubjectRef {
    match kind {
        RecordKind::WarehouseTransfer
        | RecordKind::WarehouseIntake
        | RecordKind::DepreciationPeriod
        | RecordKind::AuditSession => SubjectRef::location("KHO-A"),
        _ => SubjectRef::asset("TS-001"),
    }
}

fn payload_for(kind: RecordKind) -> RecordPayload {
    let code = AssetCode::new("TS-001").unwrap();
    match kind {
        RecordKind::Loan => RecordPayload::Loan(LoanPayload {
            asset_code: code,
            borrower: "Nguyen Van An".into(),
            expected_return: None,
            note: None,
            returned_at: None,
            condition_on_return: None,
        }),
        RecordKind::Disposal => RecordPayload::Disposal(DisposalPayload {
            asset_code: code,
            reason: "Beyond repair".into(),
            method: None,
            estimated_value: None,
            approved_by: None,
            approved_at: None,
            rejected_reason: None,
        }),
        RecordKind::Compensation => RecordPayload::Compensation(CompensationPayload {
            asset_code: code,
            responsible: "Tran Thi Binh".into(),
            reason: "Lost".into(),
            amount: 1_000_000.0,
            paid_at: None,
        }),
        RecordKind::WarehouseTransfer => {
            RecordPayload::WarehouseTransfer(WarehouseTransferPayload {
                asset_codes: vec![code],
                from_location: "Kho A".into(),
                to_location: "Kho B".into(),
                carrier: None,
                started_at: None,
                delivered_at: None,
            })
        }
        RecordKind::WarehouseIntake => RecordPayload::WarehouseIntake(WarehouseIntakePayload {
            supplier: "FPT Trading".into(),
            invoice_no: "HD-2026-0001".into(),
            items: vec![IntakeItem {
                asset_code: code,
                quantity: 1,
                unit_price: Some(5_000_000.0),
            }],
            printed_at: None,
        }),
        RecordKind::DepreciationPeriod => {
            RecordPayload::DepreciationPeriod(DepreciationPeriodPayload {
                period: "2026-03".into(),
                annual_rate: 0.2,
                total_depreciation: None,
                approved_by: None,
                approved_at: None,
                posted_at: None,
            })
        }
        RecordKind::AuditSession => RecordPayload::AuditSession(AuditSessionPayload {
            location: "Kho A".into(),
            deadline: None,
            total_count: 100,
            checked_count: 0,
            matched_count: 0,
            extended_until: None,
        }),
        RecordKind::Upgrade => RecordPayload::Upgrade(UpgradePayload {
            asset_code: code,
            description: "RAM upgrade 16GB".into(),
            cost: 2_000_000.0,
            approved_by: None,
            approved_at: None,
            rejected_reason: None,
        }),
    }
}

/// An event request carrying dummy data for each table-level kind.
fn event_for(kind: EventKind) -> Event {
    match kind {
        EventKind::Return => Event::Return { condition: None },
        EventKind::Approve => Event::Approve,
        EventKind::Reject => Event::Reject {
            reason: "not justified".into(),
        },
        EventKind::Complete => Event::Complete,
        EventKind::MarkPaid => Event::MarkPaid,
        EventKind::StartTransit => Event::StartTransit,
        EventKind::Print => Event::Print,
        EventKind::Lock => Event::Lock,
        EventKind::Close => Event::Close {
            checked_count: 90,
            matched_count: 80,
        },
        EventKind::Extend => Event::Extend {
            until: Timestamp::parse("2026-12-31T00:00:00Z").unwrap(),
        },
        EventKind::Calculate => Event::Calculate {
            total_depreciation: 1_666_666.67,
        },
        EventKind::Post => Event::Post,
    }
}

fn arb_kind() -> impl Strategy<Value = RecordKind> {
    prop::sample::select(RecordKind::ALL.to_vec())
}

fn arb_events() -> impl Strategy<Value = Vec<EventKind>> {
    prop::collection::vec(prop::sample::select(EventKind::ALL.to_vec()), 0..16)
}

proptest! {
    #[test]
    fn random_sequences_hold_ledger_invariants(
        kind in arb_kind(),
        events in arb_events(),
    ) {
        let ledger = seeded_ledger();
        let actor = ActorId::new("fuzz").unwrap();
        let record = ledger
            .create(kind, subject_for(kind), payload_for(kind), &actor)
            .unwrap();
        prop_assert!(valid_states(kind).contains(&record.state));

        let mut history_len = 0usize;
        for event_kind in events {
            let before = ledger.find(record.id).unwrap();
            let result = ledger.transition(record.id, &event_for(event_kind), &actor);
            let after = ledger.find(record.id).unwrap();

            // The state never leaves the kind's state set.
            prop_assert!(valid_states(kind).contains(&after.state));

            match result {
                Ok(returned) => {
                    prop_assert_eq!(&returned, &after);
                    history_len += 1;
                    prop_assert_eq!(after.history.len(), history_len);
                    // Sequence numbers are dense and 1-based.
                    prop_assert_eq!(
                        after.history.last().map(|h| h.seq),
                        Some(history_len as u64)
                    );
                    prop_assert!(after.updated_at >= before.updated_at);
                }
                Err(LedgerError::Transition(err)) => {
                    // Rejection leaves the stored record untouched.
                    prop_assert_eq!(&after, &before);
                    if before.is_terminal() {
                        prop_assert!(
                            matches!(err, TransitionError::RecordTerminal { .. }),
                            "expected RecordTerminal, got {err}"
                        );
                    } else {
                        prop_assert!(
                            matches!(err, TransitionError::InvalidTransition { .. }),
                            "expected InvalidTransition, got {err}"
                        );
                    }
                }
                Err(other) => prop_assert!(false, "unexpected error: {other}"),
            }
        }
    }

    #[test]
    fn terminal_records_reject_every_event(
        kind in arb_kind(),
        event_kind in prop::sample::select(EventKind::ALL.to_vec()),
    ) {
        let ledger = seeded_ledger();
        let actor = ActorId::new("fuzz").unwrap();
        let record = ledger
            .create(kind, subject_for(kind), payload_for(kind), &actor)
            .unwrap();

        // Drive the record to a terminal state with any accepted event.
        let mut guard = 0;
        while !ledger.find(record.id).unwrap().is_terminal() {
            let current = ledger.find(record.id).unwrap();
            let next = current
                .available_events()
                .into_iter()
                // Extend self-loops forever; prefer a progressing event.
                .find(|e| *e != EventKind::Extend)
                .unwrap();
            ledger.transition(record.id, &event_for(next), &actor).unwrap();
            guard += 1;
            prop_assert!(guard < 8, "kind {} did not terminate", kind);
        }

        let before = ledger.find(record.id).unwrap();
        let err = ledger
            .transition(record.id, &event_for(event_kind), &actor)
            .unwrap_err();
        prop_assert!(
            matches!(
                err,
                LedgerError::Transition(TransitionError::RecordTerminal { .. })
            ),
            "expected RecordTerminal, got {err}"
        );
        prop_assert_eq!(ledger.find(record.id).unwrap(), before);
    }
}
