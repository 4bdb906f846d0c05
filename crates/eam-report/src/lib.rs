//! # eam-report — Derived Report Projections
//!
//! Pure read-side computations over ledger snapshots: counts per state,
//! payload field sums, audit completion/accuracy rates, and the
//! straight-line depreciation schedule.
//!
//! Nothing in this crate mutates a record. Every function takes a
//! borrowed snapshot (`&[LifecycleRecord]`) or plain values and returns
//! a fresh aggregate; callers re-project after each write instead of
//! maintaining incremental counters.

pub mod depreciation;
pub mod projector;

// Re-export primary types.
pub use depreciation::{
    straight_line, straight_line_for_years, total_monthly_depreciation, DepreciableAsset,
    DepreciationSchedule, ANNUAL_RATE,
};
pub use projector::{accuracy_rate, completion_rate, count_by_state, sum_payload_field};
