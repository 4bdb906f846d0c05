//! # Straight-Line Depreciation
//!
//! The one numeric algorithm in the system. Fixed annual rate, 365-day
//! years, current value clamped at zero once an asset is fully written
//! down.

use serde::{Deserialize, Serialize};

use eam_core::{AssetCode, Timestamp};

/// Fixed annual straight-line rate (5-year schedule).
pub const ANNUAL_RATE: f64 = 0.2;

const SECONDS_PER_YEAR: f64 = 365.0 * 24.0 * 3600.0;

/// An asset participating in depreciation runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepreciableAsset {
    pub code: AssetCode,
    pub purchase_price: f64,
    pub purchase_date: Timestamp,
}

/// Computed depreciation figures for one asset at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DepreciationSchedule {
    /// Elapsed ownership in fractional 365-day years.
    pub years_used: f64,
    /// Depreciation booked per month: `price * rate / 12`.
    pub monthly_depreciation: f64,
    /// Total depreciation to date: `price * rate * years_used`.
    pub depreciated_amount: f64,
    /// Remaining book value, clamped at zero.
    pub current_value: f64,
}

/// Straight-line schedule for an asset at `now`.
pub fn straight_line(asset: &DepreciableAsset, now: Timestamp) -> DepreciationSchedule {
    let elapsed_secs = (now.epoch_secs() - asset.purchase_date.epoch_secs()) as f64;
    let years_used = (elapsed_secs / SECONDS_PER_YEAR).max(0.0);
    straight_line_for_years(asset.purchase_price, years_used)
}

/// Straight-line schedule for a purchase price and an explicit elapsed
/// time. The `now`-based entry point reduces to this.
pub fn straight_line_for_years(purchase_price: f64, years_used: f64) -> DepreciationSchedule {
    let monthly_depreciation = purchase_price * ANNUAL_RATE / 12.0;
    let depreciated_amount = purchase_price * ANNUAL_RATE * years_used;
    let current_value = (purchase_price - depreciated_amount).max(0.0);
    DepreciationSchedule {
        years_used,
        monthly_depreciation,
        depreciated_amount,
        current_value,
    }
}

/// Sum of monthly depreciation across a set of active assets.
///
/// This is the figure the CALCULATE transition writes into a
/// depreciation period record.
pub fn total_monthly_depreciation(assets: &[DepreciableAsset]) -> f64 {
    assets
        .iter()
        .map(|a| straight_line_for_years(a.purchase_price, 0.0).monthly_depreciation)
        .sum()
}
