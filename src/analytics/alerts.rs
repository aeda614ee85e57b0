//! Health-check alerts shown as a fixed checklist.
//!
//! The first three entries are derived from the curve, the last two are
//! static recommendations that are always satisfied.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::summary::DailySummary;
use crate::domain::HOURS_PER_DAY;

pub const NIGHT_LOAD_LABEL: &str = "Night load within normal range";
pub const EXTREME_PEAK_LABEL: &str = "No extreme peak (> 2.0× average)";
pub const NO_GAPS_LABEL: &str = "Curve has no gaps (24/24 hours present)";
pub const HVAC_RECOMMENDATION_LABEL: &str = "Recommendation: review the HVAC schedule";
pub const LIGHTING_RECOMMENDATION_LABEL: &str = "Recommendation: audit lighting zones";

/// Ratios against the daily average used by the checklist and hour table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct AlertThresholds {
    /// Night average may be at most this fraction of the daily average
    #[validate(range(exclusive_min = 0.0))]
    pub night_ratio: f64,
    /// Peak may be at most this multiple of the daily average
    #[validate(range(exclusive_min = 0.0))]
    pub extreme_peak_ratio: f64,
    /// Hours above this multiple of the average are marked as peaks in the table
    #[validate(range(exclusive_min = 0.0))]
    pub table_peak_ratio: f64,
    /// Rows in the ranked hour table
    #[validate(range(min = 1, max = 24))]
    pub top_hours: usize,
}

impl Default for AlertThresholds {
    fn default() -> Self {
        Self {
            night_ratio: 0.75,
            extreme_peak_ratio: 2.0,
            table_peak_ratio: 1.5,
            top_hours: 10,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AlertKind {
    /// Evaluated from the hourly curve
    Check,
    /// Informational, always satisfied
    Recommendation,
}

/// One checklist line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Alert {
    pub label: &'static str,
    pub ok: bool,
    pub kind: AlertKind,
}

impl Alert {
    fn check(label: &'static str, ok: bool) -> Self {
        Self {
            label,
            ok,
            kind: AlertKind::Check,
        }
    }

    fn recommendation(label: &'static str) -> Self {
        Self {
            label,
            ok: true,
            kind: AlertKind::Recommendation,
        }
    }
}

/// Build the five-entry checklist for a curve
pub fn evaluate_alerts(hourly: &[f64], thresholds: &AlertThresholds) -> Vec<Alert> {
    let summary = DailySummary::from_hourly(hourly);
    evaluate_with_summary(&summary, thresholds)
}

pub fn evaluate_with_summary(summary: &DailySummary, thresholds: &AlertThresholds) -> Vec<Alert> {
    let night_ok = summary.night_average_kwh <= summary.average_kwh * thresholds.night_ratio;
    let peak_ok = summary.peak_kwh <= summary.average_kwh * thresholds.extreme_peak_ratio;
    let complete = summary.hours_present == HOURS_PER_DAY;

    vec![
        Alert::check(NIGHT_LOAD_LABEL, night_ok),
        Alert::check(EXTREME_PEAK_LABEL, peak_ok),
        Alert::check(NO_GAPS_LABEL, complete),
        Alert::recommendation(HVAC_RECOMMENDATION_LABEL),
        Alert::recommendation(LIGHTING_RECOMMENDATION_LABEL),
    ]
}
