//! # Derived Analytics
//!
//! Statistics, checklist alerts and hour rankings computed from an hourly
//! curve. Everything here is a pure function of its inputs.

pub mod alerts;
pub mod ranking;
pub mod report;
pub mod summary;

pub use alerts::{evaluate_alerts, evaluate_with_summary, Alert, AlertKind, AlertThresholds};
pub use ranking::{top_hours, RankedHour};
pub use report::{CategoryShare, DayReport, HourRow};
pub use summary::{peak, DailySummary, NIGHT_HOURS};
