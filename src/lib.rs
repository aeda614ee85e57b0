//! # Energy Day Report
//!
//! Deterministic synthesis of one day of building energy consumption and the
//! analytics derived from it (summary, category and consumer breakdown, ranked
//! hours, checklist alerts).
//!
//! The same seed always produces the same [`domain::EnergyDay`].

pub mod analytics;
pub mod config;
pub mod domain;
pub mod simulation;
pub mod telemetry;

pub use analytics::{AlertThresholds, DailySummary, DayReport};
pub use domain::{Category, Consumer, EnergyDay, HourlyProfile};
pub use simulation::{EnergyDaySimulator, SeededLcg, SimulationInputs};
