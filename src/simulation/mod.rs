//! # Energy Day Simulation Module
//!
//! Deterministic synthesis of one day of building consumption.
//!
//! ## Components
//!
//! - **Rng**: seeded linear congruential generator, bit-exact per seed
//! - **Profile**: hourly curve from base loads, work-hours wave, noise and spikes
//! - **Day**: pipeline that assembles an [`crate::domain::EnergyDay`]
//!
//! ## Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use energy_day_report::simulation::{EnergyDaySimulator, SimulationInputs, DEFAULT_SEED};
//!
//! let inputs = SimulationInputs {
//!     seed: DEFAULT_SEED,
//!     building_name: "Office building A".to_string(),
//!     date: NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
//!     price_czk_per_kwh: 3.20,
//! };
//!
//! let day = EnergyDaySimulator::default().run(&inputs).unwrap();
//! assert_eq!(day.hourly_kwh().values().len(), 24);
//! ```

pub mod day;
pub mod profile;
pub mod rng;

pub use day::{EnergyDaySimulator, SimulationInputs, DEFAULT_SEED};
pub use profile::{HourBracket, HourSample, HourlyProfileSynthesizer, ProfileParams};
pub use rng::{SeededLcg, UnitDraw};
