//! # Energy Day Simulation
//!
//! Runs the full pipeline for one building and day:
//! seed → generator → hourly curve → share decomposition → [`EnergyDay`].
//!
//! Each call to [`EnergyDaySimulator::run`] creates its own generator, so
//! runs for different buildings can execute concurrently without sharing state.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::profile::{HourlyProfileSynthesizer, ProfileParams};
use super::rng::{SeededLcg, UnitDraw};
use crate::domain::{EnergyDay, EnergyDayError, HourlyProfile, ShareDecomposer};

/// Seed used when none is configured
pub const DEFAULT_SEED: u64 = 0xC0FFEE;

/// Externally supplied inputs of one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationInputs {
    pub seed: u64,
    pub building_name: String,
    pub date: NaiveDate,
    pub price_czk_per_kwh: f64,
}

#[derive(Debug, Clone, Default)]
pub struct EnergyDaySimulator {
    synthesizer: HourlyProfileSynthesizer,
    decomposer: ShareDecomposer,
}

impl EnergyDaySimulator {
    pub fn new(params: ProfileParams, decomposer: ShareDecomposer) -> Self {
        Self {
            synthesizer: HourlyProfileSynthesizer::new(params),
            decomposer,
        }
    }

    pub fn synthesizer(&self) -> &HourlyProfileSynthesizer {
        &self.synthesizer
    }

    pub fn decomposer(&self) -> &ShareDecomposer {
        &self.decomposer
    }

    /// Simulate one day with a freshly seeded generator
    pub fn run(&self, inputs: &SimulationInputs) -> Result<EnergyDay, EnergyDayError> {
        let mut rng = SeededLcg::new(inputs.seed);
        let day = self.run_with(&mut rng, inputs)?;

        info!(
            seed = inputs.seed,
            building = %day.building_name(),
            date = %day.date(),
            total_kwh = day.total_kwh(),
            "simulated energy day"
        );
        Ok(day)
    }

    /// Simulate one day drawing from a caller-supplied source
    pub fn run_with<D: UnitDraw + ?Sized>(
        &self,
        draws: &mut D,
        inputs: &SimulationInputs,
    ) -> Result<EnergyDay, EnergyDayError> {
        let hourly = self.synthesizer.synthesize(draws);
        self.assemble(hourly, inputs)
    }

    /// Decompose an existing curve and build the day record
    pub fn assemble(
        &self,
        hourly: HourlyProfile,
        inputs: &SimulationInputs,
    ) -> Result<EnergyDay, EnergyDayError> {
        let total_kwh = hourly.total_kwh();
        let categories = self.decomposer.category_breakdown(total_kwh);
        let consumers = self.decomposer.top_consumers(total_kwh);

        debug!(
            total_kwh,
            categories = categories.len(),
            consumers = consumers.len(),
            "decomposed daily total"
        );

        EnergyDay::new(
            inputs.building_name.clone(),
            inputs.date,
            hourly,
            consumers,
            categories,
            inputs.price_czk_per_kwh,
        )
    }
}
