use chrono::{Local, NaiveDate};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use validator::Validate;

use crate::analytics::AlertThresholds;
use crate::domain::{ShareDecomposer, ShareTable};
use crate::simulation::{EnergyDaySimulator, ProfileParams, SimulationInputs, DEFAULT_SEED};

/// Default location of the TOML configuration file
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Prefix of environment overrides, e.g. `EDR__SIMULATION__SEED=42`
pub const ENV_PREFIX: &str = "EDR__";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] figment::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] validator::ValidationErrors),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct Config {
    #[validate(nested)]
    pub building: BuildingConfig,
    #[validate(nested)]
    pub simulation: SimulationConfig,
    #[validate(nested)]
    pub profile: ProfileParams,
    #[validate(nested)]
    pub alerts: AlertThresholds,
    pub shares: SharesConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct BuildingConfig {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(range(exclusive_min = 0.0))]
    pub price_czk_per_kwh: f64,
}

impl Default for BuildingConfig {
    fn default() -> Self {
        Self {
            name: "Office building A (small)".to_string(),
            price_czk_per_kwh: 3.20,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct SimulationConfig {
    pub seed: u64,
    /// Report date; today's local date when unset
    pub date: Option<NaiveDate>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            date: None,
        }
    }
}

impl SimulationConfig {
    pub fn date_or_today(&self) -> NaiveDate {
        self.date.unwrap_or_else(|| Local::now().date_naive())
    }
}

/// Share tables, validated while deserializing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SharesConfig {
    pub categories: ShareTable,
    pub consumers: ShareTable,
}

impl Default for SharesConfig {
    fn default() -> Self {
        Self {
            categories: ShareTable::default_categories(),
            consumers: ShareTable::default_consumers(),
        }
    }
}

impl Config {
    /// Defaults, then `config/default.toml` if present, then `EDR__` environment variables
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(Self::figment(DEFAULT_CONFIG_PATH))
    }

    pub fn figment(path: impl AsRef<Path>) -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    pub fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    pub fn inputs(&self) -> SimulationInputs {
        SimulationInputs {
            seed: self.simulation.seed,
            building_name: self.building.name.clone(),
            date: self.simulation.date_or_today(),
            price_czk_per_kwh: self.building.price_czk_per_kwh,
        }
    }

    pub fn simulator(&self) -> EnergyDaySimulator {
        EnergyDaySimulator::new(
            self.profile.clone(),
            ShareDecomposer::new(self.shares.categories.clone(), self.shares.consumers.clone()),
        )
    }
}
