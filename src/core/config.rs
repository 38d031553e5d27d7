//! Experiment configuration with documented defaults
//!
//! Defaults reproduce a 300-fly cage fed from 30 g cups. Schedules come in
//! pairs of parallel lists so they can be filled straight from a fitting
//! driver's parameter vector or a TOML file.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::error::{ConfigError, Result};
use crate::core::types::Day;

/// Configuration for one experiment run
///
/// `pop_size` has no serde default: a config file must name its founding
/// population. Every other key falls back to the value in `Default`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentConfig {
    /// Number of founding adults. Must be greater than zero.
    pub pop_size: usize,

    /// Probability that any living organism dies on a given day
    ///
    /// Age-independent; applied once per organism per day.
    #[serde(default = "default_p_daily")]
    pub p_daily: f64,

    /// Lay trials a ready female attempts per day. Each trial succeeds with
    /// probability 0.5, so the expected clutch is half this value.
    #[serde(default = "default_clutch_size")]
    pub clutch_size: u32,

    /// Food removed from a cup per occupant per day
    ///
    /// Every egg ever placed in a cup counts as an occupant, so demand grows
    /// with the cup's cumulative load rather than its living larvae.
    #[serde(default = "default_consumption_rate")]
    pub consumption_rate: f64,

    /// Food in a freshly introduced cup
    #[serde(default = "default_initial_food")]
    pub initial_food: f64,

    /// Mating cutoff assigned to every organism
    ///
    /// A cross succeeds when the summed vigor of both partners exceeds it.
    /// Vigor is drawn from [0, 1), so 1.0 means roughly half of random
    /// pairings succeed.
    #[serde(default = "default_mating_threshold")]
    pub mating_threshold: f64,

    /// Reserved for allele flipping at inheritance. Currently has no effect.
    #[serde(default = "default_mutation_rate")]
    pub mutation_rate: f64,

    /// Probability that a founder carries the lethal allele
    #[serde(default = "default_founder_lethal_frequency")]
    pub founder_lethal_frequency: f64,

    /// Days on which transgenic males are released. Pairs with `release_sizes`.
    #[serde(default)]
    pub release_days: Option<Vec<Day>>,

    /// Males released on the matching entry of `release_days`
    #[serde(default)]
    pub release_sizes: Option<Vec<u32>>,

    /// Days on which a new food cup is introduced. Pairs with `food_shelf_life`.
    #[serde(default)]
    pub food_init_dates: Option<Vec<Day>>,

    /// Service life in days of the cup introduced on the matching date
    #[serde(default)]
    pub food_shelf_life: Option<Vec<Day>>,

    /// Seed for the experiment's random source
    #[serde(default = "default_seed")]
    pub seed: u64,
}

fn default_p_daily() -> f64 {
    0.02
}

fn default_clutch_size() -> u32 {
    5
}

fn default_consumption_rate() -> f64 {
    0.001
}

fn default_initial_food() -> f64 {
    30.0
}

fn default_mating_threshold() -> f64 {
    1.0
}

fn default_mutation_rate() -> f64 {
    0.001
}

fn default_founder_lethal_frequency() -> f64 {
    0.0
}

fn default_seed() -> u64 {
    42
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            pop_size: 300,
            p_daily: default_p_daily(),
            clutch_size: default_clutch_size(),
            consumption_rate: default_consumption_rate(),
            initial_food: default_initial_food(),
            mating_threshold: default_mating_threshold(),
            mutation_rate: default_mutation_rate(),
            founder_lethal_frequency: default_founder_lethal_frequency(),
            release_days: None,
            release_sizes: None,
            food_init_dates: None,
            food_shelf_life: None,
            seed: default_seed(),
        }
    }
}

impl ExperimentConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML text
    ///
    /// Missing keys take their defaults, except `pop_size`, which is required.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load a config from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn with_release_schedule(mut self, days: Vec<Day>, sizes: Vec<u32>) -> Self {
        self.release_days = Some(days);
        self.release_sizes = Some(sizes);
        self
    }

    pub fn with_food_schedule(mut self, dates: Vec<Day>, shelf_life: Vec<Day>) -> Self {
        self.food_init_dates = Some(dates);
        self.food_shelf_life = Some(shelf_life);
        self
    }

    /// One cup per week starting on day 0, each lasting `shelf_life` days
    pub fn with_weekly_food(self, weeks: u64, shelf_life: Day) -> Self {
        let dates: Vec<Day> = (0..weeks).map(|w| w * 7).collect();
        let lives = vec![shelf_life; dates.len()];
        self.with_food_schedule(dates, lives)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.pop_size == 0 {
            return Err(ConfigError::InvalidPopulation);
        }

        if !(0.0..=1.0).contains(&self.p_daily) {
            return Err(ConfigError::InvalidDeathProbability(self.p_daily));
        }

        if self.consumption_rate.is_nan() || self.consumption_rate <= 0.0 {
            return Err(ConfigError::InvalidConsumptionRate(self.consumption_rate));
        }

        if self.initial_food.is_nan() || self.initial_food < 0.0 {
            return Err(ConfigError::InvalidInitialFood(self.initial_food));
        }

        if !(0.0..=1.0).contains(&self.founder_lethal_frequency) {
            return Err(ConfigError::InvalidLethalFrequency(
                self.founder_lethal_frequency,
            ));
        }

        check_pair(
            "release",
            ("release_days", &self.release_days),
            ("release_sizes", &self.release_sizes),
        )?;
        check_pair(
            "food",
            ("food_init_dates", &self.food_init_dates),
            ("food_shelf_life", &self.food_shelf_life),
        )?;

        Ok(())
    }
}

fn check_pair<A, B>(
    schedule: &'static str,
    left: (&'static str, &Option<Vec<A>>),
    right: (&'static str, &Option<Vec<B>>),
) -> std::result::Result<(), ConfigError> {
    match (left.1, right.1) {
        (None, None) => Ok(()),
        (Some(_), None) => Err(ConfigError::UnpairedSchedule {
            schedule,
            present: left.0,
        }),
        (None, Some(_)) => Err(ConfigError::UnpairedSchedule {
            schedule,
            present: right.0,
        }),
        (Some(l), Some(r)) if l.len() != r.len() => Err(ConfigError::ScheduleLengthMismatch {
            schedule,
            left: l.len(),
            right: r.len(),
        }),
        _ => Ok(()),
    }
}
