//! Clepsydra - agent-based simulation of a caged fly population
//!
//! Flies develop from egg to adult while feeding from food cups that are
//! introduced on a schedule, run dry and get replaced. Releasing males that
//! carry an embryonic lethal allele suppresses the population; the daily
//! log feeds the mortality census used to fit model parameters to cage data.

pub mod core;
pub mod entity;
pub mod genetics;
pub mod simulation;

pub use crate::core::config::ExperimentConfig;
pub use crate::core::error::{ConfigError, Result, SimError};
pub use crate::core::types::{Day, OrganismId};
pub use entity::{Organism, Stage};
pub use genetics::Genotype;
pub use simulation::{DailyRecord, Experiment};
