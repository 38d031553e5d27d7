pub mod config;
pub mod error;
pub mod types;

pub use config::ExperimentConfig;
pub use error::{ConfigError, Result, SimError};
pub use types::{Day, IdAllocator, OrganismId};
