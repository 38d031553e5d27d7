use thiserror::Error;

/// Malformed experiment configuration, reported once at construction
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Founding population must be greater than zero")]
    InvalidPopulation,

    #[error("Daily death probability must be within [0, 1], got {0}")]
    InvalidDeathProbability(f64),

    #[error("Consumption rate must be positive, got {0}")]
    InvalidConsumptionRate(f64),

    #[error("Initial food must be non-negative, got {0}")]
    InvalidInitialFood(f64),

    #[error("Founder lethal frequency must be within [0, 1], got {0}")]
    InvalidLethalFrequency(f64),

    #[error("{schedule} schedule has `{present}` without its pair")]
    UnpairedSchedule {
        schedule: &'static str,
        present: &'static str,
    },

    #[error("{schedule} schedule lists differ in length ({left} vs {right})")]
    ScheduleLengthMismatch {
        schedule: &'static str,
        left: usize,
        right: usize,
    },
}

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Age {0} does not map to a life stage")]
    InvalidAge(i64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SimError>;
