//! Life stages derived from age
//!
//! Stage is never stored: it is recomputed from age on every query so the
//! two can never disagree.

use serde::{Deserialize, Serialize};

/// First age at which an organism is a larva
pub const LARVA_AGE: u32 = 1;
/// First age at which an organism is a pupa
pub const PUPA_AGE: u32 = 10;
/// First age at which an organism is an adult
pub const ADULT_AGE: u32 = 12;
/// Occupants younger than this die when their food cup is retired
pub const STARVATION_AGE: u32 = PUPA_AGE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Stage {
    Egg,
    Larva,
    /// Immature, no longer feeding
    Pupa,
    Adult,
}

impl Stage {
    pub fn from_age(age: u32) -> Self {
        match age {
            a if a < LARVA_AGE => Stage::Egg,
            a if a < PUPA_AGE => Stage::Larva,
            a if a < ADULT_AGE => Stage::Pupa,
            _ => Stage::Adult,
        }
    }

    pub fn is_adult(&self) -> bool {
        *self == Stage::Adult
    }
}
