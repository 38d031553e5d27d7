pub mod organism;
pub mod stage;

pub use organism::{DeathCause, Embryo, FemaleState, Lineage, Mate, Organism, LETHAL_PENETRANCE};
pub use stage::{Stage, ADULT_AGE, LARVA_AGE, PUPA_AGE, STARVATION_AGE};
