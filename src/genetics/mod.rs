//! Heritable traits and single-locus inheritance

pub mod genotype;

pub use genotype::{Genotype, LethalAllele, Sex};
