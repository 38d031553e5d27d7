//! Genotype - the three heritable loci carried by every organism
//!
//! Each locus is inherited independently: the offspring takes one parent's
//! value uniformly at random, with no linkage and no dominance. Vigor is
//! continuous but follows the same pick-one-parent rule rather than blending.

use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// Uniform draw, independent of any parent
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.gen_bool(0.5) {
            Sex::Female
        } else {
            Sex::Male
        }
    }
}

/// Transgenic lethal locus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LethalAllele {
    Absent,
    Present,
}

impl LethalAllele {
    pub fn is_present(&self) -> bool {
        matches!(self, LethalAllele::Present)
    }
}

/// Immutable heritable record of one organism
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Genotype {
    pub sex: Sex,
    pub lethal: LethalAllele,
    /// Mating vigor/receptivity (0.0-1.0)
    pub vigor: f64,
}

impl Genotype {
    pub fn new(sex: Sex, lethal: LethalAllele, vigor: f64) -> Self {
        Self { sex, lethal, vigor }
    }

    /// Founder draw: random sex and vigor, lethal allele carried with
    /// probability `lethal_frequency`
    pub fn founder<R: Rng + ?Sized>(rng: &mut R, lethal_frequency: f64) -> Self {
        let lethal = if rng.gen_bool(lethal_frequency) {
            LethalAllele::Present
        } else {
            LethalAllele::Absent
        };
        Self {
            sex: Sex::random(rng),
            lethal,
            vigor: rng.gen(),
        }
    }

    /// Wild-type draw: random sex and vigor, no lethal allele
    pub fn wild_type<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::founder(rng, 0.0)
    }

    /// Release template: lethal-carrying male with fresh vigor
    pub fn transgenic_male<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            sex: Sex::Male,
            lethal: LethalAllele::Present,
            vigor: rng.gen(),
        }
    }

    /// Mendelian combination of two parents
    pub fn inherit<R: Rng + ?Sized>(mother: &Genotype, father: &Genotype, rng: &mut R) -> Self {
        let sex = Sex::random(rng);
        let lethal = if rng.gen_bool(0.5) {
            mother.lethal
        } else {
            father.lethal
        };
        let vigor = if rng.gen_bool(0.5) {
            mother.vigor
        } else {
            father.vigor
        };
        Self { sex, lethal, vigor }
    }

    pub fn is_male(&self) -> bool {
        self.sex == Sex::Male
    }

    pub fn is_female(&self) -> bool {
        self.sex == Sex::Female
    }
}
