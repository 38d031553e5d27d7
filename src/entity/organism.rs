//! Organism - one simulated fly, from egg to death
//!
//! Females carry a spermatheca holding the genotype of their latest mate and
//! a ready-to-lay flag. Males carry neither.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::error::{Result, SimError};
use crate::core::types::{Day, OrganismId};
use crate::entity::stage::{Stage, ADULT_AGE};
use crate::genetics::Genotype;

/// Probability that a lethal-carrying egg dies at its viability check
pub const LETHAL_PENETRANCE: f64 = 0.97;

/// Parent back-references. `OrganismId::NONE` marks founders and releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Lineage {
    pub mother: OrganismId,
    pub father: OrganismId,
}

impl Lineage {
    pub fn founder() -> Self {
        Self::default()
    }

    pub fn is_founder(&self) -> bool {
        self.mother.is_none() && self.father.is_none()
    }
}

/// Snapshot of a male offered to a female for mating
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Mate {
    pub id: OrganismId,
    pub genotype: Genotype,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeathCause {
    /// Daily background mortality
    Mortality,
    /// Lethal allele expressed in the egg
    Lethal,
    /// Food cup retired while still feeding
    Starvation,
}

/// Female-only reproductive state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FemaleState {
    /// Most recent mate; a new mating replaces it
    pub spermatheca: Option<Mate>,
    pub ready_to_lay: bool,
}

/// Genotype and parents of an egg about to be laid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Embryo {
    pub genotype: Genotype,
    pub lineage: Lineage,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Organism {
    // Fields are private; age and liveness only move forward through methods.
    id: OrganismId,
    genotype: Genotype,
    lineage: Lineage,
    birth_day: i64,
    age: u32,
    alive: bool,
    death: Option<DeathCause>,
    mating_threshold: f64,
    female: Option<FemaleState>,
}

impl Organism {
    /// Create an organism of the given age on day `today`
    ///
    /// Fails if `age` is negative, since no stage exists before the egg.
    pub fn new(
        id: OrganismId,
        genotype: Genotype,
        lineage: Lineage,
        age: i64,
        today: Day,
        mating_threshold: f64,
    ) -> Result<Self> {
        let age = u32::try_from(age).map_err(|_| SimError::InvalidAge(age))?;
        Ok(Self::at_age(id, genotype, lineage, age, today, mating_threshold))
    }

    /// Freshly laid egg
    pub fn egg(id: OrganismId, embryo: Embryo, today: Day, mating_threshold: f64) -> Self {
        Self::at_age(id, embryo.genotype, embryo.lineage, 0, today, mating_threshold)
    }

    /// Parentless adult, as used for founders and releases
    pub fn adult(id: OrganismId, genotype: Genotype, today: Day, mating_threshold: f64) -> Self {
        Self::at_age(id, genotype, Lineage::founder(), ADULT_AGE, today, mating_threshold)
    }

    fn at_age(
        id: OrganismId,
        genotype: Genotype,
        lineage: Lineage,
        age: u32,
        today: Day,
        mating_threshold: f64,
    ) -> Self {
        Self {
            id,
            genotype,
            lineage,
            birth_day: today as i64 - age as i64,
            age,
            alive: true,
            death: None,
            mating_threshold,
            female: genotype.is_female().then(FemaleState::default),
        }
    }

    pub fn id(&self) -> OrganismId {
        self.id
    }

    pub fn genotype(&self) -> &Genotype {
        &self.genotype
    }

    pub fn lineage(&self) -> Lineage {
        self.lineage
    }

    /// Day of laying; negative for organisms placed before day 0
    pub fn birth_day(&self) -> i64 {
        self.birth_day
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn stage(&self) -> Stage {
        Stage::from_age(self.age)
    }

    pub fn is_adult(&self) -> bool {
        self.stage().is_adult()
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn death_cause(&self) -> Option<DeathCause> {
        self.death
    }

    pub fn mating_threshold(&self) -> f64 {
        self.mating_threshold
    }

    pub fn female_state(&self) -> Option<&FemaleState> {
        self.female.as_ref()
    }

    pub fn is_ready_to_lay(&self) -> bool {
        self.female.as_ref().is_some_and(|f| f.ready_to_lay)
    }

    pub fn as_mate(&self) -> Mate {
        Mate {
            id: self.id,
            genotype: self.genotype,
        }
    }

    /// Mark dead; the first recorded cause wins
    pub fn kill(&mut self, cause: DeathCause) {
        if self.alive {
            self.alive = false;
            self.death = Some(cause);
        }
    }

    /// Age by one day
    ///
    /// The lethal-allele viability check runs against the stage held before
    /// the increment. Returns whether the organism is still alive.
    pub fn advance_one_day<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        if !self.alive {
            return false;
        }

        if self.stage() == Stage::Egg
            && self.genotype.lethal.is_present()
            && rng.gen_bool(LETHAL_PENETRANCE)
        {
            self.kill(DeathCause::Lethal);
        }

        self.age += 1;
        self.alive
    }

    /// Female-initiated mating attempt
    ///
    /// Only defined for a female caller and a male candidate; anything else
    /// is a no-op. Succeeds when the summed vigor exceeds the caller's
    /// threshold, in which case the candidate replaces any stored mate.
    pub fn cross(&mut self, candidate: &Mate) -> bool {
        if !candidate.genotype.is_male() {
            return false;
        }
        let threshold = self.mating_threshold;
        let vigor = self.genotype.vigor;
        let Some(female) = self.female.as_mut() else {
            return false;
        };

        if vigor + candidate.genotype.vigor > threshold {
            female.spermatheca = Some(*candidate);
            female.ready_to_lay = true;
            true
        } else {
            false
        }
    }

    /// One oviposition trial
    ///
    /// Requires a stored mate and the ready flag. Trials leave the flag alone;
    /// [`Organism::finish_clutch`] clears it once the day's clutch is done.
    pub fn lay_egg<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Embryo> {
        let female = self.female.as_ref()?;
        if !female.ready_to_lay {
            return None;
        }
        let mate = female.spermatheca.as_ref()?;

        Some(Embryo {
            genotype: Genotype::inherit(&self.genotype, &mate.genotype, rng),
            lineage: Lineage {
                mother: self.id,
                father: mate.id,
            },
        })
    }

    /// Spend the current mating after a clutch
    ///
    /// The stored mate is kept until the next successful `cross` replaces
    /// it, but the female must mate again before she lays.
    pub fn finish_clutch(&mut self) {
        if let Some(female) = self.female.as_mut() {
            female.ready_to_lay = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genetics::{LethalAllele, Sex};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn female(vigor: f64, threshold: f64) -> Organism {
        Organism::adult(
            OrganismId(1),
            Genotype::new(Sex::Female, LethalAllele::Absent, vigor),
            0,
            threshold,
        )
    }

    fn male(id: u64, vigor: f64, lethal: LethalAllele) -> Organism {
        Organism::adult(OrganismId(id), Genotype::new(Sex::Male, lethal, vigor), 0, 1.0)
    }

    #[test]
    fn test_negative_age_rejected() {
        let g = Genotype::new(Sex::Male, LethalAllele::Absent, 0.5);
        let err = Organism::new(OrganismId(1), g, Lineage::founder(), -2, 0, 1.0).unwrap_err();
        assert!(matches!(err, SimError::InvalidAge(-2)));
    }

    #[test]
    fn test_stage_derived_from_construction_age() {
        let g = Genotype::new(Sex::Male, LethalAllele::Absent, 0.5);
        let larva = Organism::new(OrganismId(1), g, Lineage::founder(), 2, 5, 1.0).unwrap();
        assert_eq!(larva.stage(), Stage::Larva);
        assert_eq!(larva.birth_day(), 3);

        let founder = Organism::adult(OrganismId(2), g, 0, 1.0);
        assert!(founder.is_adult());
        assert_eq!(founder.birth_day(), -12);
    }

    #[test]
    fn test_only_females_have_reproductive_state() {
        assert!(female(0.5, 1.0).female_state().is_some());
        assert!(male(2, 0.5, LethalAllele::Absent).female_state().is_none());
    }

    #[test]
    fn test_advance_increments_age_once() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut fly = male(2, 0.5, LethalAllele::Absent);
        for expected in 13..20 {
            assert!(fly.advance_one_day(&mut rng));
            assert_eq!(fly.age(), expected);
        }
    }

    #[test]
    fn test_lethal_egg_usually_dies() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let embryo = Embryo {
            genotype: Genotype::new(Sex::Male, LethalAllele::Present, 0.5),
            lineage: Lineage::founder(),
        };
        let deaths = (0..1000)
            .filter(|i| {
                let mut egg = Organism::egg(OrganismId(*i + 1), embryo, 0, 1.0);
                !egg.advance_one_day(&mut rng)
            })
            .count();
        assert!(deaths > 940, "expected ~970 deaths, got {}", deaths);
    }

    #[test]
    fn test_lethal_allele_harmless_after_egg_stage() {
        let mut rng = ChaCha8Rng::seed_from_u64(12);
        let mut fly = male(2, 0.5, LethalAllele::Present);
        for _ in 0..50 {
            assert!(fly.advance_one_day(&mut rng));
        }
        assert_eq!(fly.death_cause(), None);
    }

    #[test]
    fn test_cross_threshold_zero_always_succeeds() {
        let mut f = female(0.0, 0.0);
        assert!(f.cross(&male(2, 0.01, LethalAllele::Absent).as_mate()));
        assert!(f.is_ready_to_lay());
    }

    #[test]
    fn test_cross_threshold_two_never_succeeds() {
        let mut f = female(1.0, 2.0);
        assert!(!f.cross(&male(2, 1.0, LethalAllele::Absent).as_mate()));
        assert!(!f.is_ready_to_lay());
    }

    #[test]
    fn test_cross_replaces_previous_mate() {
        let mut f = female(0.5, 0.0);
        f.cross(&male(2, 0.5, LethalAllele::Absent).as_mate());
        f.cross(&male(3, 0.5, LethalAllele::Present).as_mate());
        let stored = f.female_state().unwrap().spermatheca.unwrap();
        assert_eq!(stored.id, OrganismId(3));
    }

    #[test]
    fn test_cross_requires_female_and_male() {
        let mut m = male(2, 1.0, LethalAllele::Absent);
        assert!(!m.cross(&male(3, 1.0, LethalAllele::Absent).as_mate()));

        let mut f = female(1.0, 0.0);
        assert!(!f.cross(&female(1.0, 0.0).as_mate()));
        assert!(!f.is_ready_to_lay());
    }

    #[test]
    fn test_lay_egg_requires_mating() {
        let mut rng = ChaCha8Rng::seed_from_u64(13);
        let f = female(0.5, 1.0);
        assert!(f.lay_egg(&mut rng).is_none());
    }

    #[test]
    fn test_lay_egg_records_both_parents() {
        let mut rng = ChaCha8Rng::seed_from_u64(14);
        let mut f = female(0.5, 0.0);
        f.cross(&male(9, 0.5, LethalAllele::Present).as_mate());

        let embryo = f.lay_egg(&mut rng).unwrap();
        assert_eq!(embryo.lineage.mother, OrganismId(1));
        assert_eq!(embryo.lineage.father, OrganismId(9));
        // Trials within a clutch share the mating
        assert!(f.is_ready_to_lay());
        assert!(f.lay_egg(&mut rng).is_some());
    }

    #[test]
    fn test_finished_clutch_requires_new_mating() {
        let mut rng = ChaCha8Rng::seed_from_u64(15);
        let mut f = female(0.5, 0.0);
        f.cross(&male(2, 0.5, LethalAllele::Absent).as_mate());
        f.finish_clutch();
        assert!(!f.is_ready_to_lay());
        assert!(f.lay_egg(&mut rng).is_none());

        assert!(f.cross(&male(3, 0.5, LethalAllele::Present).as_mate()));
        let embryo = f.lay_egg(&mut rng).unwrap();
        assert_eq!(embryo.lineage.father, OrganismId(3));
    }

    #[test]
    fn test_finish_clutch_ignores_males() {
        let mut m = male(2, 0.5, LethalAllele::Absent);
        m.finish_clutch();
        assert!(m.female_state().is_none());
    }

    #[test]
    fn test_founder_lineage_has_no_parents() {
        let lineage = Lineage::founder();
        assert!(lineage.is_founder());
        assert_eq!(lineage, Lineage::default());
        assert!(OrganismId::default().is_none());
    }

    #[test]
    fn test_kill_keeps_first_cause() {
        let mut fly = male(2, 0.5, LethalAllele::Absent);
        fly.kill(DeathCause::Starvation);
        fly.kill(DeathCause::Mortality);
        assert!(!fly.is_alive());
        assert_eq!(fly.death_cause(), Some(DeathCause::Starvation));
    }
}
