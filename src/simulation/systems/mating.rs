//! Mating phase
//!
//! Females that are not yet ready to lay, including those who spent their
//! last mating on a clutch, each try one male drawn from the adult male pool. The pool is reshuffled after every attempt but never
//! consumed, so a male can be drawn by several females on the same day.

use rand::seq::SliceRandom;

use crate::entity::{Mate, Organism};
use crate::simulation::experiment::Experiment;

/// Returns the number of successful crosses
pub fn mate_adults(experiment: &mut Experiment) -> usize {
    let mut males: Vec<Mate> = experiment
        .population
        .iter()
        .filter(|o| o.is_alive() && o.is_adult() && o.genotype().is_male())
        .map(Organism::as_mate)
        .collect();

    if males.is_empty() {
        return 0;
    }
    males.shuffle(&mut experiment.rng);

    let mut matings = 0;
    let females = experiment
        .population
        .iter_mut()
        .filter(|o| o.is_alive() && o.is_adult() && o.genotype().is_female());

    for female in females {
        if female.is_ready_to_lay() {
            continue;
        }

        let candidate = males[0];
        let mated = female.cross(&candidate);
        tracing::trace!(female = %female.id(), male = %candidate.id, mated, "Mating attempt");
        if mated {
            matings += 1;
        }

        males.shuffle(&mut experiment.rng);
    }

    matings
}
