//! Oviposition phase
//!
//! Each ready female gets `clutch_size` independent lay trials, all drawing
//! on her current mating, after which she must mate again. Every egg goes
//! into a uniformly chosen active cup; with no active cup nothing is laid
//! and every female keeps her mating.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::entity::Organism;
use crate::simulation::experiment::Experiment;

/// Chance that a single lay trial produces an egg
pub const OVIPOSITION_SUCCESS: f64 = 0.5;

/// Returns the number of eggs laid
pub fn lay_eggs(experiment: &mut Experiment) -> usize {
    let mut ready: Vec<usize> = experiment
        .population
        .iter()
        .enumerate()
        .filter(|(_, o)| o.is_alive() && o.is_ready_to_lay())
        .map(|(idx, _)| idx)
        .collect();
    ready.shuffle(&mut experiment.rng);

    if experiment.active_pools.is_empty() {
        return 0;
    }

    let day = experiment.day;
    let threshold = experiment.config.mating_threshold;
    let mut eggs = 0;

    for mother in ready {
        for _ in 0..experiment.config.clutch_size {
            if !experiment.rng.gen_bool(OVIPOSITION_SUCCESS) {
                continue;
            }
            let Some(embryo) = experiment.population[mother].lay_egg(&mut experiment.rng) else {
                continue;
            };

            let id = experiment.ids.next_id();
            experiment.insert(Organism::egg(id, embryo, day, threshold));

            experiment.active_pools.shuffle(&mut experiment.rng);
            experiment.active_pools[0].admit(id);
            eggs += 1;
        }
        experiment.population[mother].finish_clutch();
    }

    eggs
}
