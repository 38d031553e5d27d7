//! Aging phase

use crate::simulation::experiment::Experiment;

/// Advance every living organism by one day
///
/// Returns the number of eggs killed by the lethal allele.
pub fn age_population(experiment: &mut Experiment) -> usize {
    let mut lethal_deaths = 0;
    for organism in experiment.population.iter_mut().filter(|o| o.is_alive()) {
        if !organism.advance_one_day(&mut experiment.rng) {
            lethal_deaths += 1;
        }
    }
    lethal_deaths
}
