//! Background mortality phase

use rand::Rng;

use crate::entity::DeathCause;
use crate::simulation::experiment::Experiment;

/// Kill each living organism independently with probability `p_daily`
pub fn apply_daily_mortality(experiment: &mut Experiment) -> usize {
    let p_daily = experiment.config.p_daily;
    let mut deaths = 0;

    for organism in experiment.population.iter_mut().filter(|o| o.is_alive()) {
        if experiment.rng.gen_bool(p_daily) {
            organism.kill(DeathCause::Mortality);
            deaths += 1;
        }
    }

    deaths
}
