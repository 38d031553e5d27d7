//! Archival phase

use crate::simulation::experiment::Experiment;

/// Move the dead out of the living population
///
/// Dead adults go to the morgue; younger organisms only bump the juvenile
/// death count. Returns today's adult deaths.
pub fn archive_dead(experiment: &mut Experiment) -> usize {
    let (living, dead): (Vec<_>, Vec<_>) = std::mem::take(&mut experiment.population)
        .into_iter()
        .partition(|o| o.is_alive());

    let mut adult_deaths = 0;
    for organism in dead {
        if organism.is_adult() {
            adult_deaths += 1;
            experiment.morgue.push(organism);
        } else {
            experiment.juvenile_deaths += 1;
        }
    }

    experiment.population = living;
    experiment.rebuild_index();

    adult_deaths
}
