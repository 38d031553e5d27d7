//! Food turnover phase
//!
//! Every active cup is depleted, then retired if its service life is over or
//! it ran dry. Retiring a cup starves its occupants that are still feeding
//! (younger than `STARVATION_AGE`); pupae and adults walk away unharmed.
//! New cups due today are introduced last, so they are never depleted on
//! their first day.

use crate::entity::{DeathCause, STARVATION_AGE};
use crate::simulation::experiment::Experiment;
use crate::simulation::food_cup::FoodCup;

/// Returns the number of occupants starved today
pub fn turn_over_food(experiment: &mut Experiment) -> usize {
    let day = experiment.day;
    let mut starved = 0;
    let mut still_active = Vec::with_capacity(experiment.active_pools.len());

    for mut cup in std::mem::take(&mut experiment.active_pools) {
        cup.deplete();

        let Some(reason) = cup.retirement(day) else {
            still_active.push(cup);
            continue;
        };

        let evicted = starve_occupants(experiment, &cup);
        tracing::debug!(
            day,
            created = cup.creation_day(),
            ?reason,
            occupants = cup.occupants().len(),
            starved = evicted,
            "Food cup retired"
        );
        starved += evicted;
        experiment.retired_pools.push(cup);
    }

    experiment.active_pools = still_active;

    let (food, rate) = (experiment.config.initial_food, experiment.config.consumption_rate);
    for intro in experiment.food_schedule.starting_on(day) {
        experiment
            .active_pools
            .push(FoodCup::new(day, intro.service_life, food, rate));
    }

    starved
}

fn starve_occupants(experiment: &mut Experiment, cup: &FoodCup) -> usize {
    let mut starved = 0;
    for id in cup.occupants() {
        let Some(&idx) = experiment.index.get(id) else {
            continue;
        };
        let organism = &mut experiment.population[idx];
        if organism.is_alive() && organism.age() < STARVATION_AGE {
            organism.kill(DeathCause::Starvation);
            starved += 1;
        }
    }
    starved
}
