//! Scheduled release phase

use crate::simulation::experiment::Experiment;

/// Release today's scheduled transgenic males, if any
pub fn release_scheduled(experiment: &mut Experiment) -> usize {
    match experiment.release_schedule.count_on(experiment.day) {
        0 => 0,
        count => experiment.release_transgenic_males(count),
    }
}
