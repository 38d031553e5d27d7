//! Experiment - the cage, its cups and the daily loop
//!
//! One call to [`Experiment::advance_one_day`] runs every phase of a day in a
//! fixed order:
//!
//! 1. aging (with the lethal-allele check on eggs)
//! 2. background mortality
//! 3. cup depletion, retirement with starvation, then new cups
//! 4. archival of the dead
//! 5. scheduled transgenic release
//! 6. mating
//! 7. oviposition
//! 8. logging, then the day counter advances
//!
//! Later phases read what earlier ones wrote, so the order is part of the
//! model.

use ahash::AHashMap;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::core::config::ExperimentConfig;
use crate::core::error::Result;
use crate::core::types::{Day, IdAllocator, OrganismId};
use crate::entity::{Organism, Stage};
use crate::genetics::Genotype;
use crate::simulation::food_cup::FoodCup;
use crate::simulation::output::{DailyLog, DailyRecord, SimulationSummary};
use crate::simulation::schedule::{FoodSchedule, ReleaseSchedule};
use crate::simulation::systems;

/// Per-day counters gathered by the phases and written to the log
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct DayTally {
    pub lethal_egg_deaths: usize,
    pub mortality_deaths: usize,
    pub starved: usize,
    pub adult_deaths: usize,
    pub matings: usize,
    pub eggs_laid: usize,
    pub released: usize,
}

#[derive(Debug, Clone)]
pub struct Experiment {
    pub(crate) config: ExperimentConfig,
    /// Current simulation day
    pub(crate) day: Day,
    /// Living organisms, in creation order
    pub(crate) population: Vec<Organism>,
    /// Position of each organism in `population`
    pub(crate) index: AHashMap<OrganismId, usize>,
    /// Organisms that died as adults
    pub(crate) morgue: Vec<Organism>,
    /// Eggs, larvae and pupae that died
    pub(crate) juvenile_deaths: usize,
    pub(crate) active_pools: Vec<FoodCup>,
    pub(crate) retired_pools: Vec<FoodCup>,
    pub(crate) food_schedule: FoodSchedule,
    pub(crate) release_schedule: ReleaseSchedule,
    pub(crate) log: DailyLog,
    pub(crate) ids: IdAllocator,
    pub(crate) released: u64,
    /// Random number generator (deterministic)
    pub(crate) rng: ChaCha8Rng,
}

impl Experiment {
    /// Build an experiment seeded from `config.seed`
    pub fn new(config: ExperimentConfig) -> Result<Self> {
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        Self::with_rng(config, rng)
    }

    /// Build an experiment drawing from an injected generator
    ///
    /// The config is validated here and never again; a malformed schedule
    /// fails before any organism is created.
    pub fn with_rng(config: ExperimentConfig, rng: ChaCha8Rng) -> Result<Self> {
        config.validate()?;

        let food_schedule = FoodSchedule::from_config(&config);
        let release_schedule = ReleaseSchedule::from_config(&config);

        let mut experiment = Self {
            day: 0,
            population: Vec::with_capacity(config.pop_size),
            index: AHashMap::with_capacity(config.pop_size),
            morgue: Vec::new(),
            juvenile_deaths: 0,
            active_pools: Vec::new(),
            retired_pools: Vec::new(),
            food_schedule,
            release_schedule,
            log: DailyLog::new(),
            ids: IdAllocator::new(),
            released: 0,
            rng,
            config,
        };
        experiment.spawn_founders();

        tracing::info!(
            population = experiment.config.pop_size,
            seed = experiment.config.seed,
            food_introductions = experiment.food_schedule.len(),
            release_days = experiment.release_schedule.len(),
            "Experiment created"
        );

        Ok(experiment)
    }

    fn spawn_founders(&mut self) {
        for _ in 0..self.config.pop_size {
            let genotype = Genotype::founder(&mut self.rng, self.config.founder_lethal_frequency);
            let id = self.ids.next_id();
            let founder = Organism::adult(id, genotype, self.day, self.config.mating_threshold);
            self.insert(founder);
        }
    }

    /// Add a living organism and index it
    pub(crate) fn insert(&mut self, organism: Organism) {
        self.index.insert(organism.id(), self.population.len());
        self.population.push(organism);
    }

    pub(crate) fn rebuild_index(&mut self) {
        self.index.clear();
        for (idx, organism) in self.population.iter().enumerate() {
            self.index.insert(organism.id(), idx);
        }
    }

    /// Advance the simulation by one day
    pub fn advance_one_day(&mut self) {
        let mut tally = DayTally::default();

        tally.lethal_egg_deaths = systems::age_population(self);
        tally.mortality_deaths = systems::apply_daily_mortality(self);
        tally.starved = systems::turn_over_food(self);
        tally.adult_deaths = systems::archive_dead(self);
        tally.released = systems::release_scheduled(self);
        tally.matings = systems::mate_adults(self);
        tally.eggs_laid = systems::lay_eggs(self);

        let record = self.census(tally);
        tracing::debug!(
            day = record.day,
            adults = record.adult_count,
            males = record.male_count,
            females = record.female_count,
            adult_deaths = record.adult_deaths_today,
            immature = record.immature_count,
            eggs = record.eggs_laid,
            starved = record.starved,
            lethal_eggs = record.lethal_egg_deaths,
            released = record.released,
            "Day complete"
        );
        self.log.push(record);
        self.day += 1;
    }

    /// Run `days` consecutive days
    pub fn run(&mut self, days: u64) {
        for _ in 0..days {
            self.advance_one_day();
        }
    }

    fn census(&self, tally: DayTally) -> DailyRecord {
        let mut record = DailyRecord {
            day: self.day,
            adult_deaths_today: tally.adult_deaths,
            active_pools: self.active_pools.len(),
            eggs_laid: tally.eggs_laid,
            matings: tally.matings,
            starved: tally.starved,
            lethal_egg_deaths: tally.lethal_egg_deaths,
            mortality_deaths: tally.mortality_deaths,
            released: tally.released,
            ..Default::default()
        };

        for organism in &self.population {
            if organism.stage() != Stage::Adult {
                record.immature_count += 1;
                continue;
            }
            record.adult_count += 1;
            if organism.genotype().is_male() {
                record.male_count += 1;
            } else {
                record.female_count += 1;
            }
            if organism.genotype().lethal.is_present() {
                record.lethal_adult_count += 1;
            }
        }

        record
    }

    /// Release lethal-carrying adult males now, outside the schedule
    ///
    /// Returns the number released.
    pub fn release_transgenic_males(&mut self, count: u32) -> usize {
        for _ in 0..count {
            let genotype = Genotype::transgenic_male(&mut self.rng);
            let id = self.ids.next_id();
            let male = Organism::adult(id, genotype, self.day, self.config.mating_threshold);
            self.insert(male);
        }
        self.released += count as u64;

        tracing::debug!(day = self.day, count, "Released transgenic males");
        count as usize
    }

    /// Completed days so far, oldest first
    ///
    /// The iterator is finite and can be cloned to restart it.
    pub fn daily_log(&self) -> std::slice::Iter<'_, DailyRecord> {
        self.log.iter()
    }

    pub fn log(&self) -> &DailyLog {
        &self.log
    }

    pub fn config(&self) -> &ExperimentConfig {
        &self.config
    }

    pub fn day(&self) -> Day {
        self.day
    }

    pub fn population(&self) -> &[Organism] {
        &self.population
    }

    pub fn organism(&self, id: OrganismId) -> Option<&Organism> {
        self.index.get(&id).map(|&idx| &self.population[idx])
    }

    pub fn adults(&self) -> impl Iterator<Item = &Organism> {
        self.population.iter().filter(|o| o.is_adult())
    }

    pub fn morgue(&self) -> &[Organism] {
        &self.morgue
    }

    pub fn juvenile_deaths(&self) -> usize {
        self.juvenile_deaths
    }

    pub fn active_pools(&self) -> &[FoodCup] {
        &self.active_pools
    }

    pub fn retired_pools(&self) -> &[FoodCup] {
        &self.retired_pools
    }

    /// Ids handed out so far, founders included
    pub fn organisms_created(&self) -> u64 {
        self.ids.allocated()
    }

    /// Weekly adult mortality census, with survivors folded into the last week
    pub fn weekly_mortality(&self) -> Vec<usize> {
        self.log.weekly_mortality(self.adults().count())
    }

    pub fn summary(&self) -> SimulationSummary {
        SimulationSummary {
            days_simulated: self.day,
            living: self.population.len(),
            adults: self.adults().count(),
            morgue: self.morgue.len(),
            juvenile_deaths: self.juvenile_deaths,
            active_pools: self.active_pools.len(),
            retired_pools: self.retired_pools.len(),
            organisms_created: self.ids.allocated(),
            transgenic_released: self.released,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::{ConfigError, SimError};

    fn quiet_config(pop_size: usize) -> ExperimentConfig {
        ExperimentConfig {
            pop_size,
            p_daily: 0.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_founders_are_indexed_adults() {
        let experiment = Experiment::new(quiet_config(25)).unwrap();
        assert_eq!(experiment.population().len(), 25);
        assert!(experiment.population().iter().all(|o| o.is_adult()));
        for organism in experiment.population() {
            assert_eq!(experiment.organism(organism.id()).unwrap().id(), organism.id());
        }
        assert_eq!(experiment.organisms_created(), 25);
    }

    #[test]
    fn test_malformed_schedule_fails_at_construction() {
        let config = ExperimentConfig {
            food_shelf_life: Some(vec![14]),
            ..quiet_config(10)
        };
        let err = Experiment::new(config).unwrap_err();
        assert!(matches!(
            err,
            SimError::Config(ConfigError::UnpairedSchedule { .. })
        ));
    }

    #[test]
    fn test_day_counter_and_log_advance_together() {
        let mut experiment = Experiment::new(quiet_config(10)).unwrap();
        experiment.run(5);
        assert_eq!(experiment.day(), 5);
        let days: Vec<Day> = experiment.daily_log().map(|r| r.day).collect();
        assert_eq!(days, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_on_demand_release() {
        let mut experiment = Experiment::new(quiet_config(10)).unwrap();
        assert_eq!(experiment.release_transgenic_males(15), 15);
        assert_eq!(experiment.population().len(), 25);

        let released: Vec<&Organism> = experiment
            .population()
            .iter()
            .filter(|o| o.id() > OrganismId(10))
            .collect();
        assert_eq!(released.len(), 15);
        for male in released {
            assert!(male.is_adult());
            assert!(male.genotype().is_male());
            assert!(male.genotype().lethal.is_present());
            assert!(male.lineage().is_founder());
        }
        assert_eq!(experiment.summary().transgenic_released, 15);
    }

    #[test]
    fn test_injected_rng_matches_seeded_constructor() {
        let config = quiet_config(30).with_weekly_food(2, 14);
        let mut seeded = Experiment::new(config.clone()).unwrap();
        let mut injected = Experiment::with_rng(config, ChaCha8Rng::seed_from_u64(42)).unwrap();
        seeded.run(20);
        injected.run(20);
        assert_eq!(seeded.log().records(), injected.log().records());
    }
}
