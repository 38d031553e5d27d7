//! Daily phases, run in order by `Experiment::advance_one_day`

mod aging;
mod archival;
mod mating;
mod mortality;
mod oviposition;
mod release;
mod turnover;

pub use aging::age_population;
pub use archival::archive_dead;
pub use mating::mate_adults;
pub use mortality::apply_daily_mortality;
pub use oviposition::{lay_eggs, OVIPOSITION_SUCCESS};
pub use release::release_scheduled;
pub use turnover::turn_over_food;
