pub mod experiment;
pub mod food_cup;
pub mod output;
pub mod schedule;
pub(crate) mod systems;

pub use experiment::Experiment;
pub use food_cup::{FoodCup, Retirement};
pub use output::{DailyLog, DailyRecord, SimulationSummary, CENSUS_WINDOW};
pub use schedule::{FoodIntroduction, FoodSchedule, ReleaseSchedule};
pub use systems::OVIPOSITION_SUCCESS;
