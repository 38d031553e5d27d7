//! Daily log and derived census views
//!
//! The log is append-only and consumed read-only by plotting, CSV export and
//! the parameter-fitting driver.

use serde::{Deserialize, Serialize};

use crate::core::error::Result;
use crate::core::types::Day;

/// Days per census window
pub const CENSUS_WINDOW: usize = 7;

/// One day's population summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DailyRecord {
    pub day: Day,
    pub adult_count: usize,
    pub male_count: usize,
    pub female_count: usize,
    /// Adults archived to the morgue today
    pub adult_deaths_today: usize,
    /// Living eggs, larvae and pupae
    pub immature_count: usize,
    /// Living adults carrying the lethal allele
    pub lethal_adult_count: usize,
    pub active_pools: usize,
    pub eggs_laid: usize,
    pub matings: usize,
    /// Occupants killed by cup retirement today
    pub starved: usize,
    /// Eggs killed by the lethal allele today
    pub lethal_egg_deaths: usize,
    /// Organisms of any stage killed by background mortality today
    pub mortality_deaths: usize,
    /// Transgenic males released by the schedule today
    pub released: usize,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DailyLog {
    records: Vec<DailyRecord>,
}

impl DailyLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: DailyRecord) {
        self.records.push(record);
    }

    /// Records in day order
    pub fn iter(&self) -> std::slice::Iter<'_, DailyRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[DailyRecord] {
        &self.records
    }

    pub fn last(&self) -> Option<&DailyRecord> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn total_adult_deaths(&self) -> usize {
        self.records.iter().map(|r| r.adult_deaths_today).sum()
    }

    /// Weekly adult mortality census
    ///
    /// Sums adult deaths over consecutive 7-day windows (the last window may
    /// be short), then adds the adults still alive at the end to the last
    /// window, since every one of them is eventually counted dead in the cage.
    pub fn weekly_mortality(&self, final_adults: usize) -> Vec<usize> {
        let mut weeks: Vec<usize> = self
            .records
            .chunks(CENSUS_WINDOW)
            .map(|week| week.iter().map(|r| r.adult_deaths_today).sum())
            .collect();

        if let Some(last) = weeks.last_mut() {
            *last += final_adults;
        }
        weeks
    }
}

impl<'a> IntoIterator for &'a DailyLog {
    type Item = &'a DailyRecord;
    type IntoIter = std::slice::Iter<'a, DailyRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Serializable end-of-run snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationSummary {
    pub days_simulated: Day,
    pub living: usize,
    pub adults: usize,
    pub morgue: usize,
    pub juvenile_deaths: usize,
    pub active_pools: usize,
    pub retired_pools: usize,
    pub organisms_created: u64,
    pub transgenic_released: u64,
}

impl SimulationSummary {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn summary(&self) -> String {
        format!(
            "Simulated {} days: {} living ({} adults), {} adult deaths, {} juvenile deaths, {} cups active",
            self.days_simulated,
            self.living,
            self.adults,
            self.morgue,
            self.juvenile_deaths,
            self.active_pools,
        )
    }
}
