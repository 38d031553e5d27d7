//! Event schedules for cup introduction and transgenic releases

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::config::ExperimentConfig;
use crate::core::types::Day;

/// A cup to introduce on `start` with the given service life
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodIntroduction {
    pub start: Day,
    pub service_life: Day,
}

/// Ordered cup introduction schedule
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodSchedule {
    entries: Vec<FoodIntroduction>,
}

impl FoodSchedule {
    /// Zip start dates with service lives; unpaired tails are dropped
    pub fn from_pairs(dates: &[Day], lives: &[Day]) -> Self {
        let entries = dates
            .iter()
            .zip(lives)
            .map(|(&start, &service_life)| FoodIntroduction {
                start,
                service_life,
            })
            .collect();
        Self { entries }
    }

    pub fn from_config(config: &ExperimentConfig) -> Self {
        match (&config.food_init_dates, &config.food_shelf_life) {
            (Some(dates), Some(lives)) => Self::from_pairs(dates, lives),
            _ => Self::default(),
        }
    }

    /// Introductions due on `day`, in schedule order
    pub fn starting_on(&self, day: Day) -> impl Iterator<Item = &FoodIntroduction> {
        self.entries.iter().filter(move |e| e.start == day)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Release counts keyed by day
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseSchedule {
    by_day: BTreeMap<Day, u32>,
}

impl ReleaseSchedule {
    /// Build from parallel lists; repeated days add up
    pub fn from_pairs(days: &[Day], sizes: &[u32]) -> Self {
        let mut by_day = BTreeMap::new();
        for (&day, &size) in days.iter().zip(sizes) {
            *by_day.entry(day).or_insert(0u32) += size;
        }
        Self { by_day }
    }

    pub fn from_config(config: &ExperimentConfig) -> Self {
        match (&config.release_days, &config.release_sizes) {
            (Some(days), Some(sizes)) => Self::from_pairs(days, sizes),
            _ => Self::default(),
        }
    }

    pub fn count_on(&self, day: Day) -> u32 {
        self.by_day.get(&day).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.by_day.values().map(|&n| n as u64).sum()
    }

    pub fn len(&self) -> usize {
        self.by_day.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_day.is_empty()
    }
}
