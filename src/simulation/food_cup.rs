//! Food cups - shared, depleting larval food with a bounded service life
//!
//! A cup loses `consumption_rate` per occupant per day. Occupants are only
//! ever appended while the cup is active; starvation is decided by the
//! experiment when the cup retires, not here.

use serde::{Deserialize, Serialize};

use crate::core::types::{Day, OrganismId};

/// Why a cup left service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Retirement {
    /// Service life elapsed
    Expired,
    /// Food ran out
    Spent,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodCup {
    creation_day: Day,
    service_life: Day,
    food: f64,
    consumption_rate: f64,
    spent: bool,
    occupants: Vec<OrganismId>,
}

impl FoodCup {
    pub fn new(creation_day: Day, service_life: Day, food: f64, consumption_rate: f64) -> Self {
        Self {
            creation_day,
            service_life,
            food: food.max(0.0),
            consumption_rate,
            spent: false,
            occupants: Vec::new(),
        }
    }

    pub fn creation_day(&self) -> Day {
        self.creation_day
    }

    pub fn service_life(&self) -> Day {
        self.service_life
    }

    pub fn food(&self) -> f64 {
        self.food
    }

    pub fn is_spent(&self) -> bool {
        self.spent
    }

    pub fn occupants(&self) -> &[OrganismId] {
        &self.occupants
    }

    /// Consume one day of food, returns the amount actually removed
    pub fn deplete(&mut self) -> f64 {
        let demand = self.consumption_rate * self.occupants.len() as f64;
        let consumed = demand.min(self.food);
        self.food -= consumed;

        if self.food <= 0.0 {
            self.food = 0.0;
            self.spent = true;
        }

        consumed
    }

    pub fn admit(&mut self, organism: OrganismId) {
        self.occupants.push(organism);
    }

    /// Whether the cup must leave service on `day`, and why
    ///
    /// Expiry takes precedence when both apply.
    pub fn retirement(&self, day: Day) -> Option<Retirement> {
        if day >= self.creation_day.saturating_add(self.service_life) {
            Some(Retirement::Expired)
        } else if self.spent {
            Some(Retirement::Spent)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_cup_keeps_its_food() {
        let mut cup = FoodCup::new(0, 7, 30.0, 0.5);
        for _ in 0..10 {
            assert_eq!(cup.deplete(), 0.0);
        }
        assert_eq!(cup.food(), 30.0);
        assert!(!cup.is_spent());
    }

    #[test]
    fn test_depletion_scales_with_occupants() {
        let mut cup = FoodCup::new(0, 14, 30.0, 0.5);
        for id in 1..=4 {
            cup.admit(OrganismId(id));
        }
        let consumed = cup.deplete();
        assert!((consumed - 2.0).abs() < 1e-9);
        assert!((cup.food() - 28.0).abs() < 1e-9);
    }

    #[test]
    fn test_depletion_floors_at_zero_and_marks_spent() {
        let mut cup = FoodCup::new(0, 14, 1.0, 0.75);
        cup.admit(OrganismId(1));
        cup.admit(OrganismId(2));

        let consumed = cup.deplete();
        assert!((consumed - 1.0).abs() < 1e-9);
        assert_eq!(cup.food(), 0.0);
        assert!(cup.is_spent());

        // Stays spent and never goes negative
        assert_eq!(cup.deplete(), 0.0);
        assert_eq!(cup.food(), 0.0);
        assert!(cup.is_spent());
    }

    #[test]
    fn test_retirement_by_age() {
        let cup = FoodCup::new(3, 7, 30.0, 0.5);
        assert_eq!(cup.retirement(3), None);
        assert_eq!(cup.retirement(9), None);
        assert_eq!(cup.retirement(10), Some(Retirement::Expired));
    }

    #[test]
    fn test_unbounded_service_life_saturates() {
        let mut cup = FoodCup::new(5, Day::MAX, 30.0, 1.0);
        assert_eq!(cup.retirement(1_000_000), None);
        assert_eq!(cup.retirement(Day::MAX), Some(Retirement::Expired));

        cup.admit(OrganismId(1));
        for _ in 0..40 {
            cup.deplete();
        }
        assert_eq!(cup.retirement(1_000_000), Some(Retirement::Spent));
    }

    #[test]
    fn test_retirement_when_spent() {
        let mut cup = FoodCup::new(0, 14, 0.5, 1.0);
        cup.admit(OrganismId(1));
        cup.deplete();
        assert_eq!(cup.retirement(1), Some(Retirement::Spent));
    }

    #[test]
    fn test_occupants_accumulate() {
        let mut cup = FoodCup::new(0, 14, 30.0, 0.5);
        cup.admit(OrganismId(5));
        cup.admit(OrganismId(8));
        assert_eq!(cup.occupants(), &[OrganismId(5), OrganismId(8)]);
    }
}
