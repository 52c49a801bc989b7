//! Colonist components: Person, Identity, Biometrics, Needs, Assignment.

use serde::{Deserialize, Serialize};

use outpost_logic::metabolism::{self, NeedRates, Sex};

/// Marker component identifying an entity as a colonist.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Person;

/// Who this colonist is. Hair color is cosmetic; sex feeds the metabolic
/// and mortality branching only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Identity {
    pub first_name: String,
    pub last_name: String,
    pub sex: Sex,
    pub age: u32,
    pub career: String,
    pub hair_color: String,
}

impl Identity {
    pub fn name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Static physiology that drives metabolic rates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Biometrics {
    pub weight_kg: f32,
    pub height_cm: f32,
    /// Aerobic fitness multiplier on O2 consumption, baseline 1.0.
    pub aerobic_capacity: f32,
}

impl Biometrics {
    pub fn bmi(&self) -> f32 {
        metabolism::bmi(self.weight_kg, self.height_cm)
    }
}

impl Default for Biometrics {
    fn default() -> Self {
        Self {
            weight_kg: 70.0,
            height_cm: 170.0,
            aerobic_capacity: 1.0,
        }
    }
}

/// Physiological needs - 0.0 (satisfied) rising toward their bound.
///
/// Thirst, bathroom, and hunger cap at 1.0. Sleep debt keeps accumulating
/// to 3.0; a colonist who reaches the cap does not survive the day.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Needs {
    pub thirst: f32,
    pub bathroom: f32,
    pub hunger: f32,
    pub sleep: f32,
}

pub use outpost_logic::constants::needs::{NEED_MAX, SLEEP_MAX};

impl Needs {
    /// Advance all needs by `dt_real` real seconds at the precomputed rates.
    /// Monotonically non-decreasing, clamped at the bounds.
    pub fn advance(&mut self, rates: &NeedRates, dt_real: f32) {
        self.thirst = (self.thirst + rates.thirst_per_sec * dt_real).min(NEED_MAX);
        self.bathroom = (self.bathroom + rates.bathroom_per_sec * dt_real).min(NEED_MAX);
        self.hunger = (self.hunger + rates.hunger_per_sec * dt_real).min(NEED_MAX);
        self.sleep = (self.sleep + rates.sleep_per_sec * dt_real).min(SLEEP_MAX);
    }

    /// Satisfy a specific need by `amount`, floored at zero.
    pub fn satisfy(&mut self, need: NeedKind, amount: f32) {
        let value = match need {
            NeedKind::Thirst => &mut self.thirst,
            NeedKind::Bathroom => &mut self.bathroom,
            NeedKind::Hunger => &mut self.hunger,
            NeedKind::Sleep => &mut self.sleep,
        };
        *value = (*value - amount).max(0.0);
    }
}

/// Types of needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NeedKind {
    Thirst,
    Bathroom,
    Hunger,
    Sleep,
}

/// Bed and job assignment status.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Assignment {
    pub assigned_bed: bool,
    pub assigned_job: bool,
    /// Incremented once per day boundary while jobless, reset on hire.
    pub days_without_job: u32,
}

/// Derived wellbeing score in [0, 1], recomputed every tick.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Happiness {
    pub value: f32,
}

impl Default for Happiness {
    fn default() -> Self {
        Self { value: 1.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use outpost_logic::config::SimConfig;

    #[test]
    fn test_needs_advance() {
        let rates = NeedRates::from_config(&SimConfig::default());
        let mut needs = Needs::default();
        // 15 real seconds at 960x = 4 sim hours: thirst saturates (4h window).
        needs.advance(&rates, 15.0);
        assert!((needs.thirst - 1.0).abs() < 1e-4);
        assert!(needs.hunger < 1.0);
        assert!(needs.sleep < 1.0);
    }

    #[test]
    fn test_needs_monotonic_and_bounded() {
        let rates = NeedRates::from_config(&SimConfig::default());
        let mut needs = Needs::default();
        let mut previous = needs;
        for _ in 0..500 {
            needs.advance(&rates, 10.0);
            assert!(needs.thirst >= previous.thirst);
            assert!(needs.sleep >= previous.sleep);
            assert!(needs.thirst <= NEED_MAX);
            assert!(needs.bathroom <= NEED_MAX);
            assert!(needs.hunger <= NEED_MAX);
            assert!(needs.sleep <= SLEEP_MAX);
            previous = needs;
        }
        // Long enough to saturate everything.
        assert_eq!(needs.sleep, SLEEP_MAX);
    }

    #[test]
    fn test_zero_dt_is_identity() {
        let rates = NeedRates::from_config(&SimConfig::default());
        let mut needs = Needs {
            thirst: 0.4,
            bathroom: 0.3,
            hunger: 0.2,
            sleep: 1.5,
        };
        let before = needs;
        needs.advance(&rates, 0.0);
        assert_eq!(needs.thirst, before.thirst);
        assert_eq!(needs.sleep, before.sleep);
    }

    #[test]
    fn test_satisfy_floors_at_zero() {
        let mut needs = Needs {
            thirst: 0.3,
            ..Default::default()
        };
        needs.satisfy(NeedKind::Thirst, 1.0);
        assert_eq!(needs.thirst, 0.0);
    }

    #[test]
    fn test_bmi() {
        let bio = Biometrics::default();
        assert!((bio.bmi() - 24.22).abs() < 0.01);
    }
}
