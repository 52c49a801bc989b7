//! Colonist physiology — need rates, O2/CO2 exchange, starvation mortality.
//!
//! Daily O2 consumption follows the NASA STD-3001 reference figure of
//! ~0.84 kg (588 L) per day for a 70 kg adult, scaled linearly by body
//! weight and aerobic capacity. CO2 production is derived from the O2 draw
//! through the respiratory quotient (CO2 volume ≈ 0.85 × O2 volume).

use serde::{Deserialize, Serialize};

use crate::config::SimConfig;
use crate::constants::time::SECS_PER_DAY;

/// Biological sex. Used only for metabolic-rate and mortality-threshold
/// branching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
}

/// Per-real-second need increments, precomputed from the configured
/// saturation times and time scale.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct NeedRates {
    pub thirst_per_sec: f32,
    pub bathroom_per_sec: f32,
    pub hunger_per_sec: f32,
    pub sleep_per_sec: f32,
}

impl NeedRates {
    pub fn from_config(config: &SimConfig) -> Self {
        Self {
            thirst_per_sec: rate_per_real_sec(config.thirst_saturation_secs, config.time_scale),
            bathroom_per_sec: rate_per_real_sec(config.bathroom_saturation_secs, config.time_scale),
            hunger_per_sec: rate_per_real_sec(config.hunger_saturation_secs, config.time_scale),
            sleep_per_sec: rate_per_real_sec(config.sleep_saturation_secs, config.time_scale),
        }
    }
}

/// How fast a need rises per real second, given the in-simulation seconds
/// it takes to saturate from zero.
fn rate_per_real_sec(saturation_secs: f32, time_scale: f32) -> f32 {
    (1.0 / saturation_secs) * time_scale
}

/// Daily O2 consumption in liters for one colonist.
pub fn daily_o2_liters(config: &SimConfig, sex: Sex, weight_kg: f32, aerobic_capacity: f32) -> f32 {
    let sex_factor = match sex {
        Sex::Male => config.male_o2_factor,
        Sex::Female => 1.0,
    };
    let weight_factor = weight_kg / config.reference_weight_kg;
    config.base_daily_o2_liters * weight_factor * sex_factor * aerobic_capacity
}

/// Daily CO2 production in liters, derived from O2 consumption through the
/// respiratory quotient.
pub fn daily_co2_liters(config: &SimConfig, sex: Sex, weight_kg: f32, aerobic_capacity: f32) -> f32 {
    daily_o2_liters(config, sex, weight_kg, aerobic_capacity) * config.respiratory_quotient
}

/// Convert a daily volume into the amount exchanged over one tick of
/// `dt_real` real seconds at the configured time scale.
pub fn per_tick_volume(daily_liters: f32, dt_real: f32, time_scale: f32) -> f32 {
    (daily_liters / SECS_PER_DAY) * (dt_real * time_scale)
}

/// Body mass index from weight in kilograms and height in centimeters.
pub fn bmi(weight_kg: f32, height_cm: f32) -> f32 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// The BMI below which a colonist of the given sex dies of starvation.
pub fn bmi_threshold(config: &SimConfig, sex: Sex) -> f32 {
    match sex {
        Sex::Male => config.bmi_threshold_male,
        Sex::Female => config.bmi_threshold_female,
    }
}

/// Whether a colonist has wasted below the survivable BMI for their sex.
pub fn is_starved(config: &SimConfig, sex: Sex, weight_kg: f32, height_cm: f32) -> bool {
    bmi(weight_kg, height_cm) < bmi_threshold(config, sex)
}

/// New body weight after one day of saturated hunger.
pub fn apply_daily_weight_loss(weight_kg: f32, daily_loss_rate: f32) -> f32 {
    weight_kg * (1.0 - daily_loss_rate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_per_real_sec() {
        // Saturation over one sim day at 960x: 1/86400 * 960 per real second,
        // so the need saturates after 90 real seconds.
        let rate = rate_per_real_sec(86_400.0, 960.0);
        assert!((rate * 90.0 - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_need_rates_from_config() {
        let rates = NeedRates::from_config(&SimConfig::default());
        // Thirst saturates fastest, sleep slowest.
        assert!(rates.thirst_per_sec > rates.bathroom_per_sec);
        assert!(rates.bathroom_per_sec > rates.hunger_per_sec);
        assert!(rates.hunger_per_sec > rates.sleep_per_sec);
    }

    #[test]
    fn test_reference_adult_o2() {
        let config = SimConfig::default();
        let daily = daily_o2_liters(&config, Sex::Female, 70.0, 1.0);
        assert!((daily - 588.0).abs() < 1e-3);
    }

    #[test]
    fn test_o2_scales_with_weight() {
        let config = SimConfig::default();
        let heavy = daily_o2_liters(&config, Sex::Female, 105.0, 1.0);
        assert!((heavy - 588.0 * 1.5).abs() < 1e-2);
    }

    #[test]
    fn test_male_factor_defaults_to_neutral() {
        let config = SimConfig::default();
        let m = daily_o2_liters(&config, Sex::Male, 70.0, 1.0);
        let f = daily_o2_liters(&config, Sex::Female, 70.0, 1.0);
        assert_eq!(m, f);
    }

    #[test]
    fn test_male_factor_applies_when_configured() {
        let config = SimConfig {
            male_o2_factor: 1.05,
            ..Default::default()
        };
        let m = daily_o2_liters(&config, Sex::Male, 70.0, 1.0);
        assert!((m - 588.0 * 1.05).abs() < 1e-2);
    }

    #[test]
    fn test_co2_follows_respiratory_quotient() {
        let config = SimConfig::default();
        let o2 = daily_o2_liters(&config, Sex::Female, 70.0, 1.0);
        let co2 = daily_co2_liters(&config, Sex::Female, 70.0, 1.0);
        assert!((co2 - o2 * 0.85).abs() < 1e-3);
    }

    #[test]
    fn test_per_tick_volume() {
        // One real second at 960x covers 960 sim seconds of a daily budget.
        let per_tick = per_tick_volume(588.0, 1.0, 960.0);
        assert!((per_tick - 588.0 / 86_400.0 * 960.0).abs() < 1e-5);
        assert!((per_tick - 6.5333).abs() < 1e-3);
    }

    #[test]
    fn test_bmi() {
        // 70 kg at 170 cm ≈ 24.22.
        assert!((bmi(70.0, 170.0) - 24.22).abs() < 0.01);
    }

    #[test]
    fn test_bmi_thresholds_by_sex() {
        let config = SimConfig::default();
        assert!(bmi_threshold(&config, Sex::Male) > bmi_threshold(&config, Sex::Female));
    }

    #[test]
    fn test_starvation_check() {
        let config = SimConfig::default();
        // 37 kg at 170 cm → BMI ~12.8, below the male threshold but above female.
        assert!(is_starved(&config, Sex::Male, 37.0, 170.0));
        assert!(!is_starved(&config, Sex::Female, 37.0, 170.0));
    }

    #[test]
    fn test_weight_loss_compounds() {
        let mut weight = 70.0;
        for _ in 0..10 {
            weight = apply_daily_weight_loss(weight, 0.005);
        }
        let closed_form = 70.0 * 0.995f32.powi(10);
        assert!((weight - closed_form).abs() < 1e-4);
    }
}
