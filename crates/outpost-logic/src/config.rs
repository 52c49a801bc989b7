//! Simulation configuration — every tunable the engine consumes, with
//! fail-fast validation.
//!
//! All values default to the constants in [`crate::constants`]. Validation
//! runs once at engine construction; the hot tick path assumes a valid
//! config and never re-checks (e.g. saturation times are known non-zero
//! before any division happens).

use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Tunable parameters for a colony simulation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// Simulation seconds per real second.
    pub time_scale: f32,

    // Need saturation times, in simulation seconds.
    pub thirst_saturation_secs: f32,
    pub bathroom_saturation_secs: f32,
    pub hunger_saturation_secs: f32,
    pub sleep_saturation_secs: f32,

    // Happiness weights and penalties.
    pub thirst_weight: f32,
    pub bathroom_weight: f32,
    pub hunger_weight: f32,
    pub sleep_weight: f32,
    pub jobless_penalty: f32,
    pub no_bed_penalty: f32,

    // Physiology.
    pub base_daily_o2_liters: f32,
    pub reference_weight_kg: f32,
    pub respiratory_quotient: f32,
    /// Multiplier on male O2 consumption; 1.0 disables the adjustment.
    pub male_o2_factor: f32,

    // Mortality.
    pub bmi_threshold_male: f32,
    pub bmi_threshold_female: f32,
    pub daily_weight_loss_rate: f32,

    // Initial resource levels (clamped to capacity at seeding).
    pub initial_population: u32,
    pub initial_o2: f32,
    pub initial_h2o: f32,
    pub initial_co2: f32,
    pub initial_meals: f32,
    pub initial_solid_waste: f32,
    pub initial_liquid_waste: f32,

    // Storage capacities. CO2 and population are uncapped; Fe has no
    // production path and is pinned to zero by the clamp pass.
    pub max_o2: f32,
    pub max_h2o: f32,
    pub max_meals: f32,
    pub max_solid_waste: f32,
    pub max_liquid_waste: f32,

    /// Beds available in the habitation module.
    pub bed_capacity: u32,

    // Environmental-control component rates.
    pub scrub_rate: f32,
    pub o2_setpoint_mmhg: f32,
    pub o2_fill_gain: f32,
    pub o2_vent_gain: f32,
    pub pressure_target_hpa: f32,
    pub humidity_setpoint_pct: f32,
    pub humidity_water_gain: f32,
    pub humidity_rh_gain: f32,

    // Component wear.
    pub maintenance_interval_secs: f32,
    pub condition_decay_rate: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            time_scale: time::TIME_SCALE,
            thirst_saturation_secs: needs::THIRST_SATURATION_SECS,
            bathroom_saturation_secs: needs::BATHROOM_SATURATION_SECS,
            hunger_saturation_secs: needs::HUNGER_SATURATION_SECS,
            sleep_saturation_secs: needs::SLEEP_SATURATION_SECS,
            thirst_weight: happiness::THIRST_WEIGHT,
            bathroom_weight: happiness::BATHROOM_WEIGHT,
            hunger_weight: happiness::HUNGER_WEIGHT,
            sleep_weight: happiness::SLEEP_WEIGHT,
            jobless_penalty: happiness::JOBLESS_PENALTY,
            no_bed_penalty: happiness::NO_BED_PENALTY,
            base_daily_o2_liters: physiology::BASE_DAILY_O2_LITERS,
            reference_weight_kg: physiology::REFERENCE_WEIGHT_KG,
            respiratory_quotient: physiology::RESPIRATORY_QUOTIENT,
            male_o2_factor: physiology::MALE_O2_FACTOR,
            bmi_threshold_male: mortality::BMI_THRESHOLD_MALE,
            bmi_threshold_female: mortality::BMI_THRESHOLD_FEMALE,
            daily_weight_loss_rate: mortality::DAILY_WEIGHT_LOSS_RATE,
            initial_population: 0,
            initial_o2: resources::INITIAL_O2_LITERS,
            initial_h2o: resources::INITIAL_H2O_LITERS,
            initial_co2: resources::INITIAL_CO2_PPM,
            initial_meals: resources::INITIAL_MEALS,
            initial_solid_waste: resources::INITIAL_SOLID_WASTE_LITERS,
            initial_liquid_waste: resources::INITIAL_LIQUID_WASTE_LITERS,
            max_o2: resources::MAX_O2_LITERS,
            max_h2o: resources::MAX_H2O_LITERS,
            max_meals: resources::MAX_MEALS,
            max_solid_waste: resources::MAX_SOLID_WASTE_LITERS,
            max_liquid_waste: resources::MAX_LIQUID_WASTE_LITERS,
            bed_capacity: habitat::BED_CAPACITY,
            scrub_rate: components::CO2_SCRUB_RATE,
            o2_setpoint_mmhg: components::O2_SETPOINT_MMHG,
            o2_fill_gain: components::O2_FILL_GAIN,
            o2_vent_gain: components::O2_VENT_GAIN,
            pressure_target_hpa: components::PRESSURE_TARGET_HPA,
            humidity_setpoint_pct: components::HUMIDITY_SETPOINT_PCT,
            humidity_water_gain: components::HUMIDITY_WATER_GAIN,
            humidity_rh_gain: components::HUMIDITY_RH_GAIN,
            maintenance_interval_secs: components::MAINTENANCE_INTERVAL_SECS,
            condition_decay_rate: components::CONDITION_DECAY_RATE,
        }
    }
}

/// Configuration validation error.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Time scale must be positive.
    NonPositiveTimeScale(f32),
    /// A need saturation time must be positive (it is a divisor).
    NonPositiveSaturationTime(&'static str, f32),
    /// A happiness weight or penalty must be non-negative.
    NegativeWeight(&'static str, f32),
    /// A physiology constant must be positive (divisor or base rate).
    NonPositivePhysiology(&'static str, f32),
    /// A BMI mortality threshold must be positive.
    NonPositiveBmiThreshold(&'static str, f32),
    /// Daily weight loss must be a fraction in (0, 1).
    WeightLossRateOutOfRange(f32),
    /// An initial resource level must be non-negative.
    NegativeInitialResource(&'static str, f32),
    /// A storage capacity must be non-negative.
    NegativeCapacity(&'static str, f32),
    /// A component rate constant must be non-negative.
    NegativeComponentRate(&'static str, f32),
    /// Maintenance interval must be positive.
    NonPositiveMaintenanceInterval(f32),
    /// Condition decay rate must be positive.
    NonPositiveDecayRate(f32),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonPositiveTimeScale(v) => write!(f, "time scale must be positive, got {v}"),
            Self::NonPositiveSaturationTime(name, v) => {
                write!(f, "{name} saturation time must be positive, got {v}")
            }
            Self::NegativeWeight(name, v) => {
                write!(f, "{name} weight must be non-negative, got {v}")
            }
            Self::NonPositivePhysiology(name, v) => {
                write!(f, "{name} must be positive, got {v}")
            }
            Self::NonPositiveBmiThreshold(name, v) => {
                write!(f, "{name} BMI threshold must be positive, got {v}")
            }
            Self::WeightLossRateOutOfRange(v) => {
                write!(f, "daily weight loss rate must be in (0, 1), got {v}")
            }
            Self::NegativeInitialResource(name, v) => {
                write!(f, "initial {name} must be non-negative, got {v}")
            }
            Self::NegativeCapacity(name, v) => {
                write!(f, "{name} capacity must be non-negative, got {v}")
            }
            Self::NegativeComponentRate(name, v) => {
                write!(f, "{name} rate must be non-negative, got {v}")
            }
            Self::NonPositiveMaintenanceInterval(v) => {
                write!(f, "maintenance interval must be positive, got {v}")
            }
            Self::NonPositiveDecayRate(v) => {
                write!(f, "condition decay rate must be positive, got {v}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Validate a simulation configuration, returning all errors found.
pub fn validate_config(config: &SimConfig) -> Vec<ConfigError> {
    let mut errors = Vec::new();

    if config.time_scale <= 0.0 {
        errors.push(ConfigError::NonPositiveTimeScale(config.time_scale));
    }

    for (name, value) in [
        ("thirst", config.thirst_saturation_secs),
        ("bathroom", config.bathroom_saturation_secs),
        ("hunger", config.hunger_saturation_secs),
        ("sleep", config.sleep_saturation_secs),
    ] {
        if value <= 0.0 {
            errors.push(ConfigError::NonPositiveSaturationTime(name, value));
        }
    }

    for (name, value) in [
        ("thirst", config.thirst_weight),
        ("bathroom", config.bathroom_weight),
        ("hunger", config.hunger_weight),
        ("sleep", config.sleep_weight),
        ("jobless", config.jobless_penalty),
        ("no-bed", config.no_bed_penalty),
    ] {
        if value < 0.0 {
            errors.push(ConfigError::NegativeWeight(name, value));
        }
    }

    for (name, value) in [
        ("base daily O2", config.base_daily_o2_liters),
        ("reference weight", config.reference_weight_kg),
        ("respiratory quotient", config.respiratory_quotient),
        ("male O2 factor", config.male_o2_factor),
    ] {
        if value <= 0.0 {
            errors.push(ConfigError::NonPositivePhysiology(name, value));
        }
    }

    for (name, value) in [
        ("male", config.bmi_threshold_male),
        ("female", config.bmi_threshold_female),
    ] {
        if value <= 0.0 {
            errors.push(ConfigError::NonPositiveBmiThreshold(name, value));
        }
    }

    if config.daily_weight_loss_rate <= 0.0 || config.daily_weight_loss_rate >= 1.0 {
        errors.push(ConfigError::WeightLossRateOutOfRange(
            config.daily_weight_loss_rate,
        ));
    }

    for (name, value) in [
        ("O2", config.initial_o2),
        ("H2O", config.initial_h2o),
        ("CO2", config.initial_co2),
        ("meals", config.initial_meals),
        ("solid waste", config.initial_solid_waste),
        ("liquid waste", config.initial_liquid_waste),
    ] {
        if value < 0.0 {
            errors.push(ConfigError::NegativeInitialResource(name, value));
        }
    }

    for (name, value) in [
        ("O2", config.max_o2),
        ("H2O", config.max_h2o),
        ("meals", config.max_meals),
        ("solid waste", config.max_solid_waste),
        ("liquid waste", config.max_liquid_waste),
    ] {
        if value < 0.0 {
            errors.push(ConfigError::NegativeCapacity(name, value));
        }
    }

    for (name, value) in [
        ("scrub", config.scrub_rate),
        ("O2 setpoint", config.o2_setpoint_mmhg),
        ("O2 fill gain", config.o2_fill_gain),
        ("O2 vent gain", config.o2_vent_gain),
        ("pressure target", config.pressure_target_hpa),
        ("humidity setpoint", config.humidity_setpoint_pct),
        ("humidity water gain", config.humidity_water_gain),
        ("humidity RH gain", config.humidity_rh_gain),
    ] {
        if value < 0.0 {
            errors.push(ConfigError::NegativeComponentRate(name, value));
        }
    }

    if config.maintenance_interval_secs <= 0.0 {
        errors.push(ConfigError::NonPositiveMaintenanceInterval(
            config.maintenance_interval_secs,
        ));
    }
    if config.condition_decay_rate <= 0.0 {
        errors.push(ConfigError::NonPositiveDecayRate(config.condition_decay_rate));
    }

    errors
}
