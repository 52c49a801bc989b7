//! Simulation constants — defaults behind `SimConfig::default()`.
//!
//! Grouped into plain `pub mod` namespaces so both the engine and the
//! headless harness can reference them without a config instance.

pub mod time {
    /// Simulation seconds per real second.
    pub const TIME_SCALE: f32 = 960.0;
    /// Seconds in one simulation day.
    pub const SECS_PER_DAY: f32 = 86_400.0;
}

pub mod needs {
    /// In-simulation seconds for thirst to run 0 → 1 if never addressed.
    pub const THIRST_SATURATION_SECS: f32 = 14_400.0;
    /// In-simulation seconds for bathroom need to saturate.
    pub const BATHROOM_SATURATION_SECS: f32 = 21_600.0;
    /// In-simulation seconds for hunger to saturate.
    pub const HUNGER_SATURATION_SECS: f32 = 43_200.0;
    /// In-simulation seconds for sleep need to reach 1.0 (it keeps
    /// accumulating past that, up to `SLEEP_MAX`).
    pub const SLEEP_SATURATION_SECS: f32 = 86_400.0;

    /// Upper bound for thirst, bathroom, and hunger.
    pub const NEED_MAX: f32 = 1.0;
    /// Sleep debt accumulates past saturation, up to three full days.
    pub const SLEEP_MAX: f32 = 3.0;
}

pub mod happiness {
    pub const THIRST_WEIGHT: f32 = 0.4;
    pub const BATHROOM_WEIGHT: f32 = 0.3;
    pub const HUNGER_WEIGHT: f32 = 0.2;
    pub const SLEEP_WEIGHT: f32 = 0.3;
    /// Penalty at full jobless scale (seven days without work).
    pub const JOBLESS_PENALTY: f32 = 0.05;
    /// Flat penalty for sleeping without an assigned bed.
    pub const NO_BED_PENALTY: f32 = 0.1;
    /// Days without a job before the jobless penalty reaches full scale.
    pub const JOBLESS_SCALE_DAYS: f32 = 7.0;
}

pub mod physiology {
    /// Daily O2 consumption in liters for the reference adult
    /// (~0.84 kg O2/day per NASA STD-3001).
    pub const BASE_DAILY_O2_LITERS: f32 = 588.0;
    /// Reference body weight the base rate is normalized to.
    pub const REFERENCE_WEIGHT_KG: f32 = 70.0;
    /// Respiratory quotient: CO2 volume produced per O2 volume consumed.
    pub const RESPIRATORY_QUOTIENT: f32 = 0.85;
    /// Multiplier on male O2 consumption. 1.0 = no adjustment.
    pub const MALE_O2_FACTOR: f32 = 1.0;
}

pub mod mortality {
    /// BMI below which a male colonist dies of starvation.
    pub const BMI_THRESHOLD_MALE: f32 = 13.0;
    /// BMI below which a female colonist dies of starvation.
    pub const BMI_THRESHOLD_FEMALE: f32 = 11.0;
    /// Fraction of body weight lost per day while hunger is saturated.
    pub const DAILY_WEIGHT_LOSS_RATE: f32 = 0.005;
}

pub mod resources {
    pub const INITIAL_O2_LITERS: f32 = 4_000.0;
    pub const INITIAL_H2O_LITERS: f32 = 1_200.0;
    pub const INITIAL_CO2_PPM: f32 = 400.0;
    pub const INITIAL_MEALS: f32 = 100.0;
    pub const INITIAL_SOLID_WASTE_LITERS: f32 = 0.0;
    pub const INITIAL_LIQUID_WASTE_LITERS: f32 = 0.0;
    pub const INITIAL_FE: f32 = 0.0;

    // Storage capacities of the core habitat module.
    pub const MAX_O2_LITERS: f32 = 3_360.0;
    pub const MAX_H2O_LITERS: f32 = 1_000.0;
    pub const MAX_MEALS: f32 = 80.0;
    pub const MAX_SOLID_WASTE_LITERS: f32 = 10.0;
    pub const MAX_LIQUID_WASTE_LITERS: f32 = 30.0;
}

pub mod habitat {
    /// Beds in the habitation module.
    pub const BED_CAPACITY: u32 = 4;
}

pub mod components {
    /// CO2 removed per simulation second by a scrubber at full condition (ppm).
    pub const CO2_SCRUB_RATE: f32 = 5.0;
    /// O2 partial pressure setpoint the controller drives toward (mmHg).
    pub const O2_SETPOINT_MMHG: f32 = 210.0;
    /// Gain on the O2 deficit when replenishing.
    pub const O2_FILL_GAIN: f32 = 0.1;
    /// Gain on the O2 surplus when venting. Smaller than the fill gain:
    /// replenishment is prioritized over venting.
    pub const O2_VENT_GAIN: f32 = 0.05;
    /// Total-pressure target for the regulator (hPa).
    pub const PRESSURE_TARGET_HPA: f32 = 1013.0;
    /// Relative-humidity setpoint (%).
    pub const HUMIDITY_SETPOINT_PCT: f32 = 50.0;
    /// Liters of H2O consumed per unit RH deficit per simulation second.
    pub const HUMIDITY_WATER_GAIN: f32 = 0.01;
    /// RH percentage moved per unit deficit per simulation second.
    pub const HUMIDITY_RH_GAIN: f32 = 0.1;

    /// Simulation seconds a component runs before wear sets in.
    pub const MAINTENANCE_INTERVAL_SECS: f32 = 10_000.0;
    /// Condition lost per simulation second once past the interval.
    pub const CONDITION_DECAY_RATE: f32 = 0.001;
    /// Condition restored by routine maintenance (not a full repair).
    pub const MAINTENANCE_CONDITION_BONUS: f32 = 0.2;
    /// Condition a component must exceed after maintenance to come back online.
    pub const REACTIVATION_THRESHOLD: f32 = 0.2;
}

pub mod satisfaction {
    /// Liters of water consumed per drink.
    pub const DRINK_H2O_LITERS: f32 = 0.5;
    /// Meals consumed per serving.
    pub const MEAL_PORTION: f32 = 1.0;
    /// Solid waste produced per bathroom visit (liters).
    pub const SOLID_WASTE_PER_VISIT: f32 = 0.2;
    /// Liquid waste produced per bathroom visit (liters).
    pub const LIQUID_WASTE_PER_VISIT: f32 = 0.4;
}

pub mod env_limits {
    /// Nominal habitat conditions reported when no sensor feedback exists.
    pub const NOMINAL_TEMPERATURE_C: f32 = 22.0;
    pub const NOMINAL_RH_PCT: f32 = 50.0;
    pub const NOMINAL_PRESSURE_HPA: f32 = 1013.0;
    pub const NOMINAL_O2_PP_MMHG: f32 = 210.0;

    /// CO2 above this is uncomfortable (ppm).
    pub const HIGH_CO2_PPM: f32 = 1_000.0;
    /// CO2 above this impairs judgment (ppm).
    pub const DANGER_CO2_PPM: f32 = 5_000.0;
    /// CO2 above this is lethal (ppm).
    pub const LETHAL_CO2_PPM: f32 = 40_000.0;

    /// Tolerated O2 partial pressure band (mmHg).
    pub const O2_PP_MIN_MMHG: f32 = 140.0;
    pub const O2_PP_MAX_MMHG: f32 = 300.0;
    /// O2 partial pressure below this causes rapid impairment (mmHg).
    pub const CRITICAL_O2_PP_MMHG: f32 = 100.0;
    /// O2 partial pressure below this is lethal (mmHg).
    pub const LETHAL_O2_PP_MMHG: f32 = 60.0;

    /// Tolerated total-pressure band (hPa).
    pub const PRESSURE_MIN_HPA: f32 = 700.0;
    pub const PRESSURE_MAX_HPA: f32 = 1013.0;
    /// Pressure below this is dangerous regardless of O2 fraction (hPa).
    pub const DANGER_PRESSURE_HPA: f32 = 620.0;
}
