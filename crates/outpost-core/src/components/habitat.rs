//! Environmental-control hardware: wear chassis plus per-variant behavior data.

use serde::{Deserialize, Serialize};

use outpost_logic::constants::components::{MAINTENANCE_CONDITION_BONUS, REACTIVATION_THRESHOLD};

/// One piece of environmental-control hardware.
///
/// The wear model is shared across variants: a component runs cleanly until
/// `time_since_maintenance` exceeds `maintenance_interval`, then loses
/// condition every simulation second until it fails. Routine maintenance
/// resets the timer and restores a fixed condition bonus; only a full
/// repair returns it to factory condition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvComponent {
    pub name: String,
    pub kind: ComponentKind,
    pub operational: bool,
    /// 1.0 = perfect condition, 0.0 = broken.
    pub condition: f32,
    /// Simulation seconds since last maintenance.
    pub time_since_maintenance: f32,
    /// Simulation seconds of clean running before wear sets in.
    pub maintenance_interval: f32,
}

/// The closed set of component variants, each carrying its own rate data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ComponentKind {
    /// Removes CO2 from the shared atmosphere.
    Co2Scrubber { scrub_rate: f32 },
    /// Drives O2 partial pressure toward a setpoint. Replenishing uses a
    /// larger gain than venting.
    O2Controller {
        setpoint_mmhg: f32,
        fill_gain: f32,
        vent_gain: f32,
    },
    /// Placeholder: computes the pressure deficit but moves no resource yet.
    PressureRegulator { target_hpa: f32 },
    /// Moves relative humidity toward a setpoint; raising it consumes water.
    HumidityController {
        setpoint_pct: f32,
        water_gain: f32,
        rh_gain: f32,
    },
    /// Records an atmosphere reading every tick.
    Monitor { readings: Vec<EnvReading> },
    /// Placeholder: atmosphere mixing is assumed uniform.
    Ventilation,
}

/// One recorded atmosphere sample.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EnvReading {
    /// Simulation seconds since colony start.
    pub timestamp_secs: f64,
    pub o2_liters: f32,
    pub co2_ppm: f32,
    pub pressure_hpa: f32,
    pub relative_humidity_pct: f32,
    pub o2_partial_pressure_mmhg: f32,
}

impl EnvComponent {
    pub fn new(name: impl Into<String>, kind: ComponentKind, maintenance_interval: f32) -> Self {
        Self {
            name: name.into(),
            kind,
            operational: true,
            condition: 1.0,
            time_since_maintenance: 0.0,
            maintenance_interval,
        }
    }

    /// Accumulate wear over `dt_sim` simulation seconds.
    ///
    /// Condition decays only once the maintenance timer has run past the
    /// interval. Returns whether the component is still operational, so a
    /// failure within this tick also suppresses this tick's effect.
    pub fn tick_wear(&mut self, dt_sim: f32, decay_rate: f32) -> bool {
        if !self.operational {
            return false;
        }
        self.time_since_maintenance += dt_sim;
        if self.time_since_maintenance > self.maintenance_interval {
            self.condition -= decay_rate * dt_sim;
            if self.condition <= 0.0 {
                self.condition = 0.0;
                self.operational = false;
            }
        }
        self.operational
    }

    /// Routine maintenance: reset the timer and restore some condition.
    /// Brings the component back online only if condition clears the
    /// reactivation threshold.
    pub fn perform_maintenance(&mut self) {
        self.time_since_maintenance = 0.0;
        self.condition = (self.condition + MAINTENANCE_CONDITION_BONUS).min(1.0);
        if self.condition > REACTIVATION_THRESHOLD {
            self.operational = true;
        }
    }

    /// Full repair: factory condition, back online, timer cleared.
    pub fn repair(&mut self) {
        self.condition = 1.0;
        self.operational = true;
        self.time_since_maintenance = 0.0;
    }

    /// Most recent monitor reading, if this component is a monitor and has
    /// recorded anything.
    pub fn latest_reading(&self) -> Option<&EnvReading> {
        match &self.kind {
            ComponentKind::Monitor { readings } => readings.last(),
            _ => None,
        }
    }
}
