//! Colony-wide resource ledger - the single shared mutable store every
//! phase of a tick acts on.

use serde::{Deserialize, Serialize};

use outpost_logic::config::SimConfig;

/// Colony-wide resource quantities.
///
/// Fixed named fields rather than a keyed map: the set of resources is
/// closed and typo-proof. `fe` has no production path yet and the clamp
/// pass pins it to exactly zero.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ColonyResources {
    pub population: u32,
    /// Breathable oxygen reserve, liters.
    pub o2: f32,
    /// Potable water, liters.
    pub h2o: f32,
    /// Atmospheric CO2 concentration, ppm.
    pub co2: f32,
    pub meals: f32,
    /// Stored solid waste, liters.
    pub solid_waste: f32,
    /// Stored liquid waste, liters.
    pub liquid_waste: f32,
    pub fe: f32,
}

/// Storage ceilings. CO2 and population have no cap; Fe's cap is
/// implicitly zero.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ResourceCaps {
    pub o2: f32,
    pub h2o: f32,
    pub meals: f32,
    pub solid_waste: f32,
    pub liquid_waste: f32,
}

/// Cappable resource kinds, for level queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    O2,
    H2O,
    Meals,
    SolidWaste,
    LiquidWaste,
}

impl ResourceCaps {
    pub fn from_config(config: &SimConfig) -> Self {
        Self {
            o2: config.max_o2,
            h2o: config.max_h2o,
            meals: config.max_meals,
            solid_waste: config.max_solid_waste,
            liquid_waste: config.max_liquid_waste,
        }
    }

    pub fn get(&self, kind: ResourceKind) -> f32 {
        match kind {
            ResourceKind::O2 => self.o2,
            ResourceKind::H2O => self.h2o,
            ResourceKind::Meals => self.meals,
            ResourceKind::SolidWaste => self.solid_waste,
            ResourceKind::LiquidWaste => self.liquid_waste,
        }
    }
}

impl ColonyResources {
    /// Seed the ledger from config, clamping each level to its capacity.
    pub fn seeded(config: &SimConfig, caps: &ResourceCaps) -> Self {
        Self {
            population: config.initial_population,
            o2: config.initial_o2.min(caps.o2),
            h2o: config.initial_h2o.min(caps.h2o),
            co2: config.initial_co2,
            meals: config.initial_meals.min(caps.meals),
            solid_waste: config.initial_solid_waste.min(caps.solid_waste),
            liquid_waste: config.initial_liquid_waste.min(caps.liquid_waste),
            fe: 0.0,
        }
    }

    pub fn get(&self, kind: ResourceKind) -> f32 {
        match kind {
            ResourceKind::O2 => self.o2,
            ResourceKind::H2O => self.h2o,
            ResourceKind::Meals => self.meals,
            ResourceKind::SolidWaste => self.solid_waste,
            ResourceKind::LiquidWaste => self.liquid_waste,
        }
    }

    /// Clamp every capped field into [0, capacity]. Fe is pinned to exactly
    /// zero; CO2 is floored at zero with no upper cap. Population is
    /// unsigned and needs no floor.
    pub fn clamp(&mut self, caps: &ResourceCaps) {
        self.fe = 0.0;
        self.o2 = self.o2.clamp(0.0, caps.o2);
        self.h2o = self.h2o.clamp(0.0, caps.h2o);
        self.meals = self.meals.clamp(0.0, caps.meals);
        self.solid_waste = self.solid_waste.clamp(0.0, caps.solid_waste);
        self.liquid_waste = self.liquid_waste.clamp(0.0, caps.liquid_waste);
        self.co2 = self.co2.max(0.0);
    }

    /// Resource level as a fraction of capacity (0-1).
    pub fn level(&self, kind: ResourceKind, caps: &ResourceCaps) -> f32 {
        let cap = caps.get(kind);
        if cap > 0.0 {
            (self.get(kind) / cap).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    /// Check if a resource is low (<25% of capacity).
    pub fn is_low(&self, kind: ResourceKind, caps: &ResourceCaps) -> bool {
        self.level(kind, caps) < 0.25
    }

    /// Check if a resource is critically low (<10% of capacity).
    pub fn is_critical(&self, kind: ResourceKind, caps: &ResourceCaps) -> bool {
        self.level(kind, caps) < 0.1
    }
}
