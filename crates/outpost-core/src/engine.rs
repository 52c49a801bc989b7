//! Simulation engine - main entry point for running the colony simulation.

use hecs::{Entity, World};
use serde::{Deserialize, Serialize};

use outpost_logic::config::{validate_config, ConfigError, SimConfig};
use outpost_logic::constants::satisfaction;
use outpost_logic::constants::time::SECS_PER_DAY;
use outpost_logic::environment::Environment;
use outpost_logic::metabolism::{NeedRates, Sex};

use crate::components::*;
use crate::resources::{ColonyResources, ResourceCaps};
use crate::systems::{
    end_of_day_system, environment_control_system, increment_jobless_days, metabolism_system,
};

/// Main simulation engine.
///
/// One `step(dt)` call per frame from the embedding loop. Everything is
/// synchronous and single-writer: metabolism runs first, then the
/// environmental-control components, then the clamp pass, then (on a day
/// boundary) the once-per-day bookkeeping.
pub struct Simulation {
    /// ECS world containing colonists and environmental components.
    pub world: World,
    config: SimConfig,
    rates: NeedRates,
    resources: ColonyResources,
    caps: ResourceCaps,
    environment: Environment,
    /// Real seconds since colony start.
    sim_time: f64,
    /// Simulation seconds since colony start.
    game_time: f64,
    previous_day: u64,
    day_number: u64,
    beds_assigned: u32,
}

/// Everything needed to create a colonist. Colonist creation itself is
/// driven from outside the simulation core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColonistSpec {
    pub first_name: String,
    pub last_name: String,
    pub sex: Sex,
    pub age: u32,
    pub career: String,
    pub weight_kg: f32,
    pub height_cm: f32,
    pub hair_color: String,
    pub aerobic_capacity: f32,
}

impl Default for ColonistSpec {
    fn default() -> Self {
        Self {
            first_name: "Alice".into(),
            last_name: "Smith".into(),
            sex: Sex::Female,
            age: 30,
            career: "Eng".into(),
            weight_kg: 70.0,
            height_cm: 170.0,
            hair_color: "Red".into(),
            aerobic_capacity: 1.0,
        }
    }
}

/// Read-only colonist snapshot for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColonistStatus {
    pub name: String,
    pub sex: Sex,
    pub age: u32,
    pub weight_kg: f32,
    pub bmi: f32,
    pub thirst: f32,
    pub bathroom: f32,
    pub hunger: f32,
    pub sleep: f32,
    pub happiness: f32,
    pub assigned_bed: bool,
    pub assigned_job: bool,
    pub days_without_job: u32,
}

/// Read-only component snapshot for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentStatus {
    pub name: String,
    pub operational: bool,
    pub condition: f32,
    pub time_since_maintenance: f32,
    pub maintenance_interval: f32,
}

impl Simulation {
    /// Create a simulation with the core habitat's component suite and a
    /// resource ledger seeded (and capacity-clamped) from config.
    ///
    /// Fails fast on configuration errors - the tick path assumes a valid
    /// config and never re-validates.
    pub fn new(config: SimConfig) -> Result<Self, Vec<ConfigError>> {
        let errors = validate_config(&config);
        if !errors.is_empty() {
            return Err(errors);
        }

        let caps = ResourceCaps::from_config(&config);
        let resources = ColonyResources::seeded(&config, &caps);
        let rates = NeedRates::from_config(&config);
        let environment = Environment::nominal(resources.co2);

        let mut world = World::new();
        let interval = config.maintenance_interval_secs;
        world.spawn((EnvComponent::new(
            "CO2 Scrubber",
            ComponentKind::Co2Scrubber {
                scrub_rate: config.scrub_rate,
            },
            interval,
        ),));
        world.spawn((EnvComponent::new(
            "O2 Controller",
            ComponentKind::O2Controller {
                setpoint_mmhg: config.o2_setpoint_mmhg,
                fill_gain: config.o2_fill_gain,
                vent_gain: config.o2_vent_gain,
            },
            interval,
        ),));
        world.spawn((EnvComponent::new(
            "Pressure Regulator",
            ComponentKind::PressureRegulator {
                target_hpa: config.pressure_target_hpa,
            },
            interval,
        ),));
        world.spawn((EnvComponent::new(
            "Humidity Controller",
            ComponentKind::HumidityController {
                setpoint_pct: config.humidity_setpoint_pct,
                water_gain: config.humidity_water_gain,
                rh_gain: config.humidity_rh_gain,
            },
            interval,
        ),));
        world.spawn((EnvComponent::new(
            "Environmental Monitor",
            ComponentKind::Monitor {
                readings: Vec::new(),
            },
            interval,
        ),));
        world.spawn((EnvComponent::new(
            "Ventilation Controller",
            ComponentKind::Ventilation,
            interval,
        ),));

        Ok(Self {
            world,
            rates,
            resources,
            caps,
            environment,
            config,
            sim_time: 0.0,
            game_time: 0.0,
            previous_day: 0,
            day_number: 1,
            beds_assigned: 0,
        })
    }

    /// Add a colonist to the roster. Population tracks the roster.
    pub fn spawn_colonist(&mut self, spec: ColonistSpec) -> Entity {
        let entity = self.world.spawn((
            Person,
            Identity {
                first_name: spec.first_name,
                last_name: spec.last_name,
                sex: spec.sex,
                age: spec.age,
                career: spec.career,
                hair_color: spec.hair_color,
            },
            Biometrics {
                weight_kg: spec.weight_kg,
                height_cm: spec.height_cm,
                aerobic_capacity: spec.aerobic_capacity,
            },
            Needs::default(),
            Assignment::default(),
            Happiness::default(),
        ));
        self.resources.population += 1;
        entity
    }

    /// Advance the simulation by `dt_real` real seconds, scaled by the
    /// configured time multiplier.
    pub fn step(&mut self, dt_real: f32) {
        let dt_sim = dt_real * self.config.time_scale;
        self.sim_time += dt_real as f64;
        self.game_time += dt_sim as f64;

        // Fresh snapshot each tick: CO2 from the ledger, the rest nominal
        // until a component feeds it back within this tick.
        self.environment = Environment::nominal(self.resources.co2);

        metabolism_system(
            &mut self.world,
            &self.config,
            &self.rates,
            &mut self.resources,
            dt_real,
        );

        environment_control_system(
            &mut self.world,
            &self.config,
            &self.caps,
            &mut self.resources,
            &mut self.environment,
            self.game_time,
            dt_sim,
        );

        self.resources.clamp(&self.caps);

        let current_day = self.current_day();
        if current_day > self.previous_day {
            increment_jobless_days(&mut self.world);
            end_of_day_system(&mut self.world, &self.config, &mut self.resources);
            self.recount_beds();
            self.previous_day = current_day;
            self.day_number = current_day + 1;
        }
    }

    // ── Clock ───────────────────────────────────────────────────────────

    /// Real seconds since colony start.
    pub fn sim_time(&self) -> f64 {
        self.sim_time
    }

    /// Simulation seconds since colony start.
    pub fn game_time(&self) -> f64 {
        self.game_time
    }

    /// Completed simulation days since start.
    pub fn current_day(&self) -> u64 {
        (self.game_time / SECS_PER_DAY as f64) as u64
    }

    /// Human-facing day counter, starting at 1.
    pub fn day_number(&self) -> u64 {
        self.day_number
    }

    // ── Read accessors ──────────────────────────────────────────────────

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn resources(&self) -> &ColonyResources {
        &self.resources
    }

    pub fn caps(&self) -> &ResourceCaps {
        &self.caps
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    pub fn colonist_count(&self) -> usize {
        self.world.query::<&Person>().iter().count()
    }

    /// Per-colonist snapshot of needs, happiness, and assignments.
    pub fn colonist_statuses(&self) -> Vec<ColonistStatus> {
        self.world
            .query::<(
                &Person,
                &Identity,
                &Biometrics,
                &Needs,
                &Assignment,
                &Happiness,
            )>()
            .iter()
            .map(
                |(_, (_, identity, biometrics, needs, assignment, happiness))| ColonistStatus {
                    name: identity.name(),
                    sex: identity.sex,
                    age: identity.age,
                    weight_kg: biometrics.weight_kg,
                    bmi: biometrics.bmi(),
                    thirst: needs.thirst,
                    bathroom: needs.bathroom,
                    hunger: needs.hunger,
                    sleep: needs.sleep,
                    happiness: happiness.value,
                    assigned_bed: assignment.assigned_bed,
                    assigned_job: assignment.assigned_job,
                    days_without_job: assignment.days_without_job,
                },
            )
            .collect()
    }

    /// Per-component snapshot of operational state and wear.
    pub fn component_statuses(&self) -> Vec<ComponentStatus> {
        self.world
            .query::<&EnvComponent>()
            .iter()
            .map(|(_, component)| ComponentStatus {
                name: component.name.clone(),
                operational: component.operational,
                condition: component.condition,
                time_since_maintenance: component.time_since_maintenance,
                maintenance_interval: component.maintenance_interval,
            })
            .collect()
    }

    /// Most recent environmental-monitor reading, if any.
    pub fn latest_reading(&self) -> Option<EnvReading> {
        self.world
            .query::<&EnvComponent>()
            .iter()
            .find_map(|(_, component)| component.latest_reading().copied())
    }

    // ── Assignment commands ─────────────────────────────────────────────

    /// Assign a bed. Fails when the habitation module is full.
    pub fn assign_bed(&mut self, colonist: Entity) -> bool {
        let Ok(mut assignment) = self.world.get::<&mut Assignment>(colonist) else {
            return false;
        };
        if assignment.assigned_bed {
            return true;
        }
        if self.beds_assigned >= self.config.bed_capacity {
            return false;
        }
        assignment.assigned_bed = true;
        drop(assignment);
        self.beds_assigned += 1;
        true
    }

    pub fn unassign_bed(&mut self, colonist: Entity) -> bool {
        let Ok(mut assignment) = self.world.get::<&mut Assignment>(colonist) else {
            return false;
        };
        if assignment.assigned_bed {
            assignment.assigned_bed = false;
            drop(assignment);
            self.beds_assigned = self.beds_assigned.saturating_sub(1);
        }
        true
    }

    /// Assign a job; the jobless-day counter resets on hire.
    pub fn assign_job(&mut self, colonist: Entity) -> bool {
        let Ok(mut assignment) = self.world.get::<&mut Assignment>(colonist) else {
            return false;
        };
        assignment.assigned_job = true;
        assignment.days_without_job = 0;
        true
    }

    pub fn unassign_job(&mut self, colonist: Entity) -> bool {
        let Ok(mut assignment) = self.world.get::<&mut Assignment>(colonist) else {
            return false;
        };
        assignment.assigned_job = false;
        true
    }

    // ── Need satisfaction commands ──────────────────────────────────────

    /// Drink from the shared water supply. Fails when the tank is dry.
    pub fn drink(&mut self, colonist: Entity) -> bool {
        if self.resources.h2o < satisfaction::DRINK_H2O_LITERS {
            return false;
        }
        let Ok(mut needs) = self.world.get::<&mut Needs>(colonist) else {
            return false;
        };
        needs.satisfy(NeedKind::Thirst, NEED_MAX);
        drop(needs);
        self.resources.h2o -= satisfaction::DRINK_H2O_LITERS;
        true
    }

    /// Eat a meal from stores. Fails when none remain.
    pub fn eat(&mut self, colonist: Entity) -> bool {
        if self.resources.meals < satisfaction::MEAL_PORTION {
            return false;
        }
        let Ok(mut needs) = self.world.get::<&mut Needs>(colonist) else {
            return false;
        };
        needs.satisfy(NeedKind::Hunger, NEED_MAX);
        drop(needs);
        self.resources.meals -= satisfaction::MEAL_PORTION;
        true
    }

    /// Use the facilities; output lands in the waste ledgers.
    pub fn relieve(&mut self, colonist: Entity) -> bool {
        let Ok(mut needs) = self.world.get::<&mut Needs>(colonist) else {
            return false;
        };
        needs.satisfy(NeedKind::Bathroom, NEED_MAX);
        drop(needs);
        self.resources.solid_waste += satisfaction::SOLID_WASTE_PER_VISIT;
        self.resources.liquid_waste += satisfaction::LIQUID_WASTE_PER_VISIT;
        true
    }

    /// A full night's rest clears the accumulated sleep debt.
    pub fn rest(&mut self, colonist: Entity) -> bool {
        let Ok(mut needs) = self.world.get::<&mut Needs>(colonist) else {
            return false;
        };
        needs.satisfy(NeedKind::Sleep, SLEEP_MAX);
        true
    }

    // ── Maintenance commands ────────────────────────────────────────────

    /// Routine maintenance on the named component.
    pub fn perform_maintenance(&mut self, name: &str) -> bool {
        let Some(entity) = self.find_component(name) else {
            return false;
        };
        if let Ok(mut component) = self.world.get::<&mut EnvComponent>(entity) {
            component.perform_maintenance();
            log::info!("{} maintained, condition {:.2}", name, component.condition);
            true
        } else {
            false
        }
    }

    /// Full repair of the named component.
    pub fn repair(&mut self, name: &str) -> bool {
        let Some(entity) = self.find_component(name) else {
            return false;
        };
        if let Ok(mut component) = self.world.get::<&mut EnvComponent>(entity) {
            component.repair();
            log::info!("{name} repaired");
            true
        } else {
            false
        }
    }

    /// Routine maintenance across the whole component suite.
    pub fn perform_maintenance_all(&mut self) {
        for (_, component) in self.world.query_mut::<&mut EnvComponent>() {
            component.perform_maintenance();
        }
    }

    fn find_component(&self, name: &str) -> Option<Entity> {
        self.world
            .query::<&EnvComponent>()
            .iter()
            .find(|(_, component)| component.name == name)
            .map(|(entity, _)| entity)
    }

    fn recount_beds(&mut self) {
        self.beds_assigned = self
            .world
            .query::<(&Person, &Assignment)>()
            .iter()
            .filter(|(_, (_, assignment))| assignment.assigned_bed)
            .count() as u32;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_creation() {
        let sim = Simulation::new(SimConfig::default()).unwrap();
        assert_eq!(sim.colonist_count(), 0);
        assert_eq!(sim.sim_time(), 0.0);
        assert_eq!(sim.day_number(), 1);
        assert_eq!(sim.component_statuses().len(), 6);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = SimConfig {
            time_scale: 0.0,
            ..Default::default()
        };
        assert!(Simulation::new(config).is_err());
    }

    #[test]
    fn test_spawn_tracks_population() {
        let mut sim = Simulation::new(SimConfig::default()).unwrap();
        sim.spawn_colonist(ColonistSpec::default());
        sim.spawn_colonist(ColonistSpec::default());
        assert_eq!(sim.colonist_count(), 2);
        assert_eq!(sim.resources().population, 2);
    }

    #[test]
    fn test_step_advances_clocks() {
        let mut sim = Simulation::new(SimConfig::default()).unwrap();
        sim.step(1.0);
        assert!((sim.sim_time() - 1.0).abs() < 1e-9);
        assert!((sim.game_time() - 960.0).abs() < 1e-3);
        assert_eq!(sim.current_day(), 0);
    }

    #[test]
    fn test_scrubber_and_breathing_tick() {
        // One colonist and a healthy scrubber: one real second at 960x
        // scrubs far more CO2 than exists, and breathing draws the
        // reference 588 L/day rate.
        let config = SimConfig {
            initial_o2: 4_000.0,
            max_o2: 4_000.0,
            initial_co2: 400.0,
            ..Default::default()
        };
        let mut sim = Simulation::new(config).unwrap();
        sim.spawn_colonist(ColonistSpec::default());

        sim.step(1.0);

        let expected_draw = 588.0 / 86_400.0 * 960.0;
        assert_eq!(sim.resources().co2, 0.0);
        assert!((sim.resources().o2 - (4_000.0 - expected_draw)).abs() < 0.01);
    }

    #[test]
    fn test_fe_stays_pinned() {
        let mut sim = Simulation::new(SimConfig::default()).unwrap();
        sim.spawn_colonist(ColonistSpec::default());
        for _ in 0..100 {
            sim.step(1.0);
        }
        assert_eq!(sim.resources().fe, 0.0);
    }

    #[test]
    fn test_resources_within_bounds_over_many_ticks() {
        let mut sim = Simulation::new(SimConfig::default()).unwrap();
        sim.spawn_colonist(ColonistSpec::default());
        for _ in 0..500 {
            sim.step(0.5);
            let r = sim.resources();
            let caps = sim.caps();
            assert!(r.o2 >= 0.0 && r.o2 <= caps.o2);
            assert!(r.h2o >= 0.0 && r.h2o <= caps.h2o);
            assert!(r.meals >= 0.0 && r.meals <= caps.meals);
            assert!(r.co2 >= 0.0);
        }
    }

    #[test]
    fn test_neglected_colonist_dies_on_day_three() {
        let mut sim = Simulation::new(SimConfig::default()).unwrap();
        sim.spawn_colonist(ColonistSpec::default());

        // 91 real seconds is a hair over one simulation day at 960x, so
        // sleep debt is safely past each day's worth when the boundary fires.
        sim.step(91.0);
        sim.step(91.0);
        assert_eq!(sim.colonist_count(), 1);
        sim.step(91.0); // sleep debt caps at 3.0 as day 3 closes
        assert_eq!(sim.colonist_count(), 0);
        assert_eq!(sim.resources().population, 0);
        assert_eq!(sim.day_number(), 4);
    }

    #[test]
    fn test_rested_colonist_survives() {
        let mut sim = Simulation::new(SimConfig::default()).unwrap();
        let colonist = sim.spawn_colonist(ColonistSpec::default());

        for _ in 0..5 {
            sim.step(89.0);
            sim.rest(colonist);
            sim.eat(colonist);
            sim.step(1.0);
        }
        assert_eq!(sim.colonist_count(), 1);
    }

    #[test]
    fn test_bed_capacity_enforced() {
        let mut sim = Simulation::new(SimConfig::default()).unwrap();
        let colonists: Vec<_> = (0..5)
            .map(|_| sim.spawn_colonist(ColonistSpec::default()))
            .collect();

        for colonist in &colonists[..4] {
            assert!(sim.assign_bed(*colonist));
        }
        assert!(!sim.assign_bed(colonists[4]));

        sim.unassign_bed(colonists[0]);
        assert!(sim.assign_bed(colonists[4]));
    }

    #[test]
    fn test_job_assignment_resets_counter() {
        let mut sim = Simulation::new(SimConfig::default()).unwrap();
        let colonist = sim.spawn_colonist(ColonistSpec::default());

        sim.step(90.0); // one day jobless
        let statuses = sim.colonist_statuses();
        assert_eq!(statuses[0].days_without_job, 1);

        sim.assign_job(colonist);
        let statuses = sim.colonist_statuses();
        assert_eq!(statuses[0].days_without_job, 0);
        assert!(statuses[0].assigned_job);
    }

    #[test]
    fn test_drink_consumes_water() {
        let mut sim = Simulation::new(SimConfig::default()).unwrap();
        let colonist = sim.spawn_colonist(ColonistSpec::default());
        sim.step(20.0); // build up some thirst
        let water_before = sim.resources().h2o;

        assert!(sim.drink(colonist));
        assert_eq!(sim.colonist_statuses()[0].thirst, 0.0);
        assert!(sim.resources().h2o < water_before);
    }

    #[test]
    fn test_eat_fails_without_meals() {
        let config = SimConfig {
            initial_meals: 0.0,
            ..Default::default()
        };
        let mut sim = Simulation::new(config).unwrap();
        let colonist = sim.spawn_colonist(ColonistSpec::default());
        assert!(!sim.eat(colonist));
    }

    #[test]
    fn test_relieve_produces_waste() {
        let mut sim = Simulation::new(SimConfig::default()).unwrap();
        let colonist = sim.spawn_colonist(ColonistSpec::default());
        assert!(sim.relieve(colonist));
        assert!(sim.resources().solid_waste > 0.0);
        assert!(sim.resources().liquid_waste > 0.0);
    }

    #[test]
    fn test_maintenance_by_name() {
        let mut sim = Simulation::new(SimConfig::default()).unwrap();
        assert!(sim.perform_maintenance("CO2 Scrubber"));
        assert!(sim.repair("O2 Controller"));
        assert!(!sim.repair("Warp Drive"));
    }

    #[test]
    fn test_components_fail_without_maintenance_and_repair_restores() {
        let mut sim = Simulation::new(SimConfig::default()).unwrap();
        // A full simulation day is far past the default maintenance
        // interval; everything wears out.
        for _ in 0..90 {
            sim.step(1.0);
        }
        assert!(sim
            .component_statuses()
            .iter()
            .all(|status| !status.operational));

        assert!(sim.repair("CO2 Scrubber"));
        let statuses = sim.component_statuses();
        let scrubber = statuses
            .iter()
            .find(|status| status.name == "CO2 Scrubber")
            .unwrap();
        assert!(scrubber.operational);
        assert_eq!(scrubber.condition, 1.0);
    }

    #[test]
    fn test_monitor_keeps_recording() {
        let mut sim = Simulation::new(SimConfig::default()).unwrap();
        sim.step(1.0);
        sim.step(1.0);
        let reading = sim.latest_reading().unwrap();
        assert!((reading.timestamp_secs - 1_920.0).abs() < 1e-3);
    }
}
