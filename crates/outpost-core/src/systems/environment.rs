//! Environmental-control pass - wear accrual and per-variant effects
//! against the shared ledger and the habitat atmosphere.

use hecs::World;

use outpost_logic::config::SimConfig;
use outpost_logic::environment::{assess_hazard, Environment, Hazard};

use crate::components::{ComponentKind, EnvComponent, EnvReading};
use crate::resources::{ColonyResources, ResourceCaps};

/// Run every environmental-control component for one tick.
///
/// `dt_sim` is simulation seconds. Wear accrues first; a component that
/// fails during this tick contributes no effect. Non-operational
/// components are skipped silently - that is their documented behavior,
/// not an error.
pub fn environment_control_system(
    world: &mut World,
    config: &SimConfig,
    caps: &ResourceCaps,
    resources: &mut ColonyResources,
    environment: &mut Environment,
    game_time: f64,
    dt_sim: f32,
) {
    for (_, component) in world.query_mut::<&mut EnvComponent>() {
        let was_operational = component.operational;
        if !component.tick_wear(dt_sim, config.condition_decay_rate) {
            if was_operational {
                log::info!("{} failed - condition exhausted", component.name);
            }
            continue;
        }

        let condition = component.condition;
        match &mut component.kind {
            ComponentKind::Co2Scrubber { scrub_rate } => {
                let reduction = *scrub_rate * condition * dt_sim;
                resources.co2 = (resources.co2 - reduction).max(0.0);
            }
            ComponentKind::O2Controller {
                setpoint_mmhg,
                fill_gain,
                vent_gain,
            } => {
                let diff = *setpoint_mmhg - environment.o2_partial_pressure_mmhg;
                if diff > 0.0 {
                    let added = diff * *fill_gain * condition * dt_sim;
                    resources.o2 = (resources.o2 + added).min(caps.o2);
                } else if diff < 0.0 {
                    let vented = diff.abs() * *vent_gain * condition * dt_sim;
                    resources.o2 = (resources.o2 - vented).max(0.0);
                }
            }
            ComponentKind::PressureRegulator { target_hpa } => {
                // Observes the deficit but moves nothing: there is no
                // diluent-gas ledger to draw on or vent into.
                // TODO: consume N2 from a diluent ledger once one exists.
                let _deficit = *target_hpa - environment.pressure_hpa;
            }
            ComponentKind::HumidityController {
                setpoint_pct,
                water_gain,
                rh_gain,
            } => {
                let diff = *setpoint_pct - environment.relative_humidity_pct;
                if diff > 0.0 {
                    // Humidifying draws on the water supply.
                    let consumed = (diff * *water_gain * condition * dt_sim).min(resources.h2o);
                    resources.h2o = (resources.h2o - consumed).max(0.0);
                    environment.relative_humidity_pct += diff * *rh_gain * condition * dt_sim;
                } else {
                    // Condensate from dehumidifying is not reclaimed.
                    environment.relative_humidity_pct += diff * *rh_gain * condition * dt_sim;
                }
            }
            ComponentKind::Monitor { readings } => {
                let reading = EnvReading {
                    timestamp_secs: game_time,
                    o2_liters: resources.o2,
                    co2_ppm: resources.co2,
                    pressure_hpa: environment.pressure_hpa,
                    relative_humidity_pct: environment.relative_humidity_pct,
                    o2_partial_pressure_mmhg: environment.o2_partial_pressure_mmhg,
                };
                readings.push(reading);

                let assessed = Environment {
                    co2_ppm: resources.co2,
                    ..*environment
                };
                let hazard = assess_hazard(&assessed);
                if hazard >= Hazard::Danger {
                    log::warn!(
                        "{}: atmosphere at {:?} (CO2 {:.0} ppm, O2 pp {:.0} mmHg, {:.0} hPa)",
                        component.name,
                        hazard,
                        assessed.co2_ppm,
                        assessed.o2_partial_pressure_mmhg,
                        assessed.pressure_hpa,
                    );
                }
            }
            ComponentKind::Ventilation => {
                // Atmosphere is modeled as a single well-mixed volume.
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scrubber(scrub_rate: f32) -> EnvComponent {
        EnvComponent::new(
            "CO2 Scrubber",
            ComponentKind::Co2Scrubber { scrub_rate },
            10_000.0,
        )
    }

    fn setup() -> (SimConfig, ResourceCaps, ColonyResources, Environment) {
        let config = SimConfig::default();
        let caps = ResourceCaps::from_config(&config);
        let resources = ColonyResources {
            o2: 3_000.0,
            h2o: 500.0,
            co2: 400.0,
            ..Default::default()
        };
        let environment = Environment::nominal(resources.co2);
        (config, caps, resources, environment)
    }

    #[test]
    fn test_scrubber_removes_co2() {
        let (config, caps, mut resources, mut env) = setup();
        let mut world = World::new();
        world.spawn((scrubber(5.0),));

        environment_control_system(&mut world, &config, &caps, &mut resources, &mut env, 0.0, 10.0);
        // 5.0 ppm/s at full condition over 10 sim seconds.
        assert!((resources.co2 - 350.0).abs() < 1e-3);
    }

    #[test]
    fn test_scrubber_floors_co2_at_zero() {
        let (config, caps, mut resources, mut env) = setup();
        let mut world = World::new();
        world.spawn((scrubber(5.0),));

        environment_control_system(
            &mut world,
            &config,
            &caps,
            &mut resources,
            &mut env,
            0.0,
            960.0,
        );
        // 4800 ppm of scrubbing against 400 ppm of CO2.
        assert_eq!(resources.co2, 0.0);
    }

    #[test]
    fn test_degraded_scrubber_is_less_effective() {
        let (config, caps, mut resources, mut env) = setup();
        let mut world = World::new();
        let mut comp = scrubber(5.0);
        comp.condition = 0.5;
        world.spawn((comp,));

        environment_control_system(&mut world, &config, &caps, &mut resources, &mut env, 0.0, 10.0);
        assert!((resources.co2 - 375.0).abs() < 1e-3);
    }

    #[test]
    fn test_failed_component_is_a_noop() {
        let (config, caps, mut resources, mut env) = setup();
        let mut world = World::new();
        let mut comp = scrubber(5.0);
        comp.condition = 0.0;
        comp.operational = false;
        world.spawn((comp,));

        environment_control_system(&mut world, &config, &caps, &mut resources, &mut env, 0.0, 10.0);
        assert_eq!(resources.co2, 400.0);
    }

    #[test]
    fn test_o2_controller_replenishes_deficit() {
        let (config, caps, mut resources, mut env) = setup();
        env.o2_partial_pressure_mmhg = 200.0; // 10 mmHg under setpoint
        let mut world = World::new();
        world.spawn((EnvComponent::new(
            "O2 Controller",
            ComponentKind::O2Controller {
                setpoint_mmhg: 210.0,
                fill_gain: 0.1,
                vent_gain: 0.05,
            },
            10_000.0,
        ),));

        environment_control_system(&mut world, &config, &caps, &mut resources, &mut env, 0.0, 10.0);
        // 10 mmHg deficit * 0.1 gain * 10 s = +10 L.
        assert!((resources.o2 - 3_010.0).abs() < 1e-3);
    }

    #[test]
    fn test_o2_controller_caps_at_storage() {
        let (config, caps, mut resources, mut env) = setup();
        resources.o2 = caps.o2 - 1.0;
        env.o2_partial_pressure_mmhg = 100.0;
        let mut world = World::new();
        world.spawn((EnvComponent::new(
            "O2 Controller",
            ComponentKind::O2Controller {
                setpoint_mmhg: 210.0,
                fill_gain: 0.1,
                vent_gain: 0.05,
            },
            10_000.0,
        ),));

        environment_control_system(&mut world, &config, &caps, &mut resources, &mut env, 0.0, 60.0);
        assert_eq!(resources.o2, caps.o2);
    }

    #[test]
    fn test_o2_controller_vents_surplus_slower() {
        let (config, caps, mut resources, mut env) = setup();
        env.o2_partial_pressure_mmhg = 220.0; // 10 mmHg over setpoint
        let mut world = World::new();
        world.spawn((EnvComponent::new(
            "O2 Controller",
            ComponentKind::O2Controller {
                setpoint_mmhg: 210.0,
                fill_gain: 0.1,
                vent_gain: 0.05,
            },
            10_000.0,
        ),));

        environment_control_system(&mut world, &config, &caps, &mut resources, &mut env, 0.0, 10.0);
        // Venting uses the smaller gain: 10 * 0.05 * 10 = 5 L.
        assert!((resources.o2 - 2_995.0).abs() < 1e-3);
    }

    #[test]
    fn test_humidifier_consumes_water() {
        let (config, caps, mut resources, mut env) = setup();
        env.relative_humidity_pct = 30.0; // 20 points under setpoint
        let mut world = World::new();
        world.spawn((EnvComponent::new(
            "Humidity Controller",
            ComponentKind::HumidityController {
                setpoint_pct: 50.0,
                water_gain: 0.01,
                rh_gain: 0.1,
            },
            10_000.0,
        ),));

        environment_control_system(&mut world, &config, &caps, &mut resources, &mut env, 0.0, 10.0);
        // 20 * 0.01 * 10 = 2 L of water.
        assert!((resources.h2o - 498.0).abs() < 1e-3);
        assert!(env.relative_humidity_pct > 30.0);
    }

    #[test]
    fn test_humidifier_bounded_by_available_water() {
        let (config, caps, mut resources, mut env) = setup();
        resources.h2o = 0.5;
        env.relative_humidity_pct = 0.0;
        let mut world = World::new();
        world.spawn((EnvComponent::new(
            "Humidity Controller",
            ComponentKind::HumidityController {
                setpoint_pct: 50.0,
                water_gain: 0.01,
                rh_gain: 0.1,
            },
            10_000.0,
        ),));

        environment_control_system(
            &mut world,
            &config,
            &caps,
            &mut resources,
            &mut env,
            0.0,
            100.0,
        );
        assert_eq!(resources.h2o, 0.0);
    }

    #[test]
    fn test_dehumidifying_tracks_no_resource() {
        let (config, caps, mut resources, mut env) = setup();
        env.relative_humidity_pct = 80.0;
        let mut world = World::new();
        world.spawn((EnvComponent::new(
            "Humidity Controller",
            ComponentKind::HumidityController {
                setpoint_pct: 50.0,
                water_gain: 0.01,
                rh_gain: 0.1,
            },
            10_000.0,
        ),));

        environment_control_system(&mut world, &config, &caps, &mut resources, &mut env, 0.0, 10.0);
        assert_eq!(resources.h2o, 500.0);
        assert!(env.relative_humidity_pct < 80.0);
    }

    #[test]
    fn test_monitor_records_each_tick() {
        let (config, caps, mut resources, mut env) = setup();
        let mut world = World::new();
        let entity = world.spawn((EnvComponent::new(
            "Environmental Monitor",
            ComponentKind::Monitor {
                readings: Vec::new(),
            },
            10_000.0,
        ),));

        for i in 0..3 {
            environment_control_system(
                &mut world,
                &config,
                &caps,
                &mut resources,
                &mut env,
                i as f64 * 960.0,
                960.0,
            );
        }

        let component = world.get::<&EnvComponent>(entity).unwrap();
        let latest = component.latest_reading().unwrap();
        assert_eq!(latest.timestamp_secs, 1_920.0);
        if let ComponentKind::Monitor { readings } = &component.kind {
            assert_eq!(readings.len(), 3);
        } else {
            unreachable!();
        }
    }

    #[test]
    fn test_placeholders_move_nothing() {
        let (config, caps, mut resources, mut env) = setup();
        let mut world = World::new();
        world.spawn((EnvComponent::new(
            "Pressure Regulator",
            ComponentKind::PressureRegulator { target_hpa: 1013.0 },
            10_000.0,
        ),));
        world.spawn((EnvComponent::new(
            "Ventilation Controller",
            ComponentKind::Ventilation,
            10_000.0,
        ),));

        let before = resources;
        environment_control_system(&mut world, &config, &caps, &mut resources, &mut env, 0.0, 60.0);
        assert_eq!(resources.o2, before.o2);
        assert_eq!(resources.h2o, before.h2o);
        assert_eq!(resources.co2, before.co2);
    }
}
