//! Colonist metabolism - per-tick need advancement, happiness, gas
//! exchange against the shared ledger, and the end-of-day mortality pass.

use hecs::World;

use outpost_logic::config::SimConfig;
use outpost_logic::happiness::{compute_happiness, HappinessInput};
use outpost_logic::metabolism::{self, NeedRates};

use crate::components::{Assignment, Biometrics, Happiness, Identity, Needs, Person, SLEEP_MAX};
use crate::resources::ColonyResources;

/// Advance every colonist by one tick: needs rise, happiness is recomputed,
/// and the colonist's breathing draws on the shared ledger.
pub fn metabolism_system(
    world: &mut World,
    config: &SimConfig,
    rates: &NeedRates,
    resources: &mut ColonyResources,
    dt_real: f32,
) {
    for (_, (_, identity, biometrics, needs, assignment, happiness)) in world.query_mut::<(
        &Person,
        &Identity,
        &Biometrics,
        &mut Needs,
        &Assignment,
        &mut Happiness,
    )>() {
        needs.advance(rates, dt_real);

        happiness.value = compute_happiness(
            &HappinessInput {
                thirst: needs.thirst,
                bathroom: needs.bathroom,
                hunger: needs.hunger,
                sleep: needs.sleep,
                assigned_job: assignment.assigned_job,
                assigned_bed: assignment.assigned_bed,
                days_without_job: assignment.days_without_job,
            },
            config,
        );

        // Breathing: draw O2, return CO2 at the respiratory quotient.
        let daily_o2 = metabolism::daily_o2_liters(
            config,
            identity.sex,
            biometrics.weight_kg,
            biometrics.aerobic_capacity,
        );
        let o2_drawn = metabolism::per_tick_volume(daily_o2, dt_real, config.time_scale);
        resources.o2 = (resources.o2 - o2_drawn).max(0.0);

        let daily_co2 = daily_o2 * config.respiratory_quotient;
        let co2_produced = metabolism::per_tick_volume(daily_co2, dt_real, config.time_scale);
        resources.co2 += co2_produced;
    }
}

/// Increment the jobless-day counter for every colonist without work.
/// Runs once per day boundary, before the mortality pass.
pub fn increment_jobless_days(world: &mut World) {
    for (_, (_, assignment)) in world.query_mut::<(&Person, &mut Assignment)>() {
        if !assignment.assigned_job {
            assignment.days_without_job += 1;
        }
    }
}

/// End-of-day mortality pass. Returns the number of deaths.
///
/// Two passes in fixed order: terminal sleep deprivation first, then
/// starvation. Each pass collects its victims from a query snapshot and
/// despawns afterward - the roster is never mutated mid-iteration.
pub fn end_of_day_system(
    world: &mut World,
    config: &SimConfig,
    resources: &mut ColonyResources,
) -> u32 {
    let mut deaths = 0;

    // Pass 1: colonists who have gone three full days without sleep.
    let exhausted: Vec<(hecs::Entity, String)> = world
        .query::<(&Person, &Identity, &Needs)>()
        .iter()
        .filter(|(_, (_, _, needs))| needs.sleep >= SLEEP_MAX)
        .map(|(entity, (_, identity, _))| (entity, identity.name()))
        .collect();
    for (entity, name) in exhausted {
        let _ = world.despawn(entity);
        resources.population = resources.population.saturating_sub(1);
        deaths += 1;
        log::info!("{name} died of sleep deprivation");
    }

    // Pass 2: starving colonists waste away, then BMI decides.
    let mut starved: Vec<(hecs::Entity, String)> = Vec::new();
    for (entity, (_, identity, biometrics, needs)) in
        world.query_mut::<(&Person, &Identity, &mut Biometrics, &Needs)>()
    {
        if needs.hunger >= 1.0 {
            biometrics.weight_kg = metabolism::apply_daily_weight_loss(
                biometrics.weight_kg,
                config.daily_weight_loss_rate,
            );
            if metabolism::is_starved(
                config,
                identity.sex,
                biometrics.weight_kg,
                biometrics.height_cm,
            ) {
                starved.push((entity, identity.name()));
            }
        }
    }
    for (entity, name) in starved {
        let _ = world.despawn(entity);
        resources.population = resources.population.saturating_sub(1);
        deaths += 1;
        log::info!("{name} died of starvation");
    }

    deaths
}
