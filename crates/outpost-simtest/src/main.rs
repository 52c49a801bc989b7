//! Outpost Headless Simulation Harness
//!
//! Validates pure simulation logic and full engine behavior without a
//! render loop. Runs entirely in-process — no window, no input handling.
//!
//! Usage:
//!   cargo run -p outpost-simtest
//!   cargo run -p outpost-simtest -- --verbose

use outpost_core::engine::{ColonistStatus, ComponentStatus};
use outpost_core::prelude::*;
use outpost_logic::config::{validate_config, SimConfig};
use outpost_logic::environment::{assess_hazard, Environment, Hazard};
use outpost_logic::happiness::{compute_happiness, HappinessInput};
use outpost_logic::metabolism::{self, Sex};
use serde::Serialize;

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

/// End-of-run state dump, printed as JSON in verbose mode.
#[derive(Serialize)]
struct RunSnapshot<'a> {
    resources: &'a ColonyResources,
    colonists: Vec<ColonistStatus>,
    components: Vec<ComponentStatus>,
}

fn main() {
    let verbose = std::env::args().any(|a| a == "--verbose");
    println!("=== Outpost Simulation Harness ===\n");

    let mut results = Vec::new();

    // 1. Configuration validation
    results.extend(validate_configuration(verbose));

    // 2. Metabolic formulas
    results.extend(validate_metabolism(verbose));

    // 3. Happiness scoring
    results.extend(validate_happiness(verbose));

    // 4. Atmosphere hazard bands
    results.extend(validate_hazards(verbose));

    // 5. Scrubber tick scenario
    results.extend(validate_scrubber_scenario(verbose));

    // 6. Multi-day colony run
    results.extend(validate_colony_run(verbose));

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

// ── 1. Configuration ────────────────────────────────────────────────────

fn validate_configuration(_verbose: bool) -> Vec<TestResult> {
    println!("--- Configuration ---");
    let mut results = Vec::new();

    let errors = validate_config(&SimConfig::default());
    results.push(TestResult {
        name: "config_defaults_valid".into(),
        passed: errors.is_empty(),
        detail: format!("{} errors on default config", errors.len()),
    });

    let bad = SimConfig {
        time_scale: 0.0,
        thirst_saturation_secs: -1.0,
        daily_weight_loss_rate: 1.5,
        max_o2: -10.0,
        maintenance_interval_secs: 0.0,
        ..Default::default()
    };
    let errors = validate_config(&bad);
    results.push(TestResult {
        name: "config_bad_values_rejected".into(),
        passed: errors.len() == 5,
        detail: format!("{} errors collected (expected 5)", errors.len()),
    });

    results.push(TestResult {
        name: "config_engine_fails_fast".into(),
        passed: Simulation::new(SimConfig {
            sleep_saturation_secs: 0.0,
            ..Default::default()
        })
        .is_err(),
        detail: "zero saturation time refused at construction".into(),
    });

    results
}

// ── 2. Metabolism ───────────────────────────────────────────────────────

fn validate_metabolism(verbose: bool) -> Vec<TestResult> {
    println!("--- Metabolism ---");
    let mut results = Vec::new();
    let config = SimConfig::default();

    // Reference adult: 588 L O2/day.
    let daily = metabolism::daily_o2_liters(&config, Sex::Female, 70.0, 1.0);
    results.push(TestResult {
        name: "metabolism_reference_daily_o2".into(),
        passed: (daily - 588.0).abs() < 1e-3,
        detail: format!("70 kg adult consumes {daily:.1} L O2/day"),
    });

    // Per-tick conversion: one real second at 960x.
    let per_tick = metabolism::per_tick_volume(daily, 1.0, config.time_scale);
    let expected = 588.0 / 86_400.0 * 960.0;
    results.push(TestResult {
        name: "metabolism_per_tick_draw".into(),
        passed: (per_tick - expected).abs() < 1e-4,
        detail: format!("{per_tick:.4} L per 1s tick (expected {expected:.4})"),
    });

    // CO2 follows the respiratory quotient.
    let co2 = metabolism::daily_co2_liters(&config, Sex::Female, 70.0, 1.0);
    results.push(TestResult {
        name: "metabolism_respiratory_quotient".into(),
        passed: (co2 - daily * 0.85).abs() < 1e-3,
        detail: format!("{co2:.1} L CO2/day at RQ 0.85"),
    });

    // Weight and fitness scale the draw linearly.
    let heavy = metabolism::daily_o2_liters(&config, Sex::Female, 105.0, 1.0);
    let fit = metabolism::daily_o2_liters(&config, Sex::Female, 70.0, 1.3);
    results.push(TestResult {
        name: "metabolism_linear_scaling".into(),
        passed: (heavy - daily * 1.5).abs() < 1e-2 && (fit - daily * 1.3).abs() < 1e-2,
        detail: format!("105 kg → {heavy:.0} L, aerobic 1.3 → {fit:.0} L"),
    });

    // Starvation wasting compounds multiplicatively.
    let mut weight = 70.0;
    for _ in 0..30 {
        weight = metabolism::apply_daily_weight_loss(weight, config.daily_weight_loss_rate);
    }
    let closed_form = 70.0 * 0.995f32.powi(30);
    results.push(TestResult {
        name: "metabolism_weight_loss_compounds".into(),
        passed: (weight - closed_form).abs() < 1e-3,
        detail: format!("30 starved days: {weight:.2} kg (closed form {closed_form:.2})"),
    });

    if verbose {
        println!("  Daily O2 by body weight:");
        for w in [50.0, 70.0, 90.0, 110.0] {
            let d = metabolism::daily_o2_liters(&config, Sex::Female, w, 1.0);
            println!("    {w:5.1} kg → {d:6.1} L/day");
        }
    }

    results
}

// ── 3. Happiness ────────────────────────────────────────────────────────

fn validate_happiness(_verbose: bool) -> Vec<TestResult> {
    println!("--- Happiness ---");
    let mut results = Vec::new();
    let config = SimConfig::default();

    let base = HappinessInput {
        thirst: 0.0,
        bathroom: 0.0,
        hunger: 0.0,
        sleep: 0.0,
        assigned_job: true,
        assigned_bed: true,
        days_without_job: 0,
    };

    results.push(TestResult {
        name: "happiness_satisfied_is_full".into(),
        passed: (compute_happiness(&base, &config) - 1.0).abs() < f32::EPSILON,
        detail: "no needs, bed and job → 1.0".into(),
    });

    // Sweep: all combinations stay in [0, 1], even past nominal caps.
    let steps = [0.0, 0.5, 1.0, 2.5, 10.0];
    let mut in_range = 0;
    let mut total = 0;
    for &t in &steps {
        for &h in &steps {
            for &s in &steps {
                let input = HappinessInput {
                    thirst: t,
                    hunger: h,
                    sleep: s,
                    assigned_job: false,
                    assigned_bed: false,
                    days_without_job: 50,
                    ..base
                };
                let value = compute_happiness(&input, &config);
                total += 1;
                if (0.0..=1.0).contains(&value) {
                    in_range += 1;
                }
            }
        }
    }
    results.push(TestResult {
        name: "happiness_sweep_clamped".into(),
        passed: in_range == total,
        detail: format!("{in_range}/{total} combinations in [0, 1]"),
    });

    // Severe sleep debt outweighs the same need at its nominal cap.
    let tired = HappinessInput {
        sleep: 1.0,
        ..base
    };
    let wrecked = HappinessInput {
        sleep: 3.0,
        ..base
    };
    results.push(TestResult {
        name: "happiness_sleep_debt_surcharge".into(),
        passed: compute_happiness(&wrecked, &config) < compute_happiness(&tired, &config),
        detail: "sleep debt past 1.0 keeps costing".into(),
    });

    results
}

// ── 4. Hazard bands ─────────────────────────────────────────────────────

fn validate_hazards(_verbose: bool) -> Vec<TestResult> {
    println!("--- Atmosphere Hazards ---");
    let mut results = Vec::new();

    let nominal = Environment::default();
    results.push(TestResult {
        name: "hazard_nominal_safe".into(),
        passed: assess_hazard(&nominal) == Hazard::Safe,
        detail: "nominal atmosphere is safe".into(),
    });

    // CO2 severity is monotone in concentration.
    let levels: Vec<Hazard> = [400.0, 2_000.0, 8_000.0, 50_000.0]
        .iter()
        .map(|&ppm| assess_hazard(&Environment::nominal(ppm)))
        .collect();
    let monotone = levels.windows(2).all(|pair| pair[0] <= pair[1]);
    results.push(TestResult {
        name: "hazard_co2_monotone".into(),
        passed: monotone
            && levels[0] == Hazard::Safe
            && levels[3] == Hazard::Lethal,
        detail: format!("{levels:?}"),
    });

    let mut thin = Environment::default();
    thin.o2_partial_pressure_mmhg = 80.0;
    results.push(TestResult {
        name: "hazard_low_o2_danger".into(),
        passed: assess_hazard(&thin) == Hazard::Danger,
        detail: "80 mmHg O2 partial pressure → Danger".into(),
    });

    results
}

// ── 5. Scrubber scenario ────────────────────────────────────────────────

fn validate_scrubber_scenario(_verbose: bool) -> Vec<TestResult> {
    println!("--- Scrubber Scenario ---");
    let mut results = Vec::new();

    // Pool seeded with O2=4000 L / CO2=400 ppm, one 70 kg colonist, one
    // healthy scrubber. One real second at 960x scrubs 4800 ppm — the
    // whole CO2 inventory — while breathing draws the 588 L/day baseline.
    let config = SimConfig {
        initial_o2: 4_000.0,
        max_o2: 4_000.0,
        initial_co2: 400.0,
        ..Default::default()
    };
    let mut sim = Simulation::new(config).expect("scenario config is valid");
    sim.spawn_colonist(ColonistSpec::default());

    sim.step(1.0);

    let expected_o2 = 4_000.0 - 588.0 / 86_400.0 * 960.0;
    results.push(TestResult {
        name: "scenario_co2_clamped_to_zero".into(),
        passed: sim.resources().co2 == 0.0,
        detail: format!("CO2 after tick: {} ppm", sim.resources().co2),
    });
    results.push(TestResult {
        name: "scenario_o2_draw_matches_baseline".into(),
        passed: (sim.resources().o2 - expected_o2).abs() < 0.01,
        detail: format!(
            "O2 after tick: {:.3} L (expected {:.3})",
            sim.resources().o2,
            expected_o2
        ),
    });

    // Let the suite wear out: CO2 then accumulates from breathing alone.
    let mut dead_scrubber_sim = {
        let config = SimConfig {
            initial_co2: 400.0,
            ..Default::default()
        };
        Simulation::new(config).expect("valid config")
    };
    dead_scrubber_sim.spawn_colonist(ColonistSpec::default());
    for _ in 0..30 {
        dead_scrubber_sim.step(1.0);
    }
    let all_failed = dead_scrubber_sim
        .component_statuses()
        .iter()
        .all(|s| !s.operational);
    let co2_rising = dead_scrubber_sim.resources().co2 > 0.0;
    results.push(TestResult {
        name: "scenario_failed_suite_is_noop".into(),
        passed: all_failed && co2_rising,
        detail: format!(
            "suite failed after 30s: {all_failed}, CO2 {:.1} ppm",
            dead_scrubber_sim.resources().co2
        ),
    });

    results
}

// ── 6. Colony run ───────────────────────────────────────────────────────

fn validate_colony_run(verbose: bool) -> Vec<TestResult> {
    println!("--- Colony Run ---");
    let mut results = Vec::new();

    let config = SimConfig {
        initial_meals: 200.0,
        max_meals: 200.0,
        ..Default::default()
    };
    let mut sim = Simulation::new(config).expect("valid config");
    let alice = sim.spawn_colonist(ColonistSpec::default());
    let bob = sim.spawn_colonist(ColonistSpec {
        first_name: "Bob".into(),
        last_name: "Iwu".into(),
        sex: Sex::Male,
        weight_kg: 82.0,
        ..Default::default()
    });
    sim.assign_bed(alice);
    sim.assign_job(alice);

    // Five days: Alice is cared for, Bob is neglected entirely.
    for _ in 0..5 {
        for _ in 0..13 {
            sim.step(7.0);
            sim.drink(alice);
            sim.eat(alice);
            sim.relieve(alice);
            sim.rest(alice);
        }
    }

    results.push(TestResult {
        name: "run_neglect_is_fatal".into(),
        passed: sim.colonist_count() == 1 && sim.resources().population == 1,
        detail: format!(
            "{} colonist(s) alive after 5 days",
            sim.colonist_count()
        ),
    });

    let statuses = sim.colonist_statuses();
    let survivor = &statuses[0];
    results.push(TestResult {
        name: "run_survivor_is_the_cared_one".into(),
        passed: survivor.name == "Alice Smith" && survivor.happiness > 0.4,
        detail: format!("{} at happiness {:.2}", survivor.name, survivor.happiness),
    });

    results.push(TestResult {
        name: "run_invariants_hold".into(),
        passed: sim.resources().fe == 0.0
            && sim.resources().o2 >= 0.0
            && sim.resources().o2 <= sim.caps().o2
            && sim.resources().co2 >= 0.0,
        detail: "Fe pinned, O2 within [0, cap], CO2 non-negative".into(),
    });

    results.push(TestResult {
        name: "run_day_counter".into(),
        passed: sim.day_number() == sim.current_day() + 1,
        detail: format!("day {} after 5 simulated days", sim.day_number()),
    });

    if verbose {
        let snapshot = RunSnapshot {
            resources: sim.resources(),
            colonists: sim.colonist_statuses(),
            components: sim.component_statuses(),
        };
        match serde_json::to_string_pretty(&snapshot) {
            Ok(rendered) => println!("  Final snapshot:\n{rendered}"),
            Err(e) => println!("  snapshot serialization failed: {e}"),
        }
    }

    results
}
