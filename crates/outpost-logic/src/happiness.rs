//! Colonist happiness scoring — a weighted penalty over need levels and
//! assignment status, clamped to [0, 1].

use serde::{Deserialize, Serialize};

use crate::config::SimConfig;
use crate::constants::happiness::JOBLESS_SCALE_DAYS;

/// Inputs to the happiness computation, as plain data.
///
/// Need values above their nominal caps are tolerated — each is clamped
/// before weighting, so the result stays in [0, 1] for any input.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HappinessInput {
    pub thirst: f32,
    pub bathroom: f32,
    pub hunger: f32,
    pub sleep: f32,
    pub assigned_job: bool,
    pub assigned_bed: bool,
    pub days_without_job: u32,
}

/// Compute happiness from need levels and assignment status.
///
/// Sleep debt past 1.0 (a colonist running on more than a full day without
/// sleep) draws a surcharge of twice the sleep weight per unit of excess.
/// Joblessness phases in linearly over `JOBLESS_SCALE_DAYS` days.
pub fn compute_happiness(input: &HappinessInput, config: &SimConfig) -> f32 {
    let thirst = input.thirst.min(1.0);
    let bathroom = input.bathroom.min(1.0);
    let hunger = input.hunger.min(1.0);
    let sleep = input.sleep.min(1.0);

    let mut penalty = thirst * config.thirst_weight
        + bathroom * config.bathroom_weight
        + hunger * config.hunger_weight
        + sleep * config.sleep_weight;

    if input.sleep > 1.0 {
        let excess = input.sleep - 1.0;
        penalty += excess * config.sleep_weight * 2.0;
    }

    if !input.assigned_job {
        let scale = (input.days_without_job as f32 / JOBLESS_SCALE_DAYS).min(1.0);
        penalty += config.jobless_penalty * scale;
    }

    if !input.assigned_bed {
        penalty += config.no_bed_penalty;
    }

    (1.0 - penalty).clamp(0.0, 1.0)
}
