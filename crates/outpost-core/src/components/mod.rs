//! Component definitions for the ECS simulation.
//!
//! Components are pure data structs attached to entities.
//! They have no tick behavior - that lives in systems.

mod habitat;
mod people;

pub use habitat::*;
pub use people::*;
