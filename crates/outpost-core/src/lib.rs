//! Outpost Core - Colony Life-Support Simulation Engine
//!
//! An ECS-based simulation of a planetary outpost: colonists with
//! physiological needs, a shared atmospheric resource ledger, and the
//! environmental-control hardware that keeps both alive.
//!
//! # Architecture
//!
//! The simulation uses an Entity Component System (ECS) architecture via `hecs`:
//! - **Entities**: Colonists and environmental-control components
//! - **Components**: Pure data attached to entities (Needs, Biometrics, EnvComponent, etc.)
//! - **Systems**: Logic that queries and updates components each tick
//!
//! # Example
//!
//! ```rust,no_run
//! use outpost_core::prelude::*;
//! use outpost_logic::config::SimConfig;
//!
//! let mut sim = Simulation::new(SimConfig::default()).expect("valid config");
//! sim.spawn_colonist(ColonistSpec::default());
//!
//! // Run simulation from the embedding render loop
//! loop {
//!     sim.step(1.0 / 60.0); // 60 FPS
//! }
//! ```

pub mod components;
pub mod engine;
pub mod resources;
pub mod systems;

/// Commonly used types for convenient importing
pub mod prelude {
    pub use crate::components::*;
    pub use crate::engine::{ColonistSpec, Simulation};
    pub use crate::resources::{ColonyResources, ResourceCaps, ResourceKind};
}
