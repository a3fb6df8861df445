//! Simulation engine for RAMPART.
//!
//! Owns the hecs ECS world, runs systems at a fixed tick rate,
//! and produces GameStateSnapshots for the host.

pub mod economy;
pub mod engine;
pub mod systems;
pub mod target;
pub mod world_setup;

pub use engine::SimulationEngine;
pub use rampart_core as core;
