//! Per-tick systems, run by `SimulationEngine` in a fixed order.
//!
//! Each system is a free function over the `World` plus whatever engine
//! state it needs passed in explicitly (economy, event list, clock).

pub mod cleanup;
pub mod movement;
pub mod projectiles;
pub mod snapshot;
pub mod tower_targeting;
pub mod wave_spawner;
