//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::TowerKind;

/// Creation order of an entity. hecs does not preserve insertion order
/// across despawns, so systems that depend on order sort by this.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Sequence(pub u64);

/// An enemy walking the path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    /// Units per tick.
    pub speed: f64,
    pub health: f64,
    pub max_health: f64,
    /// Money and score awarded on death.
    pub reward: i64,
    /// Collision radius.
    pub size: f64,
    /// Simulation time of the most recent hit (display only).
    pub last_hit_ms: Option<f64>,
}

/// Progress along the shared waypoint path.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PathProgress {
    /// Index of the waypoint most recently reached. Never decreases.
    pub path_index: usize,
    /// Set once, on the tick after the last waypoint is reached.
    pub reached_end: bool,
}

/// A player-built tower.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tower {
    pub kind: TowerKind,
    pub range: f64,
    pub damage: f64,
    pub fire_rate_ms: f64,
    pub splash_radius: Option<f64>,
    /// Reload window in whole ticks, derived from `fire_rate_ms`.
    pub reload_ticks: u64,
    /// Tick of the last shot. `None` until the first shot, so a fresh
    /// tower can fire at once.
    pub last_shot_tick: Option<u64>,
    /// Barrel facing in radians. Visual only.
    pub rotation: f64,
    pub level: u32,
}

/// A projectile in flight. Its target handle lives in the sim crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub damage: f64,
    /// Present for area-damage projectiles.
    pub splash_radius: Option<f64>,
    /// Re-aim at the target every tick.
    pub tracking: bool,
    /// Heading in radians toward the last aim point. Visual only.
    pub angle: f64,
}
