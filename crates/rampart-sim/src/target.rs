//! Projectile → enemy links.
//!
//! A projectile holds a `hecs::Entity` handle, never the enemy itself. The
//! handle is generational: once the enemy is despawned, lookups fail instead
//! of resolving to a recycled slot.

use hecs::{Entity, World};

use rampart_core::components::{Enemy, Sequence};
use rampart_core::types::Position;

/// The enemy a projectile is chasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectileTarget(pub Entity);

/// Result of resolving a target handle against the live world.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TargetLookup {
    /// Target exists with positive health.
    Alive { position: Position, size: f64 },
    /// Target still in the world but at or below zero health.
    Dead { position: Position },
    /// Target was despawned.
    Missing,
}

pub fn lookup(world: &World, entity: Entity) -> TargetLookup {
    let Ok(mut query) = world.query_one::<(&Position, &Enemy)>(entity) else {
        return TargetLookup::Missing;
    };
    match query.get() {
        Some((position, enemy)) if enemy.health > 0.0 => TargetLookup::Alive {
            position: *position,
            size: enemy.size,
        },
        Some((position, _)) => TargetLookup::Dead {
            position: *position,
        },
        None => TargetLookup::Missing,
    }
}

/// Point-in-time view of an enemy used for targeting and collision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemySighting {
    pub entity: Entity,
    pub position: Position,
    pub health: f64,
    pub size: f64,
}

/// All enemies in creation order.
pub fn enemies_in_order(world: &World) -> Vec<EnemySighting> {
    let mut sightings: Vec<(Sequence, EnemySighting)> = world
        .query::<(&Sequence, &Position, &Enemy)>()
        .iter()
        .map(|(entity, (seq, position, enemy))| {
            (
                *seq,
                EnemySighting {
                    entity,
                    position: *position,
                    health: enemy.health,
                    size: enemy.size,
                },
            )
        })
        .collect();
    sightings.sort_by_key(|(seq, _)| *seq);
    sightings.into_iter().map(|(_, s)| s).collect()
}

/// Nearest enemy with positive health. Ties keep the earliest-created enemy.
pub fn nearest_alive(from: &Position, enemies: &[EnemySighting]) -> Option<EnemySighting> {
    let mut best: Option<EnemySighting> = None;
    let mut best_distance = f64::INFINITY;
    for enemy in enemies.iter().filter(|e| e.health > 0.0) {
        let distance = from.distance_to(&enemy.position);
        if distance < best_distance {
            best_distance = distance;
            best = Some(*enemy);
        }
    }
    best
}
