//! Entity spawn factories.
//!
//! Creates enemy, tower and projectile entities with their component
//! bundles. Every entity gets a `Sequence` from the shared counter.

use hecs::{Entity, World};

use rampart_core::components::*;
use rampart_core::constants::*;
use rampart_core::enums::TowerKind;
use rampart_core::types::{Position, SimTime, Velocity};

use crate::target::ProjectileTarget;

fn next_sequence(next_seq: &mut u64) -> Sequence {
    let seq = Sequence(*next_seq);
    *next_seq += 1;
    seq
}

/// Enemy health for a wave: 30 + 15 × wave.
pub fn enemy_health_for_wave(wave: u32) -> f64 {
    ENEMY_BASE_HEALTH + ENEMY_HEALTH_PER_WAVE * f64::from(wave)
}

/// Enemy kill reward for a wave: 15 + 3 × wave.
pub fn enemy_reward_for_wave(wave: u32) -> i64 {
    ENEMY_BASE_REWARD + ENEMY_REWARD_PER_WAVE * i64::from(wave)
}

/// Spawn an enemy scaled for `wave` at `position` (normally the first waypoint).
pub fn spawn_enemy(world: &mut World, next_seq: &mut u64, position: Position, wave: u32) -> Entity {
    let health = enemy_health_for_wave(wave);
    let enemy = Enemy {
        speed: ENEMY_SPEED,
        health,
        max_health: health,
        reward: enemy_reward_for_wave(wave),
        size: ENEMY_SIZE,
        last_hit_ms: None,
    };

    world.spawn((
        next_sequence(next_seq),
        position,
        enemy,
        PathProgress::default(),
    ))
}

/// Spawn a tower of `kind` with stats from the static table.
pub fn spawn_tower(
    world: &mut World,
    next_seq: &mut u64,
    kind: TowerKind,
    position: Position,
) -> Entity {
    let stats = kind.stats();
    let tower = Tower {
        kind,
        range: stats.range,
        damage: stats.damage,
        fire_rate_ms: stats.fire_rate_ms,
        splash_radius: stats.splash_radius,
        reload_ticks: SimTime::ticks_for_ms(stats.fire_rate_ms),
        last_shot_tick: None,
        rotation: 0.0,
        level: TOWER_DEFAULT_LEVEL,
    };

    world.spawn((next_sequence(next_seq), position, tower))
}

/// Spawn a homing projectile at `origin`, initially aimed at `target_position`.
pub fn spawn_projectile(
    world: &mut World,
    next_seq: &mut u64,
    origin: Position,
    target: Entity,
    target_position: Position,
    damage: f64,
    splash_radius: Option<f64>,
) -> Entity {
    let velocity = Velocity::toward(&origin, &target_position, PROJECTILE_SPEED);
    let projectile = Projectile {
        damage,
        splash_radius,
        tracking: true,
        angle: origin.angle_to(&target_position),
    };

    world.spawn((
        next_sequence(next_seq),
        origin,
        velocity,
        projectile,
        ProjectileTarget(target),
    ))
}
