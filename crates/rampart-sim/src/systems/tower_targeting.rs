//! Tower targeting and firing system.
//!
//! Each tower picks the closest live enemy inside its range, turns toward
//! it, and fires if its reload window has elapsed.

use hecs::{Entity, World};

use rampart_core::components::{Sequence, Tower};
use rampart_core::constants::TOWER_ROTATION_SMOOTHING;
use rampart_core::events::GameEvent;
use rampart_core::types::Position;

use crate::target::{enemies_in_order, EnemySighting};
use crate::world_setup;

/// Select the closest enemy with positive health strictly inside `tower.range`.
///
/// The range is the starting "best distance", so an enemy exactly at range
/// is never chosen. Equal distances keep the first enemy in `enemies` order.
/// On a hit the tower's rotation eases toward the target.
pub fn acquire_target(
    tower_position: &Position,
    tower: &mut Tower,
    enemies: &[EnemySighting],
) -> Option<EnemySighting> {
    let mut target: Option<EnemySighting> = None;
    let mut closest = tower.range;
    for enemy in enemies {
        if enemy.health <= 0.0 {
            continue;
        }
        let distance = tower_position.distance_to(&enemy.position);
        if distance < closest {
            closest = distance;
            target = Some(*enemy);
        }
    }

    if let Some(enemy) = &target {
        let target_angle = tower_position.angle_to(&enemy.position);
        tower.rotation += (target_angle - tower.rotation) * TOWER_ROTATION_SMOOTHING;
    }
    target
}

/// Consume the reload window if it has elapsed. Returns whether the tower fires.
///
/// Reload is counted in ticks so a tower fires exactly every `reload_ticks`
/// while it has a target.
pub fn try_fire(tower: &mut Tower, now_tick: u64) -> bool {
    let ready = match tower.last_shot_tick {
        Some(last) => now_tick.saturating_sub(last) >= tower.reload_ticks,
        None => true,
    };
    if ready {
        tower.last_shot_tick = Some(now_tick);
    }
    ready
}

/// A projectile a tower asked for this tick.
struct ShotRequest {
    origin: Position,
    target: EnemySighting,
    damage: f64,
    splash_radius: Option<f64>,
}

/// Run targeting and firing for every tower, in build order.
pub fn run(world: &mut World, next_seq: &mut u64, now_tick: u64, events: &mut Vec<GameEvent>) {
    let enemies = enemies_in_order(world);

    let mut towers: Vec<(Sequence, Entity)> = world
        .query::<(&Sequence, &Tower)>()
        .iter()
        .map(|(entity, (seq, _))| (*seq, entity))
        .collect();
    towers.sort_by_key(|(seq, _)| *seq);

    let mut shots: Vec<ShotRequest> = Vec::new();
    for (_seq, entity) in towers {
        let Ok(mut query) = world.query_one::<(&Position, &mut Tower)>(entity) else {
            continue;
        };
        let Some((position, tower)) = query.get() else {
            continue;
        };

        let Some(target) = acquire_target(position, tower, &enemies) else {
            continue;
        };
        if try_fire(tower, now_tick) {
            events.push(GameEvent::ShotFired { kind: tower.kind });
            shots.push(ShotRequest {
                origin: *position,
                target,
                damage: tower.damage,
                splash_radius: tower.splash_radius,
            });
        }
    }

    for shot in shots {
        world_setup::spawn_projectile(
            world,
            next_seq,
            shot.origin,
            shot.target.entity,
            shot.target.position,
            shot.damage,
            shot.splash_radius,
        );
    }
}
