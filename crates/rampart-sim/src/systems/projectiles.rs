//! Projectile flight and impact system.
//!
//! Projectiles home on their target every tick. If the target dies first,
//! they switch to the nearest live enemy, or expire when none is left.
//! Splash projectiles detonate on contact with any enemy and damage every
//! enemy in the blast with linear falloff.

use hecs::{Entity, World};

use rampart_core::components::{Enemy, Projectile, Sequence};
use rampart_core::constants::{OUT_OF_BOUNDS_MARGIN, PROJECTILE_SPEED};
use rampart_core::enums::CollisionOutcome;
use rampart_core::events::GameEvent;
use rampart_core::types::{Position, Velocity};

use crate::target::{self, nearest_alive, EnemySighting, ProjectileTarget, TargetLookup};

/// Move one tick. A tracking projectile re-aims at `aim_point` first;
/// without one (target gone) it keeps its last velocity.
pub fn advance(
    position: &mut Position,
    velocity: &mut Velocity,
    projectile: &mut Projectile,
    aim_point: Option<Position>,
) {
    if let (true, Some(aim)) = (projectile.tracking, aim_point) {
        *velocity = Velocity::toward(position, &aim, PROJECTILE_SPEED);
        projectile.angle = position.angle_to(&aim);
    }
    *position = position.advanced_by(velocity);
}

/// Falloff factor for an enemy `distance` away from a blast of `radius`.
/// 1 at the center, 0 at the edge and beyond.
pub fn splash_multiplier(distance: f64, radius: f64) -> f64 {
    (1.0 - distance / radius).max(0.0)
}

/// Outside the field by more than the margin. Exactly at the margin is still inside.
pub fn is_out_of_bounds(position: &Position, width: f64, height: f64) -> bool {
    position.x < -OUT_OF_BOUNDS_MARGIN
        || position.x > width + OUT_OF_BOUNDS_MARGIN
        || position.y < -OUT_OF_BOUNDS_MARGIN
        || position.y > height + OUT_OF_BOUNDS_MARGIN
}

/// Damage dealt by a projectile this tick, resolved but not yet applied.
#[derive(Debug, Clone, PartialEq)]
pub struct Impact {
    pub position: Position,
    /// (enemy, damage) pairs in enemy creation order.
    pub damage: Vec<(Entity, f64)>,
    pub splash: bool,
}

/// What a projectile's collision check decided.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    InFlight,
    Retarget(Entity),
    Hit(Impact),
    Expired,
}

impl Resolution {
    pub fn outcome(&self) -> CollisionOutcome {
        match self {
            Resolution::InFlight | Resolution::Retarget(_) => CollisionOutcome::InFlight,
            Resolution::Hit(_) => CollisionOutcome::Hit,
            Resolution::Expired => CollisionOutcome::Expired,
        }
    }
}

/// Decide the collision outcome for one projectile at `position`.
///
/// `target` is the current lookup of the projectile's target and `enemies`
/// every enemy still in the world, in creation order.
pub fn resolve_collision(
    position: &Position,
    projectile: &Projectile,
    target: TargetLookup,
    target_entity: Entity,
    enemies: &[EnemySighting],
) -> Resolution {
    let (target_position, target_size) = match target {
        TargetLookup::Alive { position, size } => (position, size),
        TargetLookup::Dead { .. } | TargetLookup::Missing => {
            return match nearest_alive(position, enemies) {
                Some(replacement) => Resolution::Retarget(replacement.entity),
                None => Resolution::Expired,
            };
        }
    };

    match projectile.splash_radius {
        Some(radius) => {
            let triggered = enemies
                .iter()
                .any(|enemy| position.distance_to(&enemy.position) < enemy.size);
            if !triggered {
                return Resolution::InFlight;
            }
            let damage = enemies
                .iter()
                .filter_map(|enemy| {
                    let distance = position.distance_to(&enemy.position);
                    (distance <= radius).then(|| {
                        (
                            enemy.entity,
                            projectile.damage * splash_multiplier(distance, radius),
                        )
                    })
                })
                .collect();
            Resolution::Hit(Impact {
                position: *position,
                damage,
                splash: true,
            })
        }
        None => {
            if position.distance_to(&target_position) < target_size {
                Resolution::Hit(Impact {
                    position: *position,
                    damage: vec![(target_entity, projectile.damage)],
                    splash: false,
                })
            } else {
                Resolution::InFlight
            }
        }
    }
}

/// Subtract `amount` from an enemy and stamp the hit time.
pub fn apply_damage(enemy: &mut Enemy, amount: f64, now_ms: f64) {
    enemy.health -= amount;
    enemy.last_hit_ms = Some(now_ms);
}

/// Run flight, collision and removal for all projectiles, in launch order.
/// Damage lands immediately, so later projectiles see earlier kills.
pub fn run(
    world: &mut World,
    field_width: f64,
    field_height: f64,
    now_ms: f64,
    events: &mut Vec<GameEvent>,
    despawn_buffer: &mut Vec<Entity>,
) {
    despawn_buffer.clear();

    let mut projectiles: Vec<(Sequence, Entity)> = world
        .query::<(&Sequence, &Projectile)>()
        .iter()
        .map(|(entity, (seq, _))| (*seq, entity))
        .collect();
    projectiles.sort_by_key(|(seq, _)| *seq);

    for (_seq, entity) in projectiles {
        let Ok(target_entity) = world.get::<&ProjectileTarget>(entity).map(|t| t.0) else {
            continue;
        };

        let aim_point = match target::lookup(world, target_entity) {
            TargetLookup::Alive { position, .. } | TargetLookup::Dead { position } => {
                Some(position)
            }
            TargetLookup::Missing => None,
        };

        let (mut position, mut velocity, mut projectile) = {
            let Ok(mut query) = world.query_one::<(&Position, &Velocity, &Projectile)>(entity)
            else {
                continue;
            };
            let Some((position, velocity, projectile)) = query.get() else {
                continue;
            };
            (*position, *velocity, projectile.clone())
        };
        advance(&mut position, &mut velocity, &mut projectile, aim_point);
        if let Ok((p, v, pr)) =
            world.query_one_mut::<(&mut Position, &mut Velocity, &mut Projectile)>(entity)
        {
            *p = position;
            *v = velocity;
            *pr = projectile.clone();
        }

        let enemies = target::enemies_in_order(world);
        let resolution = resolve_collision(
            &position,
            &projectile,
            target::lookup(world, target_entity),
            target_entity,
            &enemies,
        );

        let outcome = resolution.outcome();
        match resolution {
            Resolution::Hit(impact) => {
                for (enemy_entity, amount) in &impact.damage {
                    if let Ok(mut enemy) = world.get::<&mut Enemy>(*enemy_entity) {
                        apply_damage(&mut enemy, *amount, now_ms);
                    }
                }
                events.push(GameEvent::ProjectileImpact {
                    position: impact.position,
                    splash: impact.splash,
                });
            }
            Resolution::Retarget(new_target) => {
                if let Ok(mut t) = world.get::<&mut ProjectileTarget>(entity) {
                    t.0 = new_target;
                }
            }
            Resolution::InFlight | Resolution::Expired => {}
        }

        let spent = match outcome {
            CollisionOutcome::Hit | CollisionOutcome::Expired => true,
            CollisionOutcome::InFlight => is_out_of_bounds(&position, field_width, field_height),
        };
        if spent {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn projectile(splash_radius: Option<f64>) -> Projectile {
        Projectile {
            damage: 20.0,
            splash_radius,
            tracking: true,
            angle: 0.0,
        }
    }

    fn sighting(world: &World, x: f64, y: f64, health: f64) -> EnemySighting {
        EnemySighting {
            entity: world.reserve_entity(),
            position: Position::new(x, y),
            health,
            size: 15.0,
        }
    }

    #[test]
    fn tracking_projectile_re_aims_each_tick() {
        let mut pos = Position::new(0.0, 0.0);
        let mut vel = Velocity::new(12.0, 0.0);
        let mut p = projectile(None);
        advance(&mut pos, &mut vel, &mut p, Some(Position::new(0.0, 100.0)));
        assert!(pos.x.abs() < 1e-12);
        assert!((pos.y - 12.0).abs() < 1e-12);
        assert!((p.angle - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn untracked_projectile_keeps_heading() {
        let mut pos = Position::new(0.0, 0.0);
        let mut vel = Velocity::new(12.0, 0.0);
        let mut p = projectile(None);
        p.tracking = false;
        advance(&mut pos, &mut vel, &mut p, Some(Position::new(0.0, 100.0)));
        assert_eq!(pos, Position::new(12.0, 0.0));
    }

    #[test]
    fn single_target_hit_inside_size() {
        let world = World::new();
        let enemy = sighting(&world, 10.0, 0.0, 45.0);
        let lookup = TargetLookup::Alive {
            position: enemy.position,
            size: enemy.size,
        };
        let resolution = resolve_collision(
            &Position::new(0.0, 0.0),
            &projectile(None),
            lookup,
            enemy.entity,
            &[enemy],
        );
        match resolution {
            Resolution::Hit(impact) => {
                assert_eq!(impact.damage, vec![(enemy.entity, 20.0)]);
                assert!(!impact.splash);
            }
            other => panic!("expected hit, got {other:?}"),
        }
    }

    #[test]
    fn single_target_ignores_bystanders() {
        let world = World::new();
        let target = sighting(&world, 100.0, 0.0, 45.0);
        let bystander = sighting(&world, 1.0, 0.0, 45.0);
        let lookup = TargetLookup::Alive {
            position: target.position,
            size: target.size,
        };
        let resolution = resolve_collision(
            &Position::new(0.0, 0.0),
            &projectile(None),
            lookup,
            target.entity,
            &[target, bystander],
        );
        assert_eq!(resolution, Resolution::InFlight);
    }

    #[test]
    fn dead_target_switches_to_nearest_live_enemy() {
        let world = World::new();
        let dead = sighting(&world, 1.0, 0.0, -5.0);
        let far = sighting(&world, 90.0, 0.0, 45.0);
        let near = sighting(&world, 40.0, 0.0, 45.0);
        let resolution = resolve_collision(
            &Position::new(0.0, 0.0),
            &projectile(None),
            TargetLookup::Dead {
                position: dead.position,
            },
            dead.entity,
            &[dead, far, near],
        );
        assert_eq!(resolution, Resolution::Retarget(near.entity));
        assert_eq!(resolution.outcome(), CollisionOutcome::InFlight);
    }

    #[test]
    fn missing_target_with_no_replacement_expires() {
        let world = World::new();
        let gone = world.reserve_entity();
        let resolution = resolve_collision(
            &Position::new(0.0, 0.0),
            &projectile(Some(60.0)),
            TargetLookup::Missing,
            gone,
            &[],
        );
        assert_eq!(resolution, Resolution::Expired);
        assert_eq!(resolution.outcome(), CollisionOutcome::Expired);
    }

    #[test]
    fn splash_triggers_on_any_enemy_and_falls_off() {
        let world = World::new();
        let target = sighting(&world, 200.0, 0.0, 45.0);
        let contact = sighting(&world, 5.0, 0.0, 45.0);
        let mid = sighting(&world, 30.0, 0.0, 45.0);
        let edge = sighting(&world, 60.0, 0.0, 45.0);
        let outside = sighting(&world, 61.0, 0.0, 45.0);
        let lookup = TargetLookup::Alive {
            position: target.position,
            size: target.size,
        };

        let resolution = resolve_collision(
            &Position::new(0.0, 0.0),
            &projectile(Some(60.0)),
            lookup,
            target.entity,
            &[target, contact, mid, edge, outside],
        );
        let Resolution::Hit(impact) = resolution else {
            panic!("expected splash hit");
        };
        assert!(impact.splash);
        assert_eq!(impact.damage.len(), 3);
        assert_eq!(impact.damage[0].0, contact.entity);
        assert!((impact.damage[0].1 - 20.0 * (1.0 - 5.0 / 60.0)).abs() < 1e-12);
        assert_eq!(impact.damage[1], (mid.entity, 10.0));
        assert_eq!(impact.damage[2], (edge.entity, 0.0));
    }

    #[test]
    fn splash_multiplier_bounds() {
        assert_eq!(splash_multiplier(0.0, 60.0), 1.0);
        assert_eq!(splash_multiplier(30.0, 60.0), 0.5);
        assert_eq!(splash_multiplier(60.0, 60.0), 0.0);
        assert_eq!(splash_multiplier(90.0, 60.0), 0.0);
    }

    #[test]
    fn out_of_bounds_margin_is_inclusive() {
        assert!(!is_out_of_bounds(&Position::new(900.0, 300.0), 800.0, 600.0));
        assert!(!is_out_of_bounds(&Position::new(-100.0, -100.0), 800.0, 600.0));
        assert!(!is_out_of_bounds(&Position::new(400.0, 700.0), 800.0, 600.0));
        assert!(is_out_of_bounds(&Position::new(900.001, 300.0), 800.0, 600.0));
        assert!(is_out_of_bounds(&Position::new(400.0, -100.5), 800.0, 600.0));
        assert!(is_out_of_bounds(&Position::new(400.0, 700.5), 800.0, 600.0));
    }

    #[test]
    fn apply_damage_records_hit_time() {
        let mut enemy = Enemy {
            speed: 2.0,
            health: 45.0,
            max_health: 45.0,
            reward: 18,
            size: 15.0,
            last_hit_ms: None,
        };
        apply_damage(&mut enemy, 15.0, 250.0);
        assert_eq!(enemy.health, 30.0);
        assert_eq!(enemy.last_hit_ms, Some(250.0));
    }
}
