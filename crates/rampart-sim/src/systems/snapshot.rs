//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! This system is read-only and never modifies the world.

use hecs::World;

use rampart_core::components::*;
use rampart_core::constants::*;
use rampart_core::config::GameConfig;
use rampart_core::enums::GamePhase;
use rampart_core::events::GameEvent;
use rampart_core::state::*;
use rampart_core::types::{Position, SimTime};

use crate::engine::Selection;

/// Everything outside the world that the snapshot needs.
pub struct SnapshotContext<'a> {
    pub time: &'a SimTime,
    pub phase: GamePhase,
    pub hud: HudView,
    pub config: &'a GameConfig,
    pub selection: Option<&'a Selection>,
    pub events: Vec<GameEvent>,
}

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(world: &World, ctx: SnapshotContext<'_>) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *ctx.time,
        phase: ctx.phase,
        hud: ctx.hud,
        field: FieldView {
            width: ctx.config.field_width,
            height: ctx.config.field_height,
        },
        path: ctx.config.path.clone(),
        enemies: build_enemies(world, ctx.time.elapsed_ms),
        towers: build_towers(world),
        projectiles: build_projectiles(world),
        selection: ctx.selection.map(build_selection),
        events: ctx.events,
    }
}

/// Build EnemyView list in spawn order.
fn build_enemies(world: &World, now_ms: f64) -> Vec<EnemyView> {
    let mut enemies: Vec<EnemyView> = world
        .query::<(&Sequence, &Position, &Enemy)>()
        .iter()
        .map(|(_, (seq, pos, enemy))| {
            let flashing = enemy
                .last_hit_ms
                .is_some_and(|hit| now_ms - hit < ENEMY_HIT_FLASH_MS);
            EnemyView {
                id: seq.0,
                position: *pos,
                radius: enemy.size,
                color: if flashing { ENEMY_FLASH_COLOR } else { ENEMY_COLOR }.to_string(),
                health_fraction: (enemy.health / enemy.max_health).clamp(0.0, 1.0),
                flashing,
            }
        })
        .collect();

    enemies.sort_by_key(|e| e.id);
    enemies
}

/// Build TowerView list in build order.
fn build_towers(world: &World) -> Vec<TowerView> {
    let mut towers: Vec<(Sequence, TowerView)> = world
        .query::<(&Sequence, &Position, &Tower)>()
        .iter()
        .map(|(_, (seq, pos, tower))| {
            (
                *seq,
                TowerView {
                    kind: tower.kind,
                    position: *pos,
                    range: tower.range,
                    base_radius: TOWER_BASE_RADIUS,
                    color: tower.kind.stats().color.to_string(),
                    rotation: tower.rotation,
                    level: tower.level,
                },
            )
        })
        .collect();

    towers.sort_by_key(|(seq, _)| *seq);
    towers.into_iter().map(|(_, view)| view).collect()
}

/// Build ProjectileView list in launch order.
fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    let mut projectiles: Vec<(Sequence, ProjectileView)> = world
        .query::<(&Sequence, &Position, &Projectile)>()
        .iter()
        .map(|(_, (seq, pos, projectile))| {
            (
                *seq,
                ProjectileView {
                    position: *pos,
                    angle: projectile.angle,
                    splash: projectile.splash_radius.is_some(),
                },
            )
        })
        .collect();

    projectiles.sort_by_key(|(seq, _)| *seq);
    projectiles.into_iter().map(|(_, view)| view).collect()
}

fn build_selection(selection: &Selection) -> SelectionView {
    SelectionView {
        kind: selection.kind,
        cost: selection.cost,
        preview: selection.preview,
        range: selection.kind.stats().range,
    }
}
