//! Cleanup system: removes enemies that leaked through or died, and settles the economy.

use hecs::{Entity, World};

use rampart_core::components::{Enemy, PathProgress, Sequence};
use rampart_core::events::GameEvent;

use crate::economy::Economy;

/// Remove leaked enemies (one life each) and dead enemies (reward each).
/// Reaching the end takes precedence over dying on the same tick.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(
    world: &mut World,
    economy: &mut Economy,
    events: &mut Vec<GameEvent>,
    despawn_buffer: &mut Vec<Entity>,
) {
    let mut finished: Vec<(Sequence, Entity, bool, i64)> = Vec::new();
    for (entity, (seq, enemy, progress)) in
        world.query_mut::<(&Sequence, &Enemy, &PathProgress)>()
    {
        if progress.reached_end {
            finished.push((*seq, entity, true, enemy.reward));
        } else if enemy.health <= 0.0 {
            finished.push((*seq, entity, false, enemy.reward));
        }
    }
    finished.sort_by_key(|(seq, ..)| *seq);

    despawn_buffer.clear();
    for (_seq, entity, leaked, reward) in finished {
        if leaked {
            economy.lose_life();
            events.push(GameEvent::EnemyLeaked {
                lives_remaining: economy.lives,
            });
        } else {
            economy.award_kill(reward);
            events.push(GameEvent::EnemyKilled { reward });
        }
        despawn_buffer.push(entity);
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rampart_core::config::GameConfig;
    use rampart_core::types::Position;

    use crate::world_setup::spawn_enemy;

    #[test]
    fn leak_beats_death_on_same_tick() {
        let mut world = World::new();
        let mut economy = Economy::new(&GameConfig::default());
        let mut next_seq = 0;
        let enemy = spawn_enemy(&mut world, &mut next_seq, Position::default(), 1);
        {
            let mut e = world.get::<&mut Enemy>(enemy).unwrap();
            e.health = 0.0;
        }
        world.get::<&mut PathProgress>(enemy).unwrap().reached_end = true;

        let mut events = Vec::new();
        run(&mut world, &mut economy, &mut events, &mut Vec::new());

        assert_eq!(economy.lives, 19);
        assert_eq!(economy.money, 100);
        assert_eq!(economy.score, 0);
        assert_eq!(events, vec![GameEvent::EnemyLeaked { lives_remaining: 19 }]);
        assert!(!world.contains(enemy));
    }

    #[test]
    fn live_enemies_are_kept() {
        let mut world = World::new();
        let mut economy = Economy::new(&GameConfig::default());
        let mut next_seq = 0;
        let enemy = spawn_enemy(&mut world, &mut next_seq, Position::default(), 1);

        let mut events = Vec::new();
        run(&mut world, &mut economy, &mut events, &mut Vec::new());

        assert!(world.contains(enemy));
        assert!(events.is_empty());
        assert_eq!(economy, Economy::new(&GameConfig::default()));
    }
}
