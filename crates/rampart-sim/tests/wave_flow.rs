use rampart_sim::core::commands::PlayerCommand;
use rampart_sim::core::config::GameConfig;
use rampart_sim::core::enums::{GamePhase, TowerKind};
use rampart_sim::core::events::GameEvent;
use rampart_sim::engine::SimConfig;
use rampart_sim::SimulationEngine;

fn place(engine: &mut SimulationEngine, kind: TowerKind, x: f64, y: f64) {
    engine.queue_command(PlayerCommand::SelectTower { kind });
    engine.queue_command(PlayerCommand::PlaceTower { x, y });
}

/// Run until the current wave completes, returning every event seen.
fn play_wave(engine: &mut SimulationEngine, max_ticks: usize) -> Vec<GameEvent> {
    engine.queue_command(PlayerCommand::StartWave);
    let mut events = Vec::new();
    for _ in 0..max_ticks {
        let snap = engine.tick();
        let done = snap
            .events
            .iter()
            .any(|e| matches!(e, GameEvent::WaveCompleted { .. }));
        events.extend(snap.events);
        if done {
            return events;
        }
    }
    panic!("wave did not complete within {max_ticks} ticks");
}

#[test]
fn money_and_score_track_kills_across_waves() {
    let mut engine = SimulationEngine::new(SimConfig {
        game: GameConfig {
            starting_money: 275,
            ..Default::default()
        },
        ..Default::default()
    });
    place(&mut engine, TowerKind::Basic, 250.0, 200.0);
    place(&mut engine, TowerKind::Splash, 400.0, 250.0);
    place(&mut engine, TowerKind::Sniper, 400.0, 200.0);
    let spent = 50 + 75 + 100;

    let mut rewards = 0;
    let mut leaks = 0;
    let mut spawned = 0;
    for wave in 1..=2u32 {
        let events = play_wave(&mut engine, 5_000);
        for event in &events {
            match event {
                GameEvent::EnemyKilled { reward } => {
                    assert_eq!(*reward, 15 + 3 * i64::from(wave));
                    rewards += reward;
                    spawned += 1;
                }
                GameEvent::EnemyLeaked { .. } => {
                    leaks += 1;
                    spawned += 1;
                }
                GameEvent::WaveStarted { enemy_count, .. } => {
                    assert_eq!(*enemy_count, 5 * wave);
                }
                _ => {}
            }
        }
        assert!(events.contains(&GameEvent::WaveCompleted { wave }));
        assert_eq!(engine.economy().wave, wave + 1);
        assert!(!engine.wave_in_progress());
    }

    assert_eq!(spawned, 5 + 10, "Every enemy is either killed or leaked");
    assert_eq!(engine.economy().money, 275 - spent + rewards);
    assert_eq!(engine.economy().score, rewards);
    assert_eq!(engine.economy().lives, 20 - leaks);
    assert!(rewards > 0, "Three towers should kill something");
}

#[test]
fn config_file_drives_the_engine() {
    let game = GameConfig::from_toml_str(
        r#"
        starting_money = 40
        starting_lives = 1
        spawn_interval_ms = 250
        end_on_defeat = true
        path = [{ x = 0.0, y = 50.0 }, { x = 100.0, y = 50.0 }]

        [tower_costs]
        basic = 40
        "#,
    )
    .unwrap();
    let mut engine = SimulationEngine::new(SimConfig {
        game,
        time_scale: 9.0,
    });
    assert_eq!(engine.time_scale(), 4.0);

    place(&mut engine, TowerKind::Basic, 50.0, 500.0);
    let snap = engine.tick();
    assert_eq!(snap.hud.money, 0);
    assert_eq!(snap.path.len(), 2);

    let events = {
        engine.queue_command(PlayerCommand::StartWave);
        let mut events = Vec::new();
        for _ in 0..600 {
            events.extend(engine.tick().events);
        }
        events
    };

    // A 100-unit path is walked in about 50 ticks; the first leak ends the game.
    assert!(events.contains(&GameEvent::LivesDepleted));
    assert_eq!(engine.phase(), GamePhase::Defeat);
    assert_eq!(engine.economy().lives, 0);
}
