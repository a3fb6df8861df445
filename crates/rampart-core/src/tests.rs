#[cfg(test)]
mod tests {
    use crate::commands::PlayerCommand;
    use crate::enums::*;
    use crate::events::GameEvent;
    use crate::state::{GameStateSnapshot, HudView};
    use crate::types::{Position, SimTime, Velocity};

    /// The input layer sends commands as internally tagged JSON objects.
    #[test]
    fn test_player_command_wire_format() {
        let cmd: PlayerCommand =
            serde_json::from_str(r#"{"type":"PlaceTower","x":120.5,"y":40.0}"#).unwrap();
        assert_eq!(cmd, PlayerCommand::PlaceTower { x: 120.5, y: 40.0 });

        let cmd: PlayerCommand =
            serde_json::from_str(r#"{"type":"SelectTower","kind":"Splash"}"#).unwrap();
        assert_eq!(
            cmd,
            PlayerCommand::SelectTower {
                kind: TowerKind::Splash
            }
        );

        let json = serde_json::to_string(&PlayerCommand::StartWave).unwrap();
        assert_eq!(json, r#"{"type":"StartWave"}"#);
    }

    #[test]
    fn test_unknown_command_is_rejected() {
        let result = serde_json::from_str::<PlayerCommand>(r#"{"type":"SellTower"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_event_wire_format() {
        let json = serde_json::to_string(&GameEvent::EnemyKilled { reward: 18 }).unwrap();
        assert_eq!(json, r#"{"type":"EnemyKilled","reward":18}"#);
    }

    #[test]
    fn test_snapshot_exposes_hud_fields() {
        let snapshot = GameStateSnapshot {
            hud: HudView {
                money: 68,
                lives: 20,
                wave: 1,
                score: 18,
                wave_in_progress: true,
            },
            ..Default::default()
        };
        let value = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(value["hud"]["money"], 68);
        assert_eq!(value["hud"]["score"], 18);
        assert_eq!(value["phase"], "Active");
        assert!(value["selection"].is_null());
    }

    // ---- Geometry ----

    #[test]
    fn test_distance_is_euclidean() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-12);
        assert!((b.distance_to(&a) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_angle_uses_canvas_convention() {
        let origin = Position::new(10.0, 10.0);
        assert!(origin.angle_to(&Position::new(20.0, 10.0)).abs() < 1e-12);
        let down = origin.angle_to(&Position::new(10.0, 20.0));
        assert!((down - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn test_velocity_toward_has_requested_speed() {
        let from = Position::new(0.0, 0.0);
        let to = Position::new(30.0, -40.0);
        let vel = Velocity::toward(&from, &to, 12.0);
        assert!((vel.speed() - 12.0).abs() < 1e-12);
        assert!((vel.x - 7.2).abs() < 1e-12);
        assert!((vel.y + 9.6).abs() < 1e-12);

        let moved = from.advanced_by(&vel);
        assert!((moved.distance_to(&from) - 12.0).abs() < 1e-12);
    }

    #[test]
    fn test_velocity_toward_same_point_is_zero() {
        let p = Position::new(5.0, 5.0);
        assert_eq!(Velocity::toward(&p, &p, 12.0), Velocity::default());
    }

    // ---- Time ----

    #[test]
    fn test_sim_time_sixty_ticks_is_one_second() {
        let mut time = SimTime::default();
        for _ in 0..60 {
            time.advance();
        }
        assert_eq!(time.tick, 60);
        assert!((time.elapsed_ms - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn test_ticks_for_ms_is_exact_on_whole_ticks() {
        assert_eq!(SimTime::ticks_for_ms(800.0), 48);
        assert_eq!(SimTime::ticks_for_ms(1500.0), 90);
        assert_eq!(SimTime::ticks_for_ms(1200.0), 72);
        assert_eq!(SimTime::ticks_for_ms(1000.0), 60);
        assert_eq!(SimTime::ticks_for_ms(0.0), 0);
        // Partial ticks round up
        assert_eq!(SimTime::ticks_for_ms(810.0), 49);
    }
}
