//! Events emitted by the simulation for sound and UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::Position;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A tower was built and paid for.
    TowerPlaced { kind: TowerKind, position: Position },
    /// A tower launched a projectile.
    ShotFired { kind: TowerKind },
    /// A projectile struck. `splash` marks area impacts.
    ProjectileImpact { position: Position, splash: bool },
    /// An enemy died and paid out.
    EnemyKilled { reward: i64 },
    /// An enemy walked off the end of the path.
    EnemyLeaked { lives_remaining: i64 },
    /// A wave began spawning.
    WaveStarted { wave: u32, enemy_count: u32 },
    /// All enemies of a wave were spawned and are gone.
    WaveCompleted { wave: u32 },
    /// Lives dropped to zero for the first time.
    LivesDepleted,
}
