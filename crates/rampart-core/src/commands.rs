//! Player commands sent from the input layer to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.
//! Invalid commands are dropped without error.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// All possible player actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Building ---
    /// Pick a tower type to place. Ignored if the player cannot afford it.
    SelectTower { kind: TowerKind },
    /// Pick a tower type by its shortcut number (1 = basic, 2 = sniper, 3 = splash).
    SelectTowerSlot { slot: u8 },
    /// Drop the current tower selection.
    CancelSelection,
    /// Move the placement preview cursor.
    MovePreview { x: f64, y: f64 },
    /// Build the selected tower at a field position.
    PlaceTower { x: f64, y: f64 },

    // --- Waves ---
    /// Begin the next wave. Ignored while a wave is in progress.
    StartWave,

    // --- Simulation control ---
    /// Set the host's pacing multiplier (1.0 = normal, 2.0 = double).
    /// Clamped to [0, 4]; 0 runs at normal speed. Use `Pause` to stop time.
    SetTimeScale { scale: f64 },
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
}
