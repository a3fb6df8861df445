//! Game state snapshot: the complete visible state handed to the renderer each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GameEvent;
use crate::types::{Position, SimTime};

/// Complete game state broadcast after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub hud: HudView,
    pub field: FieldView,
    pub path: Vec<Position>,
    pub enemies: Vec<EnemyView>,
    pub towers: Vec<TowerView>,
    pub projectiles: Vec<ProjectileView>,
    pub selection: Option<SelectionView>,
    pub events: Vec<GameEvent>,
}

/// Read-only economy counters for the HUD.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HudView {
    pub money: i64,
    pub lives: i64,
    pub wave: u32,
    pub score: i64,
    pub wave_in_progress: bool,
}

/// Play field dimensions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldView {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    /// Stable per-session id (creation order).
    pub id: u64,
    pub position: Position,
    pub radius: f64,
    pub color: String,
    /// health / max_health, clamped to 0..=1.
    pub health_fraction: f64,
    /// Inside the post-hit flash window.
    pub flashing: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TowerView {
    pub kind: TowerKind,
    pub position: Position,
    pub range: f64,
    pub base_radius: f64,
    pub color: String,
    pub rotation: f64,
    pub level: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub position: Position,
    pub angle: f64,
    pub splash: bool,
}

/// The tower picked for placement and where its preview sits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionView {
    pub kind: TowerKind,
    pub cost: i64,
    pub preview: Position,
    pub range: f64,
}
