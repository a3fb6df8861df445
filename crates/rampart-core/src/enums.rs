//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Tower variant. Determines the fixed combat stats in [`crate::towers`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TowerKind {
    /// Medium range, medium rate, single target.
    #[default]
    Basic,
    /// Long range, slow, hard hitting.
    Sniper,
    /// Short range, area damage with distance falloff.
    Splash,
}

impl TowerKind {
    /// All tower kinds in shop order.
    pub const ALL: [TowerKind; 3] = [TowerKind::Basic, TowerKind::Sniper, TowerKind::Splash];

    /// Tower kind bound to a numeric shortcut key (1-based).
    pub fn from_slot(slot: u8) -> Option<TowerKind> {
        match slot {
            1..=3 => Some(Self::ALL[usize::from(slot - 1)]),
            _ => None,
        }
    }
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Simulation running.
    #[default]
    Active,
    /// Simulation frozen; commands still accepted.
    Paused,
    /// Lives ran out and the session is configured to end on defeat.
    Defeat,
}

/// Outcome of a projectile's collision check for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionOutcome {
    /// Still in flight (possibly just retargeted).
    InFlight,
    /// Damage applied; the projectile is spent.
    Hit,
    /// Target lost and no live enemy to chase.
    Expired,
}
