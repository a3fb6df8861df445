//! Static tower stat table.

use serde::Serialize;

use crate::enums::TowerKind;

/// Fixed combat and display stats for a tower kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TowerStats {
    pub range: f64,
    pub damage: f64,
    pub fire_rate_ms: f64,
    /// Area-of-effect radius; only splash towers have one.
    pub splash_radius: Option<f64>,
    pub color: &'static str,
}

const BASIC: TowerStats = TowerStats {
    range: 150.0,
    damage: 15.0,
    fire_rate_ms: 800.0,
    splash_radius: None,
    color: "#4a90e2",
};

const SNIPER: TowerStats = TowerStats {
    range: 300.0,
    damage: 30.0,
    fire_rate_ms: 1500.0,
    splash_radius: None,
    color: "#e74c3c",
};

const SPLASH: TowerStats = TowerStats {
    range: 120.0,
    damage: 20.0,
    fire_rate_ms: 1200.0,
    splash_radius: Some(60.0),
    color: "#f1c40f",
};

impl TowerKind {
    pub fn stats(self) -> &'static TowerStats {
        match self {
            TowerKind::Basic => &BASIC,
            TowerKind::Sniper => &SNIPER,
            TowerKind::Splash => &SPLASH,
        }
    }
}
