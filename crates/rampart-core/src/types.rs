//! Fundamental geometric and simulation types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// 2D position on the play field (canvas units).
/// x grows to the right, y grows downward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// 2D velocity in canvas units per tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub x: f64,
    pub y: f64,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in milliseconds.
    pub elapsed_ms: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another position.
    pub fn distance_to(&self, other: &Position) -> f64 {
        self.to_dvec2().distance(other.to_dvec2())
    }

    /// Angle toward another position in radians, canvas convention (atan2(dy, dx)).
    pub fn angle_to(&self, other: &Position) -> f64 {
        let d = other.to_dvec2() - self.to_dvec2();
        d.y.atan2(d.x)
    }

    /// Offset by a velocity for one tick.
    pub fn advanced_by(&self, velocity: &Velocity) -> Position {
        Position::from(self.to_dvec2() + velocity.to_dvec2())
    }

    pub fn to_dvec2(self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

impl From<DVec2> for Position {
    fn from(v: DVec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl Velocity {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Velocity of magnitude `speed` pointing from `from` toward `to`.
    /// Zero when the two points coincide.
    pub fn toward(from: &Position, to: &Position, speed: f64) -> Self {
        let direction = (to.to_dvec2() - from.to_dvec2()).normalize_or_zero();
        Self::from(direction * speed)
    }

    /// Speed magnitude (units per tick).
    pub fn speed(&self) -> f64 {
        self.to_dvec2().length()
    }

    pub fn to_dvec2(self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

impl From<DVec2> for Velocity {
    fn from(v: DVec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl SimTime {
    /// Milliseconds per tick at the default tick rate.
    pub fn dt_ms(&self) -> f64 {
        crate::constants::DT_MS
    }

    /// Number of whole ticks covering `ms` of simulation time.
    ///
    /// Computed from the tick rate rather than `DT_MS`, which is inexact,
    /// so 800 ms is exactly 48 ticks.
    pub fn ticks_for_ms(ms: f64) -> u64 {
        let ticks = ms * f64::from(crate::constants::TICK_RATE) / 1000.0;
        (ticks - 1e-9).ceil().max(0.0) as u64
    }

    /// Advance by one tick. Elapsed time is derived from the tick count so
    /// it does not drift over long sessions.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_ms = self.tick as f64 * self.dt_ms();
    }
}
