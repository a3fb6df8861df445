//! Wave spawning system. Releases a wave's enemies one per interval.
//!
//! The spawner is plain state polled each tick: a pending count plus the
//! deadline of the next spawn. There is no independent timer.

use hecs::World;

use rampart_core::constants::ENEMIES_PER_WAVE;
use rampart_core::types::Position;

use crate::world_setup;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WaveSpawner {
    /// Wave number the pending enemies are scaled for.
    pub wave: u32,
    /// Enemies still to spawn.
    pub remaining: u32,
    /// Simulation time (ms) at which the next enemy appears.
    pub next_spawn_at_ms: f64,
    pub interval_ms: f64,
}

/// Enemies spawned over the course of wave `wave`.
pub fn enemy_count_for_wave(wave: u32) -> u32 {
    ENEMIES_PER_WAVE * wave
}

impl WaveSpawner {
    /// Arm the spawner for `wave`. The first enemy appears one interval after `now_ms`.
    pub fn start(&mut self, wave: u32, now_ms: f64, interval_ms: f64) {
        self.wave = wave;
        self.remaining = enemy_count_for_wave(wave);
        self.interval_ms = interval_ms;
        self.next_spawn_at_ms = now_ms + interval_ms;
    }

    /// Whether any enemies are still queued.
    pub fn is_pending(&self) -> bool {
        self.remaining > 0
    }
}

/// Spawn every enemy whose deadline has passed. Returns how many were spawned.
pub fn run(
    world: &mut World,
    spawner: &mut WaveSpawner,
    spawn_point: Position,
    next_seq: &mut u64,
    now_ms: f64,
) -> u32 {
    let mut spawned = 0;
    while spawner.remaining > 0 && now_ms >= spawner.next_spawn_at_ms {
        world_setup::spawn_enemy(world, next_seq, spawn_point, spawner.wave);
        spawner.remaining -= 1;
        spawner.next_spawn_at_ms += spawner.interval_ms;
        spawned += 1;
    }
    spawned
}
