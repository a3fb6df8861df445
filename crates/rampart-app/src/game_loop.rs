//! Game loop thread: runs the simulation engine at 60Hz and emits snapshots.
//!
//! The engine is created inside the thread and never leaves it. Commands
//! arrive via `mpsc` channel. Every snapshot goes to the emitter callback
//! and is stored in shared state for synchronous polling.

use std::sync::mpsc;
use std::sync::Mutex;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use rampart_core::constants::TICK_RATE;
use rampart_core::state::GameStateSnapshot;
use rampart_sim::engine::{SimConfig, SimulationEngine};

use crate::state::{GameLoopCommand, SharedSnapshot};

/// Nominal duration of one tick at 1x speed.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Wall-clock time one tick takes at `time_scale`. A scale of (nearly)
/// zero falls back to normal speed.
pub fn effective_tick_duration(time_scale: f64) -> Duration {
    if time_scale > 0.001 {
        TICK_DURATION.div_f64(time_scale)
    } else {
        TICK_DURATION
    }
}

/// Spawns the game loop in a new thread.
///
/// `emit` is called with every snapshot, on the loop thread. The loop ends
/// on `Shutdown`, when every sender is dropped, or after `max_ticks`.
pub fn spawn_game_loop<F>(
    config: SimConfig,
    latest_snapshot: SharedSnapshot,
    max_ticks: Option<u64>,
    emit: F,
) -> std::io::Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<()>)>
where
    F: FnMut(&GameStateSnapshot) + Send + 'static,
{
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("rampart-game-loop".into())
        .spawn(move || {
            run_game_loop(config, cmd_rx, &latest_snapshot, max_ticks, emit);
        })?;

    Ok((cmd_tx, handle))
}

/// The game loop. Runs until Shutdown, channel disconnect or the tick limit.
fn run_game_loop<F>(
    config: SimConfig,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
    max_ticks: Option<u64>,
    mut emit: F,
) where
    F: FnMut(&GameStateSnapshot),
{
    let mut engine = SimulationEngine::new(config);
    let mut next_tick_time = Instant::now();
    let mut ticks_run: u64 = 0;
    log::info!("game loop started at {TICK_RATE}Hz");

    loop {
        if max_ticks.is_some_and(|limit| ticks_run >= limit) {
            log::info!("tick limit {ticks_run} reached");
            return;
        }

        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(cmd)) => {
                    engine.queue_command(cmd);
                }
                Ok(GameLoopCommand::Shutdown) => {
                    log::info!("game loop shut down after {ticks_run} ticks");
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => {
                    log::debug!("command channel closed");
                    return;
                }
            }
        }

        // 2. Advance one tick (engine handles pause semantics internally)
        let snapshot = engine.tick();
        ticks_run += 1;

        // 3. Hand the snapshot to the host
        emit(&snapshot);

        // 4. Store latest snapshot for synchronous polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 5. Sleep until next tick, adjusting for time_scale
        let tick_duration = effective_tick_duration(engine.time_scale());
        next_tick_time += tick_duration;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > tick_duration * 2 {
            // Too far behind, reset instead of bursting to catch up
            next_tick_time = now;
        }
    }
}
