//! JSON-lines bridge between a host process and the game loop.
//!
//! One `PlayerCommand` per input line, one `GameStateSnapshot` per output
//! line. The functions here mirror what a frontend would invoke: start the
//! loop, send a command, poll the latest snapshot.

use std::io::Write;

use thiserror::Error;

use rampart_core::commands::PlayerCommand;
use rampart_core::state::GameStateSnapshot;
use rampart_sim::engine::SimConfig;

use crate::game_loop;
use crate::state::{AppState, GameLoopCommand};

#[derive(Debug, Error)]
pub enum IpcError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("simulation not started")]
    NotRunning,
    #[error("simulation already running")]
    AlreadyRunning,
    #[error("game loop channel closed")]
    ChannelClosed,
    #[error("shared state lock poisoned")]
    Poisoned,
    #[error("game loop thread panicked")]
    LoopPanicked,
}

/// Start the game loop. Fails if one is already running.
pub fn start_simulation<F>(
    state: &AppState,
    config: SimConfig,
    max_ticks: Option<u64>,
    emit: F,
) -> Result<(), IpcError>
where
    F: FnMut(&GameStateSnapshot) + Send + 'static,
{
    if state.is_running() {
        return Err(IpcError::AlreadyRunning);
    }

    let (cmd_tx, handle) =
        game_loop::spawn_game_loop(config, state.latest_snapshot.clone(), max_ticks, emit)?;

    *state.command_tx.lock().map_err(|_| IpcError::Poisoned)? = Some(cmd_tx);
    *state.loop_thread.lock().map_err(|_| IpcError::Poisoned)? = Some(handle);
    Ok(())
}

/// Send a player command to the running simulation.
pub fn send_command(state: &AppState, command: PlayerCommand) -> Result<(), IpcError> {
    let tx_lock = state.command_tx.lock().map_err(|_| IpcError::Poisoned)?;
    let tx = tx_lock.as_ref().ok_or(IpcError::NotRunning)?;
    tx.send(GameLoopCommand::PlayerCommand(command))
        .map_err(|_| IpcError::ChannelClosed)
}

/// Get the latest snapshot synchronously (for polling / initial state).
pub fn latest_snapshot(state: &AppState) -> Result<Option<GameStateSnapshot>, IpcError> {
    let lock = state.latest_snapshot.lock().map_err(|_| IpcError::Poisoned)?;
    Ok(lock.clone())
}

/// Ask the loop to stop after its current tick. Does not wait.
pub fn request_shutdown(state: &AppState) -> Result<(), IpcError> {
    let tx = state.command_tx.lock().map_err(|_| IpcError::Poisoned)?.take();
    if let Some(tx) = tx {
        // A loop that already hit its tick limit has dropped the receiver.
        let _ = tx.send(GameLoopCommand::Shutdown);
    }
    Ok(())
}

/// Block until the loop thread exits.
pub fn wait_for_exit(state: &AppState) -> Result<(), IpcError> {
    let handle = state
        .loop_thread
        .lock()
        .map_err(|_| IpcError::Poisoned)?
        .take();
    if let Some(handle) = handle {
        handle.join().map_err(|_| IpcError::LoopPanicked)?;
    }
    Ok(())
}

/// Ask the loop to stop and wait for its thread to exit.
pub fn stop_simulation(state: &AppState) -> Result<(), IpcError> {
    request_shutdown(state)?;
    wait_for_exit(state)
}

/// Parse one input line. Blank lines yield `None`.
pub fn parse_command(line: &str) -> Result<Option<PlayerCommand>, IpcError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    Ok(Some(serde_json::from_str(line)?))
}

/// Write a snapshot as a single JSON line and flush.
pub fn write_snapshot<W: Write>(out: &mut W, snapshot: &GameStateSnapshot) -> Result<(), IpcError> {
    serde_json::to_writer(&mut *out, snapshot)?;
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}
