//! Host state shared between the stdio bridge and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use rampart_core::commands::PlayerCommand;
use rampart_core::state::GameStateSnapshot;

/// Messages from the bridge to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// Forwarded to the engine's command queue.
    PlayerCommand(PlayerCommand),
    /// Stop the loop after the current tick.
    Shutdown,
}

pub type SharedSnapshot = Arc<Mutex<Option<GameStateSnapshot>>>;

/// Everything the bridge needs to talk to a running game loop.
///
/// `Sender` is not `Sync`, so it lives behind a `Mutex` like the rest.
#[derive(Default)]
pub struct AppState {
    /// `None` until the loop is started.
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    /// Written by the loop after every tick, read by `latest_snapshot`.
    pub latest_snapshot: SharedSnapshot,
    pub loop_thread: Mutex<Option<JoinHandle<()>>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while a loop has been started and its thread has not exited.
    pub fn is_running(&self) -> bool {
        self.loop_thread
            .lock()
            .map(|thread| thread.as_ref().is_some_and(|t| !t.is_finished()))
            .unwrap_or(false)
    }
}
