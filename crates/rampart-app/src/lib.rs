//! RAMPART headless host.
//!
//! Runs the simulation on a game-loop thread and bridges it to a parent
//! process over JSON lines on stdin/stdout.

pub mod game_loop;
pub mod ipc;
pub mod state;

pub use rampart_core as core;
