//! Core types and definitions for the RAMPART tower-defense simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, state snapshots, events, constants and
//! configuration. It has no dependency on the ECS or any runtime host.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod state;
pub mod towers;
pub mod types;

#[cfg(test)]
mod tests;
