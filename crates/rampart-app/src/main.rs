use std::io::BufRead;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use rampart_app::ipc::{self, IpcError};
use rampart_app::state::AppState;
use rampart_core::config::GameConfig;
use rampart_core::state::GameStateSnapshot;
use rampart_sim::engine::SimConfig;

/// Headless tower-defense simulation. Reads JSON commands on stdin, one per
/// line, and writes JSON snapshots to stdout. Logs go to stderr (`RUST_LOG`).
#[derive(Debug, Parser)]
#[command(name = "rampart", version)]
struct Args {
    /// TOML file overriding the default game settings.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Simulation speed multiplier, clamped to [0, 4].
    #[arg(long, default_value_t = 1.0)]
    time_scale: f64,

    /// Stop after this many ticks instead of at end of input.
    #[arg(long)]
    max_ticks: Option<u64>,

    /// Emit only every n-th snapshot.
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    every: u64,
}

fn load_config(path: Option<&PathBuf>) -> Result<GameConfig> {
    match path {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display())),
        None => Ok(GameConfig::default()),
    }
}

/// Writes every `every`-th snapshot to stdout.
fn stdout_emitter(every: u64) -> impl FnMut(&GameStateSnapshot) + Send + 'static {
    let mut count: u64 = 0;
    move |snapshot: &GameStateSnapshot| {
        count += 1;
        if count % every != 0 {
            return;
        }
        let stdout = std::io::stdout();
        if let Err(err) = ipc::write_snapshot(&mut stdout.lock(), snapshot) {
            log::warn!("dropping snapshot {}: {err}", snapshot.time.tick);
        }
    }
}

/// Forward stdin lines to the game loop until input ends or the loop stops.
fn forward_stdin(state: &AppState, shutdown_on_eof: bool) {
    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                log::error!("reading stdin: {err}");
                break;
            }
        };
        let command = match ipc::parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                log::warn!("ignoring input line: {err}");
                continue;
            }
        };
        match ipc::send_command(state, command) {
            Ok(()) => {}
            Err(IpcError::ChannelClosed | IpcError::NotRunning) => return,
            Err(err) => {
                log::error!("forwarding command: {err}");
                return;
            }
        }
    }

    if shutdown_on_eof {
        log::debug!("end of input, stopping game loop");
        if let Err(err) = ipc::request_shutdown(state) {
            log::error!("stopping game loop: {err}");
        }
    }
}

fn main() -> Result<()> {
    let _ = env_logger::Builder::from_default_env().try_init();
    let args = Args::parse();

    let game = load_config(args.config.as_ref())?;
    let config = SimConfig {
        game,
        time_scale: args.time_scale,
    };

    let state = Arc::new(AppState::new());
    ipc::start_simulation(&state, config, args.max_ticks, stdout_emitter(args.every))
        .context("starting game loop")?;

    let reader_state = Arc::clone(&state);
    let shutdown_on_eof = args.max_ticks.is_none();
    std::thread::Builder::new()
        .name("rampart-stdin".into())
        .spawn(move || forward_stdin(&reader_state, shutdown_on_eof))
        .context("spawning stdin reader")?;

    ipc::wait_for_exit(&state).context("game loop")?;
    Ok(())
}
