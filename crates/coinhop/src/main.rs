//! Headless Coinhop runner
//!
//! Drives a session with a scripted key sequence, logging HUD changes and
//! routing sound cues to a logging audio sink.
//!
//! ```text
//! coinhop [--config FILE] [--levels FILE] [--multiplayer] [--ticks N]
//! ```
//!
//! `coinhop --help` lists the options.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use coinhop::prelude::*;
use platform_engine::audio;
use platform_engine::foundation::logging;

const DEFAULT_TICK_LIMIT: u64 = 60 * 60;

/// Run a scripted Coinhop session without a window
#[derive(Parser, Debug)]
#[command(name = "coinhop", version, about)]
struct Args {
    /// Game configuration file (.toml or .ron); defaults apply when missing
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Campaign file (.toml or .ron) replacing the built-in levels
    #[arg(long, value_name = "FILE")]
    levels: Option<PathBuf>,

    /// Start in multiplayer mode (flag only; plays locally)
    #[arg(long)]
    multiplayer: bool,

    /// Stop after this many ticks if the campaign is not finished
    #[arg(long, value_name = "N", default_value_t = DEFAULT_TICK_LIMIT)]
    ticks: u64,
}

impl Args {
    const fn mode(&self) -> GameMode {
        if self.multiplayer {
            GameMode::Multiplayer
        } else {
            GameMode::SinglePlayer
        }
    }
}

/// Key events to feed before tick `tick`: run right, hop every second, and
/// turn around every four seconds
fn scripted_keys(tick: u64) -> Vec<(KeyCode, bool)> {
    let mut keys = Vec::new();
    let phase = tick % 480;
    if phase == 0 {
        keys.push((KeyCode::ArrowLeft, false));
        keys.push((KeyCode::ArrowRight, true));
    } else if phase == 240 {
        keys.push((KeyCode::ArrowRight, false));
        keys.push((KeyCode::ArrowLeft, true));
    }
    match tick % 60 {
        0 | 20 => keys.push((KeyCode::ArrowUp, true)),
        5 | 25 => keys.push((KeyCode::ArrowUp, false)),
        _ => {}
    }
    keys
}

fn run(args: &Args) -> Result<(), GameError> {
    let config = match &args.config {
        Some(path) => GameConfig::load_or_default(path)?,
        None => GameConfig::default(),
    };
    let campaign = match &args.levels {
        Some(path) => Campaign::load_from_file(path)?,
        None => Campaign::standard(),
    };

    let mut session = GameSession::new(config, campaign, args.mode())?;
    let mut input = InputManager::new();
    let mut sink = LogAudioSink::new();
    let mut last_hud = session.hud();
    log::info!("Level {} '{}'", session.current_level() + 1, session.level_name());
    log::info!("{} | coins {} | health {}", last_hud.level_label(), last_hud.coins, last_hud.health);

    for tick in 0..args.ticks {
        for (key, pressed) in scripted_keys(tick) {
            input.handle_key_input(key, pressed, false);
        }

        let output = session.tick(&input.snapshot());

        for event in &output.events {
            if let Some(cue) = event.sound_cue() {
                audio::trigger(&mut sink, cue);
            }
            match event {
                GameEvent::LevelComplete { completed, next } => {
                    log::info!(
                        "Level {} complete, starting level {} '{}'",
                        completed + 1,
                        next + 1,
                        session.level_name()
                    );
                }
                GameEvent::GameComplete => log::info!("Congratulations! Every level is complete"),
                _ => {}
            }
        }

        if output.hud != last_hud {
            log::info!(
                "{} | coins {} | health {}{}",
                output.hud.level_label(),
                output.hud.coins,
                output.hud.health,
                output.hud.notification.as_deref().map(|n| format!(" | {n}")).unwrap_or_default()
            );
            last_hud = output.hud;
        }

        if output.status == GameStatus::GameComplete {
            break;
        }
    }

    let player = session.player();
    log::info!(
        "Stopped after {} ticks on level {} at ({:.1}, {:.1}), {} sounds played",
        session.tick_count(),
        session.current_level() + 1,
        player.body.position.x,
        player.body.position.y,
        sink.played()
    );
    Ok(())
}

fn main() -> ExitCode {
    logging::init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
