//! holdline-headless: drive the simulation without a window.
//!
//! Usage:
//!   holdline-headless [--frames N] [--seed S] [--dt SECONDS] [--save PATH]
//!
//! Starts a new game and plays it with a simple autopilot that tracks the
//! lowest enemy and keeps the trigger held. Cleared waves are continued
//! (and saved first when `--save` is given). Stops at game over or after N
//! frames, then prints the final snapshot as JSON.

use std::path::PathBuf;
use std::process;

use tracing::info;

use holdline_core::commands::{FrameInput, PlayerCommand};
use holdline_core::enums::GamePhase;
use holdline_core::events::GameEvent;
use holdline_core::state::GameStateSnapshot;
use holdline_sim::{SimConfig, SimulationEngine};

struct Options {
    frames: u64,
    seed: u64,
    dt: f32,
    save: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| matches!(a.as_str(), "help" | "--help" | "-h")) {
        print_usage();
        return;
    }
    let options = match parse_options(&args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{message}");
            print_usage();
            process::exit(1);
        }
    };

    let snapshot = run(&options);
    match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Failed to serialize snapshot: {e}");
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!(
        "holdline-headless: run HOLDLINE without a window\n\
         \n\
           --frames <N>     Frames to simulate (default: 36000)\n\
           --seed <S>       RNG seed (default: 42)\n\
           --dt <SECONDS>   Frame length (default: 0.016667)\n\
           --save <PATH>    Save after every cleared wave\n\
         \n\
         Logging follows RUST_LOG, e.g. RUST_LOG=holdline_sim=debug\n"
    );
}

fn parse_options(args: &[String]) -> Result<Options, String> {
    let mut options = Options {
        frames: 36_000,
        seed: 42,
        dt: 1.0 / 60.0,
        save: None,
    };

    let mut i = 0;
    while i < args.len() {
        let flag = args[i].as_str();
        let value = args
            .get(i + 1)
            .ok_or_else(|| format!("Missing value for {flag}"))?;
        match flag {
            "--frames" => options.frames = parse_value(flag, value)?,
            "--seed" => options.seed = parse_value(flag, value)?,
            "--dt" => options.dt = parse_value(flag, value)?,
            "--save" => options.save = Some(PathBuf::from(value)),
            other => return Err(format!("Unknown option: {other}")),
        }
        i += 2;
    }

    if !(options.dt.is_finite() && options.dt > 0.0) {
        return Err(format!("--dt must be a positive number, got {}", options.dt));
    }
    Ok(options)
}

fn parse_value<T: std::str::FromStr>(flag: &str, value: &str) -> Result<T, String> {
    value
        .parse()
        .map_err(|_| format!("Invalid value for {flag}: {value}"))
}

fn run(options: &Options) -> GameStateSnapshot {
    let mut config = SimConfig {
        seed: options.seed,
        ..Default::default()
    };
    if let Some(path) = &options.save {
        config.save_path = path.clone();
    }

    let mut engine = SimulationEngine::new(config);
    engine.queue_command(PlayerCommand::NewGame);
    let mut snapshot = engine.tick(0.0, &FrameInput::default());
    let mut kills = 0u32;

    for _ in 0..options.frames {
        match snapshot.phase {
            GamePhase::GameOver => break,
            GamePhase::WaveCleared => {
                if options.save.is_some() {
                    engine.queue_command(PlayerCommand::SaveGame);
                }
                engine.queue_command(PlayerCommand::ContinueWave);
            }
            _ => {}
        }

        snapshot = engine.tick(options.dt, &autopilot(&snapshot));
        kills += snapshot
            .events
            .iter()
            .filter(|e| matches!(e, GameEvent::EnemyDestroyed { .. }))
            .count() as u32;
    }

    info!(
        phase = ?snapshot.phase,
        round = snapshot.round,
        score = snapshot.score,
        kills,
        lives = snapshot.lives_remaining,
        frames = snapshot.time.frame,
        seconds = snapshot.time.elapsed_secs,
        "headless run finished"
    );
    snapshot
}

/// Steer under the lowest enemy and fire continuously.
fn autopilot(snapshot: &GameStateSnapshot) -> FrameInput {
    let target = snapshot
        .enemies
        .iter()
        .max_by(|a, b| a.position.y.total_cmp(&b.position.y))
        .map(|e| e.position.x + e.size.x / 2.0);

    let mut input = FrameInput {
        fire: true,
        ..Default::default()
    };
    if let Some(x) = target {
        let offset = x - snapshot.player.position.x;
        input.left = offset < -2.0;
        input.right = offset > 2.0;
    }
    input
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn defaults_without_flags() {
        let options = parse_options(&[]).unwrap();
        assert_eq!(options.seed, 42);
        assert_eq!(options.frames, 36_000);
        assert!(options.save.is_none());
    }

    #[test]
    fn flags_are_parsed() {
        let options =
            parse_options(&args(&["--frames", "10", "--seed", "7", "--dt", "0.5", "--save", "s.txt"]))
                .unwrap();
        assert_eq!(options.frames, 10);
        assert_eq!(options.seed, 7);
        assert_eq!(options.dt, 0.5);
        assert_eq!(options.save, Some(PathBuf::from("s.txt")));
    }

    #[test]
    fn bad_flags_are_rejected() {
        assert!(parse_options(&args(&["--frames"])).is_err());
        assert!(parse_options(&args(&["--frames", "many"])).is_err());
        assert!(parse_options(&args(&["--dt", "0"])).is_err());
        assert!(parse_options(&args(&["--speed", "2"])).is_err());
    }

    #[test]
    fn short_run_is_deterministic() {
        let options = Options {
            frames: 600,
            seed: 9,
            dt: 1.0 / 60.0,
            save: None,
        };
        let a = serde_json::to_string(&run(&options)).unwrap();
        let b = serde_json::to_string(&run(&options)).unwrap();
        assert_eq!(a, b);
    }
}
