//! Headless replay runner (default binary).
//!
//! Applies a scripted event stream to a fresh game and prints the final
//! snapshot as JSON on stdout. Events come from `--events` or, failing that,
//! stdin (comma or whitespace separated). Cues and saves go to stderr with
//! `--verbose`.

use std::io::{self, Read};

use anyhow::{Context, Result};

use blockfall::cli::{parse_args, parse_events, SEED_ENV};
use blockfall::core::GameState;
use blockfall::engine::{EngineConfig, GameEngine, SaveSink, SoundSink};
use blockfall::types::SoundCue;

struct StderrSound {
    enabled: bool,
}

impl SoundSink for StderrSound {
    fn play(&mut self, cue: SoundCue) {
        if self.enabled {
            eprintln!("cue {}", cue.as_str());
        }
    }
}

struct StderrSave {
    enabled: bool,
    saves: u32,
}

impl SaveSink for StderrSave {
    fn save(&mut self, state: &GameState) -> Result<()> {
        self.saves += 1;
        if self.enabled {
            let line = serde_json::to_string(&state.snapshot())?;
            eprintln!("save #{} {}", self.saves, line);
        }
        Ok(())
    }
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let env_seed = std::env::var(SEED_ENV).ok();
    let config = parse_args(&args, env_seed.as_deref())?;

    let events = match config.events {
        Some(events) => events,
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("replay: reading events from stdin")?;
            parse_events(&text)?
        }
    };

    let mut engine = GameEngine::with_sinks(
        EngineConfig::with_seed(config.seed),
        StderrSound {
            enabled: config.verbose,
        },
        StderrSave {
            enabled: config.verbose,
            saves: 0,
        },
    );

    for event in events {
        let outcome = engine.handle(event).clone();
        if !config.verbose {
            continue;
        }
        if outcome.locked {
            eprintln!(
                "lock lines={} next={}",
                outcome.lines_cleared,
                engine.state().current().shape().as_str()
            );
        }
        if let Some(ms) = outcome.gravity_changed {
            eprintln!("gravity {}ms", ms);
        }
    }

    let snapshot = engine.snapshot();
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}
