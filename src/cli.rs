//! Command-line and environment configuration for the replay runner.

use anyhow::{anyhow, bail, Result};

use crate::types::GameEvent;

/// Environment variable consulted when `--seed` is absent
pub const SEED_ENV: &str = "BLOCKFALL_SEED";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayConfig {
    pub seed: u32,
    /// Events to apply; `None` means read them from stdin
    pub events: Option<Vec<GameEvent>>,
    /// Print every cue and save to stderr
    pub verbose: bool,
}

/// Parse `args` (without the program name). `env_seed` is the value of
/// [`SEED_ENV`], if set.
pub fn parse_args(args: &[String], env_seed: Option<&str>) -> Result<ReplayConfig> {
    let mut seed = match env_seed {
        Some(v) => parse_seed(v)?,
        None => 0,
    };
    let mut events = None;
    let mut verbose = false;

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("replay: missing value for --seed"))?;
                seed = parse_seed(v)?;
            }
            "--events" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("replay: missing value for --events"))?;
                events = Some(parse_events(v)?);
            }
            "-v" | "--verbose" => verbose = true,
            other => bail!("replay: unknown argument: {}", other),
        }
        i += 1;
    }

    Ok(ReplayConfig {
        seed,
        events,
        verbose,
    })
}

fn parse_seed(v: &str) -> Result<u32> {
    v.trim()
        .parse::<u32>()
        .map_err(|_| anyhow!("replay: invalid seed: {}", v))
}

/// Parse events separated by commas and/or whitespace
pub fn parse_events(text: &str) -> Result<Vec<GameEvent>> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(|s| GameEvent::from_str(s).ok_or_else(|| anyhow!("replay: unknown event: {}", s)))
        .collect()
}
