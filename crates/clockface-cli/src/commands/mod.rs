pub mod config;
pub mod now;
pub mod plan;
pub mod sample;
pub mod stack;
pub mod watch;

use std::path::PathBuf;

use clockface_core::{load_events, sample_events, Config, Event, Mode};

/// Resolve the dial mode: command-line flag first, then config.
fn resolve_mode(flag: Option<Mode>) -> Mode {
    flag.unwrap_or_else(|| Config::load_or_default().mode)
}

/// Resolve the event set: events file if given, else the built-in sample.
fn resolve_events(path: Option<&PathBuf>) -> Result<Vec<Event>, Box<dyn std::error::Error>> {
    match path {
        Some(path) => Ok(load_events(path)?),
        None => Ok(sample_events()),
    }
}

/// `HHMM` timecode to `HH:MM` for display.
fn display_time(timecode: &str) -> String {
    format!("{}:{}", &timecode[..2], &timecode[2..])
}
