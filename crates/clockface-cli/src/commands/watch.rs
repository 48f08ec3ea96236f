use std::path::PathBuf;
use std::time::Duration;

use chrono::{Local, Timelike};
use clap::Args;
use clockface_core::{format_clock, now_angle, Config, LayoutEngine, Mode};

#[derive(Args)]
pub struct WatchArgs {
    /// JSON events file (defaults to the built-in sample set)
    #[arg(long)]
    pub events: Option<PathBuf>,
    /// Dial mode override (12h or 24h)
    #[arg(long)]
    pub mode: Option<Mode>,
    /// Stop after this many ticks (runs until interrupted by default)
    #[arg(long)]
    pub ticks: Option<u64>,
}

pub fn run(args: WatchArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let mode = args.mode.unwrap_or(config.mode);
    let events = super::resolve_events(args.events.as_ref())?;

    // One full layout up front; each tick only moves the needle and
    // refreshes the active flags.
    let mut plan = LayoutEngine::new(mode).compute(&events)?;

    let mut tick = 0;
    loop {
        plan.refresh_active(now_angle(mode));

        let now = Local::now();
        let (hh, mm, ss) = format_clock(now.hour(), now.minute(), now.second());
        let active = plan
            .active_ids()
            .iter()
            .filter_map(|id| plan.item(id))
            .map(|item| item.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        if active.is_empty() {
            println!("{hh}:{mm}:{ss}");
        } else {
            println!("{hh}:{mm}:{ss}  NOW: {active}");
        }

        tick += 1;
        if let Some(limit) = args.ticks {
            if tick >= limit {
                break;
            }
        }
        std::thread::sleep(Duration::from_millis(config.refresh_ms));
    }
    Ok(())
}
