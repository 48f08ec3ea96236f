use std::path::PathBuf;

use clap::Args;
use clockface_core::{now_angle, LayoutEngine, Mode};

#[derive(Args)]
pub struct PlanArgs {
    /// JSON events file (defaults to the built-in sample set)
    #[arg(long)]
    pub events: Option<PathBuf>,
    /// Dial mode override (12h or 24h)
    #[arg(long)]
    pub mode: Option<Mode>,
    /// Emit the full render plan as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: PlanArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mode = super::resolve_mode(args.mode);
    let events = super::resolve_events(args.events.as_ref())?;

    let mut plan = LayoutEngine::new(mode).compute(&events)?;
    plan.refresh_active(now_angle(mode));

    if args.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    println!(
        "mode {}  events {}  rings {}",
        plan.mode,
        plan.len(),
        plan.ring_count()
    );
    for item in &plan.by_track {
        println!(
            "track {}  {}  {:<12} {:6.1}\u{b0} +{:5.1}\u{b0}{}",
            item.track,
            super::display_time(&item.timecode),
            item.name,
            item.angle.start_deg,
            item.angle.extent_deg,
            if item.active { "  NOW" } else { "" },
        );
    }
    Ok(())
}
