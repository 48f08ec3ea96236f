use std::path::PathBuf;

use clap::Args;
use clockface_core::{color, now_angle, Config, LayoutEngine, Mode, PlanItem};

#[derive(Args)]
pub struct StackArgs {
    /// JSON events file (defaults to the built-in sample set)
    #[arg(long)]
    pub events: Option<PathBuf>,
    /// Dial mode override (12h or 24h)
    #[arg(long)]
    pub mode: Option<Mode>,
}

/// Display color for a stack row: inactive events are dimmed through HSL
/// lightness when the config asks for it. Colors that are not hex triplets
/// are opaque to us and pass through unchanged.
fn row_color(item: &PlanItem, dim_inactive: bool) -> String {
    if item.active || !dim_inactive {
        return item.color.clone();
    }
    match color::parse_hex(&item.color) {
        Ok(rgb) => color::to_hex(color::dim(rgb, 0.5)),
        Err(_) => item.color.clone(),
    }
}

pub fn run(args: StackArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let mode = args.mode.unwrap_or(config.mode);
    let events = super::resolve_events(args.events.as_ref())?;

    let mut plan = LayoutEngine::new(mode).compute(&events)?;
    plan.refresh_active(now_angle(mode));

    for item in &plan.by_start_time {
        println!(
            "{}  {:<12} {}{}",
            super::display_time(&item.timecode),
            item.name,
            row_color(item, config.dim_inactive),
            if item.active { "  NOW" } else { "" },
        );
    }
    Ok(())
}
