use chrono::{Local, Timelike};
use clap::Args;
use clockface_core::{format_clock, now_angle, Mode};

#[derive(Args)]
pub struct NowArgs {
    /// Dial mode override (12h or 24h)
    #[arg(long)]
    pub mode: Option<Mode>,
}

pub fn run(args: NowArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mode = super::resolve_mode(args.mode);
    let now = Local::now();
    let (hh, mm, ss) = format_clock(now.hour(), now.minute(), now.second());

    println!(
        "{hh}:{mm}:{ss}  needle {:6.2}\u{b0}  mode {mode}",
        now_angle(mode)
    );
    Ok(())
}
