use std::path::PathBuf;

use clap::Args;
use clockface_core::sample_events;

#[derive(Args)]
pub struct SampleArgs {
    /// Write to a file instead of stdout
    #[arg(long)]
    pub out: Option<PathBuf>,
}

pub fn run(args: SampleArgs) -> Result<(), Box<dyn std::error::Error>> {
    let json = serde_json::to_string_pretty(&sample_events())?;
    match args.out {
        Some(path) => {
            std::fs::write(&path, json)?;
            println!("wrote sample events to {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}
