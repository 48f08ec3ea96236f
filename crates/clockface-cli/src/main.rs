use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "clockface-cli", version, about = "Clockface CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the full dial layout for an event set
    Plan(commands::plan::PlanArgs),
    /// Show the linear stack view ordered by start time
    Stack(commands::stack::StackArgs),
    /// Show the digital clock and current needle angle
    Now(commands::now::NowArgs),
    /// Redraw the stack view at the configured cadence
    Watch(commands::watch::WatchArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Emit the built-in demo event set as JSON
    Sample(commands::sample::SampleArgs),
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Plan(args) => commands::plan::run(args),
        Commands::Stack(args) => commands::stack::run(args),
        Commands::Now(args) => commands::now::run(args),
        Commands::Watch(args) => commands::watch::run(args),
        Commands::Config { action } => commands::config::run(action),
        Commands::Sample(args) => commands::sample::run(args),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
