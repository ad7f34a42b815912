use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "commit-cli", version, about = "Commit habit tracker CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Goal management
    Goal {
        #[command(subcommand)]
        action: commands::goal::GoalAction,
    },
    /// Task completion
    Task {
        #[command(subcommand)]
        action: commands::task::TaskAction,
    },
    /// Edit the tasks of one program day
    Day {
        #[command(subcommand)]
        action: commands::day::DayAction,
    },
    /// Rest days
    Skip {
        #[command(subcommand)]
        action: commands::skip::SkipAction,
    },
    /// Streak and progress for a goal
    Stats(commands::stats::StatsArgs),
    /// What to do today across all goals
    Today(commands::today::TodayArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Goal { action } => commands::goal::run(action),
        Commands::Task { action } => commands::task::run(action),
        Commands::Day { action } => commands::day::run(action),
        Commands::Skip { action } => commands::skip::run(action),
        Commands::Stats(args) => commands::stats::run(args),
        Commands::Today(args) => commands::today::run(args),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
