use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod input;

use input::SnapshotArgs;

#[derive(Parser)]
#[command(name = "focusboard-cli", version, about = "Focusboard CLI")]
struct Cli {
    /// Use this config file instead of the default location
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Order tasks the way a board column shows them
    Rank(commands::rank::RankArgs),
    /// Focus Score breakdown per task
    Score(commands::rank::ScoreArgs),
    /// Suggest category, duration and priority for a title
    Classify {
        /// Task title
        title: String,
    },
    /// Task to work on next
    Next(SnapshotArgs),
    /// Dashboard insights
    Insights(SnapshotArgs),
    /// Temporal board column of every task
    Column(SnapshotArgs),
    /// Productivity statistics
    Stats {
        #[command(subcommand)]
        action: commands::stats::StatsAction,
    },
    /// Convert minutes to an effort size, or a size to minutes
    Effort {
        /// Minutes, or one of XS, S, M, L
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn init_tracing() {
    let filter = std::env::var("FOCUSBOARD_LOG")
        .ok()
        .and_then(|raw| EnvFilter::try_new(raw.trim()).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let config = cli.config.as_deref();
    let result = match cli.command {
        Commands::Rank(args) => commands::rank::run_rank(args),
        Commands::Score(args) => commands::rank::run_score(args),
        Commands::Classify { title } => commands::classify::run_classify(&title),
        Commands::Next(args) => commands::suggest::run_next(args),
        Commands::Insights(args) => commands::suggest::run_insights(args, config),
        Commands::Column(args) => commands::column::run(args),
        Commands::Stats { action } => commands::stats::run(action, config),
        Commands::Effort { value } => commands::classify::run_effort(&value),
        Commands::Config { action } => commands::config::run(action, config),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
