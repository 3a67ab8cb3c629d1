use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};
use focusboard_core::ProductivityAnalyzer;

use crate::input::{load_config, load_sessions, SnapshotArgs};

#[derive(Args)]
pub struct WindowArgs {
    #[command(flatten)]
    pub snapshot: SnapshotArgs,
    /// Pomodoro session log as a JSON array
    #[arg(long, value_name = "FILE")]
    pub sessions: Option<PathBuf>,
    /// Number of days, overriding analytics.window_days
    #[arg(long)]
    pub days: Option<u32>,
}

#[derive(Subcommand)]
pub enum StatsAction {
    /// Completion rate and task counts
    Summary(SnapshotArgs),
    /// Completed tasks and focus minutes per day
    Window(WindowArgs),
    /// Summary, window and extended task statistics together
    Full(WindowArgs),
}

pub fn run(
    action: StatsAction,
    config_path: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut analytics = load_config(config_path).analytics;

    match action {
        StatsAction::Summary(args) => {
            let tasks = args.load_tasks()?;
            let summary = ProductivityAnalyzer::new(analytics).summary(&tasks);
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        StatsAction::Window(args) => {
            if let Some(days) = args.days {
                analytics.window_days = days;
                analytics.validate()?;
            }
            let tasks = args.snapshot.load_tasks()?;
            let sessions = load_sessions(args.sessions.as_deref())?;
            let now = args.snapshot.now()?;
            let window = ProductivityAnalyzer::new(analytics).window(&tasks, &sessions, &now);
            println!("{}", serde_json::to_string_pretty(&window)?);
        }
        StatsAction::Full(args) => {
            if let Some(days) = args.days {
                analytics.window_days = days;
                analytics.validate()?;
            }
            let tasks = args.snapshot.load_tasks()?;
            let sessions = load_sessions(args.sessions.as_deref())?;
            let now = args.snapshot.now()?;
            let report = ProductivityAnalyzer::new(analytics).report(&tasks, &sessions, &now);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}
