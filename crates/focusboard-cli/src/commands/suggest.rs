use std::path::Path;

use focusboard_core::{smart_insights, suggest_next_task};
use serde::Serialize;

use crate::input::{load_config, SnapshotArgs};

#[derive(Serialize)]
struct InsightLine {
    #[serde(flatten)]
    insight: focusboard_core::Insight,
    message: String,
}

pub fn run_next(args: SnapshotArgs) -> Result<(), Box<dyn std::error::Error>> {
    let tasks = args.load_tasks()?;
    let now = args.now()?;

    match suggest_next_task(&tasks, &now) {
        Some(task) => println!("{}", serde_json::to_string_pretty(task)?),
        None => println!("null"),
    }
    Ok(())
}

pub fn run_insights(
    args: SnapshotArgs,
    config_path: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let tasks = args.load_tasks()?;
    let now = args.now()?;
    let config = load_config(config_path);

    let lines: Vec<InsightLine> = smart_insights(&tasks, &now, &config.insights)
        .into_iter()
        .map(|insight| InsightLine {
            message: insight.message(),
            insight,
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&lines)?);
    Ok(())
}
