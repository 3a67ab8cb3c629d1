use clap::Args;
use focusboard_core::focus::{sort_with_scores, FocusScorer};
use focusboard_core::{group_by_column, Effort, TemporalColumn};
use serde::Serialize;

use crate::input::SnapshotArgs;

#[derive(Args)]
pub struct RankArgs {
    #[command(flatten)]
    pub snapshot: SnapshotArgs,
    /// Only rank tasks in this board column (today, upcoming, distant)
    #[arg(long)]
    pub column: Option<TemporalColumn>,
}

#[derive(Args)]
pub struct ScoreArgs {
    #[command(flatten)]
    pub snapshot: SnapshotArgs,
    /// Only score the task with this id
    #[arg(long)]
    pub id: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RankedTask<'a> {
    id: &'a str,
    title: &'a str,
    score: u8,
    effort: Option<Effort>,
    is_priority: bool,
    completed: bool,
}

pub fn run_rank(args: RankArgs) -> Result<(), Box<dyn std::error::Error>> {
    let tasks = args.snapshot.load_tasks()?;
    let now = args.snapshot.now()?;

    let selected: Vec<_> = match args.column {
        Some(column) => group_by_column(&tasks, &now)
            .into_iter()
            .filter(|(_, c)| *c == column)
            .map(|(t, _)| t.clone())
            .collect(),
        None => tasks,
    };

    let ranked: Vec<RankedTask> = sort_with_scores(&selected, &now)
        .into_iter()
        .map(|(t, score)| RankedTask {
            id: &t.id,
            title: &t.title,
            score,
            effort: t.effort(),
            is_priority: t.is_priority,
            completed: t.completed,
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&ranked)?);
    Ok(())
}

pub fn run_score(args: ScoreArgs) -> Result<(), Box<dyn std::error::Error>> {
    let tasks = args.snapshot.load_tasks()?;
    let scorer = FocusScorer::at(&args.snapshot.now()?);

    let mut out = Vec::new();
    for task in tasks.iter().filter(|t| args.id.as_ref().map_or(true, |id| &t.id == id)) {
        let mut value = serde_json::to_value(scorer.breakdown(task))?;
        value["id"] = serde_json::Value::String(task.id.clone());
        out.push(value);
    }
    if let Some(id) = &args.id {
        if out.is_empty() {
            return Err(format!("no task with id '{id}'").into());
        }
    }
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}
