use focusboard_core::{group_by_column, TemporalColumn};
use serde::Serialize;

use crate::input::SnapshotArgs;

#[derive(Serialize)]
struct Placement<'a> {
    id: &'a str,
    column: TemporalColumn,
}

pub fn run(args: SnapshotArgs) -> Result<(), Box<dyn std::error::Error>> {
    let tasks = args.load_tasks()?;
    let now = args.now()?;

    let placements: Vec<Placement> = group_by_column(&tasks, &now)
        .into_iter()
        .map(|(t, column)| Placement { id: &t.id, column })
        .collect();
    println!("{}", serde_json::to_string_pretty(&placements)?);
    Ok(())
}
