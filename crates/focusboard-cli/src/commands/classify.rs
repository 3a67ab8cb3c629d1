use focusboard_core::{duration_to_effort, effort_to_duration, suggest, Effort};
use serde_json::json;

pub fn run_classify(title: &str) -> Result<(), Box<dyn std::error::Error>> {
    let suggestion = suggest(title);
    let effort = duration_to_effort(i64::from(suggestion.estimated_time));

    let mut value = serde_json::to_value(suggestion)?;
    value["effort"] = json!(effort);
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

/// Minutes map to a bucket; a bucket name maps to its nominal minutes.
pub fn run_effort(value: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Ok(minutes) = value.trim().parse::<i64>() {
        println!("{}", duration_to_effort(minutes));
        return Ok(());
    }
    let effort: Effort = value.parse()?;
    println!("{}", effort_to_duration(effort));
    Ok(())
}
