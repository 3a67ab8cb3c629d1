//! Snapshot inputs shared by the board and stats commands.

use std::io::Read;
use std::path::{Path, PathBuf};

use chrono::{DateTime, FixedOffset, Local};
use clap::Args;
use focusboard_core::stats::{parse_session_log, SessionEntry};
use focusboard_core::{parse_snapshot, Config, Task};

#[derive(Args, Debug, Clone)]
pub struct SnapshotArgs {
    /// Task snapshot as a JSON array (`-` reads stdin)
    #[arg(long, value_name = "FILE")]
    pub tasks: PathBuf,
    /// Evaluate at this instant instead of the local clock (RFC 3339)
    #[arg(long, value_name = "RFC3339")]
    pub now: Option<String>,
}

impl SnapshotArgs {
    pub fn load_tasks(&self) -> Result<Vec<Task>, Box<dyn std::error::Error>> {
        let json = read_source(&self.tasks)?;
        Ok(parse_snapshot(&json)?)
    }

    pub fn now(&self) -> Result<DateTime<FixedOffset>, Box<dyn std::error::Error>> {
        resolve_now(self.now.as_deref())
    }
}

/// `--now` when given, otherwise the local clock with its offset.
pub fn resolve_now(raw: Option<&str>) -> Result<DateTime<FixedOffset>, Box<dyn std::error::Error>> {
    match raw {
        Some(raw) => DateTime::parse_from_rfc3339(raw)
            .map_err(|e| format!("invalid --now '{raw}': {e}").into()),
        None => Ok(Local::now().fixed_offset()),
    }
}

/// Read a session log file; entries that do not parse are dropped.
pub fn load_sessions(path: Option<&Path>) -> Result<Vec<SessionEntry>, Box<dyn std::error::Error>> {
    let Some(path) = path else {
        return Ok(Vec::new());
    };
    let raw: Vec<serde_json::Value> = serde_json::from_str(&read_source(path)?)?;
    Ok(parse_session_log(&raw))
}

/// Config from `--config` when given, otherwise the default location.
pub fn load_config(path: Option<&Path>) -> Config {
    match path {
        Some(path) => Config::load_from(path).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "falling back to default config");
            Config::default()
        }),
        None => Config::load_or_default(),
    }
}

fn read_source(path: &Path) -> Result<String, Box<dyn std::error::Error>> {
    if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read {}: {e}", path.display()).into())
    }
}
