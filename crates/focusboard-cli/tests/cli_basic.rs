//! Basic CLI E2E tests.
//!
//! Tests run the binary against snapshot files in a temp dir and verify outputs.

use assert_cmd::Command;
use predicates::str::contains;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const NOW: &str = "2026-05-20T09:00:00+00:00";

// createdAt 1779260400000 = 2026-05-20T07:00Z, 1777705200000 = 2026-05-02T07:00Z
const TASKS: &str = r#"[
    {"id": "low", "title": "Lire un article", "priority": "low", "createdAt": 1779260400000},
    {"id": "urgent", "title": "Fix prod", "priority": "urgent", "createdAt": 1779260400000},
    {"id": "old", "title": "Old chore", "priority": "medium", "createdAt": 1777705200000},
    {"id": "done", "title": "Shipped", "priority": "urgent", "completed": true,
     "status": "done", "createdAt": 1779260400000, "estimatedTime": 10}
]"#;

fn cli(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("focusboard-cli").expect("binary");
    cmd.env("HOME", home).env_remove("FOCUSBOARD_LOG");
    cmd
}

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

fn json_stdout(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_help() {
    let dir = TempDir::new().unwrap();
    cli(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("Focusboard CLI"));
}

#[test]
fn test_rank_orders_by_score() {
    let dir = TempDir::new().unwrap();
    let tasks = write(&dir, "tasks.json", TASKS);

    let ranked = json_stdout(cli(dir.path()).args(["rank", "--now", NOW, "--tasks"]).arg(&tasks));
    let ids: Vec<&str> = ranked
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["urgent", "low", "old", "done"]);
    assert_eq!(ranked[0]["score"], 40);
    assert_eq!(ranked[2]["score"], 10);
    assert_eq!(ranked[3]["effort"], "XS");
    assert!(ranked[0]["effort"].is_null());
}

#[test]
fn test_rank_reads_stdin() {
    let dir = TempDir::new().unwrap();
    let ranked = json_stdout(
        cli(dir.path())
            .args(["rank", "--now", NOW, "--tasks", "-"])
            .write_stdin(TASKS),
    );
    assert_eq!(ranked.as_array().unwrap().len(), 4);
}

#[test]
fn test_rank_filters_by_column() {
    let dir = TempDir::new().unwrap();
    let tasks = write(&dir, "tasks.json", TASKS);

    let ranked = json_stdout(
        cli(dir.path())
            .args(["rank", "--now", NOW, "--column", "upcoming", "--tasks"])
            .arg(&tasks),
    );
    let ids: Vec<&str> = ranked
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["low", "old"]);
}

#[test]
fn test_score_breakdown() {
    let dir = TempDir::new().unwrap();
    let tasks = write(&dir, "tasks.json", TASKS);

    let scores = json_stdout(
        cli(dir.path())
            .args(["score", "--now", NOW, "--id", "old", "--tasks"])
            .arg(&tasks),
    );
    assert_eq!(scores[0]["id"], "old");
    assert_eq!(scores[0]["priorityPoints"], 20);
    assert_eq!(scores[0]["stagnationPenalty"], 10);
    assert_eq!(scores[0]["score"], 10);
}

#[test]
fn test_score_unknown_id_fails() {
    let dir = TempDir::new().unwrap();
    let tasks = write(&dir, "tasks.json", TASKS);

    cli(dir.path())
        .args(["score", "--now", NOW, "--id", "nope", "--tasks"])
        .arg(&tasks)
        .assert()
        .failure()
        .stderr(contains("error: no task with id 'nope'"));
}

#[test]
fn test_next_skips_completed() {
    let dir = TempDir::new().unwrap();
    let tasks = write(&dir, "tasks.json", TASKS);

    let next = json_stdout(cli(dir.path()).args(["next", "--now", NOW, "--tasks"]).arg(&tasks));
    assert_eq!(next["id"], "urgent");
}

#[test]
fn test_next_with_nothing_open() {
    let dir = TempDir::new().unwrap();
    let tasks = write(&dir, "tasks.json", "[]");

    cli(dir.path())
        .args(["next", "--now", NOW, "--tasks"])
        .arg(&tasks)
        .assert()
        .success()
        .stdout("null\n");
}

#[test]
fn test_classify_title() {
    let dir = TempDir::new().unwrap();
    let suggestion = json_stdout(cli(dir.path()).args(["classify", "Urgent: corriger le bug"]));
    assert_eq!(suggestion["category"], "urgent");
    assert_eq!(suggestion["priority"], "urgent");
    assert_eq!(suggestion["estimatedTime"], 30);
    assert_eq!(suggestion["effort"], "S");
}

#[test]
fn test_effort_conversions() {
    let dir = TempDir::new().unwrap();
    cli(dir.path()).args(["effort", "45"]).assert().success().stdout("M\n");
    cli(dir.path()).args(["effort", "-5"]).assert().success().stdout("XS\n");
    cli(dir.path()).args(["effort", "m"]).assert().success().stdout("60\n");
    cli(dir.path())
        .args(["effort", "XXL"])
        .assert()
        .failure()
        .stderr(contains("Unknown effort 'XXL'"));
}

#[test]
fn test_column_assignment() {
    let dir = TempDir::new().unwrap();
    let tasks = write(&dir, "tasks.json", TASKS);

    let placements =
        json_stdout(cli(dir.path()).args(["column", "--now", NOW, "--tasks"]).arg(&tasks));
    assert_eq!(placements[0]["column"], "upcoming");
    assert_eq!(placements[1]["column"], "today");
    assert_eq!(placements[3]["column"], "today");
}

#[test]
fn test_insights_use_config_file() {
    let dir = TempDir::new().unwrap();
    let tasks = write(&dir, "tasks.json", TASKS);
    let config = write(&dir, "config.toml", "[insights]\nbreak_after_completed = 1\n");

    let insights = json_stdout(
        cli(dir.path())
            .args(["insights", "--now", NOW, "--config"])
            .arg(&config)
            .arg("--tasks")
            .arg(&tasks),
    );
    let kinds: Vec<&str> = insights
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["kind"].as_str().unwrap())
        .collect();
    assert_eq!(kinds, vec!["day_period", "urgent_pending", "stale", "break_earned"]);
    assert!(insights[1]["message"].as_str().unwrap().contains("1 urgent"));
}

#[test]
fn test_stats_summary() {
    let dir = TempDir::new().unwrap();
    let tasks = write(&dir, "tasks.json", TASKS);

    let summary = json_stdout(cli(dir.path()).args(["stats", "summary", "--tasks"]).arg(&tasks));
    assert_eq!(summary["completionRate"], 25);
    assert_eq!(summary["totalTasks"], 4);
    assert_eq!(summary["pendingTasks"], 3);
}

#[test]
fn test_stats_window_with_sessions() {
    let dir = TempDir::new().unwrap();
    let tasks = write(&dir, "tasks.json", TASKS);
    let sessions = write(
        &dir,
        "sessions.json",
        r#"[
            {"date": "2026-05-20", "type": "focus", "durationMinutes": 25},
            {"date": "2026-05-19", "type": "focus", "durationMinutes": 50},
            {"date": "2026-05-19", "type": "focus", "durationMinutes": -5},
            {"oops": true}
        ]"#,
    );

    let window = json_stdout(
        cli(dir.path())
            .args(["stats", "window", "--now", NOW, "--days", "3", "--tasks"])
            .arg(&tasks)
            .arg("--sessions")
            .arg(&sessions),
    );
    let buckets = window.as_array().unwrap();
    assert_eq!(buckets.len(), 3);
    assert_eq!(buckets[0]["date"], "2026-05-18");
    assert_eq!(buckets[1]["focusMinutes"], 50);
    assert_eq!(buckets[2]["focusMinutes"], 25);
    assert_eq!(buckets[2]["tasksCompleted"], 1);
}

#[test]
fn test_stats_window_rejects_oversized_days() {
    let dir = TempDir::new().unwrap();
    let tasks = write(&dir, "tasks.json", TASKS);

    cli(dir.path())
        .args(["stats", "window", "--now", NOW, "--days", "4294967295", "--tasks"])
        .arg(&tasks)
        .assert()
        .failure()
        .stderr(contains("analytics.window_days"));
}

#[test]
fn test_stats_full() {
    let dir = TempDir::new().unwrap();
    let tasks = write(&dir, "tasks.json", TASKS);

    let report =
        json_stdout(cli(dir.path()).args(["stats", "full", "--now", NOW, "--tasks"]).arg(&tasks));
    assert_eq!(report["summary"]["completedTasks"], 1);
    assert_eq!(report["window"].as_array().unwrap().len(), 7);
    assert_eq!(report["tasks"]["streak"], 1);
    assert_eq!(report["tasks"]["byPriority"]["urgent"], 2);
}

#[test]
fn test_bad_snapshot_reports_error() {
    let dir = TempDir::new().unwrap();
    let tasks = write(&dir, "tasks.json", "{not json");

    cli(dir.path())
        .args(["rank", "--tasks"])
        .arg(&tasks)
        .assert()
        .failure()
        .stderr(contains("error: JSON error"));
}

#[test]
fn test_bad_now_reports_error() {
    let dir = TempDir::new().unwrap();
    let tasks = write(&dir, "tasks.json", TASKS);

    cli(dir.path())
        .args(["rank", "--now", "yesterday", "--tasks"])
        .arg(&tasks)
        .assert()
        .failure()
        .stderr(contains("invalid --now"));
}

#[test]
fn test_config_roundtrip() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.toml");

    cli(dir.path())
        .args(["config", "get", "analytics.window_days", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout("7\n");

    cli(dir.path())
        .args(["config", "set", "analytics.window_days", "14", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout("ok\n");

    cli(dir.path())
        .args(["config", "get", "analytics.window_days", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout("14\n");

    cli(dir.path())
        .args(["config", "set", "analytics.nope", "1", "--config"])
        .arg(&config)
        .assert()
        .failure()
        .stderr(contains("Unknown configuration key"));

    cli(dir.path())
        .args(["config", "reset", "--config"])
        .arg(&config)
        .assert()
        .success();

    let listed = json_stdout(cli(dir.path()).args(["config", "list", "--config"]).arg(&config));
    assert_eq!(listed["analytics"]["window_days"], 7);
    assert_eq!(listed["insights"]["quick_win_minutes"], 15);
}

#[test]
fn test_config_path_uses_home() {
    let dir = TempDir::new().unwrap();
    cli(dir.path())
        .env_remove("FOCUSBOARD_ENV")
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(contains(".config/focusboard/config.toml"));
}
