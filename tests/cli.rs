//! End-to-end tests for the league-ranker binary

mod fixtures;

use fixtures::{SAMPLE_SEASON, SAMPLE_SEASON_RANKING};
use std::io::Write;
use std::process::{Command, Output, Stdio};

fn league_ranker() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_league-ranker"));
    command.env_remove("RUST_LOG");
    for var in [
        "LOG_LEVEL",
        "SERVICE_NAME",
        "RANKING_SCORERS",
        "POINTS_WIN",
        "POINTS_TIE",
        "POINTS_LOSS",
        "OUTPUT_FORMAT",
    ] {
        command.env_remove(var);
    }
    command
}

fn run_with_stdin(mut command: Command, input: &str) -> Output {
    let mut child = command
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_reads_stdin() {
    let output = run_with_stdin(league_ranker(), SAMPLE_SEASON);
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), SAMPLE_SEASON_RANKING);
}

#[test]
fn test_reads_input_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SAMPLE_SEASON.as_bytes()).unwrap();

    let output = league_ranker().arg(file.path()).output().unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), SAMPLE_SEASON_RANKING);
}

#[test]
fn test_scorer_flags() {
    let mut command = league_ranker();
    command.args(["--scorer", "match_result", "--scorer", "goal_difference"]);
    let output = run_with_stdin(command, SAMPLE_SEASON);
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output)[0], "1. Tarantulas, 6 pts, +3 GD");

    let mut command = league_ranker();
    command.arg("--no-scorers");
    let output = run_with_stdin(command, SAMPLE_SEASON);
    assert_eq!(
        stdout_lines(&output),
        vec![
            "1. FC Awesome",
            "2. Grouches",
            "3. Lions",
            "4. Snakes",
            "5. Tarantulas"
        ]
    );
}

#[test]
fn test_invalid_input_prints_no_ranking() {
    let output = run_with_stdin(league_ranker(), "Lions 3, Snakes 3\nLions -1, Snakes 0\n");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("line 2"));
}

#[test]
fn test_too_many_arguments() {
    let output = league_ranker()
        .args(["a.txt", "wrong_additional_arg"])
        .output()
        .unwrap();
    assert!(!output.status.success());
}

#[test]
fn test_missing_input_file() {
    let output = league_ranker()
        .arg("/nonexistent/matches.txt")
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to open input file"));
}

#[test]
fn test_dry_run_with_bad_config() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[service]\nlog_level = \"loud\"").unwrap();

    let output = league_ranker()
        .arg("--config")
        .arg(file.path())
        .arg("--dry-run")
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Configuration error"));
}
