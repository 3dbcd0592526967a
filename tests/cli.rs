use std::io::Write;
use std::process::{Command, Output};

use tempfile::NamedTempFile;

fn ungraph(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ungraph"))
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .expect("failed to spawn ungraph")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

fn edge_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_default_run_reports_reference_graph() {
    let output = ungraph(&[]);
    assert!(output.status.success());

    let out = stdout(&output);
    assert!(out.contains("A -> [B, C]\n"));
    assert!(out.contains("D -> [B, C, E]\n"));
    assert!(out.contains("Visit order: A -> B -> C -> D -> E\n"));
    assert!(out.contains("Visit order: A -> B -> D -> C -> E\n"));
}

#[test]
fn test_missing_start_gives_empty_orders() {
    let output = ungraph(&["--start", "Z"]);
    assert!(output.status.success());

    let out = stdout(&output);
    let empty_orders = out.lines().filter(|line| *line == "Visit order: ").count();
    assert_eq!(empty_orders, 2);
}

#[test]
fn test_malformed_edge_list_fails_with_line_number() {
    let file = edge_file("A B\nA B C\n");
    let output = ungraph(&["--edges", file.path().to_str().unwrap()]);

    assert!(!output.status.success());
    let err = stderr(&output);
    assert!(err.contains("line 2"), "stderr was: {err}");
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_edges_file_with_isolated_node() {
    let file = edge_file("# ring\n1 2\n2 3\n3 1\n9\n");
    let output = ungraph(&["--edges", file.path().to_str().unwrap(), "--start", "2"]);
    assert!(output.status.success());

    let out = stdout(&output);
    assert!(out.contains("9 -> []\n"));
    assert!(out.contains("Visit order: 2 -> 1 -> 3\n"));
}

#[test]
fn test_dot_on_stdout_is_the_only_output() {
    let output = ungraph(&["--render", "dot"]);
    assert!(output.status.success());

    let out = stdout(&output);
    assert!(out.starts_with("graph {\n"), "stdout was: {out}");
    assert!(out.trim_end().ends_with('}'));
    assert!(!out.contains("Visit order"));
    assert!(out.contains("label=\"Graph Structure\";"));
    assert_eq!(out.matches("[fillcolor=lightcoral];").count(), 5);
    assert_eq!(out.matches(" -- ").count(), 5);

    // The report moves to stderr.
    assert!(stderr(&output).contains("Visit order: A -> B -> C -> D -> E"));
}

#[test]
fn test_json_on_stdout_parses() {
    let output = ungraph(&["--render", "json", "--start", "E", "--title", "From E"]);
    assert!(output.status.success());

    let scene: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(scene["title"], "From E");
    assert_eq!(scene["nodes"].as_array().unwrap().len(), 5);
    assert_eq!(scene["edges"].as_array().unwrap().len(), 5);
    assert_eq!(scene["highlight"].as_array().unwrap().len(), 5);
}

#[test]
fn test_missing_start_renders_without_highlight() {
    let output = ungraph(&["--render", "dot", "--start", "Z"]);
    assert!(output.status.success());

    let out = stdout(&output);
    assert!(out.starts_with("graph {\n"));
    assert!(!out.contains("lightcoral"));
    assert_eq!(out.matches("[fillcolor=skyblue];").count(), 5);
}

#[test]
fn test_render_to_output_file_keeps_report_on_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scene.json");
    let output = ungraph(&["--render", "json", "--output", path.to_str().unwrap()]);
    assert!(output.status.success());

    assert!(stdout(&output).contains("Visit order: A -> B -> C -> D -> E\n"));

    let written = std::fs::read(&path).unwrap();
    let scene: serde_json::Value = serde_json::from_slice(&written).unwrap();
    assert_eq!(scene["title"], "Graph Structure");
}

#[test]
fn test_logs_are_plain_when_stderr_is_captured() {
    let output = Command::new(env!("CARGO_BIN_EXE_ungraph"))
        .env("RUST_LOG", "info")
        .output()
        .expect("failed to spawn ungraph");
    assert!(output.status.success());

    let err = stderr(&output);
    assert!(err.contains("graph loaded"), "stderr was: {err}");
    assert!(!err.contains('\u{1b}'));
}
