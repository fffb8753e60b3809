mod common;

use common::*;

#[test]
fn test_timeline_walks_through_every_stage() {
    let env = TestEnv::new();
    let result = env.run(&["timeline"]);

    assert!(result.success, "{}", result.stderr);
    let out = &result.stdout;
    for line in [
        "[     0ms] loading started",
        "[   800ms] progress  20%  Cargando componentes...",
        "[  4000ms] progress 100%  Sistema listo!",
        "[  4500ms] stage loading -> welcome",
        "[  5000ms] enter accepted",
        "[  5300ms] stage welcome -> main",
        "revealed sobre-mi",
        "revealed contacto",
    ] {
        assert!(out.contains(line), "missing {:?} in:\n{}", line, out);
    }
    assert!(out.trim_end().ends_with("stage main, 4/4 sections revealed"), "{}", out);
}

#[test]
fn test_timeline_stops_at_duration() {
    let env = TestEnv::new();
    let result = env.run(&["timeline", "--duration", "1000"]);

    assert!(result.success);
    assert!(!result.stdout.contains("welcome"));
    assert!(result.stdout.contains("stage loading, 0/4 sections revealed"));
}

#[test]
fn test_timeline_json_is_ndjson() {
    let env = TestEnv::new();
    let result = env.run(&["timeline", "--json"]);

    assert!(result.success, "{}", result.stderr);
    let events = result.json_lines();
    assert_eq!(events.first().map(|e| e["event"].clone()), Some("loading_started".into()));
    assert_eq!(events.last().map(|e| e["event"].clone()), Some("shutdown".into()));
    assert!(events
        .iter()
        .any(|e| e["event"] == "stage_changed" && e["to"] == "main"));

    let revealed = events
        .iter()
        .filter(|e| e["event"] == "section_revealed")
        .count();
    assert_eq!(revealed, 4);
}

#[test]
fn test_timeline_uses_config_timing() {
    let env = TestEnv::new();
    let config = env.write_file("fast.toml", FAST_TIMING);
    let config = config.to_string_lossy();
    let result = env.run(&["timeline", "--config", &config, "--enter-after", "300"]);

    assert!(result.success, "{}", result.stderr);
    assert!(result.stdout.contains("[   200ms] progress 100%"), "{}", result.stdout);
    assert!(result.stdout.contains("[   250ms] stage loading -> welcome"));
    assert!(result.stdout.contains("[   350ms] stage welcome -> main"));
}

#[test]
fn test_timeline_early_enter_is_not_ignored() {
    let env = TestEnv::new();
    let result = env.run(&["timeline", "--enter-after", "0"]);

    assert!(result.success);
    assert!(!result.stdout.contains("enter ignored"));
    assert!(result.stdout.contains("[  4500ms] enter accepted"));
}

#[test]
fn test_timeline_tall_viewport_reveals_in_page_order() {
    let env = TestEnv::new();
    let result = env.run(&["timeline", "--height", "200"]);

    assert!(result.success, "{}", result.stderr);
    let order: Vec<&str> = result
        .stdout
        .lines()
        .filter_map(|line| line.trim_start().strip_prefix("revealed "))
        .map(|rest| rest.split_whitespace().next().unwrap_or(""))
        .collect();
    assert_eq!(order, vec!["sobre-mi", "proyectos", "skills", "contacto"]);
}
