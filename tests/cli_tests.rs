//! Integration tests for the sanim CLI
//!
//! These tests run the binary against fixture sheets and check exit codes
//! and output.

use std::fs;
use std::path::PathBuf;
use std::process::Command;

use tempfile::TempDir;

/// Path to the sanim binary built for this test run
fn sanim_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_sanim"))
}

/// Run sanim with isolated config discovery
fn run_sanim(args: &[&str]) -> std::process::Output {
    let home = TempDir::new().expect("should create temp dir");
    Command::new(sanim_binary())
        .args(args)
        .env("XDG_CONFIG_HOME", home.path())
        .env_remove("SHEETANIM_LOG")
        .env_remove("SHEETANIM_CONFIG")
        .output()
        .expect("Failed to execute sanim")
}

fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

#[test]
fn test_decode_prints_animations() {
    let output = run_sanim(&["decode", "tests/fixtures/valid/walk.json"]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let value = stdout_json(&output);
    let frames = value["walk"]["frames"].as_array().expect("walk frames");
    assert_eq!(frames.len(), 3);
    assert_eq!(frames[0]["duration_ticks"], 6);
    assert_eq!(frames[0]["slices"]["hitbox"]["y"], 10);
    assert_eq!(value["walk"]["direction"], "forward");
}

#[test]
fn test_decode_tag_filter_accepts_display_name() {
    let output = run_sanim(&["decode", "tests/fixtures/valid/knight.json", "--tag", "Idle Loop", "--compact"]);
    assert!(output.status.success());

    let text = String::from_utf8_lossy(&output.stdout);
    assert_eq!(text.trim().lines().count(), 1, "compact output is one line");

    let value = stdout_json(&output);
    assert!(value.get("idle_loop").is_some());
    assert!(value.get("blink").is_none());
}

#[test]
fn test_decode_unknown_tag() {
    let output = run_sanim(&["decode", "tests/fixtures/valid/walk.json", "--tag", "run"]);
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Available tags: walk"));
}

#[test]
fn test_decode_mirror_and_sprites() {
    let output = run_sanim(&["decode", "tests/fixtures/valid/knight.json", "--mirror", "--sprites"]);
    assert!(output.status.success());

    let value = stdout_json(&output);
    assert!(value["blink"].is_object());
    assert_eq!(value["blink_mirrored"]["flip_horizontally"], true);
    assert_eq!(value["idle_loop_mirrored"].as_array().map(Vec::len), Some(6));
}

#[test]
fn test_decode_writes_output_file() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("walk.anim.json");
    let output = run_sanim(&["decode", "tests/fixtures/valid/walk.json", "-o", out.to_str().unwrap()]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());

    let written: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert!(written.get("walk").is_some());
}

#[test]
fn test_decode_invalid_sheet_fails() {
    let output = run_sanim(&["decode", "tests/fixtures/invalid/missing_duration.json"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("frames[1].duration"), "stderr: {}", stderr);
}

#[test]
fn test_decode_with_config_file() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("sheetanim.toml");
    fs::write(&config, "[decode]\ntick_ms = 100\nticks_per_step = 1\n").unwrap();

    let output = run_sanim(&["decode", "tests/fixtures/valid/walk.json", "--config", config.to_str().unwrap()]);
    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["walk"]["frames"][0]["duration_ticks"], 1);
}

#[test]
fn test_invalid_config_is_rejected() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("sheetanim.toml");
    fs::write(&config, "[decode]\ntick_ms = 0\n").unwrap();

    let output = run_sanim(&["info", "tests/fixtures/valid/walk.json", "--config", config.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_config_from_environment() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("custom.toml");
    fs::write(&config, "[output]\nmirror_suffix = \"_left\"\n").unwrap();

    let output = Command::new(sanim_binary())
        .args(["decode", "tests/fixtures/valid/walk.json", "--mirror"])
        .env("XDG_CONFIG_HOME", temp.path())
        .env("SHEETANIM_CONFIG", &config)
        .output()
        .expect("Failed to execute sanim");
    assert!(output.status.success());
    assert!(stdout_json(&output).get("walk_left").is_some());
}

#[test]
fn test_info_text_and_json() {
    let output = run_sanim(&["info", "tests/fixtures/valid/knight.json"]);
    assert!(output.status.success());
    let text = String::from_utf8_lossy(&output.stdout);
    assert!(text.contains("idle_loop (pingpong)"));
    assert!(text.contains("weapon"));

    let output = run_sanim(&["info", "tests/fixtures/valid/knight.json", "--format", "json"]);
    assert!(output.status.success());
    let value = stdout_json(&output);
    let tags = value.as_array().expect("json info is a list");
    assert_eq!(tags.len(), 2);
    assert_eq!(tags[1]["tag"], "idle_loop");
    assert_eq!(tags[1]["frame_indices"], serde_json::json!([0, 1, 2, 3, 2, 1]));
    assert_eq!(tags[1]["total_ticks"], 30);
}

#[test]
fn test_info_unknown_format() {
    let output = run_sanim(&["info", "tests/fixtures/valid/walk.json", "--format", "yaml"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_check_valid_directory() {
    let output = run_sanim(&["check", "--dir", "tests/fixtures/valid"]);
    assert!(output.status.success(), "stdout: {}", String::from_utf8_lossy(&output.stdout));
    let text = String::from_utf8_lossy(&output.stdout);
    assert!(text.contains("2 checked, 0 failed"));
}

#[test]
fn test_check_reports_failures() {
    let output = run_sanim(&["check", "--dir", "tests/fixtures/invalid"]);
    assert_eq!(output.status.code(), Some(1));
    let text = String::from_utf8_lossy(&output.stdout);
    assert!(text.contains("FAIL"));
    assert!(text.contains("[missing_field]"));
    assert!(text.contains("[malformed_reference]"));
    assert!(text.contains("3 checked, 3 failed"));
}

#[test]
fn test_check_requires_input() {
    let output = run_sanim(&["check"]);
    assert_eq!(output.status.code(), Some(2));
}
