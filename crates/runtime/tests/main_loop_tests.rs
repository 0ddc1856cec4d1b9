use std::fs;
use std::path::PathBuf;
use std::process::Command;
use std::sync::mpsc;

use runtime::app::{run, RunConfig};
use runtime::dump::{write_transforms, TransformRecord};
use settings::Settings;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("pile_runtime_{}_{name}", std::process::id()))
}

fn headless(frames: u64) -> RunConfig {
    RunConfig {
        frames: Some(frames),
        log_every: 0,
        seed: Some(11),
        ..RunConfig::default()
    }
}

fn settings(json: &str) -> Settings {
    json.parse().unwrap()
}

#[test]
fn headless_run_steps_every_frame() {
    let s = settings(r#"{ "ballCount": 12 }"#);
    let summary = run(&s, &headless(90), None);
    assert_eq!(summary.frames, 90);
    assert_eq!(summary.info.frame, 90);
    assert_eq!(summary.transforms.len(), 12);
    assert_eq!(summary.reloads, 0);
}

#[test]
fn same_seed_gives_same_pile() {
    let s = settings(r#"{ "ballCount": 8 }"#);
    let a = run(&s, &headless(200), None);
    let b = run(&s, &headless(200), None);
    assert_eq!(a.transforms, b.transforms);
}

#[test]
fn pending_reload_applies_before_first_step() {
    let (tx, rx) = mpsc::channel();
    tx.send(settings(r#"{ "ballCount": 5 }"#)).unwrap();

    let summary = run(&settings(r#"{ "ballCount": 20 }"#), &headless(10), Some(&rx));
    assert_eq!(summary.reloads, 1);
    assert_eq!(summary.transforms.len(), 5);
}

#[test]
fn latest_reload_wins() {
    let (tx, rx) = mpsc::channel();
    tx.send(settings(r#"{ "ballCount": 3 }"#)).unwrap();
    tx.send(settings(r#"{ "ballCount": 7 }"#)).unwrap();

    let summary = run(&Settings::default(), &headless(5), Some(&rx));
    assert_eq!(summary.reloads, 2);
    assert_eq!(summary.transforms.len(), 7);
}

#[test]
fn deactivating_reload_empties_transforms() {
    let (tx, rx) = mpsc::channel();
    tx.send(settings(r#"{ "active": false }"#)).unwrap();

    let summary = run(&settings(r#"{ "ballCount": 10 }"#), &headless(30), Some(&rx));
    assert!(!summary.info.active);
    assert!(summary.transforms.is_empty());
}

#[test]
fn zero_frames_leaves_nothing_spawned() {
    let summary = run(&Settings::default(), &headless(0), None);
    assert_eq!(summary.frames, 0);
    assert!(summary.transforms.is_empty());
}

#[test]
fn dump_writes_one_record_per_ball() {
    let summary = run(&settings(r#"{ "ballCount": 6 }"#), &headless(20), None);
    let path = temp_path("dump.json");
    write_transforms(&path, &summary.transforms).unwrap();

    let records: Vec<TransformRecord> = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    fs::remove_file(&path).ok();

    assert_eq!(records.len(), 6);
    for (record, t) in records.iter().zip(&summary.transforms) {
        assert_eq!(record.position, t.position.to_array());
        assert_eq!(record.radius, t.radius);
    }
}

#[test]
fn dump_into_missing_directory_fails() {
    let path = temp_path("no_such_dir").join("dump.json");
    assert!(write_transforms(&path, &[]).is_err());
}

#[test]
fn binary_runs_headless_and_dumps() {
    let settings_path = temp_path("bin_settings.json");
    let dump_path = temp_path("bin_dump.json");
    fs::write(&settings_path, r#"{ "ballCount": 9, "gravity": 0.5 }"#).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_pile_runtime"))
        .arg("--settings")
        .arg(&settings_path)
        .args(["--frames", "30", "--seed", "4", "--log-every", "10"])
        .arg("--dump")
        .arg(&dump_path)
        .output()
        .expect("failed to spawn pile_runtime");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let dumped = fs::read_to_string(&dump_path);
    fs::remove_file(&settings_path).ok();
    fs::remove_file(&dump_path).ok();

    assert!(output.status.success(), "pile_runtime failed: {}", String::from_utf8_lossy(&output.stderr));
    assert!(stdout.contains("run finished"), "missing summary line in:\n{stdout}");
    let records: Vec<TransformRecord> = serde_json::from_str(&dumped.unwrap()).unwrap();
    assert_eq!(records.len(), 9);
}

#[test]
fn binary_rejects_watch_without_settings() {
    let output = Command::new(env!("CARGO_BIN_EXE_pile_runtime"))
        .arg("--watch")
        .output()
        .expect("failed to spawn pile_runtime");
    assert!(!output.status.success());
}

#[test]
fn binary_reports_missing_settings_file() {
    let output = Command::new(env!("CARGO_BIN_EXE_pile_runtime"))
        .args(["--settings", "/definitely/not/here.json", "--frames", "1"])
        .output()
        .expect("failed to spawn pile_runtime");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("here.json"));
}
