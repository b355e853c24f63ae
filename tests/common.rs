#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use pearlkite::core::events::EventLog;
use pearlkite::models::record::EventRecord;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn pk() -> Command {
    cargo_bin_cmd!("pearlkite")
}

/// Create a unique event log path inside the system temp dir and remove any existing file
pub fn setup_test_events(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_pearlkite", name));
    path.push("events");
    let events = path.to_string_lossy().to_string();
    fs::remove_file(&events).ok();
    events
}

/// A config path that does not exist, so the binary runs on defaults
pub fn missing_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_pearlkite_absent.conf", name));
    fs::remove_file(&path).ok();
    path.to_string_lossy().to_string()
}

/// A record with fixed identity fields and the given equipment/time window
pub fn record(kite: &str, from: &str, to: &str) -> EventRecord {
    EventRecord::new("-100200", "42", "Anna Petrova", kite, from, to)
}

/// Append `n` numbered records (`kite-1` .. `kite-n`) to `log`
pub fn populate(log: &EventLog, n: usize) {
    for i in 1..=n {
        log.append(&record(&format!("kite-{i}"), "10:00", "12:00"))
            .expect("append record");
    }
}
