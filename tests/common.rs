#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use gatestats::models::event::GateEvent;
use gatestats::models::event_type::EventType;
use gatestats::utils::time::parse_event_time;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn gst() -> Command {
    cargo_bin_cmd!("gatestats")
}

/// Write a badge-gate CSV (header + rows) inside the system temp dir and
/// return its path. Any previous file with the same name is removed.
pub fn write_input_csv(name: &str, rows: &[&str]) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_gatestats.csv", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();

    let mut content = String::from("user_id,event_time,event_type\n");
    for row in rows {
        content.push_str(row);
        content.push('\n');
    }
    fs::write(&p, content).expect("write input csv");
    p
}

/// Create a unique output directory path inside the temp dir (removed first).
pub fn temp_out_dir(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_gatestats_out", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_dir_all(&p).ok();
    p
}

/// Build one event for library-level tests.
pub fn ev(user: &str, ts: &str, kind: EventType) -> GateEvent {
    GateEvent::new(user, parse_event_time(ts).expect("valid timestamp"), kind)
}

/// Small February 2023 dataset: u1 works 8h, u2 works 4h, one March row.
pub fn sample_rows() -> Vec<&'static str> {
    vec![
        "u1,2023-02-01T09:00:00.000000Z,gate_in",
        "u1,2023-02-01T17:00:00.000000Z,gate_out",
        "u2,2023-02-01T09:00:00.000000Z,GATE_IN",
        "u2,2023-02-01T13:00:00.000000Z,GATE_OUT",
        "u1,2023-03-01T09:00:00.000000Z,gate_in",
    ]
}
