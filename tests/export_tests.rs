mod common;
use common::{gst, sample_rows, temp_out_dir, write_input_csv};
use predicates::str::contains;
use std::fs;
use std::path::Path;

#[test]
fn test_export_reports_json() {
    let input = write_input_csv("export_json", &sample_rows());
    let out = temp_out_dir("export_json");

    gst()
        .args([
            "--input", &input, "analyze", "--period", "2023-02", "--out-dir", &out, "--format",
            "json", "--force",
        ])
        .assert()
        .success();

    let rank_json =
        fs::read_to_string(Path::new(&out).join("attendance_rank.json")).expect("ranking report");
    let rows: serde_json::Value = serde_json::from_str(&rank_json).expect("valid JSON");
    assert_eq!(rows[0]["user_id"], "u1");
    assert_eq!(rows[0]["rank"], 1);
    assert_eq!(rows[0]["average_per_day"], 8.0);

    let session_json =
        fs::read_to_string(Path::new(&out).join("longest_session.json")).expect("session report");
    let winner: serde_json::Value = serde_json::from_str(&session_json).expect("valid JSON");
    assert_eq!(winner[0]["user_id"], "u1");
    assert_eq!(winner[0]["session_length"], 28800);
}

#[test]
fn test_export_empty_month_still_writes_reports() {
    let input = write_input_csv("export_empty", &sample_rows());
    let out = temp_out_dir("export_empty");

    gst()
        .args([
            "--input", &input, "analyze", "--period", "2024-06", "--out-dir", &out, "--force",
        ])
        .assert()
        .success()
        .stdout(contains("No attendance data for the selected month."));

    let rank_csv =
        fs::read_to_string(Path::new(&out).join("attendance_rank.csv")).expect("ranking report");
    assert_eq!(rank_csv.trim(), "user_id,time,days,average_per_day,rank");

    let session_csv =
        fs::read_to_string(Path::new(&out).join("longest_session.csv")).expect("session report");
    assert!(session_csv.starts_with("user_id,session_length"));
    assert!(session_csv.contains(",0"));
}

#[test]
fn test_export_force_overwrites_existing_reports() {
    let input = write_input_csv("export_force", &sample_rows());
    let out = temp_out_dir("export_force");

    for _ in 0..2 {
        gst()
            .args([
                "--input", &input, "analyze", "--period", "2023-02", "--out-dir", &out, "--force",
            ])
            .assert()
            .success();
    }
}

#[test]
fn test_export_declined_overwrite_cancels() {
    let input = write_input_csv("export_decline", &sample_rows());
    let out = temp_out_dir("export_decline");

    gst()
        .args([
            "--input", &input, "analyze", "--period", "2023-02", "--out-dir", &out, "--force",
        ])
        .assert()
        .success();

    // Second run without --force: answer 'n' at the overwrite prompt.
    gst()
        .args([
            "--input", &input, "analyze", "--period", "2023-02", "--out-dir", &out,
        ])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("Export cancelled"));
}

#[test]
fn test_export_accepted_overwrite_proceeds() {
    let input = write_input_csv("export_accept", &sample_rows());
    let out = temp_out_dir("export_accept");

    gst()
        .args([
            "--input", &input, "analyze", "--period", "2023-02", "--out-dir", &out, "--force",
        ])
        .assert()
        .success();

    // Second run without --force: answer 'y' for both report files.
    gst()
        .args([
            "--input", &input, "analyze", "--period", "2023-02", "--out-dir", &out,
        ])
        .write_stdin("y\ny\n")
        .assert()
        .success()
        .stdout(contains("Existing file will be overwritten."));
}
