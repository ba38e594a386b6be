// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Runs that never need to read a measurement set.

use tempfile::TempDir;

use crate::{get_cmd_output, ms_summary, HEADER};

#[test]
fn test_nonexistent_root_fails_without_output() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let root = tmp_dir.path().join("does_not_exist");
    let output = tmp_dir.path().join("summary.csv");

    let cmd = ms_summary()
        .args([
            "--no-progress-bars",
            &root.display().to_string(),
            &output.display().to_string(),
        ])
        .ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.starts_with("Error:"), "{stderr}");
    assert!(stderr.contains("does_not_exist"), "{stderr}");
    assert!(!output.exists());
}

#[test]
fn test_empty_root_writes_header_only() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let root = tmp_dir.path().join("empty");
    std::fs::create_dir(&root).unwrap();
    std::fs::write(root.join("notes.txt"), "not a measurement set").unwrap();
    let output = tmp_dir.path().join("summary.csv");

    let cmd = ms_summary()
        .args([
            "--no-progress-bars",
            &root.display().to_string(),
            &output.display().to_string(),
        ])
        .ok();
    assert!(cmd.is_ok(), "ms_summary failed: {}", cmd.err().unwrap());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.is_empty(), "stderr wasn't empty: {stderr}");

    let contents = std::fs::read_to_string(&output).unwrap();
    assert_eq!(contents, HEADER);
}

#[test]
fn test_dry_run_writes_nothing() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    std::fs::create_dir_all(tmp_dir.path().join("data/obs.ms")).unwrap();
    let output = tmp_dir.path().join("summary.csv");

    let cmd = ms_summary()
        .args([
            "--dry-run",
            &tmp_dir.path().join("data").display().to_string(),
            &output.display().to_string(),
            // This CASA doesn't exist, but a dry run never uses it.
            "--casa",
            &tmp_dir.path().join("no_casa").display().to_string(),
        ])
        .ok();
    assert!(cmd.is_ok(), "ms_summary failed: {}", cmd.err().unwrap());
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains("obs.ms"), "{stdout}");
    assert!(!output.exists());
}

#[test]
fn test_missing_output_argument() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let cmd = ms_summary()
        .args([&tmp_dir.path().display().to_string()])
        .ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("No output CSV file"), "{stderr}");
}
