// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Full runs against a shell script standing in for CASA.

use std::{
    os::unix::fs::PermissionsExt,
    path::{Path, PathBuf},
};

use indoc::indoc;
use tempfile::TempDir;

use crate::{get_cmd_output, ms_summary, HEADER};

/// The stand-in sees "--nologger --nogui -c <script> <command> <ms> ..." with
/// the answer file last.
const FAKE_CASA: &str = indoc! {r#"
    #!/bin/sh
    eval ANSWER=\${$#}
    case "$5" in
    summary)
        cat > "$ANSWER" <<'JSON'
    {
        "spectral_windows": {
            "0": {"num_channels": 2, "first_channel_freq": 1000.0, "channel_width": -2.5},
            "1": {"num_channels": 1, "first_channel_freq": 2000.0, "channel_width": 10.0}
        },
        "scans": {
            "1": {"begin_time_days": 58000.5, "end_time_days": 58000.50025}
        },
        "time_axis": {
            "mjd_seconds": [5011243200.0, 5011243210.0, 5011243220.0],
            "hour_angle": [0.1, 0.2, 0.3]
        }
    }
    JSON
        ;;
    amplitudes)
        if [ "$8" = "0" ]; then
            echo '{"channels": [[1.0, 2.0, 3.0, 4.0], [2.0, 2.0, 2.0, 2.0]]}' > "$ANSWER"
        else
            echo '{"channels": []}' > "$ANSWER"
        fi
        ;;
    *)
        echo "unknown command $5" >&2
        exit 1
        ;;
    esac
"#};

/// Like `FAKE_CASA`, but the time axis is empty.
const FAKE_CASA_NO_TIMES: &str = indoc! {r#"
    #!/bin/sh
    eval ANSWER=\${$#}
    echo '{"spectral_windows": {}, "scans": {}, "time_axis": {"mjd_seconds": [], "hour_angle": []}}' > "$ANSWER"
"#};

fn write_exe(dir: &Path, contents: &str) -> PathBuf {
    let exe = dir.join("casa");
    std::fs::write(&exe, contents).unwrap();
    std::fs::set_permissions(&exe, std::fs::Permissions::from_mode(0o755)).unwrap();
    exe
}

/// Make a root directory with two "measurement sets"; they only need to exist.
fn make_root(dir: &Path) -> PathBuf {
    let root = dir.join("root");
    std::fs::create_dir_all(root.join("night/3C286.cal.ms")).unwrap();
    std::fs::create_dir_all(root.join("obs.ms")).unwrap();
    root
}

fn run(root: &Path, output: &Path, casa: &Path) -> (bool, String, String) {
    let cmd = ms_summary()
        .args([
            "--no-progress-bars",
            &root.display().to_string(),
            &output.display().to_string(),
            "--casa",
            &casa.display().to_string(),
        ])
        .ok();
    let ok = cmd.is_ok();
    let (stdout, stderr) = get_cmd_output(cmd);
    (ok, stdout, stderr)
}

#[test]
fn test_summary_against_fake_casa() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let casa_dir = tmp_dir.path().join("bin");
    std::fs::create_dir(&casa_dir).unwrap();
    let casa = write_exe(&casa_dir, FAKE_CASA);
    let root = make_root(tmp_dir.path());
    let output = tmp_dir.path().join("summary.csv");

    let (ok, _, stderr) = run(&root, &output, &casa);
    assert!(ok, "ms_summary failed: {stderr}");
    assert!(stderr.is_empty(), "stderr wasn't empty: {stderr}");

    // Spectral window 1 has no data, so only spectral window 0 has rows.
    let rows_for = |target: &str| {
        format!(
            "{target},1,58000.5,58000.50025,0.1,0.3,0,0,1000,4.00000,2.50000,1.00000,2.50000,1.00000,4.00000,2.00000,2.73861,1.29099,10.00000,30.00000,1.66667\n\
             {target},1,58000.5,58000.50025,0.1,0.3,0,1,997.5,2.00000,2.00000,0.00000,2.00000,2.00000,4.00000,0.00000,2.00000,0.00000,8.00000,16.00000,0.00000\n"
        )
    };
    let expected = format!("{HEADER}{}{}", rows_for("3C286"), rows_for("obs"));
    let contents = std::fs::read_to_string(&output).unwrap();
    assert_eq!(contents, expected);

    // A second run gives exactly the same bytes, and warns once about
    // overwriting.
    let (ok, stdout, stderr) = run(&root, &output, &casa);
    assert!(ok, "ms_summary failed: {stderr}");
    assert_eq!(stdout.matches("overwrit").count(), 1, "{stdout}");
    assert_eq!(std::fs::read_to_string(&output).unwrap(), expected);
}

#[test]
fn test_empty_time_axis_fails() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let casa_dir = tmp_dir.path().join("bin");
    std::fs::create_dir(&casa_dir).unwrap();
    let casa = write_exe(&casa_dir, FAKE_CASA_NO_TIMES);
    let root = make_root(tmp_dir.path());
    let output = tmp_dir.path().join("summary.csv");

    let (ok, _, stderr) = run(&root, &output, &casa);
    assert!(!ok);
    assert!(stderr.starts_with("Error:"), "{stderr}");
    assert!(stderr.contains("3C286.cal.ms"), "{stderr}");
    assert!(!output.exists());
}

#[test]
fn test_missing_casa_fails() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let root = make_root(tmp_dir.path());
    let output = tmp_dir.path().join("summary.csv");

    let (ok, _, stderr) = run(&root, &output, &tmp_dir.path().join("no_casa_here"));
    assert!(!ok);
    assert!(stderr.contains("CASA"), "{stderr}");
    // Nothing was read, so not even a header is written.
    assert!(!output.exists());
}
