// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Arguments supplied through files.

use tempfile::TempDir;

use crate::{get_cmd_output, ms_summary, HEADER};

#[test]
fn test_toml_arg_file() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let root = tmp_dir.path().join("root");
    std::fs::create_dir(&root).unwrap();
    let output = tmp_dir.path().join("from_file.csv");
    let arg_file = tmp_dir.path().join("args.toml");
    std::fs::write(
        &arg_file,
        format!(
            "root = \"{}\"\noutput = \"{}\"\n",
            root.display(),
            output.display()
        ),
    )
    .unwrap();

    let cmd = ms_summary()
        .args(["--args-file", &arg_file.display().to_string()])
        .ok();
    assert!(cmd.is_ok(), "ms_summary failed: {}", cmd.err().unwrap());
    assert_eq!(std::fs::read_to_string(&output).unwrap(), HEADER);
}

#[test]
fn test_cli_output_overrides_arg_file() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let root = tmp_dir.path().join("root");
    std::fs::create_dir(&root).unwrap();
    let file_output = tmp_dir.path().join("from_file.csv");
    let cli_output = tmp_dir.path().join("from_cli.csv");
    let arg_file = tmp_dir.path().join("args.json");
    std::fs::write(
        &arg_file,
        serde_json::json!({
            "root": root,
            "output": file_output,
        })
        .to_string(),
    )
    .unwrap();

    let cmd = ms_summary()
        .args([
            "--args-file",
            &arg_file.display().to_string(),
            &root.display().to_string(),
            &cli_output.display().to_string(),
        ])
        .ok();
    assert!(cmd.is_ok(), "ms_summary failed: {}", cmd.err().unwrap());
    assert!(cli_output.exists());
    assert!(!file_output.exists());
}

#[test]
fn test_unrecognised_arg_file() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let arg_file = tmp_dir.path().join("args.ini");
    std::fs::write(&arg_file, "root=/data").unwrap();

    let cmd = ms_summary()
        .args(["--args-file", &arg_file.display().to_string()])
        .ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("recognised file extension"), "{stderr}");
}
