// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Integration tests.
//!
//! Some help for laying out these tests was taken from:
//! https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html

mod arg_files;
#[cfg(unix)]
mod fake_casa;
mod no_data;

use std::{process::Output, str::from_utf8};

use assert_cmd::{output::OutputError, Command};

fn ms_summary() -> Command {
    Command::cargo_bin("ms_summary").unwrap()
}

fn get_cmd_output(result: Result<Output, OutputError>) -> (String, String) {
    let output = match result {
        Ok(o) => o,
        Err(o) => o.as_output().unwrap().clone(),
    };
    (
        from_utf8(&output.stdout).unwrap().to_string(),
        from_utf8(&output.stderr).unwrap().to_string(),
    )
}

const HEADER: &str = "target,scan,begin_time,end_time,begin_hour_angle,end_hour_angle,spectral_window,channel,frequency,max,mean,medabsdevmed,median,min,npts,quartile,rms,stddev,sum,sumsq,var\n";
