// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors from reading measurement sets.

use std::path::PathBuf;

use thiserror::Error;

use crate::context::TimeAxisError;

#[derive(Error, Debug)]
pub enum ReadError {
    #[error("Supplied file path {} does not exist or is not readable!", .0.display())]
    NotFound(PathBuf),

    #[error("Couldn't run the CASA executable '{}'; is CASA installed and in your PATH? (or use --casa)", exe.display())]
    CasaExe { exe: PathBuf, err: std::io::Error },

    #[error("CASA exited with {status} when running '{command}' on {}. Last output on stderr:\n{stderr}", path.display())]
    CasaFailed {
        command: &'static str,
        path: PathBuf,
        status: String,
        stderr: String,
    },

    #[error("CASA didn't give an answer when running '{command}' on {}", path.display())]
    NoAnswer {
        command: &'static str,
        path: PathBuf,
    },

    #[error("Couldn't decode CASA's answer when running '{command}' on {}: {err}", path.display())]
    Json {
        command: &'static str,
        path: PathBuf,
        err: serde_json::Error,
    },

    #[error("Bad time axis in {}: {err}", path.display())]
    TimeAxis { path: PathBuf, err: TimeAxisError },

    #[error(transparent)]
    IO(#[from] std::io::Error),
}
