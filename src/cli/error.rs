// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Error type for all ms_summary-related errors. This should be the *only*
//! error enum that is publicly visible from the CLI.

use thiserror::Error;

use super::summarise::SummaryArgsError;
use crate::{
    io::{read::ReadError, write::SummaryWriteError, DiscoverError},
    summary::SummariseError,
};

/// The *only* publicly visible error from the `ms_summary` CLI. Variants are
/// grouped by what the user can do about them.
#[derive(Error, Debug)]
pub enum MsSummaryError {
    /// A path that needed to exist doesn't.
    #[error("{0}")]
    NotFound(String),

    /// A measurement set's contents can't be used.
    #[error("{0}\n\nThe measurement set may be corrupt or incomplete.")]
    InvalidInput(String),

    /// CASA couldn't be run, or didn't answer sensibly.
    #[error("{0}\n\nIf you don't know what this means, try turning up verbosity (-v or -vv) to see how CASA was run.")]
    Casa(String),

    /// An error related to argument files.
    #[error("{0}")]
    ArgFile(String),

    /// The arguments don't make sense.
    #[error("{0}")]
    Args(String),

    /// An error related to writing the summary table.
    #[error("{0}")]
    Write(String),

    /// A generic error that can't be clarified further, e.g. IO errors.
    #[error("{0}")]
    Generic(String),
}

// When changing the error propagation below, ensure `Self::from(e)` uses the
// correct `e`!

impl From<SummaryArgsError> for MsSummaryError {
    fn from(e: SummaryArgsError) -> Self {
        match e {
            SummaryArgsError::NoRoot | SummaryArgsError::NoOutput => Self::Args(e.to_string()),
            SummaryArgsError::OutputIsDirectory(_) => Self::Write(e.to_string()),
        }
    }
}

impl From<DiscoverError> for MsSummaryError {
    fn from(e: DiscoverError) -> Self {
        match e {
            DiscoverError::NotFound { .. } => Self::NotFound(e.to_string()),
            DiscoverError::ReadDir { .. } => Self::Generic(e.to_string()),
        }
    }
}

impl From<ReadError> for MsSummaryError {
    fn from(e: ReadError) -> Self {
        match e {
            ReadError::NotFound(_) => Self::NotFound(e.to_string()),
            ReadError::TimeAxis { .. } => Self::InvalidInput(e.to_string()),
            ReadError::CasaExe { .. }
            | ReadError::CasaFailed { .. }
            | ReadError::NoAnswer { .. }
            | ReadError::Json { .. } => Self::Casa(e.to_string()),
            ReadError::IO(e) => Self::from(e),
        }
    }
}

impl From<SummaryWriteError> for MsSummaryError {
    fn from(e: SummaryWriteError) -> Self {
        match e {
            SummaryWriteError::FileNotWritable { .. }
            | SummaryWriteError::OutputIsDirectory(_)
            | SummaryWriteError::NewDirectory(_)
            | SummaryWriteError::Csv(_) => Self::Write(e.to_string()),
            SummaryWriteError::IO(e) => Self::from(e),
        }
    }
}

impl From<SummariseError> for MsSummaryError {
    fn from(e: SummariseError) -> Self {
        match e {
            SummariseError::Read(e) => Self::from(e),
            SummariseError::Write(e) => Self::from(e),
        }
    }
}

impl From<std::io::Error> for MsSummaryError {
    fn from(e: std::io::Error) -> Self {
        Self::Generic(e.to_string())
    }
}
