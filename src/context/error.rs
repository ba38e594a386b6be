// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors associated with recording metadata.

use thiserror::Error;

/// A time axis that can't be used to look up hour angles.
#[derive(Error, Debug, PartialEq)]
pub enum TimeAxisError {
    #[error("The time axis contains no samples; can't look up hour angles")]
    Empty,

    #[error("Time axis sample {index} has a non-finite timestamp")]
    NonFiniteTimestamp { index: usize },

    #[error("The time axis has {timestamps} timestamps but {hour_angles} hour angles; these must be equal")]
    LengthMismatch {
        timestamps: usize,
        hour_angles: usize,
    },
}
