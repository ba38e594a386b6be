// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Per-channel amplitude statistics summaries of radio-interferometric
measurement sets.

Measurement sets are discovered under a directory, their scans, spectral
windows and channels are traversed in a fixed order, and one CSV row is
written per (scan, spectral window, channel) with statistics available.
 */

pub mod cli;
pub mod constants;
pub mod context;
pub mod io;
mod misc;
pub mod params;
pub mod stats;
pub mod summary;

use crossbeam_utils::atomic::AtomicCell;

// Re-exports.
pub use cli::{MsSummary, MsSummaryError};
pub use context::{Recording, RecordingContext, Scan, SpectralWindow, TimeAxis, TimeSample};
pub use io::{
    find_measurement_sets,
    read::{ReadError, RecordingHandle, RecordingReader, StatisticsCollector},
    write::{SummaryRow, SummaryWriter},
};
pub use stats::VisStats;
pub use summary::{summarise_recordings, SummaryReport};

/// Should progress bars be drawn? This is set by the CLI.
pub(crate) static PROGRESS_BARS: AtomicCell<bool> = AtomicCell::new(false);
