// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Code to handle reading metadata and statistics from measurement sets.

pub mod casa;
mod error;

pub use casa::{CasaBridge, CasaReader, CasaStatistics};
pub use error::ReadError;

use std::path::Path;

use crate::{
    context::{Scan, SpectralWindow, TimeAxis},
    stats::VisStats,
};

/// Something that can open measurement sets.
pub trait RecordingReader {
    /// Open the measurement set at `path`. A path that doesn't exist is a
    /// [`ReadError::NotFound`].
    fn open(&self, path: &Path) -> Result<Box<dyn RecordingHandle>, ReadError>;
}

/// An open measurement set. The measurement set is closed when the handle is
/// dropped.
pub trait RecordingHandle {
    /// All spectral windows, in the order that the measurement set lists
    /// them.
    fn spectral_windows(&self) -> Result<Vec<SpectralWindow>, ReadError>;

    /// All scans, in the order that the measurement set lists them.
    fn scans(&self) -> Result<Vec<Scan>, ReadError>;

    fn time_axis(&self) -> Result<TimeAxis, ReadError>;
}

/// Something that can provide statistics on a (scan, spectral window,
/// channel) selection of a measurement set.
pub trait StatisticsCollector {
    /// Get the statistics of a selection. `Ok(None)` means the selection has
    /// no data; this is not an error.
    fn statistics(
        &mut self,
        path: &Path,
        scan_key: &str,
        spw_key: &str,
        channel: usize,
        use_flags: bool,
    ) -> Result<Option<VisStats>, ReadError>;
}
