// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Metadata on a recording (measurement set).

Everything here is independent of how the metadata was read; a
[`RecordingContext`] is what's left once a recording handle has been closed.
 */

mod error;

pub use error::TimeAxisError;

use std::path::{Path, PathBuf};

use log::{debug, trace};
use vec1::Vec1;

use crate::{constants::SECONDS_PER_DAY, io::read::RecordingHandle, io::read::ReadError};

/// A discovered recording. The target is derived once from the path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recording {
    path: PathBuf,
    target: String,
}

impl Recording {
    pub fn new<P: AsRef<Path>>(path: P) -> Recording {
        let path = path.as_ref().to_path_buf();
        let target = target_from_path(&path);
        Recording { path, target }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The leading dot-delimited token of the recording's base name, e.g.
    /// "3C286" for "/data/3C286.cal.ms".
    pub fn target(&self) -> &str {
        &self.target
    }
}

fn target_from_path(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();
    name.split('.').next().unwrap_or_default().to_string()
}

/// A contiguous band of channels recorded together.
#[derive(Debug, Clone, PartialEq)]
pub struct SpectralWindow {
    pub key: String,

    pub num_channels: usize,

    /// The frequency of the first channel \[Hz\].
    pub first_channel_freq: f64,

    /// The frequency step between channels \[Hz\]. Negative widths mean the
    /// frequencies descend with channel number.
    pub channel_width: f64,
}

impl SpectralWindow {
    /// The frequency of a channel in this spectral window \[Hz\]. The caller
    /// ensures `channel < num_channels`.
    pub fn channel_freq(&self, channel: usize) -> f64 {
        self.first_channel_freq + channel as f64 * self.channel_width
    }
}

/// A contiguous interval of a recording.
#[derive(Debug, Clone, PartialEq)]
pub struct Scan {
    pub key: String,

    /// \[MJD days\]
    pub begin_time_days: f64,

    /// \[MJD days\]
    pub end_time_days: f64,
}

/// One sample of a recording's time axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeSample {
    /// \[MJD seconds\]
    pub timestamp_seconds: f64,

    pub hour_angle: f64,
}

/// The (timestamp, hour angle) samples of a recording, ordered by increasing
/// timestamp. The ordering is trusted, not enforced.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeAxis {
    samples: Vec1<TimeSample>,
}

impl TimeAxis {
    pub fn new(samples: Vec<TimeSample>) -> Result<TimeAxis, TimeAxisError> {
        if let Some(i) = samples
            .iter()
            .position(|s| !s.timestamp_seconds.is_finite())
        {
            return Err(TimeAxisError::NonFiniteTimestamp { index: i });
        }
        let samples = Vec1::try_from_vec(samples).map_err(|_| TimeAxisError::Empty)?;
        Ok(TimeAxis { samples })
    }

    /// Build a time axis from parallel arrays of timestamps and hour angles.
    pub fn from_columns(
        timestamps_seconds: &[f64],
        hour_angles: &[f64],
    ) -> Result<TimeAxis, TimeAxisError> {
        if timestamps_seconds.len() != hour_angles.len() {
            return Err(TimeAxisError::LengthMismatch {
                timestamps: timestamps_seconds.len(),
                hour_angles: hour_angles.len(),
            });
        }
        TimeAxis::new(
            timestamps_seconds
                .iter()
                .zip(hour_angles)
                .map(|(&timestamp_seconds, &hour_angle)| TimeSample {
                    timestamp_seconds,
                    hour_angle,
                })
                .collect(),
        )
    }

    /// Get the hour angle associated with a time given in MJD days. This is
    /// the hour angle of the first sample not earlier than the time, or the
    /// last sample's if the time is past the end of the axis.
    pub fn hour_angle_at(&self, timestamp_days: f64) -> f64 {
        let target = timestamp_days * SECONDS_PER_DAY;
        self.samples
            .iter()
            .find(|s| s.timestamp_seconds >= target)
            .unwrap_or_else(|| self.samples.last())
            .hour_angle
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    // A `TimeAxis` is never empty, but clippy wants this next to `len`.
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Everything needed from a recording before statistics are collected.
#[derive(Debug, Clone)]
pub struct RecordingContext {
    /// In the order given by the reader.
    pub spectral_windows: Vec<SpectralWindow>,

    /// In the order given by the reader.
    pub scans: Vec<Scan>,

    pub time_axis: TimeAxis,
}

impl RecordingContext {
    /// Pull all metadata out of an open recording.
    pub fn from_handle(handle: &dyn RecordingHandle) -> Result<RecordingContext, ReadError> {
        let spectral_windows = handle.spectral_windows()?;
        let scans = handle.scans()?;
        let time_axis = handle.time_axis()?;
        debug!(
            "{} spectral windows, {} scans, {} time samples",
            spectral_windows.len(),
            scans.len(),
            time_axis.len()
        );
        for spw in &spectral_windows {
            trace!(
                "Spectral window {}: {} channels, first freq. {} Hz, width {} Hz",
                spw.key,
                spw.num_channels,
                spw.first_channel_freq,
                spw.channel_width
            );
        }

        Ok(RecordingContext {
            spectral_windows,
            scans,
            time_axis,
        })
    }

    /// The number of (scan, spectral window, channel) combinations in this
    /// recording.
    pub fn num_selections(&self) -> usize {
        self.scans.len()
            * self
                .spectral_windows
                .iter()
                .map(|spw| spw.num_channels)
                .sum::<usize>()
    }
}
