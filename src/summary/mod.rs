// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Summarising measurement sets.

Recordings are visited in the order given. Within a recording, scans and then
spectral windows are visited in the order the reader gives them, and channels
in ascending order. Every (scan, spectral window, channel) with statistics
gets one row; selections without statistics are skipped.
 */


use std::io::Write;

use indicatif::ProgressBar;
use log::{debug, info, trace};
use thiserror::Error;

use crate::{
    context::{Recording, RecordingContext},
    io::{
        read::{ReadError, RecordingReader, StatisticsCollector},
        write::{SummaryRow, SummaryWriteError, SummaryWriter},
    },
    misc::mjd_days_to_utc_string,
};

/// Statistics are always computed over all data, flagged or not.
const USE_FLAGS: bool = false;

/// What happened during a summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SummaryReport {
    pub num_recordings: usize,

    /// Not counting the header.
    pub num_rows: usize,

    /// The number of (scan, spectral window, channel) selections that had
    /// no statistics.
    pub num_skipped: usize,
}

/// Write a row for every (scan, spectral window, channel) of every recording
/// that has statistics. The progress bar is incremented once per recording.
/// Any failure to read a recording ends the summary.
///
/// The writer is created with `create_writer` once the first recording's
/// metadata has been read (or at the end, if there are no recordings), so a
/// failure to read the first recording leaves no output behind.
pub fn summarise_recordings<W, F>(
    recordings: &[Recording],
    reader: &dyn RecordingReader,
    collector: &mut dyn StatisticsCollector,
    mut create_writer: F,
    progress: &ProgressBar,
) -> Result<(SummaryReport, SummaryWriter<W>), SummariseError>
where
    W: Write,
    F: FnMut() -> Result<SummaryWriter<W>, SummaryWriteError>,
{
    let mut report = SummaryReport::default();
    let mut writer = None;

    for recording in recordings {
        progress.set_message(recording.target().to_string());
        let context = read_context(recording, reader)?;
        if writer.is_none() {
            writer = Some(create_writer()?);
        }
        if let Some(writer) = writer.as_mut() {
            let (num_rows, num_skipped) =
                summarise_recording(recording, &context, collector, writer)?;
            info!(
                "{}: {num_rows} rows written, {num_skipped} selections without data",
                recording.path().display()
            );
            report.num_rows += num_rows;
            report.num_skipped += num_skipped;
        }

        report.num_recordings += 1;
        progress.inc(1);
    }

    let writer = match writer {
        Some(w) => w,
        None => create_writer()?,
    };
    progress.finish_with_message("Done");
    Ok((report, writer))
}

/// Read everything needed from a recording. The handle is dropped (and the
/// recording closed) before this returns.
fn read_context(
    recording: &Recording,
    reader: &dyn RecordingReader,
) -> Result<RecordingContext, ReadError> {
    debug!("Reading metadata from {}", recording.path().display());
    let handle = reader.open(recording.path())?;
    let context = RecordingContext::from_handle(handle.as_ref())?;
    debug!(
        "{} (scan, spectral window, channel) selections in {}",
        context.num_selections(),
        recording.path().display()
    );
    Ok(context)
}

fn summarise_recording<W: Write>(
    recording: &Recording,
    context: &RecordingContext,
    collector: &mut dyn StatisticsCollector,
    writer: &mut SummaryWriter<W>,
) -> Result<(usize, usize), SummariseError> {
    let target = recording.target();
    let mut num_rows = 0;
    let mut num_skipped = 0;
    for scan in &context.scans {
        let begin_hour_angle = context.time_axis.hour_angle_at(scan.begin_time_days);
        let end_hour_angle = context.time_axis.hour_angle_at(scan.end_time_days);
        debug!(
            "Scan {} ({} to {}), hour angles {begin_hour_angle} to {end_hour_angle}",
            scan.key,
            mjd_days_to_utc_string(scan.begin_time_days),
            mjd_days_to_utc_string(scan.end_time_days),
        );

        for spw in &context.spectral_windows {
            for channel in 0..spw.num_channels {
                let stats = collector.statistics(
                    recording.path(),
                    &scan.key,
                    &spw.key,
                    channel,
                    USE_FLAGS,
                )?;
                let stats = match stats {
                    Some(s) => s,
                    None => {
                        trace!(
                            "No statistics for scan {}, spectral window {}, channel {channel}",
                            scan.key,
                            spw.key
                        );
                        num_skipped += 1;
                        continue;
                    }
                };

                writer.write_row(&SummaryRow {
                    target,
                    scan: &scan.key,
                    begin_time: scan.begin_time_days,
                    end_time: scan.end_time_days,
                    begin_hour_angle,
                    end_hour_angle,
                    spectral_window: &spw.key,
                    channel,
                    frequency: spw.channel_freq(channel),
                    stats,
                })?;
                num_rows += 1;
            }
        }
    }

    Ok((num_rows, num_skipped))
}

#[derive(Error, Debug)]
pub enum SummariseError {
    #[error(transparent)]
    Read(#[from] ReadError),

    #[error(transparent)]
    Write(#[from] SummaryWriteError),
}
