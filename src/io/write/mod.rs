// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Code to handle writing out summary tables.

mod error;
pub use error::SummaryWriteError;

use std::{fs::File, io::Write, path::Path};

use log::trace;

use crate::{constants::STATS_DECIMAL_PLACES, stats::VisStats};

/// The columns of a summary table, in order.
pub const SUMMARY_HEADER: [&str; 21] = [
    "target",
    "scan",
    "begin_time",
    "end_time",
    "begin_hour_angle",
    "end_hour_angle",
    "spectral_window",
    "channel",
    "frequency",
    "max",
    "mean",
    "medabsdevmed",
    "median",
    "min",
    "npts",
    "quartile",
    "rms",
    "stddev",
    "sum",
    "sumsq",
    "var",
];

/// One line of a summary table: the statistics of a single (scan, spectral
/// window, channel) of a measurement set.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow<'a> {
    pub target: &'a str,
    pub scan: &'a str,
    /// \[MJD days\]
    pub begin_time: f64,
    /// \[MJD days\]
    pub end_time: f64,
    pub begin_hour_angle: f64,
    pub end_hour_angle: f64,
    pub spectral_window: &'a str,
    pub channel: usize,
    /// \[Hz\]
    pub frequency: f64,
    pub stats: VisStats,
}

impl SummaryRow<'_> {
    fn to_record(&self) -> Vec<String> {
        let mut record = Vec::with_capacity(SUMMARY_HEADER.len());
        record.push(self.target.to_string());
        record.push(self.scan.to_string());
        record.push(self.begin_time.to_string());
        record.push(self.end_time.to_string());
        record.push(self.begin_hour_angle.to_string());
        record.push(self.end_hour_angle.to_string());
        record.push(self.spectral_window.to_string());
        record.push(self.channel.to_string());
        record.push(self.frequency.to_string());
        record.extend(
            self.stats
                .as_array()
                .iter()
                .map(|s| format!("{s:.prec$}", prec = STATS_DECIMAL_PLACES)),
        );
        record
    }
}

/// Writes a summary table as CSV. The header is written when the writer is
/// created, so even a table without rows has it.
pub struct SummaryWriter<W: Write> {
    writer: csv::Writer<W>,
    num_rows: usize,
}

impl SummaryWriter<File> {
    /// Create (or overwrite) the summary table at `file`.
    pub fn create(file: &Path) -> Result<SummaryWriter<File>, SummaryWriteError> {
        can_write_to_file(file)?;
        SummaryWriter::new(File::create(file)?)
    }
}

impl<W: Write> SummaryWriter<W> {
    pub fn new(writer: W) -> Result<SummaryWriter<W>, SummaryWriteError> {
        let mut writer = csv::WriterBuilder::new()
            .quote_style(csv::QuoteStyle::Necessary)
            .from_writer(writer);
        writer.write_record(SUMMARY_HEADER)?;
        Ok(SummaryWriter {
            writer,
            num_rows: 0,
        })
    }

    pub fn write_row(&mut self, row: &SummaryRow) -> Result<(), SummaryWriteError> {
        self.writer.write_record(row.to_record())?;
        self.num_rows += 1;
        Ok(())
    }

    /// The number of rows written, not counting the header.
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Flush everything and hand back the underlying writer.
    pub fn finish(self) -> Result<W, SummaryWriteError> {
        let mut writer = self.writer;
        writer.flush()?;
        writer.into_inner().map_err(|e| {
            let err = e.error();
            SummaryWriteError::IO(std::io::Error::new(err.kind(), err.to_string()))
        })
    }
}

/// Check that a file can be written to. A file that doesn't exist yet is not
/// left behind, but the directories leading up to it are created.
pub(crate) fn can_write_to_file(file: &Path) -> Result<(), SummaryWriteError> {
    trace!("Testing whether we can write to {}", file.display());

    if file.is_dir() {
        return Err(SummaryWriteError::OutputIsDirectory(file.to_path_buf()));
    }

    let file_exists = file.exists();
    match std::fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(false)
        .open(file)
        .map_err(|e| e.kind())
    {
        Ok(_) => {
            // `OpenOptions::new` creates the file if it didn't exist; we
            // don't want to keep the 0-sized file.
            if !file_exists {
                std::fs::remove_file(file)?;
            }
        }

        // The parent directories don't exist. Make them; if this fails, then
        // we can't write the file anyway.
        Err(std::io::ErrorKind::NotFound) => {
            if let Some(p) = file.parent() {
                match std::fs::DirBuilder::new()
                    .recursive(true)
                    .create(p)
                    .map_err(|e| e.kind())
                {
                    Ok(()) => (),
                    Err(std::io::ErrorKind::PermissionDenied) => {
                        return Err(SummaryWriteError::NewDirectory(p.to_path_buf()))
                    }
                    Err(e) => return Err(SummaryWriteError::IO(e.into())),
                }
            }
        }

        Err(std::io::ErrorKind::PermissionDenied) => {
            return Err(SummaryWriteError::FileNotWritable {
                file: file.display().to_string(),
            })
        }

        Err(e) => return Err(SummaryWriteError::IO(e.into())),
    }

    Ok(())
}
