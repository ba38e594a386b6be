// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Parameters for a summary run.
//!
//! The code here is kind of "mirroring" the code within the `cli` module; the
//! idea is that `cli` is unparsed, user-facing code, whereas parameters have
//! been parsed and are ready to be used directly.

use std::path::PathBuf;

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use log::info;

use crate::{
    context::Recording,
    io::{
        read::{CasaBridge, CasaReader, CasaStatistics},
        write::SummaryWriter,
    },
    summary::{summarise_recordings, SummariseError, SummaryReport},
    PROGRESS_BARS,
};

pub struct SummaryParams {
    /// The measurement sets to summarise, in the order they will be visited.
    pub recordings: Vec<Recording>,

    /// The CSV file to write.
    pub output: PathBuf,

    /// The CASA executable used to read measurement sets.
    pub casa_exe: PathBuf,
}

impl SummaryParams {
    /// Summarise all recordings into the output file. The output file is
    /// only created once the first recording has been read, and is then
    /// streamed to; if a later recording can't be read, the rows written so
    /// far remain.
    pub fn run(&self) -> Result<SummaryReport, SummariseError> {
        let bridge = CasaBridge::new(&self.casa_exe)?;
        let reader = CasaReader::new(&bridge);
        let mut collector = CasaStatistics::new(&bridge);

        let progress = ProgressBar::with_draw_target(
            Some(self.recordings.len() as _),
            if PROGRESS_BARS.load() {
                ProgressDrawTarget::stdout()
            } else {
                ProgressDrawTarget::hidden()
            },
        )
        .with_style(
            ProgressStyle::default_bar()
                .template("{msg:18}: [{wide_bar:.blue}] {pos:2}/{len:2} measurement sets ({elapsed_precise}<{eta_precise})").unwrap()
                .progress_chars("=> "),
        )
        .with_position(0)
        .with_message("Summarising");

        let (report, writer) = summarise_recordings(
            &self.recordings,
            &reader,
            &mut collector,
            || SummaryWriter::create(&self.output),
            &progress,
        )?;
        writer.finish()?;

        info!(
            "Wrote {} rows from {} measurement sets to {}",
            report.num_rows,
            report.num_recordings,
            self.output.display()
        );
        if report.num_skipped > 0 {
            info!(
                "{} (scan, spectral window, channel) selections had no data",
                report.num_skipped
            );
        }
        Ok(report)
    }
}
