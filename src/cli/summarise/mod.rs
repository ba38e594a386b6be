// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.


use std::path::PathBuf;

use clap::Parser;
use log::{debug, info, trace};
use serde::{Deserialize, Serialize};

use super::common::{display_warnings, InfoPrinter, Warn, ARG_FILE_HELP, CASA_HELP};
use crate::{
    constants::DEFAULT_CASA_EXE, io::find_measurement_sets, params::SummaryParams,
    MsSummaryError,
};

#[derive(Parser, Debug, Clone, Default, Serialize, Deserialize)]
pub(super) struct SummaryArgs {
    /// The directory to search (recursively) for measurement sets.
    #[clap(name = "ROOT_DIRECTORY", parse(from_os_str))]
    pub(super) root: Option<PathBuf>,

    /// The CSV file to write. It is overwritten if it already exists.
    #[clap(name = "OUTPUT_CSV", parse(from_os_str))]
    pub(super) output: Option<PathBuf>,

    #[clap(long, help = CASA_HELP.as_str(), parse(from_os_str))]
    pub(super) casa: Option<PathBuf>,

    #[clap(long, help = ARG_FILE_HELP.as_str(), parse(from_os_str))]
    pub(super) args_file: Option<PathBuf>,
}

impl SummaryArgs {
    /// Both command-line and file arguments overlap in terms of what is
    /// available; this function consolidates everything that was specified into
    /// a single struct. Where applicable, it will prefer CLI parameters over
    /// those in the file.
    ///
    /// This function should only ever merge arguments, and not try to make
    /// sense of them.
    pub(super) fn merge(self) -> Result<SummaryArgs, MsSummaryError> {
        debug!("Merging command-line arguments with the argument file");

        let cli_args = self;

        if let Some(arg_file) = cli_args.args_file {
            // Read in the file arguments. Ensure all of the file args are
            // accounted for by pattern matching.
            let SummaryArgs {
                root,
                output,
                casa,
                args_file: _,
            } = unpack_arg_file!(arg_file);

            // Merge all the arguments, preferring the CLI args when available.
            Ok(SummaryArgs {
                root: cli_args.root.or(root),
                output: cli_args.output.or(output),
                casa: cli_args.casa.or(casa),
                args_file: None,
            })
        } else {
            Ok(cli_args)
        }
    }

    /// Make sense of the arguments. This finds the measurement sets, but
    /// doesn't create the output file.
    pub(super) fn parse(self) -> Result<SummaryParams, MsSummaryError> {
        debug!("{:#?}", self);

        let Self {
            root,
            output,
            casa,
            args_file: _,
        } = self;

        let root = root.ok_or(SummaryArgsError::NoRoot)?;
        let output = output.ok_or(SummaryArgsError::NoOutput)?;
        let casa_exe = casa.unwrap_or_else(|| PathBuf::from(DEFAULT_CASA_EXE));

        let recordings = find_measurement_sets(&root)?;
        if output.is_dir() {
            return Err(SummaryArgsError::OutputIsDirectory(output).into());
        }

        let mut printer = InfoPrinter::new(
            format!(
                "Summarising {} measurement sets under {}",
                recordings.len(),
                root.display()
            )
            .into(),
        );
        if !recordings.is_empty() {
            printer.push_block(
                recordings
                    .iter()
                    .map(|r| format!("{} ({})", r.path().display(), r.target()).into())
                    .collect(),
            );
        }
        printer.push_line(format!("Output: {}", output.display()).into());
        printer.push_line(format!("CASA: {}", casa_exe.display()).into());
        printer.display();

        if recordings.is_empty() {
            format!(
                "No measurement sets were found under {}; the summary will only have a header",
                root.display()
            )
            .warn();
        }
        if output.exists() {
            format!("{} will be overwritten", output.display()).warn();
        }
        display_warnings();

        Ok(SummaryParams {
            recordings,
            output,
            casa_exe,
        })
    }

    pub(super) fn run(self, dry_run: bool) -> Result<(), MsSummaryError> {
        debug!("Converting arguments into parameters");
        trace!("{:#?}", self);
        let params = self.parse()?;

        if dry_run {
            info!("Dry run -- exiting now.");
            return Ok(());
        }

        params.run()?;
        Ok(())
    }
}

#[derive(thiserror::Error, Debug)]
pub(super) enum SummaryArgsError {
    #[error("No root directory was specified")]
    NoRoot,

    #[error("No output CSV file was specified")]
    NoOutput,

    #[error("The output '{}' is a directory; a file is needed for the summary table", .0.display())]
    OutputIsDirectory(PathBuf),
}
