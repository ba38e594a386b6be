// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SummaryWriteError {
    #[error("Cannot write to the specified file '{file}'. Do you have write permissions set?")]
    FileNotWritable { file: String },

    #[error("The output '{}' is a directory; a file is needed for the summary table", .0.display())]
    OutputIsDirectory(PathBuf),

    #[error(
        "Couldn't create directory '{}' for the output file. Do you have write permissions set?", .0.display()
    )]
    NewDirectory(PathBuf),

    #[error("Couldn't write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    IO(#[from] std::io::Error),
}
