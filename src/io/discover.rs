// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Functions to find measurement sets in a directory tree.

use std::path::{Path, PathBuf};

use log::{debug, trace};
use thiserror::Error;

use crate::{constants::MS_SUFFIX, context::Recording};

/// Recursively find all measurement sets underneath `root`. Anything whose
/// name ends with ".ms" is a measurement set, and is not descended into. The
/// entries of each directory are visited in file-name order, so the results
/// are the same on every filesystem.
pub fn find_measurement_sets<P: AsRef<Path>>(root: P) -> Result<Vec<Recording>, DiscoverError> {
    let root = root.as_ref();
    if !root.is_dir() {
        return Err(DiscoverError::NotFound {
            path: root.to_path_buf(),
        });
    }

    let mut recordings = vec![];
    find_inner(root, &mut recordings).map_err(|e| unreadable_root(root, e))?;
    debug!(
        "Found {} measurement sets under {}",
        recordings.len(),
        root.display()
    );
    Ok(recordings)
}

/// A root directory that can't be listed is as good as missing.
fn unreadable_root(root: &Path, e: DiscoverError) -> DiscoverError {
    match e {
        DiscoverError::ReadDir { path, .. } if path == root => DiscoverError::NotFound { path },
        e => e,
    }
}

fn find_inner(dir: &Path, recordings: &mut Vec<Recording>) -> Result<(), DiscoverError> {
    let read_dir = |e| DiscoverError::ReadDir {
        path: dir.to_path_buf(),
        err: e,
    };
    let mut entries = std::fs::read_dir(dir)
        .map_err(read_dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<Result<Vec<PathBuf>, _>>()
        .map_err(read_dir)?;
    entries.sort_unstable_by(|a, b| a.file_name().cmp(&b.file_name()));

    for entry in entries {
        let is_ms = entry
            .file_name()
            .map(|n| n.to_string_lossy().ends_with(MS_SUFFIX))
            .unwrap_or(false);
        if is_ms {
            trace!("Found measurement set {}", entry.display());
            recordings.push(Recording::new(entry));
        } else if entry.is_dir() {
            find_inner(&entry, recordings)?;
        }
    }

    Ok(())
}

#[derive(Error, Debug)]
/// Error type associated with finding measurement sets.
pub enum DiscoverError {
    #[error("The root directory '{}' does not exist or is not a readable directory", path.display())]
    NotFound { path: PathBuf },

    #[error("Couldn't read the contents of directory '{}': {err}", path.display())]
    ReadDir {
        path: PathBuf,
        err: std::io::Error,
    },
}
