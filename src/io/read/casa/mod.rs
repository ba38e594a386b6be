// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Reading measurement sets through CASA.

CASA is run as a subprocess with a bundled query script. The script answers
each query by writing JSON to a temporary file; only metadata and raw
amplitudes are requested, everything else is done here.
 */


use std::{
    io::Write,
    path::{Path, PathBuf},
    process::Command,
};

use indexmap::IndexMap;
use log::{debug, trace};
use serde::{de::DeserializeOwned, Deserialize};
use tempfile::NamedTempFile;

use super::{ReadError, RecordingHandle, RecordingReader, StatisticsCollector};
use crate::{
    context::{Scan, SpectralWindow, TimeAxis},
    stats::VisStats,
};

const QUERY_SCRIPT: &str = include_str!("query.py");

/// The number of trailing stderr lines reported when CASA fails.
const STDERR_TAIL_LINES: usize = 20;

/// A CASA installation with the query script ready to run.
pub struct CasaBridge {
    casa_exe: PathBuf,

    /// Deleted when the bridge is dropped.
    script: NamedTempFile,
}

impl CasaBridge {
    pub fn new<P: AsRef<Path>>(casa_exe: P) -> Result<CasaBridge, ReadError> {
        let mut script = tempfile::Builder::new()
            .prefix("ms_summary_query")
            .suffix(".py")
            .tempfile()?;
        script.write_all(QUERY_SCRIPT.as_bytes())?;
        script.flush()?;
        trace!("Wrote CASA query script to {}", script.path().display());

        Ok(CasaBridge {
            casa_exe: casa_exe.as_ref().to_path_buf(),
            script,
        })
    }

    fn query<T: DeserializeOwned>(
        &self,
        command: &'static str,
        path: &Path,
        extra_args: &[&str],
    ) -> Result<T, ReadError> {
        let answer = tempfile::Builder::new()
            .prefix("ms_summary_answer")
            .suffix(".json")
            .tempfile()?;

        let mut cmd = Command::new(&self.casa_exe);
        cmd.args(["--nologger", "--nogui", "-c"])
            .arg(self.script.path())
            .arg(command)
            .arg(path)
            .args(extra_args)
            .arg(answer.path());
        debug!("Running {cmd:?}");
        let output = cmd.output().map_err(|err| ReadError::CasaExe {
            exe: self.casa_exe.clone(),
            err,
        })?;
        if !output.status.success() {
            return Err(ReadError::CasaFailed {
                command,
                path: path.to_path_buf(),
                status: output.status.to_string(),
                stderr: stderr_tail(&output.stderr),
            });
        }

        let contents = std::fs::read_to_string(answer.path())?;
        if contents.trim().is_empty() {
            return Err(ReadError::NoAnswer {
                command,
                path: path.to_path_buf(),
            });
        }
        serde_json::from_str(&contents).map_err(|err| ReadError::Json {
            command,
            path: path.to_path_buf(),
            err,
        })
    }

    fn summary(&self, path: &Path) -> Result<SummaryAnswer, ReadError> {
        self.query("summary", path, &[])
    }

    fn amplitudes(
        &self,
        path: &Path,
        scan_key: &str,
        spw_key: &str,
        use_flags: bool,
    ) -> Result<AmplitudesAnswer, ReadError> {
        let use_flags = if use_flags { "true" } else { "false" };
        self.query("amplitudes", path, &[scan_key, spw_key, use_flags])
    }
}

fn stderr_tail(stderr: &[u8]) -> String {
    let stderr = String::from_utf8_lossy(stderr);
    let lines: Vec<&str> = stderr.lines().collect();
    let start = lines.len().saturating_sub(STDERR_TAIL_LINES);
    lines[start..].join("\n")
}

#[derive(Debug, Deserialize)]
struct SummaryAnswer {
    spectral_windows: IndexMap<String, SpectralWindowAnswer>,
    scans: IndexMap<String, ScanAnswer>,
    time_axis: TimeAxisAnswer,
}

#[derive(Debug, Deserialize)]
struct SpectralWindowAnswer {
    num_channels: usize,
    first_channel_freq: f64,
    channel_width: f64,
}

#[derive(Debug, Deserialize)]
struct ScanAnswer {
    begin_time_days: f64,
    end_time_days: f64,
}

#[derive(Debug, Deserialize)]
struct TimeAxisAnswer {
    mjd_seconds: Vec<f64>,
    hour_angle: Vec<f64>,
}

#[derive(Debug, Deserialize)]
struct AmplitudesAnswer {
    /// Non-finite amplitudes are null.
    channels: Vec<Vec<Option<f32>>>,
}

/// Opens measurement sets with CASA.
pub struct CasaReader<'a> {
    bridge: &'a CasaBridge,
}

impl<'a> CasaReader<'a> {
    pub fn new(bridge: &'a CasaBridge) -> CasaReader<'a> {
        CasaReader { bridge }
    }
}

impl RecordingReader for CasaReader<'_> {
    fn open(&self, path: &Path) -> Result<Box<dyn RecordingHandle>, ReadError> {
        if !path.exists() {
            return Err(ReadError::NotFound(path.to_path_buf()));
        }
        let answer = self.bridge.summary(path)?;
        Ok(Box::new(CasaRecording {
            path: path.to_path_buf(),
            answer,
        }))
    }
}

/// The metadata of a measurement set, as given by CASA. CASA closes the
/// measurement set itself once the metadata has been read.
struct CasaRecording {
    path: PathBuf,
    answer: SummaryAnswer,
}

impl RecordingHandle for CasaRecording {
    fn spectral_windows(&self) -> Result<Vec<SpectralWindow>, ReadError> {
        Ok(self
            .answer
            .spectral_windows
            .iter()
            .map(|(key, spw)| SpectralWindow {
                key: key.clone(),
                num_channels: spw.num_channels,
                first_channel_freq: spw.first_channel_freq,
                channel_width: spw.channel_width,
            })
            .collect())
    }

    fn scans(&self) -> Result<Vec<Scan>, ReadError> {
        Ok(self
            .answer
            .scans
            .iter()
            .map(|(key, scan)| Scan {
                key: key.clone(),
                begin_time_days: scan.begin_time_days,
                end_time_days: scan.end_time_days,
            })
            .collect())
    }

    fn time_axis(&self) -> Result<TimeAxis, ReadError> {
        let time_axis = &self.answer.time_axis;
        TimeAxis::from_columns(&time_axis.mjd_seconds, &time_axis.hour_angle).map_err(|err| {
            ReadError::TimeAxis {
                path: self.path.clone(),
                err,
            }
        })
    }
}

/// The amplitudes of all channels of one (measurement set, scan, spectral
/// window) selection.
struct CachedSelection {
    path: PathBuf,
    scan_key: String,
    spw_key: String,
    use_flags: bool,
    channels: Vec<Vec<f32>>,
}

impl CachedSelection {
    fn matches(&self, path: &Path, scan_key: &str, spw_key: &str, use_flags: bool) -> bool {
        self.path == path
            && self.scan_key == scan_key
            && self.spw_key == spw_key
            && self.use_flags == use_flags
    }
}

/// Collects statistics by fetching amplitudes from CASA. All channels of a
/// (scan, spectral window) are fetched at once and kept until a different
/// selection is requested.
pub struct CasaStatistics<'a> {
    bridge: &'a CasaBridge,
    cache: Option<CachedSelection>,
}

impl<'a> CasaStatistics<'a> {
    pub fn new(bridge: &'a CasaBridge) -> CasaStatistics<'a> {
        CasaStatistics {
            bridge,
            cache: None,
        }
    }

    fn selection(
        &mut self,
        path: &Path,
        scan_key: &str,
        spw_key: &str,
        use_flags: bool,
    ) -> Result<&CachedSelection, ReadError> {
        let selection = match self.cache.take() {
            Some(c) if c.matches(path, scan_key, spw_key, use_flags) => c,
            _ => {
                trace!(
                    "Fetching amplitudes for scan {scan_key}, spectral window {spw_key} of {}",
                    path.display()
                );
                let answer = self
                    .bridge
                    .amplitudes(path, scan_key, spw_key, use_flags)?;
                CachedSelection {
                    path: path.to_path_buf(),
                    scan_key: scan_key.to_string(),
                    spw_key: spw_key.to_string(),
                    use_flags,
                    channels: decode_channels(answer),
                }
            }
        };
        Ok(&*self.cache.insert(selection))
    }
}

fn decode_channels(answer: AmplitudesAnswer) -> Vec<Vec<f32>> {
    answer
        .channels
        .into_iter()
        .map(|samples| {
            samples
                .into_iter()
                .map(|s| s.unwrap_or(f32::NAN))
                .collect()
        })
        .collect()
}

impl StatisticsCollector for CasaStatistics<'_> {
    fn statistics(
        &mut self,
        path: &Path,
        scan_key: &str,
        spw_key: &str,
        channel: usize,
        use_flags: bool,
    ) -> Result<Option<VisStats>, ReadError> {
        let selection = self.selection(path, scan_key, spw_key, use_flags)?;
        Ok(selection
            .channels
            .get(channel)
            .and_then(|samples| VisStats::from_samples(samples)))
    }
}
