// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Descriptive statistics of visibility amplitudes.


/// Descriptive statistics over the amplitudes of one (scan, spectral window,
/// channel) selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisStats {
    pub max: f64,
    pub mean: f64,
    /// The median absolute deviation from the median.
    pub medabsdevmed: f64,
    pub median: f64,
    pub min: f64,
    /// The number of samples used.
    pub npts: f64,
    /// The inter-quartile range (third quartile minus first quartile).
    pub quartile: f64,
    pub rms: f64,
    pub stddev: f64,
    pub sum: f64,
    pub sumsq: f64,
    /// The sample variance (N - 1 denominator).
    pub var: f64,
}

impl VisStats {
    /// Compute statistics over samples. Non-finite samples are ignored. If
    /// there are no finite samples, `None` is returned; a selection without
    /// data has no statistics rather than zeros.
    pub fn from_samples(samples: &[f32]) -> Option<VisStats> {
        let mut sorted: Vec<f64> = samples
            .iter()
            .map(|&s| s as f64)
            .filter(|s| s.is_finite())
            .collect();
        if sorted.is_empty() {
            return None;
        }
        sorted.sort_unstable_by(f64::total_cmp);

        let n = sorted.len() as f64;
        let (sum, sumsq) = sorted
            .iter()
            .fold((0.0, 0.0), |(sum, sumsq), &s| (sum + s, sumsq + s * s));
        let mean = sum / n;
        let var = if sorted.len() < 2 {
            0.0
        } else {
            ((sumsq - n * mean * mean) / (n - 1.0)).max(0.0)
        };

        let median = median_of_sorted(&sorted);
        let mut abs_devs: Vec<f64> = sorted.iter().map(|s| (s - median).abs()).collect();
        abs_devs.sort_unstable_by(f64::total_cmp);
        let medabsdevmed = median_of_sorted(&abs_devs);

        Some(VisStats {
            max: sorted[sorted.len() - 1],
            mean,
            medabsdevmed,
            median,
            min: sorted[0],
            npts: n,
            quartile: quantile_of_sorted(&sorted, 0.75) - quantile_of_sorted(&sorted, 0.25),
            rms: (sumsq / n).sqrt(),
            stddev: var.sqrt(),
            sum,
            sumsq,
            var,
        })
    }

    /// The statistics in output column order.
    pub fn as_array(&self) -> [f64; 12] {
        [
            self.max,
            self.mean,
            self.medabsdevmed,
            self.median,
            self.min,
            self.npts,
            self.quartile,
            self.rms,
            self.stddev,
            self.sum,
            self.sumsq,
            self.var,
        ]
    }
}

/// `sorted` must not be empty.
fn median_of_sorted(sorted: &[f64]) -> f64 {
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// The sorted value at index ceil(p * N) - 1. No interpolation is done.
/// `sorted` must not be empty.
fn quantile_of_sorted(sorted: &[f64], p: f64) -> f64 {
    let index = (p * sorted.len() as f64).ceil() as usize;
    sorted[index.saturating_sub(1).min(sorted.len() - 1)]
}
