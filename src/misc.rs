// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Miscellaneous things.

use hifitime::Epoch;

/// Render a time given in MJD days (UTC) as a human-readable timestamp, for
/// messages only.
pub(crate) fn mjd_days_to_utc_string(mjd_days: f64) -> String {
    if mjd_days.is_finite() {
        Epoch::from_mjd_utc(mjd_days).to_string()
    } else {
        format!("MJD {mjd_days}")
    }
}
