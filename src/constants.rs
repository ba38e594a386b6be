// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Useful constants.

Times are handled in two units: scan boundaries are MJD days, whereas the
time axis of a recording is MJD seconds. [`SECONDS_PER_DAY`] is the only
bridge between the two.
 */

/// The number of seconds in a (MJD) day.
pub const SECONDS_PER_DAY: f64 = 86400.0;

/// Directory entries whose names end with this are measurement sets.
pub const MS_SUFFIX: &str = ".ms";

/// The number of decimal places used when writing statistics.
pub const STATS_DECIMAL_PLACES: usize = 5;

/// The CASA executable used when the user doesn't specify one.
pub const DEFAULT_CASA_EXE: &str = "casa";
