// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The ms_summary binary.

use clap::Parser;

use ms_summary::MsSummary;

fn main() {
    // Run ms_summary, only returning an error if one happened. The error
    // messages are already descriptive, so just print them.
    if let Err(e) = MsSummary::parse().run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
