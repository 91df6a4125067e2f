// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

fn main() {
    if let Err(err) = seashell::start() {
        eprintln!("Error: {}", err);
        for cause in err.chain().skip(1) {
            eprintln!("because: {}", cause);
        }
        // The browser owns the page; there is no process to exit.
        #[cfg(not(target_family = "wasm"))]
        std::process::exit(1);
    }
}

// End of File
