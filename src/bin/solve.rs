//! Solver Binary
//!
//! Streams Clue-style game events through the deduction engine,
//! narrating each event and the discoveries it unlocks.
//!
//! Options: --config, --output

use whodunit::*;

fn main() {
    log();
    cli::App::run();
}
