//! `phishguard signals` – list detectors and weights.

use crate::render;

pub fn run_signals() {
    print!("{}", render::signals_table());
}
