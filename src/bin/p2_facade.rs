//! Facade pattern scenario.
//!
//! Run with: cargo run --bin p2_facade

use design_patterns::structural::facade;

fn main() -> design_patterns::Result<()> {
    design_patterns::run_main(facade::run)
}
