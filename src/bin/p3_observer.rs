//! Observer pattern scenario.
//!
//! Run with: cargo run --bin p3_observer

use design_patterns::behavioral::observer;

fn main() -> design_patterns::Result<()> {
    design_patterns::run_main(observer::run)
}
