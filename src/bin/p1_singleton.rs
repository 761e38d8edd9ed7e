//! Singleton pattern scenario.
//!
//! Run with: cargo run --bin p1_singleton

use design_patterns::creational::singleton;

fn main() -> design_patterns::Result<()> {
    design_patterns::run_main(singleton::run)
}
