//! Builder pattern scenario.
//!
//! Run with: cargo run --bin p1_builder

use design_patterns::creational::builder;

fn main() -> design_patterns::Result<()> {
    design_patterns::run_main(builder::run)
}
