//! Prototype pattern scenario.
//!
//! Run with: cargo run --bin p1_prototype

use design_patterns::creational::prototype;

fn main() -> design_patterns::Result<()> {
    design_patterns::run_main(prototype::run)
}
